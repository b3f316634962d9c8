pub mod openai;
pub mod orchestrator;
pub mod prompt;
pub mod reply;
pub mod retrieval;
pub mod types;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RagError {
    #[error("LLM API key not configured")]
    MissingCredential,

    #[error("LLM service unreachable at {0}")]
    Connection(String),

    #[error("LLM request timed out after {0}s")]
    Timeout(u64),

    #[error("LLM rate limit hit (HTTP 429)")]
    RateLimited,

    #[error("LLM quota exceeded")]
    QuotaExceeded,

    #[error("LLM service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),

    #[error("Embedding generation failed: {0}")]
    EmbeddingFailed(String),
}

impl RagError {
    /// Quota and rate-limit failures get their own user-facing notice.
    pub fn is_quota_related(&self) -> bool {
        matches!(self, RagError::RateLimited | RagError::QuotaExceeded)
    }
}
