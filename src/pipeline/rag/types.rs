use serde::Serialize;

use super::RagError;
use crate::models::RetrievalMode;

/// Chat-completion backend. Implementations must request JSON output.
pub trait LlmGenerate: Send + Sync {
    fn generate(&self, system: &str, prompt: &str) -> Result<String, RagError>;
}

/// Embedding backend.
pub trait EmbeddingModel: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, RagError>;
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, RagError>;
}

/// Retrieval parameters for the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrievalParams {
    pub mode: RetrievalMode,
    pub top_k: usize,
}

impl Default for RetrievalParams {
    fn default() -> Self {
        Self {
            mode: RetrievalMode::Embedding,
            top_k: 3,
        }
    }
}

/// Orchestrator states, in order. Any failure jumps to the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Embedding,
    Retrieval,
    Generation,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Embedding => "embedding",
            Stage::Retrieval => "retrieval",
            Stage::Generation => "generation",
        }
    }
}

/// Why the fallback classifier produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    QuotaExceeded,
    ServiceError,
}

impl FallbackReason {
    pub fn from_error(err: &RagError) -> Self {
        if err.is_quota_related() {
            FallbackReason::QuotaExceeded
        } else {
            FallbackReason::ServiceError
        }
    }

    /// Informational message returned alongside a fallback analysis.
    pub fn notice(&self) -> &'static str {
        match self {
            FallbackReason::QuotaExceeded => {
                "OpenAI API quota exceeded. Using fallback analysis system."
            }
            FallbackReason::ServiceError => {
                "An error occurred during analysis. Using fallback method."
            }
        }
    }
}
