//! Blocking client for an OpenAI-compatible HTTP API.
//!
//! Two endpoints are used: `/embeddings` for query and passage vectors and
//! `/chat/completions` for the analysis itself. HTTP failures are classified
//! into `RagError` variants from the status code and the structured error
//! body, never by matching on message text.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::{EmbeddingModel, LlmGenerate};
use super::RagError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

const TEMPERATURE: f32 = 0.5;
const MAX_TOKENS: u32 = 1000;

/// Connection settings for `OpenAiClient`.
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub base_url: String,
    pub api_key: String,
    pub chat_model: String,
    pub embedding_model: String,
    pub timeout_secs: u64,
}

pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    chat_model: String,
    embedding_model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("chat_model", &self.chat_model)
            .field("embedding_model", &self.embedding_model)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    pub fn new(settings: OpenAiSettings) -> Result<Self, RagError> {
        if settings.api_key.trim().is_empty() {
            return Err(RagError::MissingCredential);
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| RagError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
            chat_model: settings.chat_model,
            embedding_model: settings.embedding_model,
            client,
            timeout_secs: settings.timeout_secs,
        })
    }

    pub fn chat_model(&self) -> &str {
        &self.chat_model
    }

    fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<reqwest::blocking::Response, RagError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    RagError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    RagError::Connection(self.base_url.clone())
                } else {
                    RagError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(classify_http_error(status.as_u16(), body));
        }
        Ok(response)
    }

    fn embeddings(&self, input: EmbeddingInput<'_>) -> Result<Vec<Vec<f32>>, RagError> {
        let body = EmbeddingRequest {
            model: &self.embedding_model,
            input,
        };
        let parsed: EmbeddingResponse = self
            .post("/embeddings", &body)?
            .json()
            .map_err(|e| RagError::MalformedResponse(e.to_string()))?;

        let mut data = parsed.data;
        data.sort_by_key(|d| d.index);
        Ok(data.into_iter().map(|d| d.embedding).collect())
    }
}

/// Map a non-success HTTP response to a structured error.
///
/// OpenAI reports an exhausted quota as HTTP 429 with
/// `error.code = "insufficient_quota"`; any other 429 is a rate limit.
pub fn classify_http_error(status: u16, body: String) -> RagError {
    let detail = serde_json::from_str::<ApiErrorEnvelope>(&body)
        .ok()
        .map(|e| e.error);
    let quota = detail
        .as_ref()
        .map(|d| {
            d.code.as_deref() == Some("insufficient_quota")
                || d.error_type.as_deref() == Some("insufficient_quota")
        })
        .unwrap_or(false);

    match status {
        _ if quota => RagError::QuotaExceeded,
        429 => RagError::RateLimited,
        _ => RagError::Api { status, body },
    }
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    code: Option<String>,
    #[serde(default, rename = "type")]
    error_type: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum EmbeddingInput<'a> {
    Single(&'a str),
    Batch(&'a [&'a str]),
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: EmbeddingInput<'a>,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    #[serde(default)]
    index: usize,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl LlmGenerate for OpenAiClient {
    fn generate(&self, system: &str, prompt: &str) -> Result<String, RagError> {
        let body = ChatRequest {
            model: &self.chat_model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let parsed: ChatResponse = self
            .post("/chat/completions", &body)?
            .json()
            .map_err(|e| RagError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| RagError::MalformedResponse("No message content in reply".into()))
    }
}

impl EmbeddingModel for OpenAiClient {
    fn embed(&self, text: &str) -> Result<Vec<f32>, RagError> {
        self.embeddings(EmbeddingInput::Single(text))?
            .into_iter()
            .next()
            .ok_or_else(|| RagError::EmbeddingFailed("Empty embedding response".into()))
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, RagError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let vectors = self.embeddings(EmbeddingInput::Batch(texts))?;
        if vectors.len() != texts.len() {
            return Err(RagError::EmbeddingFailed(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                vectors.len()
            )));
        }
        Ok(vectors)
    }
}
