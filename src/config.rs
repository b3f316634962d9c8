use std::net::SocketAddr;
use std::path::PathBuf;

use crate::models::RetrievalMode;
use crate::pipeline::rag::openai::{
    DEFAULT_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_EMBEDDING_MODEL,
};

/// Application-level constants
pub const APP_NAME: &str = "HeadacheIntake";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TOP_K: usize = 3;
pub const MAX_SYMPTOMS_CHARS: usize = 5000;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,headache_intake=debug,tower_http=info"
}

/// Application data directory (platform data dir, or the working
/// directory when the platform has none).
pub fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

pub fn default_db_path() -> PathBuf {
    app_data_dir().join("headache.db")
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub chat_model: String,
    pub embedding_model: String,
    pub llm_timeout_secs: u64,
    pub retrieval: RetrievalMode,
    pub top_k: usize,
    pub db_path: PathBuf,
    pub bind: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            llm_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
            retrieval: RetrievalMode::Embedding,
            top_k: DEFAULT_TOP_K,
            db_path: default_db_path(),
            bind: SocketAddr::from(([0, 0, 0, 0], 5000)),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values are logged
    /// and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        config.openai_api_key = get("OPENAI_API_KEY");
        if let Some(url) = get("OPENAI_BASE_URL") {
            config.openai_base_url = url;
        }
        if let Some(model) = get("HEADACHE_CHAT_MODEL") {
            config.chat_model = model;
        }
        if let Some(model) = get("HEADACHE_EMBEDDING_MODEL") {
            config.embedding_model = model;
        }
        if let Some(raw) = get("HEADACHE_LLM_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.llm_timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "Invalid HEADACHE_LLM_TIMEOUT_SECS, using default"),
            }
        }
        if let Some(raw) = get("HEADACHE_RETRIEVAL") {
            match raw.to_lowercase().parse::<RetrievalMode>() {
                Ok(mode) => config.retrieval = mode,
                Err(_) => tracing::warn!(value = %raw, "Invalid HEADACHE_RETRIEVAL, using default"),
            }
        }
        if let Some(raw) = get("HEADACHE_TOP_K") {
            match raw.parse::<usize>() {
                Ok(k) if k > 0 => config.top_k = k,
                _ => tracing::warn!(value = %raw, "Invalid HEADACHE_TOP_K, using default"),
            }
        }
        if let Some(path) = get("HEADACHE_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }
        if let Some(raw) = get("HEADACHE_BIND") {
            match raw.parse::<SocketAddr>() {
                Ok(addr) => config.bind = addr,
                Err(_) => tracing::warn!(value = %raw, "Invalid HEADACHE_BIND, using default"),
            }
        }

        config
    }
}
