//! Shared application state.
//!
//! `CoreState` is built once at startup from `AppConfig` and shared by every
//! request handler behind an `Arc`. It owns the knowledge base, the optional
//! LLM client, the passage-embedding cache and the record store. Nothing in
//! the crate reaches for process-wide globals.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{RecordStore, SqliteRecordStore};
use crate::knowledge::KnowledgeBase;
use crate::pipeline::rag::openai::{OpenAiClient, OpenAiSettings};
use crate::pipeline::rag::orchestrator::AnalysisOrchestrator;
use crate::pipeline::rag::retrieval::PassageEmbeddings;
use crate::pipeline::rag::types::{EmbeddingModel, LlmGenerate, RetrievalParams};

pub struct CoreState {
    pub config: AppConfig,
    knowledge: KnowledgeBase,
    generator: Option<Arc<dyn LlmGenerate>>,
    embedder: Option<Arc<dyn EmbeddingModel>>,
    embeddings: PassageEmbeddings,
    records: Arc<dyn RecordStore>,
}

impl CoreState {
    /// Build state from configuration.
    ///
    /// A missing key or unusable LLM client leaves the LLM unset so every
    /// request uses the fallback classifier. A database that cannot be opened
    /// now is retried lazily on each operation.
    pub fn from_config(config: AppConfig) -> Self {
        let client = config.openai_api_key.clone().and_then(|api_key| {
            let settings = OpenAiSettings {
                base_url: config.openai_base_url.clone(),
                api_key,
                chat_model: config.chat_model.clone(),
                embedding_model: config.embedding_model.clone(),
                timeout_secs: config.llm_timeout_secs,
            };
            match OpenAiClient::new(settings) {
                Ok(client) => {
                    tracing::info!(model = client.chat_model(), "LLM client configured");
                    Some(Arc::new(client))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "LLM client unavailable, fallback only");
                    None
                }
            }
        });
        if client.is_none() && config.openai_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY not set, every analysis uses the fallback classifier");
        }

        let records = match SqliteRecordStore::open(&config.db_path) {
            Ok(store) => {
                tracing::info!(path = %config.db_path.display(), "Record store ready");
                store
            }
            Err(e) => {
                tracing::warn!(
                    path = %config.db_path.display(),
                    error = %e,
                    "Record store could not be opened, retrying per request"
                );
                SqliteRecordStore::new(&config.db_path)
            }
        };

        let generator = client.clone().map(|c| c as Arc<dyn LlmGenerate>);
        let embedder = client.map(|c| c as Arc<dyn EmbeddingModel>);

        Self::with_parts(config, generator, embedder, Arc::new(records))
    }

    /// Assemble state from explicit components.
    pub fn with_parts(
        config: AppConfig,
        generator: Option<Arc<dyn LlmGenerate>>,
        embedder: Option<Arc<dyn EmbeddingModel>>,
        records: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            config,
            knowledge: KnowledgeBase::new(),
            generator,
            embedder,
            embeddings: PassageEmbeddings::new(),
            records,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn records(&self) -> &dyn RecordStore {
        self.records.as_ref()
    }

    pub fn llm_configured(&self) -> bool {
        self.generator.is_some()
    }

    pub fn retrieval_params(&self) -> RetrievalParams {
        RetrievalParams {
            mode: self.config.retrieval,
            top_k: self.config.top_k,
        }
    }

    /// Orchestrator borrowing this state's components.
    pub fn orchestrator(&self) -> AnalysisOrchestrator<'_> {
        AnalysisOrchestrator::new(
            &self.knowledge,
            self.generator.as_deref(),
            self.embedder.as_deref(),
            &self.embeddings,
            self.retrieval_params(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RetrievalMode;

    fn config_in(dir: &std::path::Path) -> AppConfig {
        AppConfig {
            db_path: dir.join("headache.db"),
            ..AppConfig::default()
        }
    }

    #[test]
    fn no_key_means_no_llm() {
        let tmp = tempfile::tempdir().unwrap();
        let state = CoreState::from_config(config_in(tmp.path()));
        assert!(!state.llm_configured());
        assert_eq!(state.knowledge().len(), 10);
        assert!(state.records().list_all().unwrap().is_empty());
    }

    #[test]
    fn key_configures_llm() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig {
            openai_api_key: Some("sk-test".into()),
            ..config_in(tmp.path())
        };
        let state = CoreState::from_config(config);
        assert!(state.llm_configured());
    }

    #[test]
    fn unopenable_database_still_builds_state() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig {
            db_path: tmp.path().to_path_buf(),
            ..AppConfig::default()
        };
        let state = CoreState::from_config(config);
        assert!(state.records().list_all().is_err());
    }

    #[test]
    fn retrieval_params_follow_config() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig {
            retrieval: RetrievalMode::Keywords,
            top_k: 2,
            ..config_in(tmp.path())
        };
        let state = CoreState::from_config(config);
        let params = state.retrieval_params();
        assert_eq!(params.mode, RetrievalMode::Keywords);
        assert_eq!(params.top_k, 2);
    }
}
