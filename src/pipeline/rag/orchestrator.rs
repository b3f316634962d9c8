use super::prompt::{build_user_prompt, SYSTEM_PROMPT};
use super::reply::parse_analysis_reply;
use super::retrieval::{retrieve, PassageEmbeddings};
use super::types::{EmbeddingModel, FallbackReason, LlmGenerate, RetrievalParams, Stage};
use super::RagError;
use crate::knowledge::KnowledgeBase;
use crate::models::{AnalysisResult, RetrievalMode};
use crate::pipeline::fallback::fallback_analysis;

/// Outcome of one orchestrated analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Orchestrated {
    pub result: AnalysisResult,
    /// Set when the fallback classifier produced `result`.
    pub fallback: Option<FallbackReason>,
}

/// Analysis pipeline: embed → retrieve → generate, falling back to the
/// keyword classifier on any failure.
///
/// The LLM is attempted at most once per call. There are no retries.
pub struct AnalysisOrchestrator<'a> {
    knowledge: &'a KnowledgeBase,
    generator: Option<&'a dyn LlmGenerate>,
    embedder: Option<&'a dyn EmbeddingModel>,
    embeddings: &'a PassageEmbeddings,
    params: RetrievalParams,
}

impl<'a> AnalysisOrchestrator<'a> {
    pub fn new(
        knowledge: &'a KnowledgeBase,
        generator: Option<&'a dyn LlmGenerate>,
        embedder: Option<&'a dyn EmbeddingModel>,
        embeddings: &'a PassageEmbeddings,
        params: RetrievalParams,
    ) -> Self {
        Self {
            knowledge,
            generator,
            embedder,
            embeddings,
            params,
        }
    }

    /// Analyze symptoms. Never fails: LLM errors are logged and answered
    /// by the fallback classifier.
    pub fn analyze(&self, symptoms: &str) -> Orchestrated {
        match self.run_llm(symptoms) {
            Ok(result) => Orchestrated {
                result,
                fallback: None,
            },
            Err((stage, err)) => {
                let reason = FallbackReason::from_error(&err);
                tracing::warn!(
                    stage = stage.as_str(),
                    error = %err,
                    reason = ?reason,
                    "LLM analysis failed, using fallback classifier"
                );
                Orchestrated {
                    result: fallback_analysis(symptoms),
                    fallback: Some(reason),
                }
            }
        }
    }

    fn run_llm(&self, symptoms: &str) -> Result<AnalysisResult, (Stage, RagError)> {
        let generator = self
            .generator
            .ok_or((Stage::Generation, RagError::MissingCredential))?;

        let first_stage = match self.params.mode {
            RetrievalMode::Embedding => Stage::Embedding,
            RetrievalMode::Keywords => Stage::Retrieval,
        };
        tracing::debug!(stage = first_stage.as_str(), "Analysis stage");

        let passages = retrieve(
            symptoms,
            self.knowledge,
            self.embedder,
            self.embeddings,
            &self.params,
        )
        .map_err(|e| (first_stage, e))?;
        tracing::debug!(
            stage = Stage::Retrieval.as_str(),
            passages = passages.len(),
            "Context retrieved"
        );

        let context = KnowledgeBase::context_text(&passages);
        let prompt = build_user_prompt(symptoms, &context);

        tracing::debug!(stage = Stage::Generation.as_str(), "Analysis stage");
        let reply = generator
            .generate(SYSTEM_PROMPT, &prompt)
            .map_err(|e| (Stage::Generation, e))?;
        let parsed = parse_analysis_reply(&reply).map_err(|e| (Stage::Generation, e))?;

        Ok(AnalysisResult::from_llm(parsed.diagnosis, parsed.recommendations))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::pipeline::fallback::responses::DISCLAIMER;

    struct MockLlm {
        reply: Result<String, fn() -> RagError>,
        calls: AtomicUsize,
        last_prompt: Mutex<String>,
    }

    impl MockLlm {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(String::new()),
            }
        }

        fn failing(err: fn() -> RagError) -> Self {
            Self {
                reply: Err(err),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(String::new()),
            }
        }
    }

    impl LlmGenerate for MockLlm {
        fn generate(&self, _system: &str, prompt: &str) -> Result<String, RagError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = prompt.to_string();
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    struct MockEmbedder {
        fail: bool,
    }

    impl EmbeddingModel for MockEmbedder {
        fn embed(&self, text: &str) -> Result<Vec<f32>, RagError> {
            if self.fail {
                return Err(RagError::Timeout(60));
            }
            Ok(vec![text.len() as f32, 1.0])
        }

        fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, RagError> {
            texts.iter().map(|t| self.embed(t)).collect()
        }
    }

    const GOOD_REPLY: &str =
        r#"{"diagnosis": "Likely migraine", "recommendations": ["Rest in a dark room", "Consult a doctor"]}"#;

    fn keyword_params() -> RetrievalParams {
        RetrievalParams {
            mode: RetrievalMode::Keywords,
            top_k: 3,
        }
    }

    #[test]
    fn llm_success_returns_parsed_reply() {
        let kb = KnowledgeBase::new();
        let cache = PassageEmbeddings::new();
        let llm = MockLlm::replying(GOOD_REPLY);
        let embedder = MockEmbedder { fail: false };
        let orchestrator = AnalysisOrchestrator::new(
            &kb,
            Some(&llm),
            Some(&embedder),
            &cache,
            RetrievalParams::default(),
        );

        let out = orchestrator.analyze("throbbing pain on one side");
        assert_eq!(out.fallback, None);
        assert!(!out.result.used_fallback);
        assert_eq!(out.result.diagnosis, "Likely migraine");
        assert_eq!(out.result.recommendations.len(), 2);
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn prompt_carries_symptoms_and_context() {
        let kb = KnowledgeBase::new();
        let cache = PassageEmbeddings::new();
        let llm = MockLlm::replying(GOOD_REPLY);
        let orchestrator = AnalysisOrchestrator::new(&kb, Some(&llm), None, &cache, keyword_params());

        orchestrator.analyze("migraine with aura");
        let prompt = llm.last_prompt.lock().unwrap().clone();
        assert!(prompt.starts_with("Symptoms: migraine with aura\n\nContext: "));
        assert!(prompt.to_lowercase().contains("migraine"));
    }

    #[test]
    fn missing_generator_falls_back_without_calls() {
        let kb = KnowledgeBase::new();
        let cache = PassageEmbeddings::new();
        let orchestrator =
            AnalysisOrchestrator::new(&kb, None, None, &cache, RetrievalParams::default());

        let out = orchestrator.analyze("pressure on both sides of my head, feels tight");
        assert_eq!(out.fallback, Some(FallbackReason::ServiceError));
        assert!(out.result.used_fallback);
        assert!(out.result.diagnosis.to_lowercase().contains("tension"));
        assert_eq!(out.result.recommendations.last().unwrap(), DISCLAIMER);
    }

    #[test]
    fn quota_error_reports_quota_reason() {
        let kb = KnowledgeBase::new();
        let cache = PassageEmbeddings::new();
        let llm = MockLlm::failing(|| RagError::QuotaExceeded);
        let orchestrator = AnalysisOrchestrator::new(&kb, Some(&llm), None, &cache, keyword_params());

        let out = orchestrator.analyze("mild headache");
        assert_eq!(out.fallback, Some(FallbackReason::QuotaExceeded));
        assert_eq!(
            out.fallback.unwrap().notice(),
            "OpenAI API quota exceeded. Using fallback analysis system."
        );
        assert!(out.result.used_fallback);
    }

    #[test]
    fn embedding_failure_skips_generation() {
        let kb = KnowledgeBase::new();
        let cache = PassageEmbeddings::new();
        let llm = MockLlm::replying(GOOD_REPLY);
        let embedder = MockEmbedder { fail: true };
        let orchestrator = AnalysisOrchestrator::new(
            &kb,
            Some(&llm),
            Some(&embedder),
            &cache,
            RetrievalParams::default(),
        );

        let out = orchestrator.analyze("throbbing pain");
        assert_eq!(out.fallback, Some(FallbackReason::ServiceError));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn malformed_reply_falls_back() {
        let kb = KnowledgeBase::new();
        let cache = PassageEmbeddings::new();
        let llm = MockLlm::replying("Sorry, I cannot help with that.");
        let orchestrator = AnalysisOrchestrator::new(&kb, Some(&llm), None, &cache, keyword_params());

        let out = orchestrator.analyze("worst sudden headache with stiff neck and confusion");
        assert_eq!(out.fallback, Some(FallbackReason::ServiceError));
        assert!(out.result.used_fallback);
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }
}
