//! Analysis service: validate → orchestrate → persist → report.
//!
//! Transport-agnostic. The HTTP handlers call into this module from the
//! blocking pool; tests call it directly.

use thiserror::Error;

use crate::config::MAX_SYMPTOMS_CHARS;
use crate::core_state::CoreState;
use crate::db::DatabaseError;
use crate::models::{AnalysisResult, HeadacheRecord, NewRecord};
use crate::pipeline::rag::types::FallbackReason;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Please provide symptoms")]
    EmptySymptoms,

    #[error("Symptoms must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Result of one `/analyze` call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub fallback: Option<FallbackReason>,
    /// `None` when the record could not be stored.
    pub record_id: Option<i64>,
}

/// Reject empty, whitespace-only and oversized input. Returns the trimmed text.
pub fn validate_symptoms(symptoms: Option<&str>) -> Result<&str, AnalysisError> {
    let trimmed = symptoms.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(AnalysisError::EmptySymptoms);
    }
    let actual = trimmed.chars().count();
    if actual > MAX_SYMPTOMS_CHARS {
        return Err(AnalysisError::TooLong {
            max: MAX_SYMPTOMS_CHARS,
            actual,
        });
    }
    Ok(trimmed)
}

/// Analyze symptoms and persist the outcome.
///
/// Only validation errors are returned. LLM failures are answered by the
/// fallback classifier, and a failed write is logged and reported as
/// `record_id: None`.
pub fn analyze_symptoms(
    state: &CoreState,
    symptoms: Option<&str>,
) -> Result<AnalysisReport, AnalysisError> {
    let symptoms = validate_symptoms(symptoms)?;

    let outcome = state.orchestrator().analyze(symptoms);

    let record = NewRecord::from_analysis(symptoms, &outcome.result);
    let record_id = match state.records().create(&record) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::error!(error = %e, "Failed to store headache record");
            None
        }
    };

    tracing::info!(
        used_fallback = outcome.result.used_fallback,
        record_id,
        "Symptom analysis complete"
    );

    Ok(AnalysisReport {
        result: outcome.result,
        fallback: outcome.fallback,
        record_id,
    })
}

/// Every stored record, newest first.
pub fn list_history(state: &CoreState) -> Result<Vec<HeadacheRecord>, DatabaseError> {
    state.records().list_all()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::AppConfig;
    use crate::db::{RecordStore, SqliteRecordStore};
    use crate::pipeline::fallback::DISCLAIMER;
    use crate::pipeline::rag::types::LlmGenerate;
    use crate::pipeline::rag::RagError;
    use crate::models::RetrievalMode;

    struct FailingStore;

    impl RecordStore for FailingStore {
        fn create(&self, _record: &NewRecord) -> Result<i64, DatabaseError> {
            Err(DatabaseError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn list_all(&self) -> Result<Vec<HeadacheRecord>, DatabaseError> {
            Err(DatabaseError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    struct CannedLlm;

    impl LlmGenerate for CannedLlm {
        fn generate(&self, _system: &str, _prompt: &str) -> Result<String, RagError> {
            Ok(r#"{"diagnosis": "Possible tension-type headache", "recommendations": ["Take regular breaks"]}"#.into())
        }
    }

    fn sqlite_state(dir: &std::path::Path) -> CoreState {
        let store = SqliteRecordStore::open(&dir.join("h.db")).unwrap();
        CoreState::with_parts(AppConfig::default(), None, None, Arc::new(store))
    }

    #[test]
    fn empty_and_blank_symptoms_rejected() {
        assert_eq!(validate_symptoms(None), Err(AnalysisError::EmptySymptoms));
        assert_eq!(validate_symptoms(Some("")), Err(AnalysisError::EmptySymptoms));
        assert_eq!(validate_symptoms(Some(" \n\t ")), Err(AnalysisError::EmptySymptoms));
    }

    #[test]
    fn oversized_symptoms_rejected() {
        let long = "a".repeat(MAX_SYMPTOMS_CHARS + 1);
        assert!(matches!(
            validate_symptoms(Some(&long)),
            Err(AnalysisError::TooLong { .. })
        ));
        let limit = "é".repeat(MAX_SYMPTOMS_CHARS);
        assert!(validate_symptoms(Some(&limit)).is_ok());
    }

    #[test]
    fn rejected_input_creates_no_record() {
        let tmp = tempfile::tempdir().unwrap();
        let state = sqlite_state(tmp.path());
        assert!(analyze_symptoms(&state, Some("   ")).is_err());
        assert!(list_history(&state).unwrap().is_empty());
    }

    #[test]
    fn fallback_analysis_is_persisted() {
        let tmp = tempfile::tempdir().unwrap();
        let state = sqlite_state(tmp.path());

        let report = analyze_symptoms(
            &state,
            Some("throbbing pain on one side with nausea and light sensitivity"),
        )
        .unwrap();
        assert!(report.result.used_fallback);
        assert_eq!(report.fallback, Some(FallbackReason::ServiceError));
        assert!(report.result.diagnosis.to_lowercase().contains("migraine"));
        assert_eq!(report.result.recommendations.last().unwrap(), DISCLAIMER);

        let history = list_history(&state).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(Some(history[0].id), report.record_id);
        assert!(history[0].used_fallback);
        assert_eq!(history[0].recommendations, report.result.recommendations);
    }

    #[test]
    fn llm_analysis_is_persisted_without_fallback() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SqliteRecordStore::open(&tmp.path().join("h.db")).unwrap();
        let config = AppConfig {
            retrieval: RetrievalMode::Keywords,
            ..AppConfig::default()
        };
        let state = CoreState::with_parts(config, Some(Arc::new(CannedLlm)), None, Arc::new(store));

        let report = analyze_symptoms(&state, Some("tight band around my head")).unwrap();
        assert_eq!(report.fallback, None);
        assert_eq!(report.result.diagnosis, "Possible tension-type headache");

        let history = list_history(&state).unwrap();
        assert!(!history[0].used_fallback);
    }

    #[test]
    fn store_failure_still_reports_analysis() {
        let state =
            CoreState::with_parts(AppConfig::default(), None, None, Arc::new(FailingStore));

        let report = analyze_symptoms(&state, Some("mild headache")).unwrap();
        assert_eq!(report.record_id, None);
        assert!(!report.result.diagnosis.is_empty());
        assert!(!report.result.recommendations.is_empty());
        assert!(list_history(&state).is_err());
    }

    #[test]
    fn symptoms_are_stored_trimmed() {
        let tmp = tempfile::tempdir().unwrap();
        let state = sqlite_state(tmp.path());
        analyze_symptoms(&state, Some("  mild headache \n")).unwrap();
        assert_eq!(list_history(&state).unwrap()[0].symptoms, "mild headache");
    }
}
