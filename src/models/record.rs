use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::AnalysisResult;

/// A persisted analysis. `id` is assigned by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadacheRecord {
    pub id: i64,
    pub symptoms: String,
    pub diagnosis: String,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub used_fallback: bool,
}

/// Insert-side shape of a record (no id yet).
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub symptoms: String,
    pub diagnosis: String,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub used_fallback: bool,
}

impl NewRecord {
    pub fn from_analysis(symptoms: &str, result: &AnalysisResult) -> Self {
        Self {
            symptoms: symptoms.to_string(),
            diagnosis: result.diagnosis.clone(),
            recommendations: result.recommendations.clone(),
            created_at: Utc::now(),
            used_fallback: result.used_fallback,
        }
    }
}
