use serde::{Deserialize, Serialize};

/// Outcome of one symptom analysis, from either the LLM or the fallback
/// classifier. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub diagnosis: String,
    pub recommendations: Vec<String>,
    pub used_fallback: bool,
}

impl AnalysisResult {
    pub fn from_llm(diagnosis: String, recommendations: Vec<String>) -> Self {
        Self {
            diagnosis,
            recommendations,
            used_fallback: false,
        }
    }

    pub fn from_fallback(diagnosis: String, recommendations: Vec<String>) -> Self {
        Self {
            diagnosis,
            recommendations,
            used_fallback: true,
        }
    }
}
