//! `POST /analyze`: analyze a symptom description.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis::{self, AnalysisReport};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub symptoms: Option<String>,
}

/// `error` and `using_fallback` are present only when the fallback
/// classifier answered. `record_id` is always present, `null` when the
/// record could not be stored.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub diagnosis: String,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub using_fallback: Option<bool>,
    pub record_id: Option<i64>,
}

impl From<AnalysisReport> for AnalyzeResponse {
    fn from(report: AnalysisReport) -> Self {
        Self {
            error: report.fallback.map(|reason| reason.notice()),
            using_fallback: report.fallback.map(|_| true),
            diagnosis: report.result.diagnosis,
            recommendations: report.result.recommendations,
            record_id: report.record_id,
        }
    }
}

pub async fn analyze(
    State(ctx): State<ApiContext>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(req) = payload?;

    let report = tokio::task::spawn_blocking(move || {
        analysis::analyze_symptoms(&ctx.core, req.symptoms.as_deref())
    })
    .await??;

    Ok(Json(report.into()))
}
