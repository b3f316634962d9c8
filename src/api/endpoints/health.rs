use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub llm_configured: bool,
}

/// `GET /health`: liveness check.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: crate::config::APP_VERSION,
        llm_configured: ctx.core.llm_configured(),
    })
}
