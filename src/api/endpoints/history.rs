//! `GET /api/history`: every stored analysis, newest first.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::analysis;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::HeadacheRecord;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HeadacheRecord>,
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<HistoryResponse>, ApiError> {
    let history = tokio::task::spawn_blocking(move || analysis::list_history(&ctx.core)).await??;
    Ok(Json(HistoryResponse { history }))
}
