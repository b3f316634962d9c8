//! Application router.
//!
//! Layers (outermost → innermost): CORS → access log → `Cache-Control`
//! on API routes → handler. Pages are served without the no-store header.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the full application router.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/analyze", post(endpoints::analyze::analyze))
        .route("/api/history", get(endpoints::history::list))
        .route("/health", get(endpoints::health::check))
        .with_state(ctx)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let pages = Router::new()
        .route("/", get(endpoints::pages::index))
        .route("/history", get(endpoints::pages::history));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(api)
        .merge(pages)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(cors)
}
