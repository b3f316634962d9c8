//! HTTP surface.
//!
//! JSON API (`/analyze`, `/api/history`, `/health`) plus the two HTML pages.
//! Handlers share an `ApiContext` wrapping `CoreState` and run blocking
//! analysis and storage work on tokio's blocking pool.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{serve, start_server_on, HttpServer};
pub use types::ApiContext;
