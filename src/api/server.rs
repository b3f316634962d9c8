//! HTTP server lifecycle.
//!
//! bind → spawn background task → return a handle with a shutdown channel.
//! `serve` wraps this for the binary and stops on Ctrl-C.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::api::router::api_router;
use crate::core_state::CoreState;

/// Handle to a running server.
pub struct HttpServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl HttpServer {
    /// Signal a graceful shutdown. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("HTTP server shutdown signal sent");
        }
    }

    /// Wait for the server task to finish.
    pub async fn stopped(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!("HTTP server task failed: {e}");
            }
        }
    }
}

/// Bind `addr` and serve the application router in a background task.
pub async fn start_server_on(
    core: Arc<CoreState>,
    addr: SocketAddr,
) -> Result<HttpServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind HTTP server on {addr}: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    let app = api_router(core);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("HTTP server received shutdown signal");
        };

        tracing::info!(%addr, "HTTP server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("HTTP server error: {e}");
        }

        tracing::info!("HTTP server stopped");
    });

    Ok(HttpServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
        task: Some(task),
    })
}

/// Serve until Ctrl-C.
pub async fn serve(core: Arc<CoreState>, addr: SocketAddr) -> Result<(), String> {
    let mut server = start_server_on(core, addr).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for Ctrl-C: {e}");
    }
    server.shutdown();
    server.stopped().await;
    Ok(())
}
