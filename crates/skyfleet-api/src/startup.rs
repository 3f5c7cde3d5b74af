//! Server startup helper for embedding in the engine binary.
//!
//! [`spawn_server`] launches the HTTP + `WebSocket` server on a
//! background Tokio task so it runs concurrently with the tick loop.

use tokio::task::JoinHandle;

use crate::server::{ServerConfig, ServerError, start_server};
use crate::state::AppState;

/// Errors that can occur when spawning the fleet server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server failed to bind or start.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// Spawn the fleet HTTP server on a background Tokio task.
///
/// Returns a [`JoinHandle`] so the caller can manage the server's
/// lifecycle alongside the simulation loop. The server runs until the
/// runtime shuts down or the task is aborted.
///
/// # Errors
///
/// Returns [`StartupError::Server`] when the bind address is not
/// parseable. A failing bind inside the task is logged, not returned.
pub fn spawn_server(config: ServerConfig, state: AppState) -> Result<JoinHandle<()>, StartupError> {
    // Catch obvious misconfiguration before spawning; the real bind
    // happens inside start_server.
    let addr_str = format!("{}:{}", config.host, config.port);
    let _: std::net::SocketAddr = addr_str.parse().map_err(|e| {
        StartupError::Server(ServerError::Bind(format!(
            "invalid address {addr_str}: {e}"
        )))
    })?;

    let port = config.port;
    let handle = tokio::spawn(async move {
        if let Err(e) = start_server(&config, state).await {
            tracing::error!(error = %e, "fleet server exited with error");
        }
    });

    tracing::info!(port, "fleet server spawned on background task");

    Ok(handle)
}
