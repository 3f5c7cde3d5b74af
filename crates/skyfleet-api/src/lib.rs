//! Fleet command API: the Axum HTTP + `WebSocket` surface through which
//! callers observe the session and assign tasks to drones.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;
pub mod ws;

pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use startup::{StartupError, spawn_server};
pub use state::{AppState, TickBroadcast};
