//! Error types for the engine binary.

use skyfleet_core::clock::ClockError;
use skyfleet_core::config::ConfigError;
use skyfleet_core::tick::StateError;
use skyfleet_world::WorldError;

/// Errors that can occur during engine startup.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// Clock construction failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// World construction failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// Session setup failed.
    #[error("state error: {source}")]
    State {
        /// The underlying state error.
        #[from]
        source: StateError,
    },

    /// The API server failed to start.
    #[error("server error: {source}")]
    Server {
        /// The underlying startup error.
        #[from]
        source: skyfleet_api::StartupError,
    },
}
