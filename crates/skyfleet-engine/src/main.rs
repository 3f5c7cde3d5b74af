//! Skyfleet engine binary.
//!
//! Wires together the world, the fleet, the tick loop, and the fleet
//! API server.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `skyfleet-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the world map (configured or generated zones)
//! 4. Spawn the fleet roster
//! 5. Start the fleet API server on a background task
//! 6. Run the simulation loop until a termination condition is met
//! 7. Log the result

mod broadcast_callback;
mod error;
mod setup;

use std::path::Path;
use std::sync::Arc;

use skyfleet_api::{AppState, ServerConfig, spawn_server};
use skyfleet_core::{RunControl, SimClock, SimulationConfig, SimulationState, runner};
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::broadcast_callback::BroadcastCallback;
use crate::error::EngineError;

/// Application entry point for the fleet engine.
///
/// # Errors
///
/// Returns an error if any initialization step fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config
    //    level when set.
    let default_filter = config.logging.level.clone();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(true)
        .init();

    info!(
        world_name = config.world.name,
        seed = config.world.seed,
        dt = config.simulation.dt,
        tick_interval_ms = config.simulation.tick_interval_ms,
        max_ticks = config.simulation.max_ticks,
        "skyfleet-engine starting"
    );

    // 3. Build the world.
    let clock = SimClock::new(config.simulation.dt).map_err(EngineError::from)?;
    let map = setup::build_map(&config)?;
    info!(
        width = config.world.width,
        height = config.world.height,
        zones = map.zones().len(),
        "world created"
    );

    // 4. Spawn the fleet.
    let mut sim = SimulationState::new(
        clock,
        map,
        config.kinematics,
        config.events.log_capacity,
        config.events.recent_limit,
    );
    for drone in setup::build_roster(&config) {
        sim.spawn_drone(drone).map_err(EngineError::from)?;
    }
    info!(drones = sim.drones.len(), "fleet spawned");

    let sim = Arc::new(RwLock::new(sim));
    let control = Arc::new(RunControl::new());

    // 5. Start the fleet API server.
    let app_state = AppState::new(Arc::clone(&sim));
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let _server_handle =
        spawn_server(server_config, app_state.clone()).map_err(EngineError::from)?;
    info!(port = config.server.port, "fleet API server started");

    // 6. Run the simulation.
    let mut callback = BroadcastCallback::new(app_state);
    let result = runner::run_simulation(
        sim,
        control,
        config.simulation.max_ticks,
        config.simulation.tick_interval_ms,
        &mut callback,
    )
    .await;

    // 7. Log results.
    runner::log_simulation_end(&result);
    info!(total_ticks = result.total_ticks, "skyfleet-engine shutdown complete");

    Ok(())
}

/// Load the simulation configuration from `skyfleet-config.yaml`.
///
/// Looks for the config file relative to the current working directory;
/// defaults apply when it is absent.
fn load_config() -> Result<SimulationConfig, EngineError> {
    let config_path = Path::new("skyfleet-config.yaml");
    if config_path.exists() {
        Ok(SimulationConfig::from_file(config_path)?)
    } else {
        Ok(SimulationConfig::default())
    }
}
