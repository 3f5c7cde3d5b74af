//! Configuration loading and typed config structures.
//!
//! The canonical configuration lives in `skyfleet-config.yaml` at the
//! project root. This module defines strongly-typed structs mirroring
//! the YAML structure and a loader that reads the file. Every field has
//! a default, so an absent or empty file yields a runnable session.

use std::path::Path;

use serde::Deserialize;
use skyfleet_drone::DroneConfig;
use skyfleet_types::{Rect, Zone, ZoneType};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration, mirroring `skyfleet-config.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationConfig {
    /// World extent, name, and seed.
    #[serde(default)]
    pub world: WorldConfig,

    /// Tick timing and run bounds.
    #[serde(default)]
    pub simulation: TickConfig,

    /// Kinematic parameters shared by all drones.
    #[serde(default)]
    pub kinematics: DroneConfig,

    /// Event log sizing.
    #[serde(default)]
    pub events: EventsConfig,

    /// HTTP server bind settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Explicit drone roster. Empty means the default corner roster.
    #[serde(default)]
    pub drones: Vec<DroneEntry>,

    /// Explicit zone set. Empty means seeded random fire zones.
    #[serde(default)]
    pub zones: Vec<ZoneEntry>,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// World-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldConfig {
    /// Human-readable session name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Random seed for zone generation.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// World width in meters.
    #[serde(default = "default_world_extent")]
    pub width: f64,

    /// World height in meters.
    #[serde(default = "default_world_extent")]
    pub height: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
            width: default_world_extent(),
            height: default_world_extent(),
        }
    }
}

/// Tick timing and run bounds.
#[derive(Debug, Clone, Deserialize)]
pub struct TickConfig {
    /// Simulated seconds per tick.
    #[serde(default = "default_dt")]
    pub dt: f64,

    /// Real-time milliseconds between ticks. Zero disables pacing.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Stop after this many ticks. Zero means unbounded.
    #[serde(default)]
    pub max_ticks: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            tick_interval_ms: default_tick_interval_ms(),
            max_ticks: 0,
        }
    }
}

/// Event log sizing.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    /// Maximum events retained in the session history.
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,

    /// Events included in each state snapshot.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            log_capacity: default_log_capacity(),
            recent_limit: default_recent_limit(),
        }
    }
}

/// HTTP server bind settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter level.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// An explicit drone spawn entry.
#[derive(Debug, Clone, Deserialize)]
pub struct DroneEntry {
    /// Drone identifier, unique within the roster.
    pub id: String,
    /// Spawn x coordinate.
    pub x: f64,
    /// Spawn y coordinate.
    pub y: f64,
}

/// An explicit zone entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneEntry {
    /// Zone identifier, unique within the set.
    pub id: String,
    /// Human-readable zone name. Falls back to the id when empty.
    #[serde(default)]
    pub name: String,
    /// Zone classification.
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    /// The zone's rectangle; validated when registered with the map.
    pub rect: Rect,
}

impl From<ZoneEntry> for Zone {
    fn from(entry: ZoneEntry) -> Self {
        let name = if entry.name.is_empty() {
            entry.id.clone()
        } else {
            entry.name
        };
        Self {
            id: entry.id,
            name,
            zone_type: entry.zone_type,
            rect: entry.rect,
        }
    }
}

fn default_world_name() -> String {
    "skyfleet".to_owned()
}

const fn default_seed() -> u64 {
    42
}

const fn default_world_extent() -> f64 {
    100.0
}

const fn default_dt() -> f64 {
    0.2
}

const fn default_tick_interval_ms() -> u64 {
    200
}

const fn default_log_capacity() -> usize {
    200
}

const fn default_recent_limit() -> usize {
    50
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8001
}

fn default_log_level() -> String {
    "info".to_owned()
}
