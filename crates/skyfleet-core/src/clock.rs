//! Simulation clock.
//!
//! The clock is the single source of truth for simulation time. Time
//! advances by a fixed step once per tick; nothing else moves it. All
//! timestamps in snapshots and events come from this clock.

/// Errors that can occur when constructing a clock.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The configured time step is not usable.
    #[error("invalid time step: dt must be positive and finite, got {dt}")]
    InvalidStep {
        /// The rejected step value.
        dt: f64,
    },
}

/// Fixed-step simulation clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimClock {
    ts: f64,
    dt: f64,
}

impl SimClock {
    /// Create a clock at time zero with the given step.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidStep`] unless `dt` is positive and
    /// finite.
    pub fn new(dt: f64) -> Result<Self, ClockError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ClockError::InvalidStep { dt });
        }
        Ok(Self { ts: 0.0, dt })
    }

    /// Current simulation time in seconds.
    pub const fn ts(&self) -> f64 {
        self.ts
    }

    /// The fixed step in seconds.
    pub const fn dt(&self) -> f64 {
        self.dt
    }

    /// Advance time by one step.
    pub fn advance(&mut self) {
        self.ts += self.dt;
    }
}
