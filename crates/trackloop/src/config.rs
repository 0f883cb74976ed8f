//! Tracker configuration
//!
//! Timestep, feedback gains and bounds for the point tracker. All values
//! are load-time constants; the update law never mutates them.

use serde::{Deserialize, Serialize};

/// Feedback gains, applied identically on both axes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrackerGains {
    /// Proportional gain
    pub kp: f64,
    /// Derivative gain
    pub kd: f64,
    /// Integral gain
    pub ki: f64,
}

impl Default for TrackerGains {
    fn default() -> Self {
        Self {
            kp: 0.5,
            kd: 0.0002,
            ki: 0.001,
        }
    }
}

/// Main tracker configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Control timestep [time-units]
    pub dt: f64,
    /// Feedback gains
    pub gains: TrackerGains,
    /// Symmetric per-axis bound on the accumulated error (anti-windup)
    pub integral_limit: f64,
    /// Maximum velocity [units/s]. Part of the configuration surface but
    /// not consulted by the update law; reserved.
    pub max_velocity: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            gains: TrackerGains::default(),
            integral_limit: 100.0,
            max_velocity: 2.0,
        }
    }
}
