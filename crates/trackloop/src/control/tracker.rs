//! Point tracker
//!
//! Drives a planar point mass toward a moving target with a PD+I
//! correction applied once per tick. The two axes are fully decoupled;
//! there is no cross-coupling term in the correction law.
//!
//! The target is an explicit parameter of [`PointTracker::step`], fed in
//! by the surrounding driver each tick; the tracker holds no reference to
//! any external target source.

use crate::config::TrackerConfig;
use crate::Vec2;

/// PD+I point tracker
///
/// Single "tracking" state; runs until the driver stops calling
/// [`step`](Self::step). Deterministic given an identical input history.
/// Non-finite targets are passed through, not rejected: a NaN or infinite
/// target propagates into the position.
#[derive(Debug, Clone)]
pub struct PointTracker {
    /// Tracker configuration
    config: TrackerConfig,
    /// Current position
    position: Vec2,
    /// Target of the most recent tick
    target: Vec2,
    /// Post-move error of the most recent tick
    error: Vec2,
    /// Pre-move error of the most recent tick (see `step` for why this is
    /// deliberately not the post-move one)
    prev_error: Vec2,
    /// Accumulated error, clamped per axis to ±integral_limit
    total_error: Vec2,
}

impl PointTracker {
    /// Create a tracker at `position`, with the target initially equal to
    /// the position (zero error, empty history).
    pub fn new(position: Vec2, config: TrackerConfig) -> Self {
        Self {
            config,
            position,
            target: position,
            error: Vec2::zeros(),
            prev_error: Vec2::zeros(),
            total_error: Vec2::zeros(),
        }
    }

    /// Advance one tick toward `target` and return the new position.
    ///
    /// Per axis:
    ///
    /// 1. `error = target - position`
    /// 2. `derivative = (error - prev_error) / dt` (backward difference)
    /// 3. `position += kp·error + kd·derivative + ki·total_error·dt`
    /// 4. `prev_error = error`, then `error = target - position`
    /// 5. `total_error += error`, clamped per axis to ±integral_limit
    ///
    /// `prev_error` keeps the *pre-move* error, so the next tick's
    /// derivative is taken against the error as it stood before this
    /// tick's correction was applied. This sequencing is load-bearing:
    /// storing the post-move error instead would zero the derivative term
    /// under a held target and change the convergence dynamics.
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        let TrackerConfig { dt, gains, integral_limit, .. } = self.config;

        self.target = target;
        let error = target - self.position;
        let derivative = (error - self.prev_error) / dt;

        self.position +=
            gains.kp * error + gains.kd * derivative + gains.ki * self.total_error * dt;

        self.prev_error = error;
        self.error = target - self.position;

        self.total_error += self.error;
        self.total_error.x = self.total_error.x.clamp(-integral_limit, integral_limit);
        self.total_error.y = self.total_error.y.clamp(-integral_limit, integral_limit);

        log::trace!(
            "tracker tick: target=({:.3}, {:.3}) position=({:.3}, {:.3})",
            target.x,
            target.y,
            self.position.x,
            self.position.y
        );

        self.position
    }

    /// Clear the error history, keeping the current position.
    pub fn reset(&mut self) {
        self.target = self.position;
        self.error = Vec2::zeros();
        self.prev_error = Vec2::zeros();
        self.total_error = Vec2::zeros();
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Target of the most recent tick
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Post-move error of the most recent tick
    pub fn error(&self) -> Vec2 {
        self.error
    }

    /// Accumulated (clamped) error
    pub fn total_error(&self) -> Vec2 {
        self.total_error
    }

    /// Tracker configuration
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
