//! # trackloop
//!
//! Discrete-time closed-loop control core.
//!
//! Two independent per-tick transforms share a fixed-timestep stepping
//! contract:
//!
//! - [`control`]: a PD+I point tracker that drives a planar point mass
//!   toward a moving target, with an anti-windup clamp on the integral
//!   accumulator
//! - [`estimation`]: a recursive linear-Gaussian state observer that
//!   recovers hidden state from noisy, partial observations of a
//!   discrete-time linear system
//!
//! The surrounding driver (plotting, input capture, tick scheduling) is
//! an external collaborator: it supplies a target or an observation each
//! tick and consumes the returned position or state estimate. Calls must
//! be issued one tick at a time, in time order; each call's result
//! depends on the mutable state left by the previous one.
//!
//! ## Modules
//!
//! - [`config`]: timestep, gains and clamp bounds
//! - [`control`]: feedback controller
//! - [`estimation`]: system model, Kalman observer, Gaussian source
//! - [`error`]: estimation error taxonomy

pub mod config;
pub mod control;
pub mod error;
pub mod estimation;

use nalgebra::Vector2;

/// Planar vector type used by the point tracker
pub type Vec2 = Vector2<f64>;
