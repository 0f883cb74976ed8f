//! Feedback control for the point tracker
//!
//! - PD+I point tracker with integral anti-windup

pub mod tracker;

pub use tracker::*;
