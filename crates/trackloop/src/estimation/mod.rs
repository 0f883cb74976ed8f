//! State estimation
//!
//! - [`model`]: immutable discrete-time linear system description
//! - [`observer`]: recursive linear-Gaussian state observer
//! - [`rng`]: seeded Gaussian source for initial-state synthesis

pub mod model;
pub mod observer;
pub mod rng;

pub use model::*;
pub use observer::*;
pub use rng::*;
