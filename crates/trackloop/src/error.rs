//! Estimation error taxonomy
//!
//! Shape violations and numerical failures are surfaced to the caller
//! immediately; there is no internal retry or recovery layer. Non-finite
//! values (NaN/inf) in observations or targets are not errors: they
//! propagate through the arithmetic deterministically.

use thiserror::Error;

/// Estimator errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimatorError {
    /// An input vector or matrix does not match the declared system
    /// dimensions (n, m, p).
    #[error("shape mismatch for {what}: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Which quantity violated its shape
        what: &'static str,
        /// Expected element count or dimension
        expected: usize,
        /// Actual element count or dimension
        got: usize,
    },
    /// The innovation covariance S = C·P·Cᵀ + Sv is singular to working
    /// precision. Fatal for the tick; the observer state is left
    /// untouched and the caller decides (skip, reinitialize, abort).
    #[error("innovation covariance is singular to working precision")]
    SingularInnovation,
    /// The process-noise covariance has no Cholesky factor, so a
    /// perturbed initial state cannot be synthesized from it.
    #[error("process-noise covariance is not positive-definite")]
    CovarianceNotFactorizable,
}
