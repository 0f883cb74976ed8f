//! Gaussian randomness for initial-state synthesis
//!
//! The observer only consumes randomness at construction time, never
//! inside `estimate`, so the source is injected there and nowhere else.
//! A fixed seed makes the draw reproducible, which is what tests rely on.

use nalgebra::{DMatrix, DVector};

use crate::error::EstimatorError;

/// Seeded Gaussian source (xorshift + Box-Muller)
#[derive(Debug, Clone)]
pub struct GaussianRng {
    state: u64,
}

impl GaussianRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64)
    }

    /// Standard normal draw via the Box-Muller transform
    pub fn next_gaussian(&mut self) -> f64 {
        let u1 = self.next_f64().max(1e-10); // avoid log(0)
        let u2 = self.next_f64();

        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Vector of independent standard normal draws
    pub fn next_gaussian_vector(&mut self, dim: usize) -> DVector<f64> {
        DVector::from_fn(dim, |_, _| self.next_gaussian())
    }

    /// Draw from N(0, cov) as L·z with L the Cholesky factor of `cov` and
    /// z standard normal. Fails if `cov` is not positive-definite.
    pub fn next_multivariate_normal(
        &mut self,
        cov: &DMatrix<f64>,
    ) -> Result<DVector<f64>, EstimatorError> {
        let chol = cov
            .clone()
            .cholesky()
            .ok_or(EstimatorError::CovarianceNotFactorizable)?;
        let z = self.next_gaussian_vector(cov.nrows());
        Ok(chol.l() * z)
    }
}

impl Default for GaussianRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
