//! Kalman state observer
//!
//! Recursive linear-Gaussian estimator over a [`LinearSystemModel`].
//! Each `estimate` call runs one fused predict/correct cycle to
//! completion; calls must be issued one tick at a time, in time order.
//!
//! The covariance update is the fused closed form
//!
//! ```text
//! P ← A·P·Aᵀ − A·P·Cᵀ·S⁻¹·C·P·Aᵀ + Sw
//! ```
//!
//! with the prior `P` in every term, rather than the textbook two-phase
//! formulation (propagate `A·P·Aᵀ + Sw` first, then gain and Joseph
//! update). The two agree on the steady state but not bit-for-bit on the
//! trajectory; downstream consumers replay recorded runs against this
//! exact form, so it is kept as is.

use nalgebra::{DMatrix, DVector};

use crate::error::EstimatorError;
use crate::estimation::model::LinearSystemModel;
use crate::estimation::rng::GaussianRng;

/// Recursive linear state observer
///
/// Owns its state estimate and error covariance exclusively; the only
/// mutation path is [`estimate`](Self::estimate). Randomness is consumed
/// at construction only (for the perturbed-init variant), never per tick.
#[derive(Debug, Clone)]
pub struct KalmanStateObserver {
    model: LinearSystemModel,
    /// State estimate x̂ (n)
    xhat: DVector<f64>,
    /// Error covariance P (n×n)
    p: DMatrix<f64>,
}

impl KalmanStateObserver {
    /// Create an observer with an explicit initial state estimate.
    ///
    /// `x0` must have n elements; P starts equal to Sw.
    pub fn new(model: LinearSystemModel, x0: DVector<f64>) -> Result<Self, EstimatorError> {
        LinearSystemModel::check_len("initial state x0", &x0, model.n_states())?;
        let p = model.sw().clone();
        Ok(Self { model, xhat: x0, p })
    }

    /// Create an observer whose initial estimate is the true initial
    /// state perturbed by a draw from the process-noise distribution,
    /// x̂₀ = x_init + L·z with L·Lᵀ = Sw.
    pub fn with_perturbed_init(
        model: LinearSystemModel,
        x_init: &DVector<f64>,
        rng: &mut GaussianRng,
    ) -> Result<Self, EstimatorError> {
        LinearSystemModel::check_len("initial state x_init", x_init, model.n_states())?;
        let noise = rng.next_multivariate_normal(model.sw())?;
        let x0 = x_init + noise;
        Self::new(model, x0)
    }

    /// Run one estimation cycle and return the updated state estimate.
    ///
    /// `y` is the observation (p elements), `u` the control input
    /// (m elements). Shapes are checked before anything is mutated, and
    /// the state is only committed after the innovation covariance has
    /// been inverted, so a failing call leaves the observer untouched.
    pub fn estimate(
        &mut self,
        y: &DVector<f64>,
        u: &DVector<f64>,
    ) -> Result<&DVector<f64>, EstimatorError> {
        LinearSystemModel::check_len("observation y", y, self.model.n_outputs())?;
        LinearSystemModel::check_len("control input u", u, self.model.n_inputs())?;

        let a = self.model.a();
        let c = self.model.c();

        // Predict through the system model
        let x_pred = a * &self.xhat + self.model.b() * u;

        // Innovation and its covariance
        let inn = y - c * &x_pred;
        let s = c * &self.p * c.transpose() + self.model.sv();
        let s_inv = s
            .try_inverse()
            .ok_or(EstimatorError::SingularInnovation)?;

        // Gain, fused over prediction and correction
        let apct = a * &self.p * c.transpose();
        let k = &apct * &s_inv;

        log::trace!(
            "observer tick: |inn|={:.6e} |K|={:.6e}",
            inn.norm(),
            k.norm()
        );

        // Correct covariance; the prior P feeds every term
        let p_next =
            a * &self.p * a.transpose() - &apct * &s_inv * c * &self.p * a.transpose()
                + self.model.sw();

        self.xhat = x_pred + k * inn;
        self.p = p_next;

        Ok(&self.xhat)
    }

    /// Current state estimate x̂
    pub fn state_estimate(&self) -> &DVector<f64> {
        &self.xhat
    }

    /// Current error covariance P
    pub fn covariance(&self) -> &DMatrix<f64> {
        &self.p
    }

    /// The system model this observer runs against
    pub fn model(&self) -> &LinearSystemModel {
        &self.model
    }
}
