//! Discrete-time linear system model
//!
//! Immutable description of the system observed by the Kalman observer:
//!
//! ```text
//! x[k+1] = A·x[k] + B·u[k] + w[k],   w ~ N(0, Sw)
//! y[k]   = C·x[k] + D·u[k] + v[k],   v ~ N(0, Sv)
//! ```
//!
//! All shapes are validated once at construction; the observer then
//! relies on them for the lifetime of the session.

use nalgebra::{DMatrix, DVector};

use crate::error::EstimatorError;

/// Immutable discrete-time linear system description
///
/// Dimensions: n states, m inputs, p outputs. `Sw` and `Sv` are expected
/// to be symmetric (positive-semidefinite and positive-definite
/// respectively); that is the caller's contract and is not verified here,
/// only their shapes are.
#[derive(Debug, Clone)]
pub struct LinearSystemModel {
    /// State-transition matrix (n×n)
    a: DMatrix<f64>,
    /// Input matrix (n×m)
    b: DMatrix<f64>,
    /// Output matrix (p×n)
    c: DMatrix<f64>,
    /// Feed-through matrix (p×m)
    d: DMatrix<f64>,
    /// Process-noise covariance (n×n)
    sw: DMatrix<f64>,
    /// Measurement-noise covariance (p×p)
    sv: DMatrix<f64>,
    n_states: usize,
    n_inputs: usize,
    n_outputs: usize,
}

impl LinearSystemModel {
    /// Build a model, validating every shape against (n, m, p) inferred
    /// from `a` (n×n), `b` (n×m) and `c` (p×n).
    pub fn new(
        a: DMatrix<f64>,
        b: DMatrix<f64>,
        c: DMatrix<f64>,
        d: DMatrix<f64>,
        sw: DMatrix<f64>,
        sv: DMatrix<f64>,
    ) -> Result<Self, EstimatorError> {
        let n = a.nrows();
        let m = b.ncols();
        let p = c.nrows();
        check_shape("state-transition matrix A", &a, n, n)?;
        check_shape("input matrix B", &b, n, m)?;
        check_shape("output matrix C", &c, p, n)?;
        check_shape("feed-through matrix D", &d, p, m)?;
        check_shape("process-noise covariance Sw", &sw, n, n)?;
        check_shape("measurement-noise covariance Sv", &sv, p, p)?;

        Ok(Self {
            a,
            b,
            c,
            d,
            sw,
            sv,
            n_states: n,
            n_inputs: m,
            n_outputs: p,
        })
    }

    /// State-transition matrix A (n×n)
    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// Input matrix B (n×m)
    pub fn b(&self) -> &DMatrix<f64> {
        &self.b
    }

    /// Output matrix C (p×n)
    pub fn c(&self) -> &DMatrix<f64> {
        &self.c
    }

    /// Feed-through matrix D (p×m)
    pub fn d(&self) -> &DMatrix<f64> {
        &self.d
    }

    /// Process-noise covariance Sw (n×n)
    pub fn sw(&self) -> &DMatrix<f64> {
        &self.sw
    }

    /// Measurement-noise covariance Sv (p×p)
    pub fn sv(&self) -> &DMatrix<f64> {
        &self.sv
    }

    /// Number of states n
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Number of inputs m
    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    /// Number of outputs p
    pub fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    /// Check that a vector has the expected length, before it touches any
    /// observer state.
    pub(crate) fn check_len(
        what: &'static str,
        v: &DVector<f64>,
        expected: usize,
    ) -> Result<(), EstimatorError> {
        if v.len() != expected {
            return Err(EstimatorError::ShapeMismatch {
                what,
                expected,
                got: v.len(),
            });
        }
        Ok(())
    }
}

fn check_shape(
    what: &'static str,
    mat: &DMatrix<f64>,
    rows: usize,
    cols: usize,
) -> Result<(), EstimatorError> {
    if mat.nrows() != rows {
        return Err(EstimatorError::ShapeMismatch {
            what,
            expected: rows,
            got: mat.nrows(),
        });
    }
    if mat.ncols() != cols {
        return Err(EstimatorError::ShapeMismatch {
            what,
            expected: cols,
            got: mat.ncols(),
        });
    }
    Ok(())
}
