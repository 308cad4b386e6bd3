//! Validated containers for gappy time series.
//!
//! Purpose
//! -------
//! Provide [`GappySeries`], an owned `(x, t)` pair whose shape invariants are
//! checked once at construction. Callers that evaluate the likelihood at many
//! parameter values (grid searches, optimizers, change-point scans over a
//! fixed window) build the series once and then evaluate infallibly.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x.len() == t.len() >= 2`.
//! - Values and times are stored as given: no sorting, no finiteness checks,
//!   no re-standardization of the raw values.
//! - The sample moments of `x` are computed at construction and reused by
//!   every evaluation.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction success and failure, the sample moments,
//!   increments, and agreement of the evaluation methods with the slice-based
//!   entry points.
use crate::likelihood::{
    errors::LikResult,
    gappy_gaussian::{StepTerm, evaluate_with_moments, sample_moments, steps_with_moments},
    parameterization::Parameterization,
    validation::validate_lengths,
};
use ndarray::{Array1, s};

/// `GappySeries` — observations paired with their sampling times.
///
/// Fields
/// ------
/// - `x`: `Array1<f64>`
///   Observed values.
/// - `t`: `Array1<f64>`
///   Sampling times, index-aligned with `x`.
/// - `mu`, `sigma`: `f64`
///   Sample mean and standard deviation (`n − 1` denominator) of `x`.
///
/// Invariants
/// ----------
/// - `x.len() == t.len()` and `x.len() >= 2`; fields are private so the
///   invariant cannot be broken after construction.
///
/// Notes
/// -----
/// - The type is `Send + Sync`; a shared reference can be evaluated from
///   several threads at different parameter values.
#[derive(Debug, Clone, PartialEq)]
pub struct GappySeries {
    x: Array1<f64>,
    t: Array1<f64>,
    mu: f64,
    sigma: f64,
}

impl GappySeries {
    /// Construct a validated series.
    ///
    /// # Errors
    /// - `LikError::LengthMismatch` if the lengths differ.
    /// - `LikError::InsufficientData` if fewer than two observations are given.
    pub fn new(x: Array1<f64>, t: Array1<f64>) -> LikResult<Self> {
        validate_lengths(x.len(), t.len())?;
        let (mu, sigma) = sample_moments(x.view());
        Ok(GappySeries { x, t, mu, sigma })
    }

    /// Construct a validated series by copying slices.
    ///
    /// # Errors
    /// Same as [`GappySeries::new`].
    pub fn from_slices(x: &[f64], t: &[f64]) -> LikResult<Self> {
        GappySeries::new(Array1::from(x.to_vec()), Array1::from(t.to_vec()))
    }

    /// Number of observations `n`.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`; a validated series holds at least two observations.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Observed values.
    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    /// Sampling times.
    pub fn t(&self) -> &Array1<f64> {
        &self.t
    }

    /// Sample mean of `x`.
    pub fn mean(&self) -> f64 {
        self.mu
    }

    /// Sample standard deviation of `x` with the `n − 1` denominator.
    pub fn sd(&self) -> f64 {
        self.sigma
    }

    /// Gaps `tᵢ₊₁ − tᵢ`, length `n − 1`.
    pub fn increments(&self) -> Array1<f64> {
        &self.t.slice(s![1..]) - &self.t.slice(s![..-1])
    }

    /// Log-likelihood at `param` under `parameterization`.
    ///
    /// Infallible: the shape was checked at construction. Degenerate
    /// parameters produce non-finite values.
    pub fn log_likelihood(&self, param: f64, parameterization: Parameterization) -> f64 {
        evaluate_with_moments(self.x.view(), self.t.view(), self.moments(), param, parameterization)
    }

    /// Per-step log-densities; their sum equals [`GappySeries::log_likelihood`].
    pub fn step_log_densities(
        &self, param: f64, parameterization: Parameterization,
    ) -> Array1<f64> {
        self.steps(param, parameterization).map(|term| term.log_density).collect()
    }

    /// Full per-step diagnostics (gap, weight, conditional moments, density).
    pub fn step_terms(&self, param: f64, parameterization: Parameterization) -> Vec<StepTerm> {
        self.steps(param, parameterization).collect()
    }

    fn moments(&self) -> (f64, f64) {
        (self.mu, self.sigma)
    }

    fn steps(
        &self, param: f64, parameterization: Parameterization,
    ) -> impl Iterator<Item = StepTerm> + '_ {
        steps_with_moments(self.x.view(), self.t.view(), self.moments(), param, parameterization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::likelihood::{
        errors::LikError,
        gappy_gaussian::{evaluate, log_likelihood},
    };
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction (happy path, mismatched lengths, too-short series).
    // - Moments and increments, including that the cached moments match a
    //   fresh estimate.
    // - Agreement between the container methods and the slice entry points.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that well-formed inputs are stored unchanged.
    fn gappy_series_new_returns_ok_for_valid_input() {
        // Arrange
        let x = array![0.0, 1.0, 0.0, -1.0, 0.0];
        let t = array![0.0, 1.0, 2.5, 3.0, 4.0];

        // Act
        let series = GappySeries::new(x.clone(), t.clone()).expect("valid input");

        // Assert
        assert_eq!(series.x(), &x);
        assert_eq!(series.t(), &t);
        assert_eq!(series.len(), 5);
        assert!(!series.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Ensure shape violations are rejected at construction.
    fn gappy_series_new_rejects_bad_shapes() {
        assert_eq!(
            GappySeries::new(array![0.0, 1.0, 2.0], array![0.0, 1.0]),
            Err(LikError::LengthMismatch { x_len: 3, t_len: 2 })
        );
        assert_eq!(
            GappySeries::from_slices(&[1.0], &[0.0]),
            Err(LikError::InsufficientData { n: 1 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Non-contiguous inputs are validated like contiguous ones.
    //
    // Given
    // -----
    // - Every other element of a length-6 array, sliced in place so the
    //   owned array keeps a stride of two.
    //
    // Expect
    // ------
    // - Construction succeeds with three observations.
    fn gappy_series_new_accepts_strided_arrays() {
        // Arrange
        let mut strided = array![0.0, 9.0, 1.0, 9.0, 2.0, 9.0];
        strided.slice_collapse(s![..;2]);
        let t = array![0.0, 1.0, 2.0];

        // Act
        let series = GappySeries::new(strided, t);

        // Assert
        assert!(series.is_ok_and(|series| *series.x() == array![0.0, 1.0, 2.0]));
    }

    #[test]
    // Purpose
    // -------
    // Check moments and increments on the reference series.
    //
    // Expect
    // ------
    // - mean = 0, sd = √0.5, increments = [1, 1.5, 0.5, 1].
    fn moments_and_increments_match_hand_values() {
        // Arrange
        let series =
            GappySeries::from_slices(&[0.0, 1.0, 0.0, -1.0, 0.0], &[0.0, 1.0, 2.5, 3.0, 4.0])
                .expect("valid input");

        // Act / Assert
        assert_relative_eq!(series.mean(), 0.0);
        assert_relative_eq!(series.sd(), 0.5_f64.sqrt(), max_relative = 1e-14);
        assert_eq!(series.increments(), array![1.0, 1.5, 0.5, 1.0]);
    }

    #[test]
    // Purpose
    // -------
    // The container methods agree with the slice-based entry point and
    // with each other.
    fn evaluation_methods_agree_with_slice_entry_point() {
        // Arrange
        let x = [0.4, -0.2, 1.1, 0.3, -0.9, 0.5];
        let t = [0.0, 0.7, 1.0, 2.8, 3.1, 5.0];
        let series = GappySeries::from_slices(&x, &t).expect("valid input");

        for (param, p) in [(0.6, Parameterization::Rho), (1.3, Parameterization::Tau)] {
            // Act
            let total = series.log_likelihood(param, p);
            let via_slices = log_likelihood(&x, &t, param, p).expect("valid input");
            let per_step = series.step_log_densities(param, p);
            let terms = series.step_terms(param, p);

            // Assert
            assert_eq!(total, via_slices);
            assert_eq!(per_step.len(), 5);
            assert_eq!(terms.len(), 5);
            assert_relative_eq!(per_step.sum(), total, max_relative = 1e-12);
            for (term, &dt) in terms.iter().zip(series.increments().iter()) {
                assert_relative_eq!(term.dt, dt);
                assert_relative_eq!(term.weight, p.weight(param, dt));
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Moments stored at construction equal a fresh estimate, and evaluation
    // through the series matches evaluation that re-estimates them.
    //
    // Given
    // -----
    // - A strided value array, so the moments are taken from a
    //   non-contiguous buffer.
    //
    // Expect
    // ------
    // - `mean`/`sd` equal `sample_moments` on the stored values.
    // - `log_likelihood` equals `evaluate` bit for bit in both modes.
    fn cached_moments_match_fresh_estimate() {
        // Arrange
        let mut x = array![0.4, 9.0, -0.2, 9.0, 1.1, 9.0, 0.3, 9.0, -0.9, 9.0];
        x.slice_collapse(s![..;2]);
        let t = array![0.0, 0.7, 1.0, 2.8, 3.1];
        let series = GappySeries::new(x, t).expect("valid input");

        // Act
        let (mu, sigma) = sample_moments(series.x().view());

        // Assert
        assert_eq!(series.mean(), mu);
        assert_eq!(series.sd(), sigma);
        for (param, p) in [(0.6, Parameterization::Rho), (1.3, Parameterization::Tau)] {
            let fresh = evaluate(series.x().view(), series.t().view(), param, p);
            assert_eq!(series.log_likelihood(param, p), fresh);
        }
    }
}
