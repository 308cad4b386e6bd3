//! likelihood::gappy_gaussian — log-likelihood of a gappy Gaussian series.
//!
//! Purpose
//! -------
//! Evaluate the log-likelihood of observations `x` taken at irregular times
//! `t` under an Ornstein–Uhlenbeck-type model: each value is a Gaussian draw
//! around an exponentially decaying prediction from its predecessor. This is
//! the objective surface an outer maximum-likelihood search or a change-point
//! scan evaluates repeatedly over candidate parameters or windows.
//!
//! Key behaviors
//! -------------
//! - Estimate the stationary mean `μ` and scale `σ` (`n − 1` denominator)
//!   once from the whole window.
//! - For each consecutive pair `(xᵢ, xᵢ₊₁)` with gap `Δtᵢ = tᵢ₊₁ − tᵢ`,
//!   form the weight `wᵢ` from [`Parameterization::weight`], the conditional
//!   mean `μᵢ = wᵢ (xᵢ − μ) + μ`, and the conditional scale
//!   `σᵢ = σ √(1 − wᵢ²)`.
//! - Sum `ln φ(xᵢ₊₁; μᵢ, σᵢ)` in a single fused pass, in index order.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs pass [`validate_input`] (equal lengths, `n ≥ 2`) before any
//!   element is read.
//! - Numerical degeneracy is data: zero variance, `wᵢ² ≥ 1`, negative `ρ`
//!   with fractional gaps, or `τ < 0` surface as `NaN`/`±∞` in the result.
//!   `σᵢ` is never clamped.
//! - `t` is not required to be sorted; negative gaps are evaluated as given.
//!
//! Conventions
//! -----------
//! - The rho/tau choice is a [`Parameterization`]; [`get_l`] keeps the
//!   boolean-flag form of the host interface.
//! - Evaluation is pure and allocation-free apart from the optional
//!   per-step outputs, so the functions are safe to call concurrently.
//!
//! Testing notes
//! -------------
//! - Unit tests pin a golden value, check rho/tau equivalence on a unit
//!   grid, time-origin invariance, order sensitivity, degeneracy as `ρ → 1`,
//!   zero variance, and that per-step terms sum to the total.
use crate::likelihood::{
    density::ln_normal_pdf, errors::LikResult, parameterization::Parameterization,
    validation::validate_input,
};
use log::{debug, trace};
use ndarray::{Array1, ArrayView1};

/// StepTerm — diagnostics for one consecutive pair `(xᵢ, xᵢ₊₁)`.
///
/// Fields
/// ------
/// - `dt`: gap `tᵢ₊₁ − tᵢ`.
/// - `weight`: correlation weight `wᵢ`.
/// - `conditional_mean`: predicted mean `μᵢ` of `xᵢ₊₁`.
/// - `conditional_sd`: predicted standard deviation `σᵢ` of `xᵢ₊₁`.
/// - `log_density`: `ln φ(xᵢ₊₁; μᵢ, σᵢ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTerm {
    pub dt: f64,
    pub weight: f64,
    pub conditional_mean: f64,
    pub conditional_sd: f64,
    pub log_density: f64,
}

/// Log-likelihood with the boolean mode flag of the host interface.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Observed values.
/// - `t`: `&[f64]`
///   Sampling times, same length as `x`.
/// - `rho`: `f64`
///   Autocorrelation per unit time, or a time scale when `tau` is `true`.
/// - `tau`: `bool`
///   Interpret `rho` as a time scale `τ` with `w = exp(−Δt/τ)`.
///
/// Returns
/// -------
/// `LikResult<f64>`
///   The total log-likelihood, possibly non-finite.
///
/// Errors
/// ------
/// - `LikError::LengthMismatch` when `x.len() != t.len()`.
/// - `LikError::InsufficientData` when fewer than two observations are given.
///
/// Examples
/// --------
/// ```rust
/// # use gappy_loglik::likelihood::get_l;
/// let x = [0.0, 1.0, 0.0, -1.0, 0.0];
/// let t = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let ll = get_l(&x, &t, 0.5, false)?;
/// assert!((ll - (-5.0474289601285705)).abs() < 1e-12);
/// # Ok::<(), gappy_loglik::likelihood::LikError>(())
/// ```
pub fn get_l(x: &[f64], t: &[f64], rho: f64, tau: bool) -> LikResult<f64> {
    log_likelihood(x, t, rho, Parameterization::from_tau_flag(tau))
}

/// Log-likelihood of `x` sampled at `t` under the given parameterization.
///
/// Validates the shapes, then sums the per-step Gaussian log-densities in
/// index order. See the module documentation for the model.
///
/// # Errors
/// - `LikError::LengthMismatch` / `LikError::InsufficientData` from
///   [`validate_input`].
pub fn log_likelihood(
    x: &[f64], t: &[f64], param: f64, parameterization: Parameterization,
) -> LikResult<f64> {
    validate_input(x, t)?;
    Ok(evaluate(ArrayView1::from(x), ArrayView1::from(t), param, parameterization))
}

/// Per-step log-densities `ln φ(xᵢ₊₁; μᵢ, σᵢ)` for `i = 0..n−1`.
///
/// The sequential sum of the returned vector equals [`log_likelihood`].
///
/// # Errors
/// Same as [`log_likelihood`].
pub fn step_log_densities(
    x: &[f64], t: &[f64], param: f64, parameterization: Parameterization,
) -> LikResult<Array1<f64>> {
    validate_input(x, t)?;
    let terms = steps(ArrayView1::from(x), ArrayView1::from(t), param, parameterization);
    Ok(terms.map(|term| term.log_density).collect())
}

// ---- Crate-internal kernel ----

/// Sum of the per-step log-densities for pre-validated views.
pub(crate) fn evaluate<'a>(
    x: ArrayView1<'a, f64>, t: ArrayView1<'a, f64>, param: f64, parameterization: Parameterization,
) -> f64 {
    evaluate_with_moments(x, t, sample_moments(x), param, parameterization)
}

/// [`evaluate`] with the sample moments `(μ, σ)` supplied by the caller.
pub(crate) fn evaluate_with_moments<'a>(
    x: ArrayView1<'a, f64>, t: ArrayView1<'a, f64>, moments: (f64, f64), param: f64,
    parameterization: Parameterization,
) -> f64 {
    trace!("evaluating log-likelihood: n = {}, {parameterization} = {param}", x.len());
    let ll: f64 = steps_with_moments(x, t, moments, param, parameterization)
        .map(|term| term.log_density)
        .sum();
    if !ll.is_finite() {
        debug!("non-finite log-likelihood {ll} at {parameterization} = {param}");
    }
    ll
}

/// Lazily produce the [`StepTerm`] of every consecutive pair.
///
/// Assumes `x.len() == t.len() >= 2`.
pub(crate) fn steps<'a>(
    x: ArrayView1<'a, f64>, t: ArrayView1<'a, f64>, param: f64, parameterization: Parameterization,
) -> impl Iterator<Item = StepTerm> + 'a {
    steps_with_moments(x, t, sample_moments(x), param, parameterization)
}

/// [`steps`] with the sample moments `(μ, σ)` supplied by the caller.
pub(crate) fn steps_with_moments<'a>(
    x: ArrayView1<'a, f64>, t: ArrayView1<'a, f64>, (mu, sigma): (f64, f64), param: f64,
    parameterization: Parameterization,
) -> impl Iterator<Item = StepTerm> + 'a {
    let value_pairs = x.into_iter().zip(x.into_iter().skip(1));
    let time_pairs = t.into_iter().zip(t.into_iter().skip(1));
    value_pairs.zip(time_pairs).map(move |((&x_prev, &x_next), (&t_prev, &t_next))| {
        let dt = t_next - t_prev;
        let weight = parameterization.weight(param, dt);
        let conditional_mean = weight * (x_prev - mu) + mu;
        let conditional_sd = sigma * (1.0 - weight * weight).sqrt();
        StepTerm {
            dt,
            weight,
            conditional_mean,
            conditional_sd,
            log_density: ln_normal_pdf(x_next, conditional_mean, conditional_sd),
        }
    })
}

/// Sample mean and standard deviation (`n − 1` denominator) of `x`.
///
/// Returns `NaN` moments for inputs shorter than two.
pub(crate) fn sample_moments(x: ArrayView1<'_, f64>) -> (f64, f64) {
    if x.len() < 2 {
        return (f64::NAN, f64::NAN);
    }
    let mean = x.mean().unwrap_or(f64::NAN);
    (mean, x.std(1.0))
}
