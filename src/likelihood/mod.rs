//! likelihood — gappy Gaussian log-likelihood and its shared infrastructure.
//!
//! Purpose
//! -------
//! Evaluate the log-likelihood of an irregularly sampled Gaussian time series
//! under an Ornstein–Uhlenbeck-type autocorrelation model. The scalar
//! parameter is either a per-unit-time autocorrelation `ρ` or a time scale
//! `τ`; the result is the objective an outer maximum-likelihood search or a
//! change-point scan evaluates repeatedly.
//!
//! Key behaviors
//! -------------
//! - [`get_l`] / [`log_likelihood`] validate `(x, t)` and return the summed
//!   per-step Gaussian log-densities.
//! - [`GappySeries`] validates once and evaluates infallibly at many
//!   parameter values, with per-step diagnostics ([`StepTerm`]).
//! - [`Parameterization`] selects the rho or tau reading of the parameter;
//!   [`rho_to_tau`] / [`tau_to_rho`] convert between them on a unit grid.
//! - [`ln_normal_pdf`] evaluates Gaussian log-densities directly in log
//!   space, with explicit limits for degenerate scales.
//!
//! Invariants & assumptions
//! ------------------------
//! - Shape violations (mismatched lengths, fewer than two observations) are
//!   the only errors and are reported as [`LikError`] before any element is
//!   read.
//! - Numerical degeneracy is data: non-finite log-likelihoods are returned,
//!   never raised. Callers such as optimizers decide how to treat them.
//! - Every operation is pure and reentrant.
//!
//! Conventions
//! -------------
//! - Sample moments use the `n − 1` denominator and are estimated once per
//!   window, not per step.
//! - Gaps are `tᵢ₊₁ − tᵢ` as given; `t` is not sorted or checked.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use gappy_loglik::likelihood::prelude::*;
//!
//!   let series = GappySeries::from_slices(&[0.0, 1.0, 0.0], &[0.0, 0.5, 2.0])?;
//!   let ll = series.log_likelihood(3.0, Parameterization::Tau);
//!   assert!(ll.is_finite());
//!   # Ok::<(), LikError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own concerns; the integration
//!   tests exercise simulated Ornstein–Uhlenbeck data and concurrent use.

pub mod density;
pub mod errors;
pub mod gappy_gaussian;
pub mod parameterization;
pub mod series;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::density::ln_normal_pdf;
pub use self::errors::{LikError, LikResult};
pub use self::gappy_gaussian::{StepTerm, get_l, log_likelihood, step_log_densities};
pub use self::parameterization::{Parameterization, rho_to_tau, tau_to_rho};
pub use self::series::GappySeries;
pub use self::validation::{validate_input, validate_lengths};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use gappy_loglik::likelihood::prelude::*;
//
// to import the main likelihood surface in a single line.

pub mod prelude {
    pub use super::errors::{LikError, LikResult};
    pub use super::gappy_gaussian::{get_l, log_likelihood};
    pub use super::parameterization::{Parameterization, rho_to_tau, tau_to_rho};
    pub use super::series::GappySeries;
}
