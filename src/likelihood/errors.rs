//! likelihood::errors — error surface for likelihood evaluation.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by the gappy Gaussian
//! likelihood, together with a conversion layer to Python exceptions for
//! PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`LikResult`] and [`LikError`] as the canonical result and error
//!   types for input validation and parameterization parsing.
//! - Attach human-readable `Display` messages that embed the offending
//!   lengths or names.
//! - Implement `From<LikError> for PyErr`, mapping every variant to
//!   `PyValueError` with the Rust message preserved.
//!
//! Invariants & assumptions
//! ------------------------
//! - Only malformed inputs (shape violations, unknown mode names) are
//!   errors. Numerical degeneracy (zero variance, `w² ≥ 1`, non-positive
//!   `tau`) is reported as non-finite `f64` data by the evaluator and never
//!   reaches this type.
//! - `LikError` values are small and cheap to clone.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `Display` messages embed their payloads and that
//!   [`LikError::is_invalid_argument`] classifies the shape variants.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type LikResult<T> = Result<T, LikError>;

/// LikError — error conditions for gappy Gaussian likelihood evaluation.
///
/// Variants
/// --------
/// - `LengthMismatch { x_len, t_len }`
///   The value and time vectors differ in length.
/// - `InsufficientData { n }`
///   Fewer than two observations, so there is no consecutive pair to
///   condition on.
/// - `InvalidParameterization { name, reason }`
///   A textual mode selector is neither `"rho"` nor `"tau"`.
///
/// Notes
/// -----
/// - `LengthMismatch` and `InsufficientData` form the invalid-argument class
///   of failures; see [`LikError::is_invalid_argument`].
#[derive(Debug, Clone, PartialEq)]
pub enum LikError {
    //------ Input validation errors ------
    LengthMismatch { x_len: usize, t_len: usize },
    InsufficientData { n: usize },

    //------ Configuration errors ------
    InvalidParameterization { name: String, reason: &'static str },
}

impl LikError {
    /// Whether this error is a shape violation of the `(x, t)` inputs.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LikError::LengthMismatch { .. } | LikError::InsufficientData { .. })
    }
}

impl std::error::Error for LikError {}

impl std::fmt::Display for LikError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LikError::LengthMismatch { x_len, t_len } => {
                write!(
                    f,
                    "Invalid argument: x has length {x_len} but t has length {t_len}; they must match."
                )
            }
            LikError::InsufficientData { n } => {
                write!(f, "Invalid argument: need at least 2 observations, got {n}.")
            }
            LikError::InvalidParameterization { name, reason } => {
                write!(f, "Invalid parameterization '{name}': {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<LikError> for PyErr {
    fn from(err: LikError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
