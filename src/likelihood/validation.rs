//! likelihood::validation — shape guards for likelihood inputs.
//!
//! Purpose
//! -------
//! Centralize the precondition checks on the `(x, t)` pair before any
//! per-step computation reads from them, so that a mismatched or too-short
//! input fails with a structured error instead of indexing out of bounds.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x.len() == t.len()`.
//! - `x.len() >= 2`.
//! - Values are NOT checked for finiteness and `t` is NOT checked for
//!   monotonicity; non-finite inputs propagate into the result as data.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the success path and both error branches, including
//!   the precedence of the length check over the minimum-size check.

use crate::likelihood::errors::{LikError, LikResult};
use log::debug;

/// Minimum number of observations needed to form one consecutive pair.
pub const MIN_OBSERVATIONS: usize = 2;

/// Validate the shape of a value/time pair.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Observed values.
/// - `t`: `&[f64]`
///   Sampling times, index-aligned with `x`.
///
/// Returns
/// -------
/// `LikResult<usize>`
///   - `Ok(n)` with the common length when the inputs are well formed.
///
/// Errors
/// ------
/// - `LikError::LengthMismatch`
///   Returned when `x.len() != t.len()`. Checked first.
/// - `LikError::InsufficientData`
///   Returned when the common length is below [`MIN_OBSERVATIONS`].
///
/// Examples
/// --------
/// ```rust
/// # use gappy_loglik::likelihood::validation::validate_input;
/// # use gappy_loglik::likelihood::errors::LikError;
/// assert_eq!(validate_input(&[0.0, 1.0], &[0.0, 2.0]), Ok(2));
/// assert_eq!(
///     validate_input(&[0.0, 1.0], &[0.0]),
///     Err(LikError::LengthMismatch { x_len: 2, t_len: 1 })
/// );
/// ```
pub fn validate_input(x: &[f64], t: &[f64]) -> LikResult<usize> {
    validate_lengths(x.len(), t.len())
}

/// Validate the lengths of a value/time pair without reading the data.
///
/// Used by containers that hold non-contiguous arrays. Same rules and error
/// precedence as [`validate_input`].
///
/// # Errors
/// - `LikError::LengthMismatch` when `x_len != t_len`.
/// - `LikError::InsufficientData` when the common length is below
///   [`MIN_OBSERVATIONS`].
pub fn validate_lengths(x_len: usize, t_len: usize) -> LikResult<usize> {
    if x_len != t_len {
        debug!("rejecting input: x has {x_len} values, t has {t_len}");
        return Err(LikError::LengthMismatch { x_len, t_len });
    }

    if x_len < MIN_OBSERVATIONS {
        debug!("rejecting input: {x_len} observation(s), need at least {MIN_OBSERVATIONS}");
        return Err(LikError::InsufficientData { n: x_len });
    }

    Ok(x_len)
}
