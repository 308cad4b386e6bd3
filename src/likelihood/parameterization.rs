//! likelihood::parameterization — rho / tau interpretation of the scalar
//! parameter.
//!
//! The evaluator takes a single scalar that is read either as a per-unit-time
//! autocorrelation `ρ` (weight `w = ρ^Δt`) or as a characteristic time scale
//! `τ` (weight `w = exp(-Δt/τ)`). On a unit grid the two agree when
//! `ρ = exp(-1/τ)`; [`rho_to_tau`] and [`tau_to_rho`] convert between them.
//!
//! Out-of-range parameters are not rejected here. A negative `ρ` with a
//! non-integer gap gives `NaN`, `τ ≤ 0` gives weights at or above one, and
//! both propagate into the likelihood as non-finite values.
use crate::likelihood::errors::{LikError, LikResult};
use std::{fmt, str::FromStr};

/// How the scalar parameter of the likelihood is interpreted.
///
/// Variants:
/// - `Rho`: per-unit-time autocorrelation, `w = ρ^Δt`.
/// - `Tau`: characteristic time scale in the units of `t`, `w = exp(-Δt/τ)`.
///
/// Parsing:
/// Implements `FromStr`, accepting case-insensitive `"rho"` and `"tau"`.
/// Unknown names return `LikError::InvalidParameterization`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Parameterization {
    #[default]
    Rho,
    Tau,
}

impl Parameterization {
    /// Map the boolean `tau` flag of the host interface onto a variant.
    pub const fn from_tau_flag(tau: bool) -> Self {
        if tau { Parameterization::Tau } else { Parameterization::Rho }
    }

    /// `true` for [`Parameterization::Tau`].
    pub const fn is_tau(self) -> bool {
        matches!(self, Parameterization::Tau)
    }

    /// Correlation weight for an interval of length `dt`.
    ///
    /// - `Rho`: `param.powf(dt)`.
    /// - `Tau`: `(-dt / param).exp()`.
    ///
    /// No domain checks are applied; IEEE semantics decide the result for
    /// negative, zero, or non-finite inputs.
    #[inline]
    pub fn weight(self, param: f64, dt: f64) -> f64 {
        match self {
            Parameterization::Rho => param.powf(dt),
            Parameterization::Tau => (-dt / param).exp(),
        }
    }
}

impl fmt::Display for Parameterization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameterization::Rho => write!(f, "rho"),
            Parameterization::Tau => write!(f, "tau"),
        }
    }
}

impl FromStr for Parameterization {
    type Err = LikError;

    fn from_str(s: &str) -> LikResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "rho" => Ok(Parameterization::Rho),
            "tau" => Ok(Parameterization::Tau),
            _ => Err(LikError::InvalidParameterization {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'rho' or 'tau'.",
            }),
        }
    }
}

/// Time scale equivalent to a unit-step autocorrelation, `τ = -1 / ln ρ`.
///
/// `ρ = 1` maps to `+∞` and `ρ → 0⁺` maps to `0⁺`; values outside `(0, 1]`
/// yield negative or `NaN` results.
#[inline]
pub fn rho_to_tau(rho: f64) -> f64 {
    -1.0 / rho.ln()
}

/// Unit-step autocorrelation equivalent to a time scale, `ρ = exp(-1/τ)`.
#[inline]
pub fn tau_to_rho(tau: f64) -> f64 {
    (-1.0 / tau).exp()
}
