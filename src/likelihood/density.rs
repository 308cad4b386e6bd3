//! likelihood::density — Gaussian log-density in log space.
//!
//! The per-step terms of the likelihood are Gaussian log-densities whose
//! scale can collapse to zero (near-instant resampling) or become `NaN`
//! (weights above one). [`ln_normal_pdf`] evaluates `ln φ(x; μ, σ)` directly
//! in log form through `statrs` for regular scales and resolves the
//! degenerate scales explicitly, so the likelihood sum sees `±∞`/`NaN`
//! exactly where the limit of the density says it should.
use statrs::distribution::{Continuous, Normal};

/// Natural log of the normal density `N(mean, sd²)` evaluated at `x`.
///
/// Degenerate inputs, checked in this order:
/// - any of `x`, `mean`, `sd` is `NaN` → `NaN`
/// - `sd < 0` → `NaN`
/// - `sd = +∞` → `-∞`
/// - `x` infinite and equal to `mean` → `NaN`
/// - `sd = 0` → `+∞` when `x == mean`, otherwise `-∞`
/// - `(x - mean) / sd` infinite → `-∞`
///
/// Otherwise delegates to `statrs::distribution::Normal::ln_pdf`, which
/// computes `-(z²/2) - ln σ - ln √(2π)` without forming the raw density.
#[inline]
pub fn ln_normal_pdf(x: f64, mean: f64, sd: f64) -> f64 {
    if x.is_nan() || mean.is_nan() || sd.is_nan() || sd < 0.0 {
        return f64::NAN;
    }
    if sd.is_infinite() {
        return f64::NEG_INFINITY;
    }
    if x.is_infinite() && x == mean {
        return f64::NAN;
    }
    if sd == 0.0 {
        return if x == mean { f64::INFINITY } else { f64::NEG_INFINITY };
    }
    if !((x - mean) / sd).is_finite() {
        return f64::NEG_INFINITY;
    }
    match Normal::new(mean, sd) {
        Ok(normal) => normal.ln_pdf(x),
        Err(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement with the closed-form log-density on regular inputs.
    // - Each degenerate branch.
    // - Stability far in the tails, where the raw density underflows.
    // -------------------------------------------------------------------------

    fn closed_form(x: f64, mean: f64, sd: f64) -> f64 {
        let z = (x - mean) / sd;
        -0.5 * (2.0 * PI).ln() - sd.ln() - 0.5 * z * z
    }

    #[test]
    // Purpose
    // -------
    // Verify agreement with -½ln(2π) - ln σ - z²/2 on a small grid.
    //
    // Given
    // -----
    // - x ∈ {-1.5, 0, 2}, mean ∈ {0, 0.5}, sd ∈ {0.3, 1, 4}.
    //
    // Expect
    // ------
    // - Relative agreement to 1e-12.
    fn ln_normal_pdf_matches_closed_form() {
        for &x in &[-1.5, 0.0, 2.0] {
            for &mean in &[0.0, 0.5] {
                for &sd in &[0.3, 1.0, 4.0] {
                    assert_relative_eq!(
                        ln_normal_pdf(x, mean, sd),
                        closed_form(x, mean, sd),
                        max_relative = 1e-12
                    );
                }
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Far-tail residuals stay finite in log space.
    //
    // Given
    // -----
    // - z = 60, where exp(-z²/2) underflows to 0.
    //
    // Expect
    // ------
    // - A finite value close to -1800.
    fn ln_normal_pdf_is_finite_where_density_underflows() {
        // Arrange
        let raw_density = (-0.5_f64 * 60.0 * 60.0).exp();

        // Act
        let value = ln_normal_pdf(60.0, 0.0, 1.0);

        // Assert
        assert_eq!(raw_density, 0.0);
        assert!(value.is_finite());
        assert_relative_eq!(value, closed_form(60.0, 0.0, 1.0), max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // A zero scale is a point mass.
    //
    // Expect
    // ------
    // - +∞ on the mean, -∞ elsewhere.
    fn zero_sd_is_point_mass() {
        assert_eq!(ln_normal_pdf(0.3, 0.3, 0.0), f64::INFINITY);
        assert_eq!(ln_normal_pdf(0.4, 0.3, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    // Purpose
    // -------
    // Exercise the remaining degenerate branches.
    fn degenerate_inputs_follow_limits() {
        assert!(ln_normal_pdf(f64::NAN, 0.0, 1.0).is_nan());
        assert!(ln_normal_pdf(0.0, f64::NAN, 1.0).is_nan());
        assert!(ln_normal_pdf(0.0, 0.0, f64::NAN).is_nan());
        assert!(ln_normal_pdf(0.0, 0.0, -1.0).is_nan());
        assert_eq!(ln_normal_pdf(0.0, 0.0, f64::INFINITY), f64::NEG_INFINITY);
        assert!(ln_normal_pdf(f64::INFINITY, f64::INFINITY, 1.0).is_nan());
        assert_eq!(ln_normal_pdf(f64::INFINITY, 0.0, 1.0), f64::NEG_INFINITY);
        assert_eq!(ln_normal_pdf(1e300, -1e300, 1e-300), f64::NEG_INFINITY);
    }
}
