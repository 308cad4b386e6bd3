//! gappy_loglik — log-likelihood of irregularly sampled Gaussian time series.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the likelihood to Python via the `_gappy_loglik` extension module.
//! The computational core lives in [`likelihood`]; this file only re-exports
//! it and, when the `python-bindings` feature is enabled, defines the
//! Python-facing functions and classes.
//!
//! Key behaviors
//! -------------
//! - Re-export the [`likelihood`] module as the public crate surface.
//! - Expose `get_l(x, t, rho, tau=False)`, `step_loglik`, `rho_to_tau`,
//!   `tau_to_rho`, and the `GappySeries` class to Python.
//! - Register a `likelihood` submodule under `gappy_loglik` so dotted imports
//!   work from Python.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work happens in [`likelihood`]; the bindings perform only
//!   array extraction and error mapping.
//! - Shape errors surface in Python as `ValueError`; non-finite
//!   log-likelihoods are returned as `float('nan')` / `-inf`, not raised.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on [`likelihood`] directly and can ignore the
//!   items guarded by `python-bindings`.
//! - The Python packaging layer imports `_gappy_loglik` and re-exports its
//!   functions.

pub mod likelihood;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    likelihood::{GappySeries, Parameterization},
    utils::{as_f64_slice, extract_f64_array},
};

/// get_l — log-likelihood of a gappy Gaussian series, from Python.
///
/// Parameters
/// ----------
/// - `x`: array-like of `float64`, observed values.
/// - `t`: array-like of `float64`, sampling times; same length as `x`.
/// - `rho`: autocorrelation per unit time, or a time scale if `tau=True`.
/// - `tau`: interpret `rho` as a time scale (default `False`).
///
/// Errors
/// ------
/// - `TypeError` if `x` or `t` is not array-like.
/// - `ValueError` on mismatched lengths or fewer than two observations.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "get_l",
    signature = (x, t, rho, tau = false),
    text_signature = "(x, t, rho, /, tau=False)"
)]
pub fn py_get_l<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, t: &Bound<'py, PyAny>, rho: f64, tau: bool,
) -> PyResult<f64> {
    let x_arr = extract_f64_array(py, x, "x")?;
    let t_arr = extract_f64_array(py, t, "t")?;
    let ll = likelihood::get_l(as_f64_slice(&x_arr, "x")?, as_f64_slice(&t_arr, "t")?, rho, tau)?;
    Ok(ll)
}

/// step_loglik — per-step log-densities whose sum is `get_l`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "step_loglik",
    signature = (x, t, rho, tau = false),
    text_signature = "(x, t, rho, /, tau=False)"
)]
pub fn py_step_loglik<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, t: &Bound<'py, PyAny>, rho: f64, tau: bool,
) -> PyResult<Vec<f64>> {
    let x_arr = extract_f64_array(py, x, "x")?;
    let t_arr = extract_f64_array(py, t, "t")?;
    let terms = likelihood::step_log_densities(
        as_f64_slice(&x_arr, "x")?,
        as_f64_slice(&t_arr, "t")?,
        rho,
        Parameterization::from_tau_flag(tau),
    )?;
    Ok(terms.to_vec())
}

/// rho_to_tau — time scale equivalent to a unit-step autocorrelation.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "rho_to_tau")]
pub fn py_rho_to_tau(rho: f64) -> f64 {
    likelihood::rho_to_tau(rho)
}

/// tau_to_rho — unit-step autocorrelation equivalent to a time scale.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "tau_to_rho")]
pub fn py_tau_to_rho(tau: f64) -> f64 {
    likelihood::tau_to_rho(tau)
}

/// PyGappySeries — Python-facing wrapper around [`GappySeries`].
///
/// Purpose
/// -------
/// Let Python callers validate and copy a window once, then evaluate the
/// likelihood at many parameter values without re-validating.
///
/// Parameters
/// ----------
/// Constructed from Python via `GappySeries(x, t)`, where both arguments are
/// 1-D array-likes of equal length `≥ 2`.
///
/// Notes
/// -----
/// - Native Rust code should use [`GappySeries`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "GappySeries", module = "gappy_loglik.likelihood", frozen)]
pub struct PyGappySeries {
    inner: GappySeries,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyGappySeries {
    #[new]
    #[pyo3(text_signature = "(x, t)")]
    pub fn new<'py>(
        py: Python<'py>, x: &Bound<'py, PyAny>, t: &Bound<'py, PyAny>,
    ) -> PyResult<Self> {
        let x_arr = extract_f64_array(py, x, "x")?;
        let t_arr = extract_f64_array(py, t, "t")?;
        let inner =
            GappySeries::from_slices(as_f64_slice(&x_arr, "x")?, as_f64_slice(&t_arr, "t")?)?;
        Ok(PyGappySeries { inner })
    }

    #[pyo3(signature = (param, tau = false), text_signature = "(self, param, /, tau=False)")]
    pub fn log_likelihood(&self, param: f64, tau: bool) -> f64 {
        self.inner.log_likelihood(param, Parameterization::from_tau_flag(tau))
    }

    #[pyo3(signature = (param, tau = false), text_signature = "(self, param, /, tau=False)")]
    pub fn step_loglik(&self, param: f64, tau: bool) -> Vec<f64> {
        self.inner.step_log_densities(param, Parameterization::from_tau_flag(tau)).to_vec()
    }

    #[getter]
    pub fn n(&self) -> usize {
        self.inner.len()
    }

    #[getter]
    pub fn mean(&self) -> f64 {
        self.inner.mean()
    }

    #[getter]
    pub fn sd(&self) -> f64 {
        self.inner.sd()
    }

    pub fn __len__(&self) -> usize {
        self.inner.len()
    }
}

/// _gappy_loglik — PyO3 module initializer for the Python extension.
///
/// Creates the `likelihood` submodule, attaches it to the parent module, and
/// registers it in `sys.modules` so `gappy_loglik.likelihood` is importable
/// by dotted path. The top-level functions are also added to the parent.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _gappy_loglik<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let likelihood_mod = PyModule::new(_py, "likelihood")?;
    likelihood_module(_py, m, &likelihood_mod)?;
    add_functions(m)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("gappy_loglik.likelihood", likelihood_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn likelihood_module<'py>(
    _py: Python, gappy_loglik: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    add_functions(m)?;
    m.add_class::<PyGappySeries>()?;
    gappy_loglik.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn add_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_get_l, m)?)?;
    m.add_function(wrap_pyfunction!(py_step_loglik, m)?)?;
    m.add_function(wrap_pyfunction!(py_rho_to_tau, m)?)?;
    m.add_function(wrap_pyfunction!(py_tau_to_rho, m)?)?;
    Ok(())
}
