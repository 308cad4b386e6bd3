//! Conversion helpers for the Python boundary.
//!
//! Everything here is compiled only with the `python-bindings` feature and
//! turns array-like Python objects (numpy arrays, pandas Series, float
//! sequences) into contiguous `f64` buffers the likelihood can borrow.

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Extract a read-only 1-D `float64` array from an array-like object.
///
/// Tries, in order: a contiguous `numpy.ndarray`, an object exposing
/// `to_numpy` (pandas), then any sequence of floats (copied).
///
/// # Errors
/// `TypeError` naming `name` when none of the paths apply.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(format!(
            "{name} must be a 1-D numpy.ndarray, pandas.Series, or sequence of float64"
        ))
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Borrow the contiguous buffer of an extracted array.
///
/// # Errors
/// `ValueError` naming `name` if the array is not contiguous.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn as_f64_slice<'a>(arr: &'a PyReadonlyArray1<'_, f64>, name: &str) -> PyResult<&'a [f64]> {
    arr.as_slice()
        .map_err(|_| PyValueError::new_err(format!("{name} must be a contiguous float64 array")))
}
