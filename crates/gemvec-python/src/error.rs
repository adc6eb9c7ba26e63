//! GemvecStatus -> Python exception mapping with recovery hints.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::PyResult;

/// Check an FFI status code. Returns `Ok(())` on success, raises a typed
/// Python exception with a recovery hint on error.
pub(crate) fn check_status(code: i32) -> PyResult<()> {
    if code == 0 {
        return Ok(());
    }
    let (msg, hint) = error_detail(code);
    let full = format!("gemvec error {code}: {msg}\n  Hint: {hint}");
    match code {
        // Validation errors (caller's fault) → ValueError
        -1 | -2 | -3 | -4 => Err(PyValueError::new_err(full)),

        // Caught panic or unknown code → RuntimeError
        _ => Err(PyRuntimeError::new_err(full)),
    }
}

/// Returns `(message, recovery_hint)` for each FFI status code.
fn error_detail(code: i32) -> (&'static str, &'static str) {
    match code {
        -1 => (
            "invalid argument (null pointer at the FFI boundary)",
            "This should not be reachable from Python; if you see it, \
             report the call that produced it.",
        ),
        -2 => (
            "matrix buffer length does not match dim1 * dim2",
            "The flattened matrix must contain exactly dim1 * dim2 \
             elements. Check the order of the dim1/dim2 arguments and \
             that the array was not sliced before the call.",
        ),
        -3 => (
            "vector buffer length does not match dim2",
            "The vector must contain exactly dim2 elements (the matrix \
             column count).",
        ),
        -4 => (
            "dim1 * dim2 overflows the address space",
            "The requested matrix shape cannot exist in memory. Check \
             the dim1/dim2 values for corruption.",
        ),
        -128 => (
            "a panic was caught in the native library",
            "This is a bug in gemvec, not in the calling code. Please \
             report it together with the input shapes.",
        ),
        _ => (
            "unknown gemvec error",
            "An unrecognized error code was returned from the FFI layer. \
             This may indicate a version mismatch between the Python \
             bindings and the native library.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_known_codes_have_detail() {
        for code in [-1, -2, -3, -4, -128] {
            let (msg, hint) = error_detail(code);
            assert!(!msg.is_empty(), "code {code} has empty msg");
            assert!(!hint.is_empty(), "code {code} has empty hint");
        }
    }

    #[test]
    fn unknown_code_returns_fallback() {
        let (msg, hint) = error_detail(-999);
        assert!(msg.contains("unknown"));
        assert!(hint.contains("version mismatch"));
    }
}
