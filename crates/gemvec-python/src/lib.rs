//! Python bindings for the gemvec matrix-vector kernel.
//!
//! This crate provides PyO3 bindings wrapping the C FFI layer
//! (`gemvec-ffi`). The native extension is named `_gemvec` and exposes a
//! single function, `matVecProduct`, returning a NumPy array that owns
//! the result buffer without copying it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(unsafe_code)]

use pyo3::prelude::*;

mod error;
mod matvec;

/// The native `_gemvec` extension module.
#[pymodule]
fn _gemvec(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(matvec::mat_vec_product, m)?)?;
    Ok(())
}
