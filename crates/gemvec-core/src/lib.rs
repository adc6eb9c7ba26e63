//! Dense matrix-vector product kernel.
//!
//! This is the leaf crate with zero dependencies. It contains the
//! column-major [`dgemv`] routine, the row-major [`matvec`] kernel built
//! on top of it, and the error types shared with the boundary crates.
//!
//! Callers hand in flat `f64` buffers with explicit dimensions; the
//! kernel validates buffer lengths against the dimensions before any
//! arithmetic runs, allocates the result, and returns it by value.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod blas;
mod error;
mod matvec;

pub use blas::{dgemv, Transpose};
pub use error::MatVecError;
pub use matvec::matvec;
