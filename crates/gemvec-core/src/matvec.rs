//! Row-major matrix-vector product kernel.

use crate::blas::{dgemv, Transpose};
use crate::error::MatVecError;

/// Compute `b = A * v` for a row-major `m x n` matrix.
///
/// `a` is a flat buffer of length `m * n` holding row `i` at
/// `a[i * n..(i + 1) * n]`; `v` has length `n`. The result is a newly
/// allocated buffer of length `m` with `b[i] = sum_j a[i * n + j] * v[j]`.
///
/// Buffer lengths are validated against the dimensions before the dgemv
/// routine runs; a mismatch is an error, never an out-of-bounds read.
/// Zero dimensions are legal: `m == 0` yields an empty result, `n == 0`
/// yields all zeros.
///
/// The dgemv routine is column-major only. A row-major `(m, n)` buffer is
/// byte-identical to the column-major `(n, m)` transpose of `A`, so the
/// routine is invoked with [`Transpose::Trans`], its row/column counts
/// swapped to `(n, m)`, and leading dimension `n` — no element is moved.
pub fn matvec(a: &[f64], v: &[f64], m: usize, n: usize) -> Result<Vec<f64>, MatVecError> {
    let expected = m
        .checked_mul(n)
        .ok_or(MatVecError::DimOverflow { m, n })?;
    if a.len() != expected {
        return Err(MatVecError::MatrixLenMismatch {
            expected,
            actual: a.len(),
        });
    }
    if v.len() != n {
        return Err(MatVecError::VectorLenMismatch {
            expected: n,
            actual: v.len(),
        });
    }

    let mut b = vec![0.0f64; m];
    // lda must be >= 1 even when the matrix is empty.
    dgemv(
        Transpose::Trans,
        n,
        m,
        1.0,
        a,
        n.max(1),
        v,
        1,
        0.0,
        &mut b,
        1,
    );
    Ok(b)
}
