//! Column-major dgemv: the BLAS level-2 general matrix-vector routine.
//!
//! The routine stores `A` column-major only; row-major callers adapt via
//! the transpose trick (see [`matvec`](crate::matvec)). Keeping the raw
//! routine behind this typed signature replaces the free-floating
//! `extern "C" dgemv_` declaration a linked BLAS would need: buffer
//! lengths are carried by the slices, and an undersized buffer panics
//! instead of reading out of bounds.

/// Whether dgemv applies `A` or its transpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transpose {
    /// `y := alpha * A * x + beta * y`
    NoTrans,
    /// `y := alpha * A^T * x + beta * y`
    Trans,
}

/// Double-precision GEMV over a column-major matrix:
/// `y := alpha * op(A) * x + beta * y`.
///
/// # Arguments
/// * `trans` - Whether to apply `A` or `A^T`
/// * `m` - Rows of `A` (before transposition)
/// * `n` - Columns of `A` (before transposition)
/// * `alpha` - Scalar multiplier for `op(A) * x`
/// * `a` - Matrix `A`, column-major, column `j` at `a[j * lda..]`
/// * `lda` - Leading dimension of `A`, at least `max(1, m)`
/// * `x` - Input vector, length `m` under `Trans`, else `n` (times stride)
/// * `incx` - Stride of `x`, at least 1
/// * `beta` - Scalar multiplier for `y`; `0.0` clears `y` without reading it
/// * `y` - Output vector, length `n` under `Trans`, else `m` (times stride)
/// * `incy` - Stride of `y`, at least 1
///
/// # Panics
/// Panics if a buffer is shorter than the dimensions and strides imply.
pub fn dgemv(
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: usize,
    beta: f64,
    y: &mut [f64],
    incy: usize,
) {
    let rows = match trans {
        Transpose::NoTrans => m,
        Transpose::Trans => n,
    };

    // BLAS convention: beta == 0 is a clear, not a multiply, so stale
    // NaN/Inf in y never leaks into the result.
    if beta == 0.0 {
        for i in 0..rows {
            y[i * incy] = 0.0;
        }
    } else if beta != 1.0 {
        for i in 0..rows {
            y[i * incy] *= beta;
        }
    }

    if alpha == 0.0 || m == 0 || n == 0 {
        return;
    }

    match trans {
        Transpose::NoTrans => {
            // y[i] += alpha * sum_j(A[i + j*lda] * x[j])
            for j in 0..n {
                let col_start = j * lda;
                let xj = alpha * x[j * incx];
                for i in 0..m {
                    y[i * incy] += xj * a[col_start + i];
                }
            }
        }
        Transpose::Trans => {
            // y[j] += alpha * sum_i(A[i + j*lda] * x[i]); each column is
            // contiguous, so the unit-stride path is a plain dot product.
            for j in 0..n {
                let col = &a[j * lda..j * lda + m];
                let sum = if incx == 1 {
                    col.iter().zip(&x[..m]).map(|(a, x)| a * x).sum::<f64>()
                } else {
                    let mut sum = 0.0f64;
                    for (i, aij) in col.iter().enumerate() {
                        sum += aij * x[i * incx];
                    }
                    sum
                };
                y[j * incy] += alpha * sum;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A = [[1, 2],
    //      [3, 4],
    //      [5, 6]] stored column-major (3x2, lda = 3).
    const A_COL: [f64; 6] = [1.0, 3.0, 5.0, 2.0, 4.0, 6.0];

    #[test]
    fn notrans_matches_hand_computation() {
        let x = [1.0, 10.0];
        let mut y = [0.0; 3];
        dgemv(Transpose::NoTrans, 3, 2, 1.0, &A_COL, 3, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, [21.0, 43.0, 65.0]);
    }

    #[test]
    fn trans_matches_hand_computation() {
        let x = [1.0, 10.0, 100.0];
        let mut y = [0.0; 2];
        dgemv(Transpose::Trans, 3, 2, 1.0, &A_COL, 3, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, [531.0, 642.0]);
    }

    #[test]
    fn alpha_scales_product() {
        let x = [1.0, 1.0];
        let mut y = [0.0; 3];
        dgemv(Transpose::NoTrans, 3, 2, 2.0, &A_COL, 3, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, [6.0, 14.0, 22.0]);
    }

    #[test]
    fn beta_accumulates_into_y() {
        let x = [1.0, 1.0];
        let mut y = [100.0, 200.0, 300.0];
        dgemv(Transpose::NoTrans, 3, 2, 1.0, &A_COL, 3, &x, 1, 0.5, &mut y, 1);
        assert_eq!(y, [53.0, 107.0, 161.0]);
    }

    #[test]
    fn beta_zero_clears_nan_in_y() {
        let x = [1.0, 1.0];
        let mut y = [f64::NAN, f64::NAN, f64::NAN];
        dgemv(Transpose::NoTrans, 3, 2, 1.0, &A_COL, 3, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, [3.0, 7.0, 11.0]);
    }

    #[test]
    fn strided_x_and_y() {
        // Same product as notrans_matches_hand_computation, but x and y
        // live in every other slot of larger buffers.
        let x = [1.0, -1.0, 10.0, -1.0];
        let mut y = [0.0; 6];
        dgemv(Transpose::NoTrans, 3, 2, 1.0, &A_COL, 3, &x, 2, 0.0, &mut y, 2);
        assert_eq!(y, [21.0, 0.0, 43.0, 0.0, 65.0, 0.0]);
    }

    #[test]
    fn alpha_zero_only_applies_beta() {
        let x = [7.0, 7.0];
        let mut y = [1.0, 2.0, 3.0];
        dgemv(Transpose::NoTrans, 3, 2, 0.0, &A_COL, 3, &x, 1, 3.0, &mut y, 1);
        assert_eq!(y, [3.0, 6.0, 9.0]);
    }

    #[test]
    fn zero_dims_clear_output_and_return() {
        let mut y = [f64::NAN; 2];
        dgemv(Transpose::Trans, 0, 2, 1.0, &[], 1, &[], 1, 0.0, &mut y, 1);
        assert_eq!(y, [0.0, 0.0]);
    }
}
