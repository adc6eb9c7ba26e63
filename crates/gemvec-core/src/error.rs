//! Error types for the matvec kernel.

use std::error::Error;
use std::fmt;

/// Errors from [`matvec`](crate::matvec) precondition checks.
///
/// All variants are raised before the dgemv routine runs; a successful
/// return guarantees the buffers and dimensions were consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatVecError {
    /// The matrix buffer length does not equal `m * n`.
    MatrixLenMismatch {
        /// Required length (`m * n`).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// The vector buffer length does not equal `n`.
    VectorLenMismatch {
        /// Required length (`n`).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// `m * n` overflows `usize`, so no valid matrix buffer can exist.
    DimOverflow {
        /// Requested row count.
        m: usize,
        /// Requested column count.
        n: usize,
    },
}

impl fmt::Display for MatVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatrixLenMismatch { expected, actual } => write!(
                f,
                "matrix buffer has {actual} elements but the dimensions require {expected} (m * n)"
            ),
            Self::VectorLenMismatch { expected, actual } => write!(
                f,
                "vector buffer has {actual} elements but the dimensions require {expected} (n)"
            ),
            Self::DimOverflow { m, n } => {
                write!(f, "matrix dimensions {m} x {n} overflow usize")
            }
        }
    }
}

impl Error for MatVecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_expected_and_actual() {
        let e = MatVecError::MatrixLenMismatch {
            expected: 9,
            actual: 8,
        };
        let msg = e.to_string();
        assert!(msg.contains('9'));
        assert!(msg.contains('8'));

        let e = MatVecError::VectorLenMismatch {
            expected: 3,
            actual: 4,
        };
        let msg = e.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn display_names_overflowing_dims() {
        let e = MatVecError::DimOverflow {
            m: usize::MAX,
            n: 2,
        };
        assert!(e.to_string().contains("overflow"));
    }
}
