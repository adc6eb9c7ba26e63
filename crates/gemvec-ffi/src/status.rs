//! C-compatible status codes for the gemvec FFI surface.

use gemvec_core::MatVecError;

/// Status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GemvecStatus {
    /// Success.
    Ok = 0,
    /// An argument is null where data was expected, or an out-pointer is null.
    InvalidArgument = -1,
    /// The matrix buffer length does not equal `m * n`.
    MatrixLenMismatch = -2,
    /// The vector buffer length does not equal `n`.
    VectorLenMismatch = -3,
    /// `m * n` overflows the address space.
    DimOverflow = -4,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&MatVecError> for GemvecStatus {
    fn from(e: &MatVecError) -> Self {
        match e {
            MatVecError::MatrixLenMismatch { .. } => GemvecStatus::MatrixLenMismatch,
            MatVecError::VectorLenMismatch { .. } => GemvecStatus::VectorLenMismatch,
            MatVecError::DimOverflow { .. } => GemvecStatus::DimOverflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_errors_map_to_distinct_codes() {
        let codes = [
            GemvecStatus::from(&MatVecError::MatrixLenMismatch {
                expected: 9,
                actual: 8,
            }),
            GemvecStatus::from(&MatVecError::VectorLenMismatch {
                expected: 3,
                actual: 4,
            }),
            GemvecStatus::from(&MatVecError::DimOverflow { m: 1, n: 1 }),
        ];
        assert_eq!(
            codes,
            [
                GemvecStatus::MatrixLenMismatch,
                GemvecStatus::VectorLenMismatch,
                GemvecStatus::DimOverflow
            ]
        );
        for c in codes {
            assert!((c as i32) < 0);
        }
    }
}
