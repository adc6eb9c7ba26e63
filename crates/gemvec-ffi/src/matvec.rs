//! Pointer-based matvec entry point for language bindings.

use gemvec_core::matvec;

use crate::buffer::GemvecBuffer;
use crate::ffi_guard;
use crate::status::GemvecStatus;

/// Compute `b = A * v` for a row-major `m x n` matrix.
///
/// `a` points to `a_len` doubles (`a_len` must equal `m * n`), `v` to
/// `v_len` doubles (`v_len` must equal `n`). On success the result buffer
/// of `m` doubles is written to `out`; its ownership transfers to the
/// caller, who must release it exactly once with `gemvec_buffer_free`.
///
/// `out` is not written on error. A null data pointer is only accepted
/// together with a zero length.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gemvec_matvec(
    a: *const f64,
    a_len: usize,
    v: *const f64,
    v_len: usize,
    m: usize,
    n: usize,
    out: *mut GemvecBuffer,
) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return GemvecStatus::InvalidArgument as i32;
        }
        if (a.is_null() && a_len != 0) || (v.is_null() && v_len != 0) {
            return GemvecStatus::InvalidArgument as i32;
        }

        // SAFETY: non-null pointers are valid for their stated lengths per
        // the contract above; zero-length inputs take the empty-slice path.
        let a_slice = if a_len == 0 {
            &[][..]
        } else {
            unsafe { std::slice::from_raw_parts(a, a_len) }
        };
        let v_slice = if v_len == 0 {
            &[][..]
        } else {
            unsafe { std::slice::from_raw_parts(v, v_len) }
        };

        match matvec(a_slice, v_slice, m, n) {
            Ok(b) => {
                // SAFETY: out checked non-null above.
                unsafe { *out = GemvecBuffer::from_vec(b) };
                GemvecStatus::Ok as i32
            }
            Err(e) => GemvecStatus::from(&e) as i32,
        }
    })
}
