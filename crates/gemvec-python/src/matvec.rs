//! matVecProduct: dense matrix-vector product with NumPy zero-copy result.

use numpy::{AllowTypeChange, IntoPyArray, PyArray1, PyArrayLikeDyn, PyReadonlyArrayDyn};
use pyo3::prelude::*;

use gemvec_ffi::{gemvec_matvec, GemvecBuffer};

use crate::error::check_status;

/// Extract a flat, C-ordered `f64` view of a coerced argument.
///
/// `PyArrayLikeDyn<f64, AllowTypeChange>` already applied forcecast
/// semantics: lists and wrong-dtype arrays arrived here as fresh
/// contiguous arrays. The one remaining case is an exact-dtype but
/// non-contiguous array, which is borrowed as-is by the coercion; it is
/// copied into `storage` so the kernel always sees contiguous memory and
/// never reinterprets strided data.
fn flat_slice<'a, 'py>(
    array: &'a PyReadonlyArrayDyn<'py, f64>,
    storage: &'a mut Vec<f64>,
) -> &'a [f64] {
    match array.as_slice() {
        Ok(s) => s,
        Err(_) => {
            *storage = array.as_array().iter().copied().collect();
            storage
        }
    }
}

/// Compute the matrix-vector product `b = mat @ vec`.
///
/// Args:
///     mat: Matrix of shape (dim1, dim2), any array-like; coerced to a
///         contiguous float64 buffer (copying if needed, never
///         reinterpreting) and read flat in C order.
///     vec: Vector of length dim2, coerced the same way.
///     dim1: Matrix row count; the result length.
///     dim2: Matrix column count; the vector length.
///
/// Returns:
///     A new float64 array of length dim1 owning the result buffer; the
///     buffer is freed exactly once when the array is garbage collected.
///
/// Raises:
///     ValueError: If the buffer lengths disagree with dim1/dim2.
#[pyfunction]
#[pyo3(name = "matVecProduct")]
pub(crate) fn mat_vec_product<'py>(
    py: Python<'py>,
    mat: PyArrayLikeDyn<'py, f64, AllowTypeChange>,
    vec: PyArrayLikeDyn<'py, f64, AllowTypeChange>,
    dim1: usize,
    dim2: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let mut mat_storage = Vec::new();
    let mut vec_storage = Vec::new();
    let a = flat_slice(&mat, &mut mat_storage);
    let v = flat_slice(&vec, &mut vec_storage);

    // Convert pointers to usize so the closure is Ungil. The buffers stay
    // borrowed (alive and unmoved) for the duration of the call.
    let a_addr = a.as_ptr() as usize;
    let a_len = a.len();
    let v_addr = v.as_ptr() as usize;
    let v_len = v.len();

    // Release GIL: the native call blocks the calling thread only.
    let (status, out_addr, out_len) = py.detach(|| {
        let mut out = GemvecBuffer {
            ptr: std::ptr::null_mut(),
            len: 0,
        };
        let s = gemvec_matvec(
            a_addr as *const f64,
            a_len,
            v_addr as *const f64,
            v_len,
            dim1,
            dim2,
            &mut out,
        );
        (s, out.ptr as usize, out.len)
    });
    check_status(status)?;

    // Re-adopt the transferred buffer: gemvec-ffi allocated it from a
    // boxed slice (capacity == len) in this same program, so the Vec can
    // be reconstituted and moved into a NumPy array without copying.
    // NumPy's base object then frees it exactly once at GC.
    let b = unsafe { Vec::from_raw_parts(out_addr as *mut f64, out_len, out_len) };
    Ok(b.into_pyarray(py))
}
