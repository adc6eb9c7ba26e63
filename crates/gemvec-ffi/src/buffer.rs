//! Owned result-buffer handoff across the C boundary.
//!
//! The kernel allocates each result exactly once; [`GemvecBuffer`] carries
//! it across the boundary as an explicit move. Ownership is linear: the
//! producer writes the buffer once, the consumer releases it exactly once,
//! either through [`gemvec_buffer_free`] or by re-adopting the allocation
//! on the Rust side (as the Python bindings do).

/// A heap-allocated `f64` buffer whose ownership has been transferred to
/// the caller.
///
/// Produced by `gemvec_matvec`. The caller must release it exactly once
/// with [`gemvec_buffer_free`]. `len` is the element count, not a byte
/// count.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct GemvecBuffer {
    /// First element of the buffer. Never null for a live buffer.
    pub ptr: *mut f64,
    /// Number of `f64` elements.
    pub len: usize,
}

impl GemvecBuffer {
    /// Move a kernel result into a raw buffer, giving up ownership.
    ///
    /// The boxed-slice conversion guarantees capacity == len, so the
    /// allocation can later be reconstituted from `(ptr, len)` alone.
    pub(crate) fn from_vec(v: Vec<f64>) -> Self {
        let boxed = v.into_boxed_slice();
        let len = boxed.len();
        let ptr = Box::into_raw(boxed) as *mut f64;
        GemvecBuffer { ptr, len }
    }
}

/// Release a buffer returned by `gemvec_matvec`.
///
/// Must be called exactly once per returned buffer. Passing a buffer with
/// a null `ptr` is a safe no-op; passing the same live buffer twice is
/// undefined behavior, as with any C `free`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gemvec_buffer_free(buf: GemvecBuffer) {
    if buf.ptr.is_null() {
        return;
    }
    // SAFETY: ptr/len came from GemvecBuffer::from_vec, which produced them
    // via Box<[f64]>::into_raw; reconstituting the box drops the allocation.
    unsafe {
        drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(
            buf.ptr, buf.len,
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_preserves_contents() {
        let buf = GemvecBuffer::from_vec(vec![1.0, 2.0, 3.0]);
        assert!(!buf.ptr.is_null());
        assert_eq!(buf.len, 3);
        #[allow(unsafe_code)]
        let s = unsafe { std::slice::from_raw_parts(buf.ptr, buf.len) };
        assert_eq!(s, [1.0, 2.0, 3.0]);
        gemvec_buffer_free(buf);
    }

    #[test]
    fn free_null_is_a_no_op() {
        gemvec_buffer_free(GemvecBuffer {
            ptr: std::ptr::null_mut(),
            len: 0,
        });
    }

    #[test]
    fn empty_buffer_round_trips() {
        let buf = GemvecBuffer::from_vec(Vec::new());
        assert_eq!(buf.len, 0);
        gemvec_buffer_free(buf);
    }
}
