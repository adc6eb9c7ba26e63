//! C FFI bindings for the gemvec matrix-vector kernel.
//!
//! Exposes a C-compatible API for language bindings. This is the only
//! crate in the workspace that may contain `unsafe` code.
//!
//! Every `extern "C"` entry point wraps its body in [`ffi_guard!`], so a
//! Rust panic is converted into [`GemvecStatus::Panicked`] instead of
//! unwinding across the C boundary; the panic message is retrievable via
//! [`gemvec_last_panic_message`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

use std::cell::RefCell;
use std::ffi::c_char;

mod buffer;
mod matvec;
mod status;

pub use buffer::{gemvec_buffer_free, GemvecBuffer};
pub use matvec::gemvec_matvec;
pub use status::GemvecStatus;

thread_local! {
    /// Message of the most recent panic caught by [`ffi_guard!`] on this thread.
    static LAST_PANIC: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Record a caught panic payload for later retrieval.
fn store_panic_message(payload: Box<dyn std::any::Any + Send>) {
    let msg = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    };
    LAST_PANIC.with(|cell| *cell.borrow_mut() = msg);
}

/// Wrap an FFI function body in `catch_unwind`.
///
/// The body must evaluate to an `i32` status code. A panic becomes
/// [`GemvecStatus::Panicked`] and its message is stored in [`LAST_PANIC`].
macro_rules! ffi_guard {
    ($body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(payload) => {
                $crate::store_panic_message(payload);
                $crate::GemvecStatus::Panicked as i32
            }
        }
    };
}
pub(crate) use ffi_guard;

/// Copy the message of the last panic caught on this thread into `buf`.
///
/// Returns the message length in bytes. If `buf` is null or `buf_len` is 0,
/// nothing is copied and the full length is returned so the caller can size
/// a buffer. Otherwise up to `buf_len` bytes are copied (nul-terminated when
/// there is room) and the copied length is returned.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gemvec_last_panic_message(buf: *mut c_char, buf_len: usize) -> usize {
    LAST_PANIC.with(|cell| {
        let msg = cell.borrow();
        if buf.is_null() || buf_len == 0 {
            return msg.len();
        }
        let n = msg.len().min(buf_len);
        // SAFETY: caller guarantees buf points to at least buf_len bytes.
        unsafe {
            std::ptr::copy_nonoverlapping(msg.as_ptr(), buf as *mut u8, n);
            if n < buf_len {
                *buf.add(n) = 0;
            }
        }
        n
    })
}
