//! Standalone matvec demonstration: a fixed 3x3 system.
//!
//! Computes `b = A * v` for
//!
//! ```text
//! A = [ 1 0 1 ]      v = [ 1.1 ]
//!     [ 0 2 0 ]          [ 2.2 ]
//!     [ 2 0 3 ]          [ 3.3 ]
//! ```
//!
//! and prints the three result values, one per line.
//!
//! Run with:
//!   cargo run --example matvec_demo

use gemvec_core::matvec;

fn main() -> Result<(), gemvec_core::MatVecError> {
    #[rustfmt::skip]
    let a = vec![
        1.0, 0.0, 1.0,
        0.0, 2.0, 0.0,
        2.0, 0.0, 3.0,
    ];
    let v = vec![1.1, 2.2, 3.3];

    let b = matvec(&a, &v, 3, 3)?;
    for value in &b {
        println!("{value}");
    }
    Ok(())
}
