//! Free-function forms of vector operations
//!
//! Handy as function pointers and in generic code that wants `add(a, b)`
//! rather than `a.add(b)`. Each forwards to the contract method of the same
//! meaning.
//!
//! - [`arithmetic`]: lane-wise add, sub, mul, div, neg, abs, min, max
//! - [`fma`]: the multiply-add family
//! - [`horizontal`]: reductions to a single lane value

pub mod arithmetic;
pub mod fma;
pub mod horizontal;

pub use arithmetic::{abs, add, div, max, min, mul, neg, saturated_add, saturated_sub, sub};
pub use fma::{mul_add, mul_sub, neg_mul_add, neg_mul_sub};
pub use horizontal::{horizontal_max, horizontal_min, horizontal_sum};
