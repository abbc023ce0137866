//! Multiply-add family
//!
//! The portable backend rounds the product and the sum separately; kernel
//! error bounds hold either way.

use crate::traits::SimdVector;

/// `a * b + c`
///
/// # Example
///
/// ```rust
/// use lanekit_math::{ops::mul_add, Descriptor, Simd, SimdVector, target::Neon};
///
/// let d = Simd::<f32, 4, Neon>::new();
/// let y = mul_add(d.set(2.0), d.set(3.0), d.set(1.0));
/// assert_eq!(y.to_array(), [7.0; 4]);
/// ```
#[inline(always)]
pub fn mul_add<V: SimdVector>(a: V, b: V, c: V) -> V {
    a.mul_add(b, c)
}

/// `a * b - c`
#[inline(always)]
pub fn mul_sub<V: SimdVector>(a: V, b: V, c: V) -> V {
    a.mul_sub(b, c)
}

/// `c - a * b`
#[inline(always)]
pub fn neg_mul_add<V: SimdVector>(a: V, b: V, c: V) -> V {
    a.neg_mul_add(b, c)
}

/// `-(a * b) - c`
#[inline(always)]
pub fn neg_mul_sub<V: SimdVector>(a: V, b: V, c: V) -> V {
    a.neg_mul_sub(b, c)
}
