//! Lane-wise arithmetic

use crate::traits::SimdVector;

/// `a + b` per lane; integers wrap
///
/// # Example
///
/// ```rust
/// use lanekit_math::{ops::add, Descriptor, Simd, SimdVector, target::Sse4};
///
/// let d = Simd::<u8, 16, Sse4>::new();
/// assert_eq!(add(d.set(250), d.set(10)).get_lane(), 4);
/// ```
#[inline(always)]
pub fn add<V: SimdVector>(a: V, b: V) -> V {
    a.add(b)
}

/// `a - b` per lane; integers wrap
#[inline(always)]
pub fn sub<V: SimdVector>(a: V, b: V) -> V {
    a.sub(b)
}

/// `a * b` per lane; integers keep the low half
#[inline(always)]
pub fn mul<V: SimdVector>(a: V, b: V) -> V {
    a.mul(b)
}

/// `a / b` per lane; integer division by zero gives zero
#[inline(always)]
pub fn div<V: SimdVector>(a: V, b: V) -> V {
    a.div(b)
}

/// Negation per lane
#[inline(always)]
pub fn neg<V: SimdVector>(a: V) -> V {
    a.neg()
}

/// Absolute value per lane
#[inline(always)]
pub fn abs<V: SimdVector>(a: V) -> V {
    a.abs()
}

/// Lane-wise minimum; a NaN operand yields the other operand
#[inline(always)]
pub fn min<V: SimdVector>(a: V, b: V) -> V {
    a.min(b)
}

/// Lane-wise maximum; a NaN operand yields the other operand
#[inline(always)]
pub fn max<V: SimdVector>(a: V, b: V) -> V {
    a.max(b)
}

/// `a + b` clamped to the lane range
///
/// # Example
///
/// ```rust
/// use lanekit_math::{ops::saturated_add, Descriptor, Simd, SimdVector, target::Avx2};
///
/// let d = Simd::<i16, 16, Avx2>::new();
/// assert_eq!(saturated_add(d.set(32_000), d.set(1_000)).get_lane(), i16::MAX);
/// ```
#[inline(always)]
pub fn saturated_add<V: SimdVector>(a: V, b: V) -> V {
    a.saturated_add(b)
}

/// `a - b` clamped to the lane range
#[inline(always)]
pub fn saturated_sub<V: SimdVector>(a: V, b: V) -> V {
    a.saturated_sub(b)
}
