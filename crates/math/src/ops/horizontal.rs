//! Reductions across lanes
//!
//! The contract methods return the reduction broadcast to every lane; these
//! return it as a single lane value.

use crate::traits::SimdVector;

/// Sum of all lanes (wrapping for integers)
///
/// # Example
///
/// ```rust
/// use lanekit_math::{ops::horizontal_sum, Descriptor, Simd, target::Avx2};
///
/// let d = Simd::<i32, 8, Avx2>::new();
/// assert_eq!(horizontal_sum(d.iota(1)), 36);
/// ```
#[inline(always)]
pub fn horizontal_sum<V: SimdVector>(v: V) -> V::Lane {
    v.sum_of_lanes().get_lane()
}

/// Smallest lane
#[inline(always)]
pub fn horizontal_min<V: SimdVector>(v: V) -> V::Lane {
    v.min_of_lanes().get_lane()
}

/// Largest lane
#[inline(always)]
pub fn horizontal_max<V: SimdVector>(v: V) -> V::Lane {
    v.max_of_lanes().get_lane()
}
