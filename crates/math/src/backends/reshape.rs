//! Operations whose output has a different lane count or lane type
//!
//! The output shape is an explicit const parameter, checked at compile time
//! against the input:
//!
//! | Operation      | Input            | Output               |
//! |----------------|------------------|----------------------|
//! | `lower_half`   | `N` x `T`        | `N/2` x `T`          |
//! | `upper_half`   | `N` x `T`        | `N/2` x `T`          |
//! | `combine`      | 2 x `N` x `T`    | `2N` x `T`           |
//! | `zip_lower`    | 2 x `N` x `T`    | `N/2` x double-width |
//! | `mul_even`     | 2 x `N` x `T`    | `N/2` x double-width |
//!
//! Gathers keep the shape and read lanes from a slice at per-lane indices
//! or byte offsets.

use super::convert::PromoteFrom;
use super::portable::Vector;
use crate::lane::{IntLane, Lane, RawBits};
use crate::traits::SimdVector;
use core::array;
use core::mem::size_of;

/// Non-negative lane value as a slice position; negative values map past any slice
#[inline(always)]
fn position<I: IntLane>(value: I) -> usize {
    if value < I::ZERO {
        return usize::MAX;
    }
    usize::try_from(value.to_bits().to_u64()).unwrap_or(usize::MAX)
}

impl<T: Lane, const N: usize> Vector<T, N> {
    /// Lanes `0..H`, where `H = N / 2`
    #[inline(always)]
    pub fn lower_half<const H: usize>(self) -> Vector<T, H> {
        const { assert!(2 * H == N, "lower_half must produce N / 2 lanes") };
        Vector(array::from_fn(|i| self.0[i]))
    }

    /// Lanes `H..N`, where `H = N / 2`
    #[inline(always)]
    pub fn upper_half<const H: usize>(self) -> Vector<T, H> {
        const { assert!(2 * H == N, "upper_half must produce N / 2 lanes") };
        Vector(array::from_fn(|i| self.0[H + i]))
    }

    /// `lo` in the lower `N` lanes, `self` in the upper `N`
    #[inline(always)]
    pub fn combine<const W: usize>(self, lo: Self) -> Vector<T, W> {
        const { assert!(W == 2 * N, "combine must produce 2 * N lanes") };
        Vector(array::from_fn(|i| if i < N { lo.0[i] } else { self.0[i - N] }))
    }

    /// [`interleave_lower`](SimdVector::interleave_lower) with each pair of
    /// lanes read as one lane of twice the width, `self` in the low half
    ///
    /// For `u8` inputs lane i of the result is `self[i] | rhs[i] << 8`
    /// (within the first 16-byte block).
    #[inline(always)]
    pub fn zip_lower<W: Lane, const M: usize>(self, rhs: Self) -> Vector<W, M> {
        const {
            assert!(size_of::<W>() == 2 * size_of::<T>(), "zip_lower needs a double-width lane");
            assert!(2 * M == N, "zip_lower must produce N / 2 lanes");
        };
        let pairs = self.interleave_lower(rhs).0;
        let shift = 8 * size_of::<T>();
        Vector(array::from_fn(|i| {
            let lo = pairs[2 * i].to_bits().to_u64();
            let hi = pairs[2 * i + 1].to_bits().to_u64();
            W::from_bits(W::Bits::from_u64(lo | (hi << shift)))
        }))
    }

    /// Exact double-width products of the even lanes
    ///
    /// Lane i of the result is `self[2i] * rhs[2i]`. A one-lane input gives
    /// a one-lane product.
    #[inline(always)]
    pub fn mul_even<W: PromoteFrom<T>, const M: usize>(self, rhs: Self) -> Vector<W, M> {
        const {
            assert!(size_of::<W>() == 2 * size_of::<T>(), "mul_even needs a double-width lane");
            assert!(M == (N + 1) / 2, "mul_even must produce one lane per even input lane");
        };
        Vector(array::from_fn(|i| {
            W::promote_from(self.0[2 * i]).wrapping_mul(W::promote_from(rhs.0[2 * i]))
        }))
    }

    /// Lane i = `base[indices[i]]`
    ///
    /// # Panics
    ///
    /// Panics if an index is negative or not below `base.len()`
    #[inline(always)]
    pub fn gather_index<I: IntLane>(base: &[T], indices: Vector<I, N>) -> Self {
        Self(array::from_fn(|i| {
            let index = position(indices.0[i]);
            assert!(
                index < base.len(),
                "gather index {:?} out of range for a slice of length {}",
                indices.0[i],
                base.len()
            );
            base[index]
        }))
    }

    /// Lane i = the `T` whose little-endian bytes start `offsets[i]` bytes
    /// into the byte image of `base`
    ///
    /// Offsets need not be multiples of the lane size.
    ///
    /// # Panics
    ///
    /// Panics if a lane would read past the end of `base`
    #[inline(always)]
    pub fn gather_offset<I: IntLane>(base: &[T], offsets: Vector<I, N>) -> Self {
        let width = size_of::<T>();
        let len = base.len() * width;
        Self(array::from_fn(|i| {
            let start = position(offsets.0[i]);
            assert!(
                start <= len && len - start >= width,
                "gather offset {:?} reads past a {}-byte slice",
                offsets.0[i],
                len
            );
            let mut bits = 0u64;
            for byte in 0..width {
                let at = start + byte;
                let lane = base[at / width].to_bits().to_u64();
                bits |= ((lane >> (8 * (at % width))) & 0xff) << (8 * byte);
            }
            T::from_bits(T::Bits::from_u64(bits))
        }))
    }
}
