//! Portable reference backend
//!
//! `Vector<T, N>` stores its lanes as a plain `[T; N]` array and implements
//! the full operation contract lane by lane. Every operation is
//! `#[inline(always)]`, so when a kernel is monomorphized inside a function
//! compiled with `#[target_feature]` the loops lower to that target's vector
//! instructions. The same code is the always-present scalar fallback.

use crate::lane::{FloatLane, IntLane, Lane, RawBits};
use crate::traits::{SimdFloat, SimdInt, SimdMask, SimdVector};
use core::array;
use core::mem::size_of;

/// Largest vector the byte shuffle supports (one AVX-512 register)
const MAX_VECTOR_BYTES: usize = 64;

/// Register value of `N` lanes of `T`
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T: Lane, const N: usize>(pub [T; N]);

/// Per-lane predicate for any vector of `N` lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Mask<const N: usize>(pub [bool; N]);

/// Lane indices prepared by [`SimdVector::set_table_indices`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneIndices<const N: usize>([usize; N]);

impl<T: Lane, const N: usize> Vector<T, N> {
    /// Wrap an array; lane i is `lanes[i]`
    #[inline(always)]
    pub const fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    /// Lanes in ascending order
    #[inline(always)]
    pub const fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline(always)]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self(array::from_fn(|i| f(self.0[i])))
    }

    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        Self(array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    #[inline(always)]
    fn zip3(self, b: Self, c: Self, f: impl Fn(T, T, T) -> T) -> Self {
        Self(array::from_fn(|i| f(self.0[i], b.0[i], c.0[i])))
    }

    #[inline(always)]
    fn compare(self, rhs: Self, f: impl Fn(T, T) -> bool) -> Mask<N> {
        Mask(array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    #[inline(always)]
    fn bitwise(self, rhs: Self, f: impl Fn(T::Bits, T::Bits) -> T::Bits) -> Self {
        self.zip(rhs, |a, b| T::from_bits(f(a.to_bits(), b.to_bits())))
    }

    #[inline(always)]
    fn assert_aligned(ptr: *const T) {
        let align = N * size_of::<T>();
        assert!(
            (ptr as usize) % align == 0,
            "aligned load/store of {} x {} requires {}-byte alignment",
            N,
            T::NAME,
            align
        );
    }

    /// Lanes per 16-byte block, capped at `N`
    #[inline(always)]
    const fn block_lanes() -> usize {
        let per_block = 16 / size_of::<T>();
        if per_block < N { per_block } else { N }
    }

    /// Interleave half `half` (0 lower, 1 upper) of every block
    #[inline(always)]
    fn interleave_half(self, rhs: Self, half: usize) -> Self {
        let block = Self::block_lanes();
        Self(array::from_fn(|i| {
            let base = i - i % block;
            let src = base + half * (block / 2) + (i % block) / 2;
            if i % 2 == 0 { self.0[src] } else { rhs.0[src] }
        }))
    }

    /// Little-endian byte image of the lanes
    fn write_bytes(self, out: &mut [u8; MAX_VECTOR_BYTES]) {
        let width = size_of::<T>();
        for (lane, value) in self.0.iter().enumerate() {
            let bits = value.to_bits().to_u64();
            for byte in 0..width {
                out[lane * width + byte] = (bits >> (8 * byte)) as u8;
            }
        }
    }

    fn read_bytes(bytes: &[u8; MAX_VECTOR_BYTES]) -> Self {
        let width = size_of::<T>();
        Self(array::from_fn(|lane| {
            let mut bits = 0u64;
            for byte in 0..width {
                bits |= (bytes[lane * width + byte] as u64) << (8 * byte);
            }
            T::from_bits(T::Bits::from_u64(bits))
        }))
    }
}

impl<T: Lane, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline(always)]
    fn from(lanes: [T; N]) -> Self {
        Self(lanes)
    }
}

impl<T: Lane, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline(always)]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<const N: usize> SimdMask for Mask<N> {
    const LANES: usize = N;

    #[inline(always)]
    fn first_n(n: usize) -> Self {
        Self(array::from_fn(|i| i < n))
    }

    #[inline(always)]
    fn from_bitmask(bits: u64) -> Self {
        Self(array::from_fn(|i| i < 64 && (bits >> i) & 1 == 1))
    }

    #[inline(always)]
    fn to_bitmask(self) -> u64 {
        self.0
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &set)| acc | ((set as u64) << i))
    }

    #[inline(always)]
    fn test(self, lane: usize) -> bool {
        self.0[lane]
    }

    #[inline(always)]
    fn all(self) -> bool {
        self.0.iter().all(|&set| set)
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.0.iter().any(|&set| set)
    }

    #[inline(always)]
    fn count_true(self) -> usize {
        self.0.iter().filter(|&&set| set).count()
    }

    #[inline(always)]
    fn find_first_true(self) -> Option<usize> {
        self.0.iter().position(|&set| set)
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] & rhs.0[i]))
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] | rhs.0[i]))
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] ^ rhs.0[i]))
    }

    #[inline(always)]
    fn not(self) -> Self {
        Self(array::from_fn(|i| !self.0[i]))
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| !self.0[i] & rhs.0[i]))
    }
}

impl<T: Lane, const N: usize> SimdVector for Vector<T, N> {
    type Lane = T;
    type Mask = Mask<N>;
    type Indices = LaneIndices<N>;

    const LANES: usize = N;

    #[inline(always)]
    fn zero() -> Self {
        Self([T::ZERO; N])
    }

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    fn undefined() -> Self {
        Self::zero()
    }

    #[inline(always)]
    fn iota(start: T) -> Self {
        Self(array::from_fn(|i| start.wrapping_add(T::from_index(i))))
    }

    #[inline(always)]
    fn load(slice: &[T]) -> Self {
        Self::assert_aligned(slice.as_ptr());
        Self::load_u(slice)
    }

    #[inline(always)]
    fn load_u(slice: &[T]) -> Self {
        assert!(
            slice.len() >= N,
            "load of {} x {} from a slice of length {}",
            N,
            T::NAME,
            slice.len()
        );
        let mut lanes = [T::ZERO; N];
        lanes.copy_from_slice(&slice[..N]);
        Self(lanes)
    }

    #[inline(always)]
    fn load_dup128(slice: &[T]) -> Self {
        let block = Self::block_lanes();
        assert!(
            slice.len() >= block,
            "load_dup128 needs {} x {}, slice has {}",
            block,
            T::NAME,
            slice.len()
        );
        Self(array::from_fn(|i| slice[i % block]))
    }

    #[inline(always)]
    fn masked_load(mask: Mask<N>, slice: &[T]) -> Self {
        let needed = mask.0.iter().rposition(|&set| set).map_or(0, |last| last + 1);
        assert!(
            slice.len() >= needed,
            "masked load of {} x {} from a slice of length {}",
            needed,
            T::NAME,
            slice.len()
        );
        Self(array::from_fn(|i| if mask.0[i] { slice[i] } else { T::ZERO }))
    }

    #[inline(always)]
    fn store(self, slice: &mut [T]) {
        Self::assert_aligned(slice.as_ptr());
        self.store_u(slice);
    }

    #[inline(always)]
    fn store_u(self, slice: &mut [T]) {
        assert!(
            slice.len() >= N,
            "store of {} x {} to a slice of length {}",
            N,
            T::NAME,
            slice.len()
        );
        slice[..N].copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, T::wrapping_add)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, T::wrapping_sub)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, T::wrapping_mul)
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        self.zip(rhs, T::lane_div)
    }

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(T::wrapping_neg)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(T::lane_abs)
    }

    #[inline(always)]
    fn abs_diff(self, rhs: Self) -> Self {
        self.zip(rhs, T::lane_abs_diff)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        self.zip(rhs, T::lane_min)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        self.zip(rhs, T::lane_max)
    }

    #[inline(always)]
    fn saturated_add(self, rhs: Self) -> Self {
        self.zip(rhs, T::saturating_add)
    }

    #[inline(always)]
    fn saturated_sub(self, rhs: Self) -> Self {
        self.zip(rhs, T::saturating_sub)
    }

    // Two roundings: the product is rounded before the addition.
    #[inline(always)]
    fn mul_add(self, mul: Self, add: Self) -> Self {
        self.zip3(mul, add, |a, b, c| a.wrapping_mul(b).wrapping_add(c))
    }

    #[inline(always)]
    fn mul_sub(self, mul: Self, sub: Self) -> Self {
        self.zip3(mul, sub, |a, b, c| a.wrapping_mul(b).wrapping_sub(c))
    }

    #[inline(always)]
    fn neg_mul_add(self, mul: Self, add: Self) -> Self {
        self.zip3(mul, add, |a, b, c| c.wrapping_sub(a.wrapping_mul(b)))
    }

    #[inline(always)]
    fn neg_mul_sub(self, mul: Self, sub: Self) -> Self {
        self.zip3(mul, sub, |a, b, c| a.wrapping_mul(b).wrapping_neg().wrapping_sub(c))
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a == b)
    }

    #[inline(always)]
    fn ne(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a != b)
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a < b)
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a > b)
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a <= b)
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a >= b)
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self.bitwise(rhs, |a, b| a & b)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self.bitwise(rhs, |a, b| a | b)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        self.bitwise(rhs, |a, b| a ^ b)
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        self.bitwise(rhs, |a, b| !a & b)
    }

    #[inline(always)]
    fn not(self) -> Self {
        self.map(|a| T::from_bits(!a.to_bits()))
    }

    #[inline(always)]
    fn if_then_else(mask: Mask<N>, yes: Self, no: Self) -> Self {
        Self(array::from_fn(|i| if mask.0[i] { yes.0[i] } else { no.0[i] }))
    }

    #[inline(always)]
    fn if_then_else_zero(mask: Mask<N>, yes: Self) -> Self {
        Self::if_then_else(mask, yes, Self::zero())
    }

    #[inline(always)]
    fn if_then_zero_else(mask: Mask<N>, no: Self) -> Self {
        Self::if_then_else(mask, Self::zero(), no)
    }

    #[inline(always)]
    fn from_mask(mask: Mask<N>) -> Self {
        Self(array::from_fn(|i| {
            T::from_bits(if mask.0[i] {
                T::Bits::ONES
            } else {
                T::Bits::ZERO
            })
        }))
    }

    #[inline(always)]
    fn to_mask(self) -> Mask<N> {
        Mask(array::from_fn(|i| self.0[i].to_bits() == T::Bits::ONES))
    }

    #[inline(always)]
    fn get_lane(self) -> T {
        self.0[0]
    }

    #[inline(always)]
    fn extract_lane(self, index: usize) -> T {
        self.0[index]
    }

    #[inline(always)]
    fn insert_lane(mut self, index: usize, value: T) -> Self {
        self.0[index] = value;
        self
    }

    #[inline(always)]
    fn broadcast<const L: usize>(self) -> Self {
        const { assert!(L < N, "broadcast lane out of range") };
        Self::splat(self.0[L])
    }

    #[inline(always)]
    fn reverse(self) -> Self {
        Self(array::from_fn(|i| self.0[N - 1 - i]))
    }

    #[inline(always)]
    fn set_table_indices(indices: &[usize]) -> LaneIndices<N> {
        assert!(
            indices.len() >= N,
            "{} table indices needed, {} given",
            N,
            indices.len()
        );
        LaneIndices(array::from_fn(|i| indices[i]))
    }

    #[inline(always)]
    fn table_lookup_lanes(self, indices: LaneIndices<N>) -> Self {
        Self(array::from_fn(|i| self.0[indices.0[i] % N]))
    }

    fn table_lookup_bytes(self, indices: Self) -> Self {
        let len = N * size_of::<T>();
        assert!(len <= MAX_VECTOR_BYTES, "byte shuffle of a {}-byte vector", len);

        let mut table = [0u8; MAX_VECTOR_BYTES];
        let mut index = [0u8; MAX_VECTOR_BYTES];
        let mut out = [0u8; MAX_VECTOR_BYTES];
        self.write_bytes(&mut table);
        indices.write_bytes(&mut index);

        for (pos, byte) in out.iter_mut().enumerate().take(len) {
            let idx = index[pos];
            if idx & 0x80 == 0 {
                let block = pos & !15;
                *byte = table[(block + (idx & 15) as usize) % len];
            }
        }
        Self::read_bytes(&out)
    }

    #[inline(always)]
    fn compress(self, mask: Mask<N>) -> Self {
        let mut lanes = [T::ZERO; N];
        let mut count = 0;
        for i in 0..N {
            if mask.0[i] {
                lanes[count] = self.0[i];
                count += 1;
            }
        }
        Self(lanes)
    }

    #[inline(always)]
    fn compress_store(self, mask: Mask<N>, out: &mut [T]) -> usize {
        let count = mask.count_true();
        assert!(
            out.len() >= count,
            "compress_store of {} lanes into a slice of length {}",
            count,
            out.len()
        );
        self.compress(mask).0[..count]
            .iter()
            .zip(out.iter_mut())
            .for_each(|(&v, o)| *o = v);
        count
    }

    #[inline(always)]
    fn odd_even(self, even: Self) -> Self {
        Self(array::from_fn(|i| if i % 2 == 1 { self.0[i] } else { even.0[i] }))
    }

    #[inline(always)]
    fn shuffle2301(self) -> Self {
        Self(array::from_fn(|i| self.0[if i ^ 1 < N { i ^ 1 } else { i }]))
    }

    #[inline(always)]
    fn interleave_lower(self, rhs: Self) -> Self {
        self.interleave_half(rhs, 0)
    }

    #[inline(always)]
    fn interleave_upper(self, rhs: Self) -> Self {
        self.interleave_half(rhs, 1)
    }

    #[inline(always)]
    fn concat_upper_lower(self, lo: Self) -> Self {
        Self(array::from_fn(|i| if i < N / 2 { lo.0[i] } else { self.0[i] }))
    }

    #[inline(always)]
    fn sum_of_lanes(self) -> Self {
        Self::splat(self.0.iter().fold(T::ZERO, |acc, &v| acc.wrapping_add(v)))
    }

    #[inline(always)]
    fn min_of_lanes(self) -> Self {
        Self::splat(self.0.iter().fold(self.0[0], |acc, &v| acc.lane_min(v)))
    }

    #[inline(always)]
    fn max_of_lanes(self) -> Self {
        Self::splat(self.0.iter().fold(self.0[0], |acc, &v| acc.lane_max(v)))
    }
}

impl<T: IntLane, const N: usize> SimdInt for Vector<T, N> {
    #[inline(always)]
    fn shift_left(self, count: u32) -> Self {
        self.map(|v| v.shift_left(count))
    }

    #[inline(always)]
    fn shift_right(self, count: u32) -> Self {
        self.map(|v| v.shift_right(count))
    }

    #[inline(always)]
    fn shift_left_var(self, counts: Self) -> Self {
        self.zip(counts, |v, c| v.shift_left(c.to_bits().to_u64() as u32))
    }

    #[inline(always)]
    fn shift_right_var(self, counts: Self) -> Self {
        self.zip(counts, |v, c| v.shift_right(c.to_bits().to_u64() as u32))
    }

    #[inline(always)]
    fn mul_high(self, rhs: Self) -> Self {
        self.zip(rhs, T::mul_high)
    }

    // a + b == 2 * (a | b) - (a ^ b), so no lane ever overflows
    #[inline(always)]
    fn average_round(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| {
            let or = T::from_bits(a.to_bits() | b.to_bits());
            let xor = T::from_bits(a.to_bits() ^ b.to_bits());
            or.wrapping_sub(xor.shift_right(1))
        })
    }

    #[inline(always)]
    fn population_count(self) -> Self {
        self.map(|v| T::from_i64(v.to_bits().to_u64().count_ones() as i64))
    }

    #[inline(always)]
    fn broadcast_sign_bit(self) -> Self {
        let top = T::Bits::BITS - 1;
        self.map(|v| {
            T::from_bits(if (v.to_bits().to_u64() >> top) & 1 == 1 {
                T::Bits::ONES
            } else {
                T::Bits::ZERO
            })
        })
    }
}

impl<T: FloatLane, const N: usize> SimdFloat for Vector<T, N> {
    type Int = Vector<T::Int, N>;

    #[inline(always)]
    fn sqrt(self) -> Self {
        self.map(T::lane_sqrt)
    }

    #[inline(always)]
    fn floor(self) -> Self {
        self.map(T::lane_floor)
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        self.map(T::lane_ceil)
    }

    #[inline(always)]
    fn round(self) -> Self {
        self.map(T::lane_round)
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        self.map(T::lane_trunc)
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        self.zip(sign, T::lane_copysign)
    }

    #[inline(always)]
    fn approximate_reciprocal(self) -> Self {
        self.map(|v| T::ONE.lane_div(v))
    }

    #[inline(always)]
    fn approximate_reciprocal_sqrt(self) -> Self {
        self.map(|v| T::ONE.lane_div(v.lane_sqrt()))
    }

    #[inline(always)]
    fn is_nan(self) -> Mask<N> {
        Mask(array::from_fn(|i| self.0[i].lane_is_nan()))
    }

    #[inline(always)]
    fn is_inf(self) -> Mask<N> {
        Mask(array::from_fn(|i| self.0[i].lane_is_infinite()))
    }

    #[inline(always)]
    fn is_finite(self) -> Mask<N> {
        Mask(array::from_fn(|i| {
            !self.0[i].lane_is_nan() && !self.0[i].lane_is_infinite()
        }))
    }

    #[inline(always)]
    fn is_sign_negative(self) -> Mask<N> {
        Mask(array::from_fn(|i| self.0[i].lane_is_sign_negative()))
    }

    #[inline(always)]
    fn convert_to_int(self) -> Vector<T::Int, N> {
        Vector(array::from_fn(|i| self.0[i].to_int_trunc()))
    }

    #[inline(always)]
    fn nearest_int(self) -> Vector<T::Int, N> {
        Vector(array::from_fn(|i| self.0[i].to_int_nearest()))
    }

    #[inline(always)]
    fn convert_from_int(value: Vector<T::Int, N>) -> Self {
        Self(array::from_fn(|i| T::from_int(value.0[i])))
    }

    #[inline(always)]
    fn to_int_bits(self) -> Vector<T::Int, N> {
        Vector(array::from_fn(|i| <T::Int as Lane>::from_bits(self.0[i].to_bits())))
    }

    #[inline(always)]
    fn from_int_bits(bits: Vector<T::Int, N>) -> Self {
        Self(array::from_fn(|i| T::from_bits(bits.0[i].to_bits())))
    }
}
