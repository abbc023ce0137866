//! Operation contract traits
//!
//! Every backend provides these traits with identical external semantics.
//! Generic code (the math kernels, the dispatch helpers) is written only
//! against them, so it runs unchanged on every target variant.
//!
//! - [`SimdVector`]: construction, arithmetic, comparison, logic, selection,
//!   memory, shuffles and reductions for all lane types
//! - [`SimdInt`]: shifts, high multiplies, rounded averages and bit counts
//!   for integer lanes
//! - [`SimdFloat`]: rounding, classification, reciprocal estimates and int
//!   conversions for float lanes
//! - [`SimdMask`]: per-lane predicates
//!
//! Masks are shared by every vector with the same lane count, so a mask
//! computed from integer lanes can select float lanes of equal count.

use crate::lane::{FloatLane, IntLane, Lane};
use core::fmt::Debug;

/// Per-lane predicate
///
/// Converting a mask to a vector yields all-ones lanes where the mask is true
/// and all-zero lanes elsewhere; converting back recovers the mask.
pub trait SimdMask: Copy + Debug + PartialEq {
    /// Number of lanes
    const LANES: usize;

    /// True in lanes `0..n` (all lanes when `n >= LANES`)
    fn first_n(n: usize) -> Self;

    /// Build from the low `LANES` bits of `bits`; bit i is lane i
    fn from_bitmask(bits: u64) -> Self;

    /// Pack into an integer; bit i is lane i
    fn to_bitmask(self) -> u64;

    /// State of one lane
    ///
    /// # Panics
    ///
    /// Panics if `lane >= LANES`
    fn test(self, lane: usize) -> bool;

    /// All lanes true
    fn all(self) -> bool;

    /// At least one lane true
    fn any(self) -> bool;

    /// No lane true
    fn none(self) -> bool {
        !self.any()
    }

    /// Number of true lanes
    fn count_true(self) -> usize;

    /// Index of the lowest true lane
    fn find_first_true(self) -> Option<usize>;

    /// Lane-wise AND
    fn and(self, rhs: Self) -> Self;

    /// Lane-wise OR
    fn or(self, rhs: Self) -> Self;

    /// Lane-wise XOR
    fn xor(self, rhs: Self) -> Self;

    /// Lane-wise NOT
    fn not(self) -> Self;

    /// `!self & rhs`
    fn and_not(self, rhs: Self) -> Self;
}

/// Core vector contract, implemented for every lane type
///
/// Integer arithmetic wraps modulo 2^bits. Float comparisons with a NaN
/// operand are false in that lane, except [`ne`](SimdVector::ne) which is true.
///
/// # Example
///
/// ```rust
/// use lanekit_math::{Descriptor, SimdVector};
/// use lanekit_math::target::{Avx2, Target};
///
/// let d = <Avx2 as Target>::F32::new();
/// let v = d.iota(1.0).mul(d.set(2.0));
/// assert_eq!(v.sum_of_lanes().get_lane(), 72.0);
/// ```
pub trait SimdVector: Copy + Debug + Sized {
    /// Element type of each lane
    type Lane: Lane;

    /// Predicate type produced by comparisons
    type Mask: SimdMask;

    /// Lane indices for [`table_lookup_lanes`](SimdVector::table_lookup_lanes)
    type Indices: Copy + Debug;

    /// Number of lanes
    const LANES: usize;

    // Construction

    /// All lanes zero
    fn zero() -> Self;

    /// Broadcast a scalar to all lanes
    fn splat(value: Self::Lane) -> Self;

    /// Contents unspecified; callers must write before reading
    fn undefined() -> Self;

    /// Lane i = `start + i` (wrapping for integers)
    fn iota(start: Self::Lane) -> Self;

    // Memory

    /// Load `LANES` values from register-aligned memory
    ///
    /// # Panics
    ///
    /// Panics if `slice` is shorter than `LANES` or not aligned to the register size
    fn load(slice: &[Self::Lane]) -> Self;

    /// Load `LANES` values from any address
    ///
    /// # Panics
    ///
    /// Panics if `slice` is shorter than `LANES`
    fn load_u(slice: &[Self::Lane]) -> Self;

    /// Replicate one 16-byte block (or `LANES` values, if fewer) across the register
    ///
    /// # Panics
    ///
    /// Panics if `slice` is shorter than the block
    fn load_dup128(slice: &[Self::Lane]) -> Self;

    /// Load lanes where `mask` is true, zero elsewhere
    ///
    /// Only the selected lanes are read, so a mask from `first_n(len)` loads
    /// a short tail safely.
    ///
    /// # Panics
    ///
    /// Panics if `slice` does not cover the highest selected lane
    fn masked_load(mask: Self::Mask, slice: &[Self::Lane]) -> Self;

    /// Store to register-aligned memory, lanes in ascending order
    ///
    /// # Panics
    ///
    /// Panics if `slice` is shorter than `LANES` or not aligned to the register size
    fn store(self, slice: &mut [Self::Lane]);

    /// Store to any address, lanes in ascending order
    ///
    /// # Panics
    ///
    /// Panics if `slice` is shorter than `LANES`
    fn store_u(self, slice: &mut [Self::Lane]);

    // Arithmetic

    /// Lane-wise addition
    fn add(self, rhs: Self) -> Self;

    /// Lane-wise subtraction
    fn sub(self, rhs: Self) -> Self;

    /// Lane-wise multiplication
    fn mul(self, rhs: Self) -> Self;

    /// Lane-wise division; integer division by zero yields zero
    fn div(self, rhs: Self) -> Self;

    /// Lane-wise negation
    fn neg(self) -> Self;

    /// Lane-wise absolute value
    fn abs(self) -> Self;

    /// Lane-wise distance `|self - rhs|`
    ///
    /// Integers compute `max - min`, exact for unsigned lanes. For signed
    /// lanes the difference wraps; its bits read as unsigned are exact.
    fn abs_diff(self, rhs: Self) -> Self;

    /// Lane-wise minimum (IEEE minNum for floats)
    fn min(self, rhs: Self) -> Self;

    /// Lane-wise maximum (IEEE maxNum for floats)
    fn max(self, rhs: Self) -> Self;

    /// Addition clamped to the lane range (plain addition for floats)
    fn saturated_add(self, rhs: Self) -> Self;

    /// Subtraction clamped to the lane range (plain subtraction for floats)
    fn saturated_sub(self, rhs: Self) -> Self;

    /// `self * mul + add`
    ///
    /// May or may not be fused depending on the backend; callers must not
    /// rely on a single rounding.
    fn mul_add(self, mul: Self, add: Self) -> Self;

    /// `self * mul - sub`
    fn mul_sub(self, mul: Self, sub: Self) -> Self;

    /// `add - self * mul`
    fn neg_mul_add(self, mul: Self, add: Self) -> Self;

    /// `-(self * mul) - sub`
    fn neg_mul_sub(self, mul: Self, sub: Self) -> Self;

    // Comparison

    /// Lane-wise `==`
    fn eq(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `!=`
    fn ne(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `<`
    fn lt(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `>`
    fn gt(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `<=`
    fn le(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `>=`
    fn ge(self, rhs: Self) -> Self::Mask;

    // Logical, on raw bit patterns

    /// Bitwise AND
    fn and(self, rhs: Self) -> Self;

    /// Bitwise OR
    fn or(self, rhs: Self) -> Self;

    /// Bitwise XOR
    fn xor(self, rhs: Self) -> Self;

    /// `!self & rhs`
    fn and_not(self, rhs: Self) -> Self;

    /// Bitwise NOT
    fn not(self) -> Self;

    // Selection

    /// Per lane: `mask ? yes : no`
    fn if_then_else(mask: Self::Mask, yes: Self, no: Self) -> Self;

    /// Per lane: `mask ? yes : 0`
    fn if_then_else_zero(mask: Self::Mask, yes: Self) -> Self;

    /// Per lane: `mask ? 0 : no`
    fn if_then_zero_else(mask: Self::Mask, no: Self) -> Self;

    /// All-ones lanes where `mask` is true, zero elsewhere
    fn from_mask(mask: Self::Mask) -> Self;

    /// True where a lane's bit pattern is all ones
    fn to_mask(self) -> Self::Mask;

    // Lanes

    /// Lane 0
    fn get_lane(self) -> Self::Lane;

    /// Lane `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= LANES`
    fn extract_lane(self, index: usize) -> Self::Lane;

    /// Copy with lane `index` replaced
    ///
    /// # Panics
    ///
    /// Panics if `index >= LANES`
    fn insert_lane(self, index: usize, value: Self::Lane) -> Self;

    /// Lane `L` broadcast to every lane
    fn broadcast<const L: usize>(self) -> Self;

    /// Lanes in reverse order
    fn reverse(self) -> Self;

    // Shuffles

    /// Build lookup indices from the first `LANES` entries of `indices`
    ///
    /// # Panics
    ///
    /// Panics if `indices` is shorter than `LANES`
    fn set_table_indices(indices: &[usize]) -> Self::Indices;

    /// Lane i = `self[indices[i] mod LANES]`
    fn table_lookup_lanes(self, indices: Self::Indices) -> Self;

    /// Byte shuffle within 16-byte blocks
    ///
    /// Both operands are viewed as bytes. Output byte i is zero if index
    /// byte i has its high bit set, otherwise the byte of `self` selected by
    /// the index's low four bits within the same 16-byte block (modulo the
    /// vector size for vectors shorter than 16 bytes).
    fn table_lookup_bytes(self, indices: Self) -> Self;

    /// Selected lanes packed into an order-preserving prefix
    ///
    /// Lanes past `mask.count_true()` are unspecified.
    fn compress(self, mask: Self::Mask) -> Self;

    /// Write the selected lanes contiguously to `out`, returning their count
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than `mask.count_true()`
    fn compress_store(self, mask: Self::Mask, out: &mut [Self::Lane]) -> usize;

    /// Odd lanes from `self`, even lanes from `even`
    fn odd_even(self, even: Self) -> Self;

    /// Swap each even lane with the odd lane after it
    fn shuffle2301(self) -> Self;

    /// Interleave the lower halves of each 16-byte block of `self` and `rhs`
    ///
    /// Within a block of `B` lanes the result is
    /// `self[0], rhs[0], self[1], rhs[1], ..` up to lane `B/2 - 1` of each
    /// input. A vector shorter than 16 bytes is one block; a one-lane vector
    /// returns `self`.
    fn interleave_lower(self, rhs: Self) -> Self;

    /// Interleave the upper halves of each 16-byte block of `self` and `rhs`
    ///
    /// Same layout as [`interleave_lower`](SimdVector::interleave_lower),
    /// starting from lane `B/2` of each block.
    fn interleave_upper(self, rhs: Self) -> Self;

    /// Upper half from `self`, lower half from `lo`
    ///
    /// The lower half is lanes `0..LANES / 2`, so a one-lane vector returns
    /// `self`.
    fn concat_upper_lower(self, lo: Self) -> Self;

    // Reductions, broadcast to every lane

    /// Sum of all lanes
    fn sum_of_lanes(self) -> Self;

    /// Minimum of all lanes
    fn min_of_lanes(self) -> Self;

    /// Maximum of all lanes
    fn max_of_lanes(self) -> Self;
}

/// Integer lane operations
pub trait SimdInt: SimdVector<Lane: IntLane> {
    /// Shift every lane left by `count` bits (masked to the lane width)
    fn shift_left(self, count: u32) -> Self;

    /// Shift every lane right by `count` bits; arithmetic for signed lanes
    fn shift_right(self, count: u32) -> Self;

    /// Shift lane i left by `counts[i]` bits (masked to the lane width)
    fn shift_left_var(self, counts: Self) -> Self;

    /// Shift lane i right by `counts[i]` bits; arithmetic for signed lanes
    fn shift_right_var(self, counts: Self) -> Self;

    /// Upper half of each lane's double-width product
    fn mul_high(self, rhs: Self) -> Self;

    /// `(self + rhs + 1) >> 1` without intermediate overflow
    fn average_round(self, rhs: Self) -> Self;

    /// Number of set bits in each lane
    fn population_count(self) -> Self;

    /// All-ones where the lane's top bit is set, zero elsewhere
    fn broadcast_sign_bit(self) -> Self;

    /// Shift every lane left by `K` bits
    #[inline(always)]
    fn shift_left_const<const K: u32>(self) -> Self {
        self.shift_left(K)
    }

    /// Shift every lane right by `K` bits
    #[inline(always)]
    fn shift_right_const<const K: u32>(self) -> Self {
        self.shift_right(K)
    }
}

/// Float lane operations
///
/// The associated [`Int`](SimdFloat::Int) vector has the same lane count and
/// lane width, and shares this vector's mask type. It is how kernels reach
/// the exponent field.
pub trait SimdFloat: SimdVector<Lane: FloatLane> {
    /// Same-width signed integer vector
    type Int: SimdInt<Lane = <Self::Lane as FloatLane>::Int, Mask = Self::Mask>;

    /// Lane-wise square root
    fn sqrt(self) -> Self;

    /// Round toward negative infinity
    fn floor(self) -> Self;

    /// Round toward positive infinity
    fn ceil(self) -> Self;

    /// Round to nearest, ties to even
    fn round(self) -> Self;

    /// Round toward zero
    fn trunc(self) -> Self;

    /// Magnitude of `self` with the sign of `sign`
    fn copysign(self, sign: Self) -> Self;

    /// Estimate of `1 / self` with relative error at most 2^-12
    fn approximate_reciprocal(self) -> Self;

    /// Estimate of `1 / sqrt(self)` with relative error at most 2^-12
    fn approximate_reciprocal_sqrt(self) -> Self;

    /// True for NaN lanes
    fn is_nan(self) -> Self::Mask;

    /// True for infinite lanes
    fn is_inf(self) -> Self::Mask;

    /// True for lanes that are neither NaN nor infinite
    fn is_finite(self) -> Self::Mask;

    /// True where the sign bit is set (including `-0.0`)
    fn is_sign_negative(self) -> Self::Mask;

    /// Convert to integers, truncating toward zero and saturating (NaN to 0)
    fn convert_to_int(self) -> Self::Int;

    /// Convert to integers, rounding to nearest even and saturating (NaN to 0)
    fn nearest_int(self) -> Self::Int;

    /// Convert from integers
    fn convert_from_int(value: Self::Int) -> Self;

    /// Reinterpret the lanes' bits as integers
    fn to_int_bits(self) -> Self::Int;

    /// Reinterpret integer lanes as floats
    fn from_int_bits(bits: Self::Int) -> Self;
}
