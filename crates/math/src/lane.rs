//! Lane element types
//!
//! Every vector holds `N` lanes of one of the ten native element types:
//! `u8 u16 u32 u64 i8 i16 i32 i64 f32 f64`. The traits here give generic code
//! the per-lane primitives the portable backend is built from.
//!
//! - [`Lane`]: common surface (constants, wrapping arithmetic, bit patterns)
//! - [`IntLane`]: shifts and integer-only helpers
//! - [`FloatLane`]: IEEE layout constants, rounding and int conversions
//!
//! All three traits are sealed; the set of element types is closed.

use crate::math::consts::KernelConstants;
use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned storage used to reinterpret a lane's bit pattern
///
/// Implemented for `u8`, `u16`, `u32` and `u64`.
pub trait RawBits:
    Copy
    + Eq
    + Debug
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + sealed::Sealed
{
    /// All bits clear
    const ZERO: Self;
    /// All bits set; the "true" pattern of a mask lane
    const ONES: Self;
    /// Width in bits
    const BITS: u32;

    /// Zero-extend to 64 bits
    fn to_u64(self) -> u64;
    /// Truncate a 64-bit value to this width
    fn from_u64(value: u64) -> Self;
}

macro_rules! impl_raw_bits {
    ($($t:ty),*) => {$(
        impl RawBits for $t {
            const ZERO: Self = 0;
            const ONES: Self = <$t>::MAX;
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn to_u64(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn from_u64(value: u64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_raw_bits!(u8, u16, u32, u64);

/// A scalar element type that can occupy a vector lane
///
/// Integer arithmetic wraps modulo 2^bits; `saturating_*` clamp instead.
/// Float arithmetic is plain IEEE arithmetic.
pub trait Lane:
    Copy + Default + PartialEq + PartialOrd + Debug + Send + Sync + 'static + sealed::Sealed
{
    /// Same-size unsigned bit pattern
    type Bits: RawBits;

    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;
    /// Smallest finite value (most negative for floats)
    const MIN: Self;
    /// Largest finite value
    const MAX: Self;
    /// Short type name used in diagnostics
    const NAME: &'static str;

    /// Reinterpret as raw bits
    fn to_bits(self) -> Self::Bits;
    /// Reinterpret raw bits as a lane value
    fn from_bits(bits: Self::Bits) -> Self;

    /// `index as Self`; used by `Iota`
    fn from_index(index: usize) -> Self;

    /// Addition, wrapping for integers
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Subtraction, wrapping for integers
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Multiplication, wrapping for integers
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Division. Integer division by zero yields zero and `MIN / -1` wraps.
    fn lane_div(self, rhs: Self) -> Self;
    /// Negation, wrapping for integers
    fn wrapping_neg(self) -> Self;
    /// Absolute value; `MIN.abs()` wraps to `MIN` for signed integers
    fn lane_abs(self) -> Self;
    /// `|self - rhs|`; integers take `max - min`, wrapping for signed lanes
    fn lane_abs_diff(self, rhs: Self) -> Self;
    /// IEEE minNum: a NaN operand yields the other operand
    fn lane_min(self, rhs: Self) -> Self;
    /// IEEE maxNum: a NaN operand yields the other operand
    fn lane_max(self, rhs: Self) -> Self;
    /// Clamping addition (plain addition for floats)
    fn saturating_add(self, rhs: Self) -> Self;
    /// Clamping subtraction (plain subtraction for floats)
    fn saturating_sub(self, rhs: Self) -> Self;
}

/// Integer lane types
pub trait IntLane: Lane + Eq + Ord {
    /// True for `i8..i64`
    const SIGNED: bool;

    /// Shift left by `count`, masked to the lane width
    fn shift_left(self, count: u32) -> Self;
    /// Shift right by `count`, masked to the lane width. Arithmetic for signed lanes.
    fn shift_right(self, count: u32) -> Self;
    /// `value as Self`, truncating
    fn from_i64(value: i64) -> Self;
    /// Upper half of the double-width product
    fn mul_high(self, rhs: Self) -> Self;
}

/// Floating-point lane types (`f32`, `f64`)
///
/// The math kernels' coefficient tables come in through [`KernelConstants`].
pub trait FloatLane: Lane + KernelConstants {
    /// Same-width signed integer
    type Int: IntLane<Bits = Self::Bits>;

    /// Explicit mantissa bits (23 / 52)
    const MANTISSA_BITS: u32;
    /// Exponent bias (127 / 1023)
    const EXPONENT_BIAS: i64;
    /// Smallest positive normal value
    const MIN_POSITIVE: Self;
    /// Positive infinity
    const INFINITY: Self;
    /// Negative infinity
    const NEG_INFINITY: Self;
    /// Quiet NaN
    const NAN: Self;

    /// Round a double constant into this type
    fn from_f64(value: f64) -> Self;
    /// Widen to double
    fn to_f64(self) -> f64;

    /// Square root
    fn lane_sqrt(self) -> Self;
    /// Round toward negative infinity
    fn lane_floor(self) -> Self;
    /// Round toward positive infinity
    fn lane_ceil(self) -> Self;
    /// Round to nearest, ties to even
    fn lane_round(self) -> Self;
    /// Round toward zero
    fn lane_trunc(self) -> Self;
    /// Magnitude of `self` with the sign of `sign`
    fn lane_copysign(self, sign: Self) -> Self;
    /// NaN test
    fn lane_is_nan(self) -> bool;
    /// Infinity test (either sign)
    fn lane_is_infinite(self) -> bool;
    /// Sign bit test, true for `-0.0` and negative NaNs
    fn lane_is_sign_negative(self) -> bool;

    /// Truncate toward zero, saturating; NaN converts to zero
    fn to_int_trunc(self) -> Self::Int;
    /// Round to nearest even, saturating; NaN converts to zero
    fn to_int_nearest(self) -> Self::Int;
    /// Nearest representable float
    fn from_int(value: Self::Int) -> Self;
}

macro_rules! impl_int_lane {
    ($($t:ty => $bits:ty, $wide:ty, $signed:expr);* $(;)?) => {$(
        impl sealed::Sealed for $t {}

        impl Lane for $t {
            type Bits = $bits;

            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const NAME: &'static str = stringify!($t);

            #[inline(always)]
            fn to_bits(self) -> $bits {
                self as $bits
            }

            #[inline(always)]
            fn from_bits(bits: $bits) -> Self {
                bits as $t
            }

            #[inline(always)]
            fn from_index(index: usize) -> Self {
                index as $t
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                if rhs == 0 {
                    0
                } else {
                    <$t>::wrapping_div(self, rhs)
                }
            }

            #[inline(always)]
            fn wrapping_neg(self) -> Self {
                <$t>::wrapping_neg(self)
            }

            #[inline(always)]
            #[allow(unused_comparisons)]
            fn lane_abs(self) -> Self {
                if self < 0 { <$t>::wrapping_neg(self) } else { self }
            }

            #[inline(always)]
            fn lane_abs_diff(self, rhs: Self) -> Self {
                Ord::max(self, rhs).wrapping_sub(Ord::min(self, rhs))
            }

            #[inline(always)]
            fn lane_min(self, rhs: Self) -> Self {
                Ord::min(self, rhs)
            }

            #[inline(always)]
            fn lane_max(self, rhs: Self) -> Self {
                Ord::max(self, rhs)
            }

            #[inline(always)]
            fn saturating_add(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline(always)]
            fn saturating_sub(self, rhs: Self) -> Self {
                <$t>::saturating_sub(self, rhs)
            }
        }

        impl IntLane for $t {
            const SIGNED: bool = $signed;

            #[inline(always)]
            fn shift_left(self, count: u32) -> Self {
                <$t>::wrapping_shl(self, count)
            }

            #[inline(always)]
            fn shift_right(self, count: u32) -> Self {
                <$t>::wrapping_shr(self, count)
            }

            #[inline(always)]
            fn from_i64(value: i64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn mul_high(self, rhs: Self) -> Self {
                ((self as $wide * rhs as $wide) >> <$t>::BITS) as $t
            }
        }
    )*};
}

impl_int_lane! {
    u8 => u8, u16, false;
    u16 => u16, u32, false;
    u32 => u32, u64, false;
    u64 => u64, u128, false;
    i8 => u8, i16, true;
    i16 => u16, i32, true;
    i32 => u32, i64, true;
    i64 => u64, i128, true;
}

macro_rules! impl_float_lane {
    (
        $t:ty, bits = $bits:ty, int = $int:ty, mantissa = $mant:expr, bias = $bias:expr,
        sqrt = $sqrt:path, floor = $floor:path, ceil = $ceil:path, rint = $rint:path,
        trunc = $trunc:path, copysign = $copysign:path, fmin = $fmin:path, fmax = $fmax:path
    ) => {
        impl sealed::Sealed for $t {}

        impl Lane for $t {
            type Bits = $bits;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const NAME: &'static str = stringify!($t);

            #[inline(always)]
            fn to_bits(self) -> $bits {
                <$t>::to_bits(self)
            }

            #[inline(always)]
            fn from_bits(bits: $bits) -> Self {
                <$t>::from_bits(bits)
            }

            #[inline(always)]
            fn from_index(index: usize) -> Self {
                index as $t
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline(always)]
            fn wrapping_neg(self) -> Self {
                -self
            }

            #[inline(always)]
            fn lane_abs(self) -> Self {
                <$t>::from_bits(<$t>::to_bits(self) & !(1 << (<$bits>::BITS - 1)))
            }

            #[inline(always)]
            fn lane_abs_diff(self, rhs: Self) -> Self {
                (self - rhs).lane_abs()
            }

            #[inline(always)]
            fn lane_min(self, rhs: Self) -> Self {
                $fmin(self, rhs)
            }

            #[inline(always)]
            fn lane_max(self, rhs: Self) -> Self {
                $fmax(self, rhs)
            }

            #[inline(always)]
            fn saturating_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn saturating_sub(self, rhs: Self) -> Self {
                self - rhs
            }
        }

        impl FloatLane for $t {
            type Int = $int;

            const MANTISSA_BITS: u32 = $mant;
            const EXPONENT_BIAS: i64 = $bias;
            const MIN_POSITIVE: Self = <$t>::MIN_POSITIVE;
            const INFINITY: Self = <$t>::INFINITY;
            const NEG_INFINITY: Self = <$t>::NEG_INFINITY;
            const NAN: Self = <$t>::NAN;

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn lane_sqrt(self) -> Self {
                $sqrt(self)
            }

            #[inline(always)]
            fn lane_floor(self) -> Self {
                $floor(self)
            }

            #[inline(always)]
            fn lane_ceil(self) -> Self {
                $ceil(self)
            }

            #[inline(always)]
            fn lane_round(self) -> Self {
                $rint(self)
            }

            #[inline(always)]
            fn lane_trunc(self) -> Self {
                $trunc(self)
            }

            #[inline(always)]
            fn lane_copysign(self, sign: Self) -> Self {
                $copysign(self, sign)
            }

            #[inline(always)]
            fn lane_is_nan(self) -> bool {
                self.is_nan()
            }

            #[inline(always)]
            fn lane_is_infinite(self) -> bool {
                self.is_infinite()
            }

            #[inline(always)]
            fn lane_is_sign_negative(self) -> bool {
                self.is_sign_negative()
            }

            #[inline(always)]
            fn to_int_trunc(self) -> $int {
                self as $int
            }

            #[inline(always)]
            fn to_int_nearest(self) -> $int {
                $rint(self) as $int
            }

            #[inline(always)]
            fn from_int(value: $int) -> Self {
                value as $t
            }
        }
    };
}

impl_float_lane!(
    f32, bits = u32, int = i32, mantissa = 23, bias = 127,
    sqrt = libm::sqrtf, floor = libm::floorf, ceil = libm::ceilf, rint = libm::rintf,
    trunc = libm::truncf, copysign = libm::copysignf, fmin = libm::fminf, fmax = libm::fmaxf
);

impl_float_lane!(
    f64, bits = u64, int = i64, mantissa = 52, bias = 1023,
    sqrt = libm::sqrt, floor = libm::floor, ceil = libm::ceil, rint = libm::rint,
    trunc = libm::trunc, copysign = libm::copysign, fmin = libm::fmin, fmax = libm::fmax
);
