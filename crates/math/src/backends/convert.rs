//! Lane type conversions
//!
//! - [`PromoteFrom`]: widening, exact
//! - [`DemoteFrom`]: narrowing, clamping out-of-range values to the
//!   destination's `[MIN, MAX]` instead of wrapping. Float sources clamp
//!   infinities too; NaN stays NaN (float destinations) or becomes 0 (integer
//!   destinations).
//! - [`ConvertFrom`]: same-width int/float conversion. Float to int truncates
//!   toward zero and saturates; int to float rounds to nearest.
//!
//! The vector-level entry points are inherent methods on [`Vector`] and on
//! the descriptor type.

use super::portable::Vector;
use crate::bits::bit_cast;
use crate::lane::Lane;
use core::array;

/// Exact widening from `S`
pub trait PromoteFrom<S: Lane>: Lane {
    /// Widen one lane
    fn promote_from(value: S) -> Self;
}

/// Clamping narrowing from `S`
pub trait DemoteFrom<S: Lane>: Lane {
    /// Narrow one lane, saturating at the destination range
    fn demote_from(value: S) -> Self;
}

/// Same-width conversion between integer and float lanes
pub trait ConvertFrom<S: Lane>: Lane {
    /// Convert one lane
    fn convert_from(value: S) -> Self;
}

macro_rules! promote {
    ($($src:ty => [$($dst:ty),*]);* $(;)?) => {$($(
        impl PromoteFrom<$src> for $dst {
            #[inline(always)]
            fn promote_from(value: $src) -> Self {
                value as $dst
            }
        }
    )*)*};
}

promote! {
    u8 => [u16, u32, u64, i16, i32, i64, f32, f64];
    u16 => [u32, u64, i32, i64, f32, f64];
    u32 => [u64, i64, f64];
    i8 => [i16, i32, i64, f32, f64];
    i16 => [i32, i64, f32, f64];
    i32 => [i64, f64];
    f32 => [f64];
}

macro_rules! demote_int {
    ($($src:ty => [$($dst:ty),*]);* $(;)?) => {$($(
        impl DemoteFrom<$src> for $dst {
            #[inline(always)]
            fn demote_from(value: $src) -> Self {
                (value as i128).clamp(<$dst>::MIN as i128, <$dst>::MAX as i128) as $dst
            }
        }
    )*)*};
}

demote_int! {
    u16 => [u8, i8];
    u32 => [u8, u16, i8, i16];
    u64 => [u32, i32];
    i16 => [u8, i8];
    i32 => [u8, u16, i8, i16];
    i64 => [u32, i32];
}

macro_rules! demote_float_to_int {
    ($($src:ty => [$($dst:ty),*]);* $(;)?) => {$($(
        impl DemoteFrom<$src> for $dst {
            // `as` truncates toward zero, saturates and maps NaN to 0
            #[inline(always)]
            fn demote_from(value: $src) -> Self {
                value as $dst
            }
        }
    )*)*};
}

demote_float_to_int! {
    f32 => [i16, u16, i8, u8];
    f64 => [i32, u32];
}

impl DemoteFrom<f64> for f32 {
    #[inline(always)]
    fn demote_from(value: f64) -> Self {
        if value.is_nan() {
            f32::NAN
        } else {
            value.clamp(f32::MIN as f64, f32::MAX as f64) as f32
        }
    }
}

macro_rules! convert {
    ($($src:ty => $dst:ty),* $(,)?) => {$(
        impl ConvertFrom<$src> for $dst {
            #[inline(always)]
            fn convert_from(value: $src) -> Self {
                value as $dst
            }
        }
    )*};
}

convert! {
    i32 => f32,
    u32 => f32,
    i64 => f64,
    u64 => f64,
    f32 => i32,
    f32 => u32,
    f64 => i64,
    f64 => u64,
}

impl<T: Lane, const N: usize> Vector<T, N> {
    /// Widen every lane to `U`
    #[inline(always)]
    pub fn promote_to<U: PromoteFrom<T>>(self) -> Vector<U, N> {
        Vector(array::from_fn(|i| U::promote_from(self.0[i])))
    }

    /// Narrow every lane to `U`, clamping to `U`'s range
    #[inline(always)]
    pub fn demote_to<U: DemoteFrom<T>>(self) -> Vector<U, N> {
        Vector(array::from_fn(|i| U::demote_from(self.0[i])))
    }

    /// Convert every lane between int and float of the same width
    #[inline(always)]
    pub fn convert_to<U: ConvertFrom<T>>(self) -> Vector<U, N> {
        Vector(array::from_fn(|i| U::convert_from(self.0[i])))
    }

    /// Reinterpret every lane's bits as `U` (same size, checked at compile time)
    #[inline(always)]
    pub fn bit_cast<U: Lane>(self) -> Vector<U, N> {
        Vector(array::from_fn(|i| bit_cast::<T, U>(self.0[i])))
    }
}
