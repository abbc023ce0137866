//! Size-checked bit reinterpretation between lane types
//!
//! Reinterpreting `f32` as `u32` (or `i64` as `f64`, ...) goes through the
//! lanes' raw bit patterns, never through pointer casts. A size mismatch is
//! rejected when the call is monomorphized.

use crate::lane::{Lane, RawBits};
use core::mem::size_of;

/// Reinterpret the bits of one lane value as another lane type of the same size
///
/// # Example
///
/// ```rust
/// use lanekit_math::bits::bit_cast;
///
/// let bits: u32 = bit_cast(1.0f32);
/// assert_eq!(bits, 0x3f80_0000);
/// let back: f32 = bit_cast(bits);
/// assert_eq!(back, 1.0);
/// ```
///
/// Casting between different sizes does not compile:
///
/// ```compile_fail
/// use lanekit_math::bits::bit_cast;
/// let _: u16 = bit_cast(1.0f32);
/// ```
#[inline(always)]
pub fn bit_cast<Src: Lane, Dst: Lane>(value: Src) -> Dst {
    const {
        assert!(
            size_of::<Src>() == size_of::<Dst>(),
            "bit_cast requires lane types of equal size"
        )
    };
    Dst::from_bits(<Dst::Bits as RawBits>::from_u64(value.to_bits().to_u64()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_sign_bit() {
        let bits: u64 = bit_cast(-0.0f64);
        assert_eq!(bits, 1 << 63);
    }

    #[test]
    fn test_signed_unsigned_roundtrip() {
        let u: u8 = bit_cast(-1i8);
        assert_eq!(u, 0xff);
        let i: i8 = bit_cast(u);
        assert_eq!(i, -1);
    }

    #[test]
    fn test_int_to_float_preserves_nan_payload() {
        let f: f32 = bit_cast(0x7fc0_0001u32);
        assert!(f.is_nan());
        let back: u32 = bit_cast(f);
        assert_eq!(back, 0x7fc0_0001);
    }
}
