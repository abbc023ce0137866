//! Target variants and their zero-size tags
//!
//! A [`TargetVariant`] names one instruction-set family the library can be
//! compiled for. Variants are ordered by specialization: lower index means
//! more capable and preferred by the dispatcher.
//!
//! Each variant also has a zero-size tag type implementing [`Target`]. Generic
//! code is written once against `Tg: Target` and monomorphized per tag; the
//! tag's associated descriptor types give the full-register descriptor for
//! every lane type.
//!
//! | Variant  | Register | f32 lanes | f64 lanes |
//! |----------|----------|-----------|-----------|
//! | `Avx512` | 64 bytes | 16        | 8         |
//! | `Avx2`   | 32 bytes | 8         | 4         |
//! | `Sse4`   | 16 bytes | 4         | 2         |
//! | `Neon`   | 16 bytes | 4         | 2         |
//! | `Scalar` | one lane | 1         | 1         |

use crate::descriptor::{Descriptor, FloatDescriptor, Simd};
use core::fmt;

/// One instruction-set family, ordered most capable first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TargetVariant {
    /// x86-64 AVX-512 (F, BW, DQ, VL), 512-bit registers
    Avx512 = 0,
    /// x86-64 AVX2 + FMA, 256-bit registers
    Avx2 = 1,
    /// x86 SSSE3 + SSE4.1/4.2, 128-bit registers
    Sse4 = 2,
    /// aarch64 Advanced SIMD, 128-bit registers
    Neon = 3,
    /// Portable one-lane fallback, always available
    Scalar = 4,
}

impl TargetVariant {
    /// Number of variants
    pub const COUNT: usize = 5;

    /// Every variant in preference order
    pub const ALL: [TargetVariant; Self::COUNT] = [
        TargetVariant::Avx512,
        TargetVariant::Avx2,
        TargetVariant::Sse4,
        TargetVariant::Neon,
        TargetVariant::Scalar,
    ];

    /// Position in preference order
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index)
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Register width in bytes (`Scalar` holds one lane of up to 8 bytes)
    pub const fn register_bytes(self) -> usize {
        match self {
            TargetVariant::Avx512 => 64,
            TargetVariant::Avx2 => 32,
            TargetVariant::Sse4 | TargetVariant::Neon => 16,
            TargetVariant::Scalar => 8,
        }
    }

    /// Largest lane count a descriptor may use for lanes of `lane_bytes` bytes
    pub const fn max_lanes(self, lane_bytes: usize) -> usize {
        match self {
            TargetVariant::Scalar => 1,
            _ => self.register_bytes() / lane_bytes,
        }
    }

    /// Lower-case name for logging
    pub const fn name(self) -> &'static str {
        match self {
            TargetVariant::Avx512 => "avx512",
            TargetVariant::Avx2 => "avx2",
            TargetVariant::Sse4 => "sse4",
            TargetVariant::Neon => "neon",
            TargetVariant::Scalar => "scalar",
        }
    }
}

impl fmt::Display for TargetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compile-time tag for one target variant
///
/// The associated types are the full-register descriptors for each lane type.
pub trait Target: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// The variant this tag stands for
    const VARIANT: TargetVariant;

    /// Full-width `u8` descriptor
    type U8: Descriptor<Lane = u8, Target = Self>;
    /// Full-width `u16` descriptor
    type U16: Descriptor<Lane = u16, Target = Self>;
    /// Full-width `u32` descriptor
    type U32: Descriptor<Lane = u32, Target = Self>;
    /// Full-width `u64` descriptor
    type U64: Descriptor<Lane = u64, Target = Self>;
    /// Full-width `i8` descriptor
    type I8: Descriptor<Lane = i8, Target = Self>;
    /// Full-width `i16` descriptor
    type I16: Descriptor<Lane = i16, Target = Self>;
    /// Full-width `i32` descriptor
    type I32: Descriptor<Lane = i32, Target = Self>;
    /// Full-width `i64` descriptor
    type I64: Descriptor<Lane = i64, Target = Self>;
    /// Full-width `f32` descriptor
    type F32: FloatDescriptor<Lane = f32, Target = Self>;
    /// Full-width `f64` descriptor
    type F64: FloatDescriptor<Lane = f64, Target = Self>;
}

macro_rules! define_target {
    ($(#[$meta:meta])* $tag:ident => $variant:ident, b8 = $b8:literal, b16 = $b16:literal, b32 = $b32:literal, b64 = $b64:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $tag;

        impl Target for $tag {
            const VARIANT: TargetVariant = TargetVariant::$variant;

            type U8 = Simd<u8, $b8, Self>;
            type U16 = Simd<u16, $b16, Self>;
            type U32 = Simd<u32, $b32, Self>;
            type U64 = Simd<u64, $b64, Self>;
            type I8 = Simd<i8, $b8, Self>;
            type I16 = Simd<i16, $b16, Self>;
            type I32 = Simd<i32, $b32, Self>;
            type I64 = Simd<i64, $b64, Self>;
            type F32 = Simd<f32, $b32, Self>;
            type F64 = Simd<f64, $b64, Self>;
        }
    };
}

define_target!(
    /// AVX-512 tag
    Avx512 => Avx512, b8 = 64, b16 = 32, b32 = 16, b64 = 8
);
define_target!(
    /// AVX2 tag
    Avx2 => Avx2, b8 = 32, b16 = 16, b32 = 8, b64 = 4
);
define_target!(
    /// SSE4 tag
    Sse4 => Sse4, b8 = 16, b16 = 8, b32 = 4, b64 = 2
);
define_target!(
    /// NEON tag
    Neon => Neon, b8 = 16, b16 = 8, b32 = 4, b64 = 2
);
define_target!(
    /// Scalar fallback tag
    Scalar => Scalar, b8 = 1, b16 = 1, b32 = 1, b64 = 1
);

/// Full-width `f32` descriptor of a target
pub type F32<Tg> = <Tg as Target>::F32;
/// Full-width `f64` descriptor of a target
pub type F64<Tg> = <Tg as Target>::F64;
