#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! lanekit-math: lane descriptors, a portable vector operation contract, and
//! ULP-bounded math kernels
//!
//! Vector code is written once against a descriptor `d` and the contract
//! traits, then compiled once per target variant. The portable backend
//! implements the contract for every lane type and lane count, so the same
//! source is correct on every target and vectorizes under each target's
//! `#[target_feature]` set.
//!
//! # Layout
//!
//! - [`lane`]: the ten element types and their per-lane primitives
//! - [`target`]: target variants, tags and full-width descriptor types
//! - [`descriptor`]: [`Simd<T, N, Tg>`] and the [`Descriptor`] trait
//! - [`traits`]: the operation contract ([`SimdVector`], [`SimdInt`], [`SimdFloat`], [`SimdMask`])
//! - [`backends`]: the portable reference backend and lane conversions
//! - [`block`]: 64-byte aligned buffers for aligned loads and stores
//! - [`ops`]: free-function forms of common operations
//! - [`math`]: Exp, Log, Sin, Cos, Asin, Atan, Sinh, Tanh and relatives
//!
//! # Quick Start
//!
//! ```rust
//! use lanekit_math::{math, Descriptor, SimdVector};
//! use lanekit_math::target::{Avx2, Target};
//!
//! let d = <Avx2 as Target>::F32::new();
//! let x = d.set(0.0);
//! let y = math::exp(d, x);
//! assert_eq!(y.to_array(), [1.0; 8]);
//! ```

pub mod backends;
pub mod bits;
pub mod block;
pub mod descriptor;
pub mod lane;
pub mod math;
pub mod ops;
pub mod target;
pub mod traits;

pub use backends::{LaneIndices, Mask, Vector};
pub use block::AlignedBlock;
pub use descriptor::{Descriptor, FloatDescriptor, MaskOf, Simd, VecOf};
pub use lane::{FloatLane, IntLane, Lane};
pub use target::{Target, TargetVariant};
pub use traits::{SimdFloat, SimdInt, SimdMask, SimdVector};
