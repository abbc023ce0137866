#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! lanekit-dispatch: runtime target selection for lanekit kernels
//!
//! A single binary carries one copy of each exported function per compiled
//! target variant. The first call detects CPU features, picks the most
//! capable variant that is supported, compiled in and permitted, and every
//! later call goes straight through a function pointer table.
//!
//! # Architecture
//!
//! - [`detect`]: CPU feature detection (`cpufeatures` on x86, NEON assumed on aarch64)
//! - [`targets`]: [`TargetSet`], the shared chosen slot, permitted targets
//! - [`table`]: [`DispatchTable`], one per exported function
//! - [`export_dispatched!`]: generates the per-variant copies and the table
//! - [`helpers`]: slice drivers with padded-tail handling
//! - [`kernels`]: the exported `*_f32` / `*_f64` slice functions
//!
//! # Feature Flags
//!
//! - `sse4`, `avx2`, `neon` (default), `avx512`: variants compiled into every table
//! - `force-scalar`, `force-sse4`, `force-avx2`, `force-avx512`, `force-neon`:
//!   pin the chooser for deterministic runs; a forced variant the processor
//!   cannot run falls back to scalar
//!
//! # Logging
//!
//! Target selection is reported through the `log` facade (`trace` for raw
//! feature flags, `debug` for the chosen variant, `info` when the permitted
//! set changes). No logger is installed here.
//!
//! # Example
//!
//! ```
//! use lanekit_dispatch::{chosen_target, exp_f32, COMPILED};
//!
//! let input = [0.0f32, 1.0, 2.0];
//! let mut output = [0.0f32; 3];
//! exp_f32(&input, &mut output);
//! assert_eq!(output[0], 1.0);
//! assert!(COMPILED.contains(chosen_target()));
//! ```

pub use lanekit_math;

pub mod detect;
pub mod helpers;
pub mod kernels;
mod macros;
pub mod table;
pub mod targets;

pub use detect::CpuFeatures;
pub use kernels::*;
pub use lanekit_math::TargetVariant;
pub use table::DispatchTable;
pub use targets::{
    chosen_target, permitted_targets, reset_permitted_targets, set_permitted_targets,
    supported_targets, TargetSet, COMPILED,
};
