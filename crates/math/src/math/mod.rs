//! Vectorized math kernels with documented ULP bounds
//!
//! Every kernel has the shape `f(d, x) -> y` for a float descriptor `d` and
//! is written only against the vector contract, so one definition serves
//! every target variant and both float widths. Per-type coefficient tables
//! live in [`consts`] and are selected through the lane type.
//!
//! # Accuracy
//!
//! | Kernel      | Domain                              | Max ULP        |
//! |-------------|-------------------------------------|----------------|
//! | `exp`       | up to 88.72 / 709.78                | 1              |
//! | `exp2`      | [-150, 128) / [-1075, 1024)         | 2              |
//! | `expm1`     | up to 88.72 / 709.78                | 3              |
//! | `log`       | (0, +inf]                           | 4 f32 / 2 f64  |
//! | `log1p`     | (-1, +inf]                          | 3              |
//! | `log2`      | (0, +inf]                           | 3              |
//! | `log10`     | (0, +inf]                           | 3              |
//! | `sin`/`cos` | [-39000, 39000]                     | 3              |
//! | `tan`       | [-39000, 39000]                     | 6              |
//! | `asin`      | [-1, 1]                             | 3              |
//! | `acos`      | [-1, 1]                             | 2              |
//! | `atan`      | all                                 | 3              |
//! | `atan2`     | all                                 | 3              |
//! | `sinh`      | [-88.72, 88.72] / [-709, 709]       | 4              |
//! | `cosh`      | [-88.72, 88.72] / [-709, 709]       | 2              |
//! | `tanh`      | all                                 | 3              |
//! | `asinh`     | all                                 | 3              |
//! | `acosh`     | [1, +inf]                           | 3              |
//! | `atanh`     | (-1, 1)                             | 3              |
//!
//! Out-of-domain inputs never trap; each module documents the value
//! returned (NaN, zero, +-inf or a saturated result).
//!
//! # Example
//!
//! ```rust
//! use lanekit_math::{math, Descriptor, SimdVector};
//! use lanekit_math::target::{Sse4, Target};
//!
//! let d = <Sse4 as Target>::F32::new();
//! let x = d.load_u(&[0.0, 0.5, 1.0, 2.0]);
//! let (s, c) = math::sin_cos(d, x);
//! let one = s.mul(s).add(c.mul(c));
//! assert!(one.to_array().iter().all(|v| (v - 1.0).abs() < 1e-6));
//! ```

pub mod asin;
pub mod atan;
pub mod consts;
pub mod exp;
pub mod hyperbolic;
pub mod inverse_hyperbolic;
pub mod log;
pub mod poly;
pub mod trig;

pub use self::asin::{acos, asin};
pub use self::atan::{atan, atan2};
pub use self::exp::{exp, exp2, expm1};
pub use self::hyperbolic::{cosh, sinh, tanh};
pub use self::inverse_hyperbolic::{acosh, asinh, atanh};
pub use self::log::{log, log10, log1p, log2};
pub use self::trig::{cos, sin, sin_cos, tan};
