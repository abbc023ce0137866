//! Inverse sine and cosine
//!
//! For |x| < 0.5 the polynomial is applied directly. Above that the identity
//! `asin(a) = pi/2 - 2 asin(sqrt((1 - a) / 2))` moves the argument back into
//! [0, 0.5], where the same polynomial is accurate.
//!
//! # Error Bounds
//!
//! | Function | Domain  | Max ULP | Outside domain |
//! |----------|---------|---------|----------------|
//! | `asin`   | [-1, 1] | 3       | NaN            |
//! | `acos`   | [-1, 1] | 2       | NaN            |

#![allow(clippy::excessive_precision)]

use super::consts::KernelConstants;
use super::poly::{estrin, splat};
use crate::descriptor::{FloatDescriptor, VecOf};
use crate::lane::Lane;
use crate::traits::{SimdFloat, SimdVector};

const FRAC_PI_2: f64 = 1.5707963267948966;
const PI: f64 = 3.141592653589793;

/// `(small, t)` with `t = asin(y)` of the folded argument
#[inline(always)]
fn asin_core<D: FloatDescriptor>(
    d: D,
    x: VecOf<D>,
) -> (<VecOf<D> as SimdVector>::Mask, VecOf<D>) {
    let half = splat(d, 0.5);
    let a = x.abs();
    let small = a.lt(half);

    let yy = VecOf::<D>::if_then_else(small, a.mul(a), d.set(D::Lane::ONE).sub(a).mul(half));
    let y = VecOf::<D>::if_then_else(small, a, yy.sqrt());
    let t = estrin(yy, D::Lane::ASIN_POLY).mul_add(yy.mul(y), y);
    (small, t)
}

/// Inverse sine, max 3 ULP
///
/// # Example
///
/// ```rust
/// use lanekit_math::{math::asin, Descriptor, SimdVector};
/// use lanekit_math::target::{Sse4, Target};
///
/// let d = <Sse4 as Target>::F64::new();
/// let y = asin(d, d.set(1.0)).get_lane();
/// assert!((y - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
/// ```
#[inline(always)]
pub fn asin<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let (small, t) = asin_core(d, x);
    let folded = splat(d, FRAC_PI_2).sub(t.add(t));
    VecOf::<D>::if_then_else(small, t, folded).copysign(x)
}

/// Inverse cosine, max 2 ULP
#[inline(always)]
pub fn acos<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let (small, t) = asin_core(d, x);
    let near_zero = splat(d, FRAC_PI_2).sub(t.copysign(x));

    let z = t.add(t);
    let z = VecOf::<D>::if_then_else(x.lt(d.zero()), splat(d, PI).sub(z), z);
    VecOf::<D>::if_then_else(small, near_zero, z)
}
