//! Inverse hyperbolic functions: asinh, acosh, atanh
//!
//! Each is a logarithm of an algebraic expression. The expression is
//! rearranged per range so that the argument of [`log1p`] stays small near
//! the origin and no intermediate squares overflow for large inputs, where
//! `log(2x) = log(x) + ln 2` takes over.
//!
//! # Error Bounds
//!
//! | Function | Domain      | Max ULP | Outside domain       |
//! |----------|-------------|---------|----------------------|
//! | `asinh`  | all         | 3       |                      |
//! | `acosh`  | [1, +inf]   | 3       | NaN                  |
//! | `atanh`  | (-1, 1)     | 3       | +-inf at +-1, NaN    |

use super::log::{log, log1p};
use super::poly::splat;
use crate::descriptor::{FloatDescriptor, VecOf};
use crate::lane::{FloatLane, Lane};
use crate::traits::{SimdFloat, SimdVector};

const LN_2: f64 = 0.6931471805599453;
/// 2^28; above this `sqrt(x^2 + 1)` rounds to x
const LARGE: f64 = 268435456.0;

/// Inverse hyperbolic sine
#[inline(always)]
pub fn asinh<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let one = d.set(D::Lane::ONE);
    let two = splat(d, 2.0);
    let a = x.abs();
    let a2 = a.mul(a);

    let large = log(d, a).add(splat(d, LN_2));
    let mid = log(d, a.mul_add(two, one.div(a2.add(one).sqrt().add(a))));
    let small = log1p(d, a.add(a2.div(one.add(one.add(a2).sqrt()))));

    let r = VecOf::<D>::if_then_else(a.gt(two), mid, small);
    let r = VecOf::<D>::if_then_else(a.gt(splat(d, LARGE)), large, r);
    r.copysign(x)
}

/// Inverse hyperbolic cosine
///
/// # Example
///
/// ```rust
/// use lanekit_math::{math::acosh, Descriptor, SimdVector};
/// use lanekit_math::target::{Sse4, Target};
///
/// let d = <Sse4 as Target>::F32::new();
/// assert_eq!(acosh(d, d.set(1.0)).get_lane(), 0.0);
/// assert!(acosh(d, d.set(0.5)).get_lane().is_nan());
/// ```
#[inline(always)]
pub fn acosh<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let one = d.set(D::Lane::ONE);
    let two = splat(d, 2.0);

    let large = log(d, x).add(splat(d, LN_2));
    let mid = log(d, x.mul_add(two, one.div(x.add(x.mul_sub(x, one).sqrt())).neg()));
    let t = x.sub(one);
    let small = log1p(d, t.add(t.mul_add(t, t.add(t)).sqrt()));

    let r = VecOf::<D>::if_then_else(x.gt(two), mid, small);
    let r = VecOf::<D>::if_then_else(x.gt(splat(d, LARGE)), large, r);
    VecOf::<D>::if_then_else(x.lt(one), d.set(D::Lane::NAN), r)
}

/// Inverse hyperbolic tangent
#[inline(always)]
pub fn atanh<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let one = d.set(D::Lane::ONE);
    let half = splat(d, 0.5);
    let a = x.abs();
    let t = a.add(a);
    let one_minus_a = one.sub(a);

    let small = log1p(d, t.add(t.mul(a).div(one_minus_a)));
    let large = log1p(d, t.div(one_minus_a));
    VecOf::<D>::if_then_else(a.lt(half), small, large)
        .mul(half)
        .copysign(x)
}
