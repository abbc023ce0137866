//! Exponential family: exp, exp2, expm1
//!
//! # Algorithm
//!
//! 1. q = round(x / ln 2), r = x - q ln 2 with ln 2 split in two parts
//!    (Cody-Waite), so |r| <= ln2/2 and the subtraction is exact.
//! 2. exp(r) - 1 = r + r^2 P(r) with minimax P evaluated by Estrin's scheme.
//! 3. Scale by 2^q built directly in the exponent field, in two halves so
//!    neither factor overflows before the final product.
//!
//! # Error Bounds
//!
//! | Function | Domain                      | Max ULP |
//! |----------|-----------------------------|---------|
//! | `exp`    | up to 88.72 (f32), 709.78 (f64) | 1   |
//! | `exp2`   | [-150, 128) / [-1075, 1024) | 2       |
//! | `expm1`  | up to the exp threshold     | 3       |
//!
//! Above the overflow threshold the result is `+inf`. Below the underflow
//! bound (-104 for f32, -1000 for f64) exp returns 0 and expm1 returns -1.
//! NaN propagates.

#![allow(clippy::excessive_precision)]

use super::consts::KernelConstants;
use super::poly::{estrin, ldexp_short, splat};
use crate::descriptor::{FloatDescriptor, VecOf};
use crate::lane::{FloatLane, Lane};
use crate::traits::{SimdFloat, SimdVector};

const LOG2_E: f64 = 1.4426950408889634;
const LN_2: f64 = 0.6931471805599453;
/// ln(2)/2; below this expm1 uses the polynomial directly
const EXPM1_DIRECT: f64 = 0.34657359027997264;

/// exp(r) - 1 for |r| <= ln2/2
#[inline(always)]
fn exp_poly<D: FloatDescriptor>(r: VecOf<D>) -> VecOf<D> {
    estrin(r, D::Lane::EXP_POLY).mul_add(r.mul(r), r)
}

/// (q, r) with x = q ln2 + r
#[inline(always)]
fn reduce<D: FloatDescriptor>(
    d: D,
    x: VecOf<D>,
) -> (<VecOf<D> as SimdFloat>::Int, VecOf<D>) {
    let qf = x.mul(splat(d, LOG2_E)).round();
    let r = qf.mul_add(d.set(D::Lane::LN2_UPPER).neg(), x);
    let r = qf.mul_add(d.set(D::Lane::LN2_LOWER).neg(), r);
    (qf.convert_to_int(), r)
}

/// Natural exponential, max 1 ULP
///
/// # Example
///
/// ```rust
/// use lanekit_math::{math::exp, Descriptor, SimdVector};
/// use lanekit_math::target::{Sse4, Target};
///
/// let d = <Sse4 as Target>::F64::new();
/// assert_eq!(exp(d, d.zero()).get_lane(), 1.0);
/// assert!((exp(d, d.set(1.0)).get_lane() - core::f64::consts::E).abs() < 1e-15);
/// ```
#[inline(always)]
pub fn exp<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let (q, r) = reduce(d, x);
    let y = ldexp_short(exp_poly::<D>(r).add(d.set(D::Lane::ONE)), q);

    let y = VecOf::<D>::if_then_else(
        x.gt(d.set(D::Lane::EXP_OVERFLOW)),
        d.set(D::Lane::INFINITY),
        y,
    );
    VecOf::<D>::if_then_zero_else(x.lt(d.set(D::Lane::EXP_UNDERFLOW)), y)
}

/// Base-2 exponential, max 2 ULP
#[inline(always)]
pub fn exp2<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let qf = x.round();
    let r = x.sub(qf).mul(splat(d, LN_2));
    let y = ldexp_short(exp_poly::<D>(r).add(d.set(D::Lane::ONE)), qf.convert_to_int());

    let y = VecOf::<D>::if_then_else(
        x.ge(d.set(D::Lane::EXP2_OVERFLOW)),
        d.set(D::Lane::INFINITY),
        y,
    );
    VecOf::<D>::if_then_zero_else(x.lt(d.set(D::Lane::EXP2_UNDERFLOW)), y)
}

/// exp(x) - 1, accurate near zero, max 3 ULP
#[inline(always)]
pub fn expm1<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let one = d.set(D::Lane::ONE);
    let (q, r) = reduce(d, x);
    let y = exp_poly::<D>(r);

    // While 2^q - 1 is exact, add it separately instead of cancelling against 1.
    let split = ldexp_short(y, q).add(ldexp_short(one, q).sub(one));
    let joined = ldexp_short(y.add(one), q).sub(one);
    let exact_scale = q.le(super::poly::int_splat::<VecOf<D>>(
        D::Lane::MANTISSA_BITS as i64 + 2,
    ));
    let large = VecOf::<D>::if_then_else(exact_scale, split, joined);

    let small = x.abs().lt(splat(d, EXPM1_DIRECT));
    let y = VecOf::<D>::if_then_else(small, exp_poly::<D>(x), large);

    let y = VecOf::<D>::if_then_else(
        x.gt(d.set(D::Lane::EXP_OVERFLOW)),
        d.set(D::Lane::INFINITY),
        y,
    );
    VecOf::<D>::if_then_else(x.lt(d.set(D::Lane::EXP_UNDERFLOW)), one.neg(), y)
}
