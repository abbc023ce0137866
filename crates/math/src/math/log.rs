//! Logarithm family: log, log1p, log2, log10
//!
//! The input is split as `x = 2^e * y` with y in [sqrt(2)/2, sqrt(2)) by
//! integer arithmetic on the bit pattern, then
//! `log(y) = 2 atanh(z)` with `z = (y - 1) / (y + 1)`, expanded as
//! `2z + z^3 P(z^2)`. Subnormal inputs are first scaled into the normal
//! range.
//!
//! # Error Bounds
//!
//! | Function | Max ULP (f32) | Max ULP (f64) |
//! |----------|---------------|---------------|
//! | `log`    | 4             | 2             |
//! | `log1p`  | 3             | 3             |
//! | `log2`   | 3             | 3             |
//! | `log10`  | 3             | 3             |
//!
//! Special values: `log(0) = -inf`, `log(inf) = inf`, negative or NaN input
//! gives NaN. `log1p(-1) = -inf` and `log1p(x) = x` wherever `1 + x` rounds
//! to 1.

use super::consts::KernelConstants;
use super::poly::{estrin, int_splat, splat};
use crate::descriptor::{FloatDescriptor, VecOf};
use crate::lane::{FloatLane, Lane};
use crate::traits::{SimdFloat, SimdInt, SimdMask, SimdVector};

const LOG2_E: f64 = 1.4426950408889634;
const LOG10_E: f64 = 0.4342944819032518;

/// Natural logarithm
///
/// # Example
///
/// ```rust
/// use lanekit_math::{math::log, Descriptor, SimdVector};
/// use lanekit_math::target::{Neon, Target};
///
/// let d = <Neon as Target>::F32::new();
/// assert_eq!(log(d, d.set(1.0)).get_lane(), 0.0);
/// assert_eq!(log(d, d.zero()).get_lane(), f32::NEG_INFINITY);
/// ```
#[inline(always)]
pub fn log<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let one = d.set(D::Lane::ONE);
    let mant = D::Lane::MANTISSA_BITS;

    let tiny = x.lt(d.set(D::Lane::MIN_POSITIVE));
    let scaled = VecOf::<D>::if_then_else(tiny, x.mul(d.set(D::Lane::SUBNORMAL_SCALE)), x);

    // Offset the bits so the exponent field rounds at sqrt(2)/2, not 1.
    let magic = int_splat::<VecOf<D>>(D::Lane::LOG_MAGIC);
    let eb = scaled.to_int_bits().add(one.to_int_bits().sub(magic));

    let shift = SimdVector::if_then_else_zero(
        tiny,
        int_splat::<VecOf<D>>(D::Lane::SUBNORMAL_SHIFT),
    );
    let e = eb
        .shift_right(mant)
        .sub(int_splat::<VecOf<D>>(D::Lane::EXPONENT_BIAS))
        .sub(shift);
    let ef = VecOf::<D>::convert_from_int(e);

    let mant_mask = int_splat::<VecOf<D>>((1i64 << mant) - 1);
    let y = VecOf::<D>::from_int_bits(eb.and(mant_mask).add(magic));

    let ym1 = y.sub(one);
    let z = ym1.div(y.add(one));
    let z2 = z.mul(z);
    let r = z2.mul(estrin(z2, D::Lane::LOG_POLY));

    let lo = ef.mul(d.set(D::Lane::LN2_LO)).neg();
    let result = ef
        .mul(d.set(D::Lane::LN2_HI))
        .sub(z.mul_add(ym1.sub(r), lo).sub(ym1));

    let result = VecOf::<D>::if_then_else(
        x.eq(d.set(D::Lane::INFINITY)),
        d.set(D::Lane::INFINITY),
        result,
    );
    let result = VecOf::<D>::if_then_else(
        x.eq(d.zero()),
        d.set(D::Lane::NEG_INFINITY),
        result,
    );
    let invalid = x.lt(d.zero()).or(x.is_nan());
    VecOf::<D>::if_then_else(invalid, d.set(D::Lane::NAN), result)
}

/// log(1 + x), accurate near zero
///
/// Computes `log(1 + x) * x / ((1 + x) - 1)`; the factor cancels the
/// rounding error of forming `1 + x`.
#[inline(always)]
pub fn log1p<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let one = d.set(D::Lane::ONE);
    let y = x.add(one);
    let result = log(d, y).mul(x.div(y.sub(one)));

    let result = VecOf::<D>::if_then_else(y.eq(one), x, result);
    VecOf::<D>::if_then_else(
        x.eq(d.set(D::Lane::INFINITY)),
        d.set(D::Lane::INFINITY),
        result,
    )
}

/// Base-2 logarithm
#[inline(always)]
pub fn log2<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    log(d, x).mul(splat(d, LOG2_E))
}

/// Base-10 logarithm
#[inline(always)]
pub fn log10<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    log(d, x).mul(splat(d, LOG10_E))
}
