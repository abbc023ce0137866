//! Sine, cosine and tangent
//!
//! # Algorithm
//!
//! The argument is reduced by subtracting a whole multiple of pi/2, with
//! pi/2 stored as 3 (f64) or 4 (f32) parts whose products with the multiple
//! are exact. sin and cos subtract an even (sin) or odd (cos) multiple, so
//! r lands in [-pi/2, pi/2] and the sine polynomial covers the whole range.
//! tan subtracts the nearest multiple, giving r in [-pi/4, pi/4]. The
//! quadrant integer picks the sign and, for tangent, whether the result is
//! `sin/cos` or `-cos/sin`.
//!
//! # Error Bounds
//!
//! | Function  | Domain           | Max ULP |
//! |-----------|------------------|---------|
//! | `sin`     | [-39000, 39000]  | 3       |
//! | `cos`     | [-39000, 39000]  | 3       |
//! | `sin_cos` | [-39000, 39000]  | 3       |
//! | `tan`     | [-39000, 39000]  | 6       |
//!
//! Outside the domain the results stay finite but lose accuracy. NaN and
//! infinite inputs give NaN.

#![allow(clippy::excessive_precision)]

use super::consts::KernelConstants;
use super::poly::{estrin, int_splat, splat};
use crate::descriptor::{FloatDescriptor, VecOf};
use crate::lane::Lane;
use crate::traits::{SimdFloat, SimdVector};

const FRAC_1_PI: f64 = 0.3183098861837907;
const FRAC_2_PI: f64 = 0.6366197723675814;

/// `x - m * pi/2`, one fused step per part of pi/2
#[inline(always)]
fn reduce<D: FloatDescriptor>(d: D, x: VecOf<D>, m: VecOf<D>) -> VecOf<D> {
    D::Lane::PIO2_PARTS
        .iter()
        .fold(x, |r, &part| m.mul_add(d.set(part).neg(), r))
}

/// sin(r) for |r| <= pi/2
#[inline(always)]
fn sin_poly<D: FloatDescriptor>(r: VecOf<D>) -> VecOf<D> {
    let s = r.mul(r);
    estrin(s, D::Lane::SIN_POLY).mul_add(s.mul(r), r)
}

/// Lanes of `q` with `bit` set
#[inline(always)]
fn quadrant_bit<D: FloatDescriptor>(
    q: <VecOf<D> as SimdFloat>::Int,
    bit: i64,
) -> <VecOf<D> as SimdVector>::Mask {
    let bit = int_splat::<VecOf<D>>(bit);
    q.and(bit).eq(bit)
}

/// Sine
///
/// # Example
///
/// ```rust
/// use lanekit_math::{math::sin, Descriptor, SimdVector};
/// use lanekit_math::target::{Avx2, Target};
///
/// let d = <Avx2 as Target>::F64::new();
/// let y = sin(d, d.set(core::f64::consts::FRAC_PI_6));
/// assert!((y.get_lane() - 0.5).abs() < 1e-15);
/// ```
#[inline(always)]
pub fn sin<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let qf = x.mul(splat(d, FRAC_1_PI)).round();
    let r = reduce(d, x, qf.add(qf));
    let p = sin_poly::<D>(r);

    let odd = quadrant_bit::<D>(qf.convert_to_int(), 1);
    let y = VecOf::<D>::if_then_else(odd, p.neg(), p);
    // sin(-0) = -0
    VecOf::<D>::if_then_else(x.eq(d.zero()), x, y)
}

/// Cosine
#[inline(always)]
pub fn cos<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let half = splat(d, 0.5);
    let two = splat(d, 2.0);
    // Odd multiple of pi/2 nearest to x
    let qf = x
        .mul(splat(d, FRAC_1_PI))
        .sub(half)
        .round()
        .mul_add(two, d.set(D::Lane::ONE));
    let p = sin_poly::<D>(reduce(d, x, qf));

    let upper = quadrant_bit::<D>(qf.convert_to_int(), 2);
    VecOf::<D>::if_then_else(upper, p, p.neg())
}

/// Sine and cosine of the same argument
#[inline(always)]
pub fn sin_cos<D: FloatDescriptor>(d: D, x: VecOf<D>) -> (VecOf<D>, VecOf<D>) {
    (sin(d, x), cos(d, x))
}

/// Tangent, max 6 ULP
///
/// `cos(r)` is rebuilt from `sin(r/2)` as `1 - 2 sin^2(r/2)`, which stays
/// accurate where `cos(r)` is close to 1.
#[inline(always)]
pub fn tan<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let qf = x.mul(splat(d, FRAC_2_PI)).round();
    let r = reduce(d, x, qf);

    let s = sin_poly::<D>(r);
    let h = sin_poly::<D>(r.mul(splat(d, 0.5)));
    let c = d.set(D::Lane::ONE).sub(h.add(h).mul(h));

    let odd = quadrant_bit::<D>(qf.convert_to_int(), 1);
    let y = VecOf::<D>::if_then_else(odd, c.div(s).neg(), s.div(c));
    VecOf::<D>::if_then_else(x.eq(d.zero()), x, y)
}
