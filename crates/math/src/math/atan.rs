//! Inverse tangent: atan, atan2
//!
//! Both fold the argument into [0, 1] (by reciprocal for atan, by ordering
//! |y| and |x| for atan2), evaluate `d + d^3 P(d^2)`, then undo the fold
//! with `pi/2 - r` and the quadrant with `pi - r`.
//!
//! # Error Bounds
//!
//! | Function | Domain | Max ULP |
//! |----------|--------|---------|
//! | `atan`   | all    | 3       |
//! | `atan2`  | all    | 3       |
//!
//! `atan(+-inf) = +-pi/2`. atan2 follows the IEEE 754 conventions for zeros
//! and infinities: `atan2(+-0, -0) = +-pi`, `atan2(+-inf, +-inf)` gives the
//! odd multiples of pi/4.

use super::consts::KernelConstants;
use super::poly::{estrin, splat};
use crate::descriptor::{FloatDescriptor, VecOf};
use crate::lane::{FloatLane, Lane};
use crate::traits::{SimdFloat, SimdMask, SimdVector};

const FRAC_PI_2: f64 = 1.5707963267948966;
const PI: f64 = 3.141592653589793;

/// atan(d) for d in [0, 1]
#[inline(always)]
fn atan_poly<D: FloatDescriptor>(d: VecOf<D>) -> VecOf<D> {
    let t = d.mul(d);
    d.mul_add(t.mul(estrin(t, D::Lane::ATAN_POLY)), d)
}

/// Inverse tangent
///
/// # Example
///
/// ```rust
/// use lanekit_math::{math::atan, Descriptor, SimdVector};
/// use lanekit_math::target::{Avx2, Target};
///
/// let d = <Avx2 as Target>::F32::new();
/// let y = atan(d, d.set(1.0)).get_lane();
/// assert!((y - core::f32::consts::FRAC_PI_4).abs() < 1e-7);
/// ```
#[inline(always)]
pub fn atan<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let one = d.set(D::Lane::ONE);
    let a = x.abs();
    let inverted = a.gt(one);
    let r = atan_poly::<D>(VecOf::<D>::if_then_else(inverted, one.div(a), a));
    VecOf::<D>::if_then_else(inverted, splat(d, FRAC_PI_2).sub(r), r).copysign(x)
}

/// Angle of the point (x, y), in [-pi, pi]
///
/// # Example
///
/// ```rust
/// use lanekit_math::{math::atan2, Descriptor, SimdVector};
/// use lanekit_math::target::{Sse4, Target};
///
/// let d = <Sse4 as Target>::F64::new();
/// let y = atan2(d, d.set(1.0), d.set(-1.0)).get_lane();
/// assert!((y - 3.0 * core::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// ```
#[inline(always)]
pub fn atan2<D: FloatDescriptor>(d: D, y: VecOf<D>, x: VecOf<D>) -> VecOf<D> {
    let ax = x.abs();
    let ay = y.abs();
    let swap = ay.gt(ax);
    let num = VecOf::<D>::if_then_else(swap, ax, ay);
    let den = VecOf::<D>::if_then_else(swap, ay, ax);

    let ratio = num.div(den);
    let ratio = VecOf::<D>::if_then_zero_else(den.eq(d.zero()), ratio);
    let ratio = VecOf::<D>::if_then_else(
        ax.is_inf().and(ay.is_inf()),
        d.set(D::Lane::ONE),
        ratio,
    );

    let r = atan_poly::<D>(ratio);
    let r = VecOf::<D>::if_then_else(swap, splat(d, FRAC_PI_2).sub(r), r);
    let r = VecOf::<D>::if_then_else(x.is_sign_negative(), splat(d, PI).sub(r), r);
    let r = r.copysign(y);

    VecOf::<D>::if_then_else(x.is_nan().or(y.is_nan()), d.set(D::Lane::NAN), r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Descriptor;
    use crate::target::{Avx2, Neon, Scalar, Sse4, Target};
    use core::f64::consts::{FRAC_PI_2 as HALF_PI, FRAC_PI_4, PI as PI64};

    #[test]
    fn test_atan_limits_and_sign() {
        let d = <Sse4 as Target>::F32::new();
        let x = d.load_u(&[f32::INFINITY, f32::NEG_INFINITY, -0.0, 1e-30]);
        let y = atan(d, x).to_array();
        assert_eq!(y[0], core::f32::consts::FRAC_PI_2);
        assert_eq!(y[1], -core::f32::consts::FRAC_PI_2);
        assert_eq!(y[2].to_bits(), (-0.0f32).to_bits());
        assert_eq!(y[3], 1e-30);
        assert!(atan(d, d.set(f32::NAN)).get_lane().is_nan());
    }

    #[test]
    fn test_atan_odd_symmetry() {
        let d = <Scalar as Target>::F64::new();
        let mut x = 0.01;
        while x < 1e6 {
            let pos = atan(d, d.set(x)).get_lane();
            let neg = atan(d, d.set(-x)).get_lane();
            assert_eq!(pos, -neg);
            assert!((pos - libm::atan(x)).abs() < 1e-15, "atan({})", x);
            x *= 1.7;
        }
    }

    #[test]
    fn test_atan2_quadrants() {
        let d = <Avx2 as Target>::F64::new();
        let y = d.load_u(&[1.0, 1.0, -1.0, -1.0]);
        let x = d.load_u(&[1.0, -1.0, -1.0, 1.0]);
        let r = atan2(d, y, x).to_array();
        let expected = [FRAC_PI_4, 3.0 * FRAC_PI_4, -3.0 * FRAC_PI_4, -FRAC_PI_4];
        for i in 0..4 {
            assert!((r[i] - expected[i]).abs() < 1e-15, "lane {}: {}", i, r[i]);
        }
    }

    #[test]
    fn test_atan2_signed_zeros() {
        let d = <Avx2 as Target>::F32::new();
        let y = d.load_u(&[0.0, -0.0, 0.0, -0.0, 1.0, -1.0, 0.0, 0.0]);
        let x = d.load_u(&[0.0, 0.0, -0.0, -0.0, 0.0, -0.0, 5.0, -5.0]);
        let r = atan2(d, y, x).to_array();
        assert_eq!(r[0].to_bits(), 0.0f32.to_bits());
        assert_eq!(r[1].to_bits(), (-0.0f32).to_bits());
        assert_eq!(r[2], core::f32::consts::PI);
        assert_eq!(r[3], -core::f32::consts::PI);
        assert_eq!(r[4], core::f32::consts::FRAC_PI_2);
        assert_eq!(r[5], -core::f32::consts::FRAC_PI_2);
        assert_eq!(r[6], 0.0);
        assert_eq!(r[7], core::f32::consts::PI);
    }

    #[test]
    fn test_atan2_infinities_and_nan() {
        let d = <Neon as Target>::F64::new();
        let inf = f64::INFINITY;
        let r = atan2(d, d.load_u(&[inf, inf]), d.load_u(&[inf, -inf])).to_array();
        assert!((r[0] - FRAC_PI_4).abs() < 1e-15);
        assert!((r[1] - 3.0 * FRAC_PI_4).abs() < 1e-15);

        let r = atan2(d, d.load_u(&[inf, 2.0]), d.load_u(&[2.0, -inf])).to_array();
        assert_eq!(r[0], HALF_PI);
        assert_eq!(r[1], PI64);

        let r = atan2(d, d.load_u(&[f64::NAN, 1.0]), d.load_u(&[1.0, f64::NAN])).to_array();
        assert!(r[0].is_nan() && r[1].is_nan());
    }
}
