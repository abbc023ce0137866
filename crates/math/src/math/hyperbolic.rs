//! Hyperbolic functions: sinh, cosh, tanh
//!
//! All three are built on [`expm1`] and [`exp`] of |x|, which keeps sinh and
//! tanh accurate near zero where `exp(x) - exp(-x)` would cancel.
//!
//! # Error Bounds
//!
//! | Function | Domain                        | Max ULP | Outside domain |
//! |----------|-------------------------------|---------|----------------|
//! | `sinh`   | [-88.72, 88.72] / [-709, 709] | 4       | +-inf          |
//! | `cosh`   | [-88.72, 88.72] / [-709, 709] | 2       | +inf           |
//! | `tanh`   | all                           | 3       |                |
//!
//! tanh saturates to +-1 beyond |x| = 9 (f32) or 19 (f64).

use super::consts::KernelConstants;
use super::exp::{exp, expm1};
use super::poly::splat;
use crate::descriptor::{FloatDescriptor, VecOf};
use crate::lane::{FloatLane, Lane};
use crate::traits::{SimdFloat, SimdVector};

/// Hyperbolic sine
///
/// `sinh(a) = (e - 1/e) / 2` rewritten in terms of `y = expm1(a)` as
/// `y (y + 2) / (2 (y + 1))`.
#[inline(always)]
pub fn sinh<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let one = d.set(D::Lane::ONE);
    let a = x.abs();
    let y = expm1(d, a);
    let r = y
        .add(splat(d, 2.0))
        .div(y.add(one))
        .mul(y.mul(splat(d, 0.5)));

    let r = VecOf::<D>::if_then_else(
        a.gt(d.set(D::Lane::EXP_OVERFLOW)),
        d.set(D::Lane::INFINITY),
        r,
    );
    r.copysign(x)
}

/// Hyperbolic cosine
///
/// # Example
///
/// ```rust
/// use lanekit_math::{math::cosh, Descriptor, SimdVector};
/// use lanekit_math::target::{Avx2, Target};
///
/// let d = <Avx2 as Target>::F64::new();
/// assert_eq!(cosh(d, d.zero()).get_lane(), 1.0);
/// ```
#[inline(always)]
pub fn cosh<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let half = splat(d, 0.5);
    let e = exp(d, x.abs());
    e.mul_add(half, half.div(e))
}

/// Hyperbolic tangent
#[inline(always)]
pub fn tanh<D: FloatDescriptor>(d: D, x: VecOf<D>) -> VecOf<D> {
    let a = x.abs();
    let y = expm1(d, a.add(a));
    let r = y.div(y.add(splat(d, 2.0)));

    let r = VecOf::<D>::if_then_else(
        a.gt(d.set(D::Lane::TANH_SATURATION)),
        d.set(D::Lane::ONE),
        r,
    );
    r.copysign(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Descriptor;
    use crate::target::{Avx2, Scalar, Sse4, Target};

    #[test]
    fn test_sinh_small_and_sign() {
        let d = <Sse4 as Target>::F32::new();
        let y = sinh(d, d.load_u(&[0.0, -0.0, 1e-20, -1e-20])).to_array();
        assert_eq!(y[0].to_bits(), 0.0f32.to_bits());
        assert_eq!(y[1].to_bits(), (-0.0f32).to_bits());
        assert_eq!(y[2], 1e-20);
        assert_eq!(y[3], -1e-20);
    }

    #[test]
    fn test_sinh_cosh_overflow() {
        let d = <Avx2 as Target>::F64::new();
        let x = d.load_u(&[710.0, -710.0, f64::INFINITY, f64::NEG_INFINITY]);
        assert_eq!(
            sinh(d, x).to_array(),
            [f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY]
        );
        assert_eq!(cosh(d, x).to_array(), [f64::INFINITY; 4]);
        assert!(sinh(d, d.set(f64::NAN)).get_lane().is_nan());
        assert!(cosh(d, d.set(f64::NAN)).get_lane().is_nan());
    }

    #[test]
    fn test_sinh_cosh_identity() {
        let d = <Scalar as Target>::F64::new();
        for &x in &[0.1, 0.5, 1.0, 3.0, 10.0] {
            let s = sinh(d, d.set(x)).get_lane();
            let c = cosh(d, d.set(x)).get_lane();
            let identity = c * c - s * s;
            assert!((identity - 1.0).abs() < 1e-14 * c * c, "x = {}", x);
        }
    }

    #[test]
    fn test_tanh_saturation() {
        let d = <Avx2 as Target>::F32::new();
        let x = d.load_u(&[10.0, -10.0, 1e30, -1e30, f32::INFINITY, f32::NEG_INFINITY, 0.0, -0.0]);
        let y = tanh(d, x).to_array();
        assert_eq!(&y[..6], &[1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);
        assert_eq!(y[6].to_bits(), 0.0f32.to_bits());
        assert_eq!(y[7].to_bits(), (-0.0f32).to_bits());
        assert!(tanh(d, d.set(f32::NAN)).get_lane().is_nan());
    }

    #[test]
    fn test_tanh_midrange() {
        let d = <Sse4 as Target>::F64::new();
        let y = tanh(d, d.load_u(&[0.5, -2.0])).to_array();
        assert!((y[0] - 0.46211715726000974).abs() < 1e-15);
        assert!((y[1] + 0.9640275800758169).abs() < 1e-15);
    }
}
