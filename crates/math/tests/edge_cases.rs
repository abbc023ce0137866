//! Edge case tests for lanekit-math kernels
//!
//! Exact identities, special-value propagation and the documented results
//! for inputs outside each kernel's domain.

mod test_utils;

use lanekit_math::math;
use lanekit_math::target::{Avx2, Avx512, Neon, Scalar, Sse4, Target};
use lanekit_math::{Descriptor, FloatDescriptor, SimdVector, VecOf};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use test_utils::*;

type F32x8 = <Avx2 as Target>::F32;
type F64x4 = <Avx2 as Target>::F64;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 10_000,
        ..ProptestConfig::default()
    }
}

fn lanes<D: Descriptor>(d: D, v: VecOf<D>) -> Vec<D::Lane> {
    let mut out = vec![D::Lane::default(); d.lanes()];
    d.store_u(v, &mut out);
    out
}

/// Every unary kernel, named
fn unary_kernels<D: FloatDescriptor>() -> Vec<(&'static str, fn(D, VecOf<D>) -> VecOf<D>)> {
    vec![
        ("exp", math::exp::<D>),
        ("exp2", math::exp2::<D>),
        ("expm1", math::expm1::<D>),
        ("log", math::log::<D>),
        ("log1p", math::log1p::<D>),
        ("log2", math::log2::<D>),
        ("log10", math::log10::<D>),
        ("sin", math::sin::<D>),
        ("cos", math::cos::<D>),
        ("tan", math::tan::<D>),
        ("asin", math::asin::<D>),
        ("acos", math::acos::<D>),
        ("atan", math::atan::<D>),
        ("sinh", math::sinh::<D>),
        ("cosh", math::cosh::<D>),
        ("tanh", math::tanh::<D>),
        ("asinh", math::asinh::<D>),
        ("acosh", math::acosh::<D>),
        ("atanh", math::atanh::<D>),
    ]
}

// ============================================================================
// Exact identities on every target
// ============================================================================

fn check_exact_identities<Tg: Target>() {
    let d = Tg::F32::new();
    assert!(lanes(d, math::exp(d, d.set(0.0))).iter().all(|&v| v == 1.0));
    assert!(lanes(d, math::log(d, d.set(1.0))).iter().all(|&v| v == 0.0));
    assert!(lanes(d, math::log1p(d, d.set(0.0))).iter().all(|&v| v == 0.0));
    assert!(lanes(d, math::exp2(d, d.set(-3.0))).iter().all(|&v| v == 0.125));
    assert!(lanes(d, math::cosh(d, d.set(0.0))).iter().all(|&v| v == 1.0));

    let d = Tg::F64::new();
    assert!(lanes(d, math::exp(d, d.set(0.0))).iter().all(|&v| v == 1.0));
    assert!(lanes(d, math::log(d, d.set(1.0))).iter().all(|&v| v == 0.0));
    assert!(lanes(d, math::log1p(d, d.set(0.0))).iter().all(|&v| v == 0.0));
    assert!(lanes(d, math::exp2(d, d.set(10.0))).iter().all(|&v| v == 1024.0));
    assert!(lanes(d, math::acosh(d, d.set(1.0))).iter().all(|&v| v == 0.0));
}

#[test]
fn test_exact_identities_on_every_target() {
    check_exact_identities::<Avx512>();
    check_exact_identities::<Avx2>();
    check_exact_identities::<Sse4>();
    check_exact_identities::<Neon>();
    check_exact_identities::<Scalar>();
}

#[test]
fn test_odd_kernels_keep_signed_zero() {
    let d = F64x4::new();
    let zeros = d.load_u(&[0.0, -0.0, 0.0, -0.0]);
    for (name, kernel) in unary_kernels::<F64x4>() {
        if !matches!(name, "sin" | "tan" | "asin" | "atan" | "sinh" | "tanh" | "asinh" | "atanh" | "log1p") {
            continue;
        }
        let out = lanes(d, kernel(d, zeros));
        for (i, v) in out.iter().enumerate() {
            let want = if i % 2 == 0 { 0.0f64 } else { -0.0 };
            assert_eq!(v.to_bits(), want.to_bits(), "{}(lane {})", name, i);
        }
    }
}

// ============================================================================
// Special values
// ============================================================================

#[test]
fn test_nan_propagates_through_every_kernel() {
    let d = F32x8::new();
    for (name, kernel) in unary_kernels::<F32x8>() {
        assert!(
            lanes(d, kernel(d, d.set(f32::NAN))).iter().all(|v| v.is_nan()),
            "{}(NaN) f32",
            name
        );
    }
    let d = F64x4::new();
    for (name, kernel) in unary_kernels::<F64x4>() {
        assert!(
            lanes(d, kernel(d, d.set(f64::NAN))).iter().all(|v| v.is_nan()),
            "{}(NaN) f64",
            name
        );
    }
}

#[test]
fn test_results_at_infinity() {
    let d = F64x4::new();
    let x = d.load_u(&[f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY]);
    let inf = f64::INFINITY;
    let half_pi = core::f64::consts::FRAC_PI_2;

    let cases: Vec<(&str, fn(F64x4, VecOf<F64x4>) -> VecOf<F64x4>, [f64; 2])> = vec![
        ("exp", math::exp, [inf, 0.0]),
        ("exp2", math::exp2, [inf, 0.0]),
        ("expm1", math::expm1, [inf, -1.0]),
        ("atan", math::atan, [half_pi, -half_pi]),
        ("sinh", math::sinh, [inf, -inf]),
        ("cosh", math::cosh, [inf, inf]),
        ("tanh", math::tanh, [1.0, -1.0]),
        ("asinh", math::asinh, [inf, -inf]),
    ];
    for (name, kernel, [pos, neg]) in cases {
        let out = lanes(d, kernel(d, x));
        assert_eq!(out, vec![pos, neg, pos, neg], "{}(+-inf)", name);
    }

    for (name, kernel) in unary_kernels::<F64x4>() {
        if matches!(name, "sin" | "cos" | "tan") {
            assert!(lanes(d, kernel(d, x)).iter().all(|v| v.is_nan()), "{}(inf)", name);
        }
    }
}

#[test]
fn test_log_family_domain() {
    let d = F32x8::new();
    let x = d.load_u(&[0.0, -0.0, -1e-30, -5.0, f32::INFINITY, f32::NEG_INFINITY, 1.0, 2.0]);

    for (name, kernel) in unary_kernels::<F32x8>() {
        if !matches!(name, "log" | "log2" | "log10") {
            continue;
        }
        let out = lanes(d, kernel(d, x));
        assert_eq!(out[0], f32::NEG_INFINITY, "{}(0)", name);
        assert_eq!(out[1], f32::NEG_INFINITY, "{}(-0)", name);
        assert!(out[2].is_nan() && out[3].is_nan(), "{}(<0)", name);
        assert_eq!(out[4], f32::INFINITY, "{}(inf)", name);
        assert!(out[5].is_nan(), "{}(-inf)", name);
        assert_eq!(out[6], 0.0, "{}(1)", name);
    }

    let y = lanes(d, math::log1p(d, d.load_u(&[-1.0, -1.5, f32::INFINITY, 0.0, -0.0, 1e-30, -1e-30, 1.0])));
    assert_eq!(y[0], f32::NEG_INFINITY);
    assert!(y[1].is_nan());
    assert_eq!(y[2], f32::INFINITY);
    assert_eq!(y[3], 0.0);
    assert_eq!(y[5], 1e-30);
    assert_eq!(y[6], -1e-30);
}

#[test]
fn test_exp_underflow_and_overflow_bounds() {
    let d = F32x8::new();
    let x = d.load_u(&[-104.5, -200.0, 88.8, 1000.0, -100.0, 88.7, -151.5, 128.0]);
    let y = lanes(d, math::exp(d, x));
    assert_eq!(&y[..4], &[0.0, 0.0, f32::INFINITY, f32::INFINITY]);
    assert!(y[4] > 0.0 && y[4] < f32::MIN_POSITIVE, "exp(-100) is subnormal");
    assert!(y[5].is_finite());

    let y = lanes(d, math::exp2(d, x));
    assert_eq!(y[6], 0.0);
    assert_eq!(y[7], f32::INFINITY);

    let d = F64x4::new();
    let y = lanes(d, math::exp(d, d.load_u(&[-1000.5, -740.0, 709.8, 709.7])));
    assert_eq!(y[0], 0.0);
    assert!(y[1] > 0.0 && y[1] < 1e-320);
    assert_eq!(y[2], f64::INFINITY);
    assert!(y[3].is_finite());
}

#[test]
fn test_inverse_domains() {
    let d = F64x4::new();
    let x = d.load_u(&[1.5, -1.0000001, 2.0, -3.0]);
    for (name, kernel) in unary_kernels::<F64x4>() {
        if matches!(name, "asin" | "acos" | "atanh") {
            assert!(lanes(d, kernel(d, x)).iter().all(|v| v.is_nan()), "{} outside [-1, 1]", name);
        }
    }
    let y = lanes(d, math::acosh(d, d.load_u(&[0.999, -1.0, 0.0, f64::NEG_INFINITY])));
    assert!(y.iter().all(|v| v.is_nan()));

    let y = lanes(d, math::atanh(d, d.load_u(&[1.0, -1.0, 0.0, 0.5])));
    assert_eq!(y[0], f64::INFINITY);
    assert_eq!(y[1], f64::NEG_INFINITY);
}

// ============================================================================
// Range properties over arbitrary bit patterns
// ============================================================================

#[test]
fn test_kernel_ranges_hold_for_any_input() {
    let d = <Sse4 as Target>::F64::new();
    let pi = core::f64::consts::PI;
    proptest!(proptest_config(), |(x in prop_oneof![any_bits_f64(), special_f64()])| {
        let v = d.set(x);
        let e = math::exp(d, v).get_lane();
        prop_assert!(e.is_nan() || e >= 0.0);

        if x.abs() <= 39000.0 {
            let s = math::sin(d, v).get_lane();
            let c = math::cos(d, v).get_lane();
            prop_assert!(s.abs() <= 1.0 + 1e-15 && c.abs() <= 1.0 + 1e-15);
        }

        let t = math::tanh(d, v).get_lane();
        prop_assert!(x.is_nan() || t.abs() <= 1.0);

        let a = math::atan(d, v).get_lane();
        prop_assert!(x.is_nan() || a.abs() <= pi / 2.0 + 1e-15);

        if x < 0.0 {
            prop_assert!(math::log(d, v).get_lane().is_nan());
        }
        if x.is_nan() {
            prop_assert!(math::log(d, v).get_lane().is_nan());
            prop_assert!(math::expm1(d, v).get_lane().is_nan());
        }
    });
}

#[test]
fn test_atan2_range_for_any_pair() {
    let d = <Neon as Target>::F32::new();
    let pi = core::f32::consts::PI;
    proptest!(proptest_config(), |(y in any_bits_f32(), x in any_bits_f32())| {
        let r = math::atan2(d, d.set(y), d.set(x)).get_lane();
        if x.is_nan() || y.is_nan() {
            prop_assert!(r.is_nan());
        } else {
            prop_assert!(r.abs() <= pi, "atan2({}, {}) = {}", y, x, r);
            prop_assert_eq!(r.is_sign_negative(), y.is_sign_negative());
        }
    });
}

#[test]
fn test_odd_symmetry() {
    let d = <Avx512 as Target>::F32::new();
    proptest!(proptest_config(), |(x in moderate_f32())| {
        for (name, kernel) in unary_kernels::<<Avx512 as Target>::F32>() {
            if !matches!(name, "sin" | "tan" | "atan" | "sinh" | "tanh" | "asinh") {
                continue;
            }
            let pos = kernel(d, d.set(x)).get_lane();
            let neg = kernel(d, d.set(-x)).get_lane();
            if !(pos.is_nan() && neg.is_nan()) {
                prop_assert_eq!(pos.to_bits(), (-neg).to_bits(), "{}({})", name, x);
            }
        }
    });
}
