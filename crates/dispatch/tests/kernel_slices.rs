//! Slice-level tests for the exported kernels
//!
//! Every exported function is checked against `libm` on a domain where its
//! accuracy bound applies, at lengths that exercise both the chunked body
//! and the padded tail.

use lanekit_dispatch::*;
use proptest::prelude::*;

type SliceFn<T> = fn(&[T], &mut [T]);

fn ulp_diff_f32(a: f32, b: f32) -> u32 {
    if a == b {
        return 0;
    }
    let key = |x: f32| {
        let bits = x.to_bits() as i32;
        if bits < 0 {
            i32::MIN.wrapping_sub(bits)
        } else {
            bits
        }
    };
    key(a).abs_diff(key(b))
}

fn ulp_diff_f64(a: f64, b: f64) -> u64 {
    if a == b {
        return 0;
    }
    let key = |x: f64| {
        let bits = x.to_bits() as i64;
        if bits < 0 {
            i64::MIN.wrapping_sub(bits)
        } else {
            bits
        }
    };
    key(a).abs_diff(key(b))
}

fn close_f32(got: f32, want: f32, ulps: u32) -> bool {
    (got.is_nan() && want.is_nan())
        || ulp_diff_f32(got, want) <= ulps
        || (got - want).abs() <= 4.0 * f32::EPSILON
}

fn close_f64(got: f64, want: f64, ulps: u64) -> bool {
    (got.is_nan() && want.is_nan())
        || ulp_diff_f64(got, want) <= ulps
        || (got - want).abs() <= 4.0 * f64::EPSILON
}

fn grid(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| lo + (hi - lo) * i as f64 / (n - 1) as f64).collect()
}

fn f32_kernels() -> Vec<(&'static str, SliceFn<f32>, fn(f32) -> f32, (f64, f64))> {
    vec![
        ("exp", exp_f32, libm::expf, (-80.0, 80.0)),
        ("exp2", exp2_f32, libm::exp2f, (-120.0, 120.0)),
        ("expm1", expm1_f32, libm::expm1f, (-10.0, 10.0)),
        ("log", log_f32, libm::logf, (1e-6, 1e6)),
        ("log1p", log1p_f32, libm::log1pf, (-0.9, 100.0)),
        ("log2", log2_f32, libm::log2f, (1e-6, 1e6)),
        ("log10", log10_f32, libm::log10f, (1e-6, 1e6)),
        ("sin", sin_f32, libm::sinf, (-100.0, 100.0)),
        ("cos", cos_f32, libm::cosf, (-100.0, 100.0)),
        ("tan", tan_f32, libm::tanf, (-1.2, 1.2)),
        ("asin", asin_f32, libm::asinf, (-1.0, 1.0)),
        ("acos", acos_f32, libm::acosf, (-1.0, 1.0)),
        ("atan", atan_f32, libm::atanf, (-50.0, 50.0)),
        ("sinh", sinh_f32, libm::sinhf, (-20.0, 20.0)),
        ("cosh", cosh_f32, libm::coshf, (-20.0, 20.0)),
        ("tanh", tanh_f32, libm::tanhf, (-12.0, 12.0)),
        ("asinh", asinh_f32, libm::asinhf, (-1e4, 1e4)),
        ("acosh", acosh_f32, libm::acoshf, (1.0, 1e4)),
        ("atanh", atanh_f32, libm::atanhf, (-0.99, 0.99)),
    ]
}

fn f64_kernels() -> Vec<(&'static str, SliceFn<f64>, fn(f64) -> f64, (f64, f64))> {
    vec![
        ("exp", exp_f64, libm::exp, (-700.0, 700.0)),
        ("exp2", exp2_f64, libm::exp2, (-1000.0, 1000.0)),
        ("expm1", expm1_f64, libm::expm1, (-30.0, 30.0)),
        ("log", log_f64, libm::log, (1e-12, 1e12)),
        ("log1p", log1p_f64, libm::log1p, (-0.9, 100.0)),
        ("log2", log2_f64, libm::log2, (1e-12, 1e12)),
        ("log10", log10_f64, libm::log10, (1e-12, 1e12)),
        ("sin", sin_f64, libm::sin, (-100.0, 100.0)),
        ("cos", cos_f64, libm::cos, (-100.0, 100.0)),
        ("tan", tan_f64, libm::tan, (-1.2, 1.2)),
        ("asin", asin_f64, libm::asin, (-1.0, 1.0)),
        ("acos", acos_f64, libm::acos, (-1.0, 1.0)),
        ("atan", atan_f64, libm::atan, (-50.0, 50.0)),
        ("sinh", sinh_f64, libm::sinh, (-20.0, 20.0)),
        ("cosh", cosh_f64, libm::cosh, (-20.0, 20.0)),
        ("tanh", tanh_f64, libm::tanh, (-20.0, 20.0)),
        ("asinh", asinh_f64, libm::asinh, (-1e6, 1e6)),
        ("acosh", acosh_f64, libm::acosh, (1.0, 1e6)),
        ("atanh", atanh_f64, libm::atanh, (-0.99, 0.99)),
    ]
}

#[test]
fn test_f32_exports_match_libm() {
    for (name, f, reference, (lo, hi)) in f32_kernels() {
        let input: Vec<f32> = grid(lo, hi, 1001).into_iter().map(|x| x as f32).collect();
        let mut output = vec![0.0f32; input.len()];
        f(&input, &mut output);
        for (&x, &y) in input.iter().zip(&output) {
            let want = reference(x);
            assert!(close_f32(y, want, 8), "{}_f32({}) = {}, libm {}", name, x, y, want);
        }
    }
}

#[test]
fn test_f64_exports_match_libm() {
    for (name, f, reference, (lo, hi)) in f64_kernels() {
        let input = grid(lo, hi, 1001);
        let mut output = vec![0.0f64; input.len()];
        f(&input, &mut output);
        for (&x, &y) in input.iter().zip(&output) {
            let want = reference(x);
            assert!(close_f64(y, want, 8), "{}_f64({}) = {}, libm {}", name, x, y, want);
        }
    }
}

#[test]
fn test_tail_matches_full_run() {
    let full: Vec<f32> = (0..70).map(|i| i as f32 * 0.29 - 9.0).collect();
    let wide: Vec<f64> = full.iter().map(|&x| f64::from(x)).collect();

    for (name, f, _, _) in f32_kernels() {
        let mut reference = vec![0.0f32; full.len()];
        f(&full, &mut reference);
        for len in 0..=full.len() {
            let mut output = vec![0.0f32; len];
            f(&full[..len], &mut output);
            for i in 0..len {
                assert_eq!(
                    output[i].to_bits(),
                    reference[i].to_bits(),
                    "{}_f32 lane {} at length {}",
                    name,
                    i,
                    len
                );
            }
        }
    }

    for (name, f, _, _) in f64_kernels() {
        let mut reference = vec![0.0f64; wide.len()];
        f(&wide, &mut reference);
        for len in 0..=wide.len() {
            let mut output = vec![0.0f64; len];
            f(&wide[..len], &mut output);
            for i in 0..len {
                assert_eq!(
                    output[i].to_bits(),
                    reference[i].to_bits(),
                    "{}_f64 lane {} at length {}",
                    name,
                    i,
                    len
                );
            }
        }
    }
}

#[test]
fn test_empty_slices_are_noops() {
    exp_f32(&[], &mut []);
    atan2_f64(&[], &[], &mut []);
    sin_cos_f32(&[], &mut [], &mut []);
    assert_eq!(sum_f64(&[]), 0.0);
}

#[test]
fn test_atan2_quadrants() {
    let y = [0.0f32, 1.0, 1.0, 1.0, 0.0, -1.0, -1.0, -1.0, 0.5];
    let x = [1.0f32, 1.0, 0.0, -1.0, -1.0, -1.0, 0.0, 1.0, 2.0];
    let mut output = [0.0f32; 9];
    atan2_f32(&y, &x, &mut output);
    for i in 0..y.len() {
        let want = libm::atan2f(y[i], x[i]);
        assert!(close_f32(output[i], want, 4), "atan2({}, {})", y[i], x[i]);
    }
}

#[test]
fn test_sin_cos_matches_separate_calls() {
    let input: Vec<f64> = grid(-50.0, 50.0, 333);
    let (mut s, mut c) = (vec![0.0; input.len()], vec![0.0; input.len()]);
    sin_cos_f64(&input, &mut s, &mut c);
    let (mut s2, mut c2) = (vec![0.0; input.len()], vec![0.0; input.len()]);
    sin_f64(&input, &mut s2);
    cos_f64(&input, &mut c2);
    for i in 0..input.len() {
        assert!(close_f64(s[i], s2[i], 2), "sin({})", input[i]);
        assert!(close_f64(c[i], c2[i], 2), "cos({})", input[i]);
    }
}

#[test]
fn test_sum_close_to_sequential() {
    let input: Vec<f32> = (0..1000).map(|i| (i % 17) as f32 * 0.25).collect();
    let sequential: f64 = input.iter().map(|&x| f64::from(x)).sum();
    assert!((f64::from(sum_f32(&input)) - sequential).abs() < 1e-2);
}

#[test]
#[should_panic(expected = "Input slices must have the same length")]
fn test_atan2_mismatch_panics() {
    let mut output = [0.0f64; 2];
    atan2_f64(&[1.0, 2.0], &[1.0], &mut output);
}

#[test]
#[should_panic(expected = "Input and output slices must have the same length")]
fn test_sin_cos_mismatch_panics() {
    let (mut s, mut c) = ([0.0f32; 3], [0.0f32; 2]);
    sin_cos_f32(&[1.0, 2.0, 3.0], &mut s, &mut c);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn prop_exp_log_inverse(values in prop::collection::vec(-80.0f32..80.0, 0..100)) {
        let mut e = vec![0.0f32; values.len()];
        exp_f32(&values, &mut e);
        let mut back = vec![0.0f32; values.len()];
        log_f32(&e, &mut back);
        for (&x, &y) in values.iter().zip(&back) {
            prop_assert!((x - y).abs() <= 1e-5 * x.abs().max(1.0), "log(exp({})) = {}", x, y);
        }
    }

    #[test]
    fn prop_tanh_bounded(values in prop::collection::vec(-1e3f64..1e3, 0..100)) {
        let mut output = vec![0.0f64; values.len()];
        tanh_f64(&values, &mut output);
        for &y in &output {
            prop_assert!((-1.0..=1.0).contains(&y));
        }
    }
}
