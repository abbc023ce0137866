//! Test utilities for lanekit-math
//!
//! ULP measurement against `libm`, deterministic sweep generators, sweep
//! runners over any descriptor, and proptest strategies.

#![allow(dead_code)]

use lanekit_math::{Descriptor, VecOf};
use proptest::prelude::*;

/// Points per sweep
pub const SWEEP_POINTS: usize = 100_000;

/// Allowance for `libm`'s own rounding when it serves as the f64 reference
///
/// libm's f64 functions are correctly rounded or within 1 ULP, so one step
/// of distance may belong to the reference rather than the kernel.
pub const REFERENCE_SLACK_ULP: u64 = 1;

// ============================================================================
// ULP measurement
// ============================================================================

/// Size of one f32 ULP at the magnitude of `reference`
pub fn ulp_f32(reference: f64) -> f64 {
    let (_, e) = libm::frexp(reference);
    libm::ldexp(1.0, (e - 1).max(-126) - 23)
}

/// Error of an f32 result in f32 ULPs, measured against an f64 reference
///
/// Matching NaNs and matching infinities count as exact.
pub fn ulp_error_f32(got: f32, reference: f64) -> f64 {
    if got.is_nan() || reference.is_nan() {
        return if got.is_nan() && reference.is_nan() {
            0.0
        } else {
            f64::INFINITY
        };
    }
    if got.is_infinite() || reference == 0.0 {
        return if got == reference as f32 {
            0.0
        } else {
            f64::INFINITY
        };
    }
    (got as f64 - reference).abs() / ulp_f32(reference)
}

/// Monotonic integer image of an f64, so adjacent floats differ by one
fn ordered(x: f64) -> i128 {
    let bits = x.to_bits() as i64;
    if bits < 0 {
        (i64::MIN as i128) - bits as i128
    } else {
        bits as i128
    }
}

/// Number of representable f64 values between `got` and `expected`
pub fn ulp_distance_f64(got: f64, expected: f64) -> u64 {
    if got.is_nan() || expected.is_nan() {
        return if got.is_nan() && expected.is_nan() {
            0
        } else {
            u64::MAX
        };
    }
    (ordered(got) - ordered(expected)).unsigned_abs() as u64
}

// ============================================================================
// Sweep generators
// ============================================================================

/// i-th point of the golden-ratio sequence in [0, 1)
fn golden(i: usize) -> f64 {
    const PHI_FRAC: f64 = 0.618_033_988_749_894_9;
    (0.5 + i as f64 * PHI_FRAC).fract()
}

/// `SWEEP_POINTS` points evenly spread over [lo, hi]
pub fn linear(lo: f64, hi: f64) -> impl Iterator<Item = f64> {
    (0..SWEEP_POINTS).map(move |i| lo + (hi - lo) * golden(i))
}

/// `SWEEP_POINTS` points evenly spread in log scale over [lo, hi], lo > 0
pub fn log_scale(lo: f64, hi: f64) -> impl Iterator<Item = f64> {
    let (a, b) = (lo.ln(), hi.ln());
    (0..SWEEP_POINTS).map(move |i| (a + (b - a) * golden(i)).exp())
}

// ============================================================================
// Sweep runners
// ============================================================================

/// Worst f32 ULP error of `kernel` over `points` and where it occurred
pub fn worst_ulp_f32<D, K>(
    d: D,
    kernel: K,
    reference: fn(f64) -> f64,
    points: impl Iterator<Item = f64>,
) -> (f64, f32)
where
    D: Descriptor<Lane = f32>,
    K: Fn(D, VecOf<D>) -> VecOf<D>,
{
    let points: Vec<f32> = points.map(|x| x as f32).collect();
    let mut input = vec![0.0f32; d.lanes()];
    let mut output = vec![0.0f32; d.lanes()];
    let mut worst = (0.0, 0.0);

    for chunk in points.chunks(d.lanes()) {
        input[..chunk.len()].copy_from_slice(chunk);
        d.store_u(kernel(d, d.load_u(&input)), &mut output);
        for (&x, &y) in chunk.iter().zip(&output) {
            let err = ulp_error_f32(y, reference(x as f64));
            if err > worst.0 {
                worst = (err, x);
            }
        }
    }
    worst
}

/// Worst f64 ULP distance of `kernel` from `reference` over `points`
pub fn worst_ulp_f64<D, K>(
    d: D,
    kernel: K,
    reference: fn(f64) -> f64,
    points: impl Iterator<Item = f64>,
) -> (u64, f64)
where
    D: Descriptor<Lane = f64>,
    K: Fn(D, VecOf<D>) -> VecOf<D>,
{
    let points: Vec<f64> = points.collect();
    let mut input = vec![0.0f64; d.lanes()];
    let mut output = vec![0.0f64; d.lanes()];
    let mut worst = (0, 0.0);

    for chunk in points.chunks(d.lanes()) {
        input[..chunk.len()].copy_from_slice(chunk);
        d.store_u(kernel(d, d.load_u(&input)), &mut output);
        for (&x, &y) in chunk.iter().zip(&output) {
            let dist = ulp_distance_f64(y, reference(x));
            if dist > worst.0 {
                worst = (dist, x);
            }
        }
    }
    worst
}

/// Assert the f32 sweep stays within `bound` ULP
pub fn assert_ulp_f32<D, K>(
    d: D,
    name: &str,
    kernel: K,
    reference: fn(f64) -> f64,
    points: impl Iterator<Item = f64>,
    bound: f64,
) where
    D: Descriptor<Lane = f32>,
    K: Fn(D, VecOf<D>) -> VecOf<D>,
{
    let (worst, at) = worst_ulp_f32(d, kernel, reference, points);
    assert!(
        worst <= bound,
        "{} f32 ({:?}): {:.3} ULP at {:e}, bound {}",
        name,
        d,
        worst,
        at,
        bound
    );
}

/// Assert the f64 sweep stays within `bound` ULP of `libm` (plus slack)
pub fn assert_ulp_f64<D, K>(
    d: D,
    name: &str,
    kernel: K,
    reference: fn(f64) -> f64,
    points: impl Iterator<Item = f64>,
    bound: u64,
) where
    D: Descriptor<Lane = f64>,
    K: Fn(D, VecOf<D>) -> VecOf<D>,
{
    let (worst, at) = worst_ulp_f64(d, kernel, reference, points);
    assert!(
        worst <= bound + REFERENCE_SLACK_ULP,
        "{} f64 ({:?}): {} ULP at {:e}, bound {} + {}",
        name,
        d,
        worst,
        at,
        bound,
        REFERENCE_SLACK_ULP
    );
}

// ============================================================================
// Proptest strategies
// ============================================================================

/// Any f32 bit pattern, NaNs and infinities included
pub fn any_bits_f32() -> impl Strategy<Value = f32> {
    any::<u32>().prop_map(f32::from_bits)
}

/// Any f64 bit pattern, NaNs and infinities included
pub fn any_bits_f64() -> impl Strategy<Value = f64> {
    any::<u64>().prop_map(f64::from_bits)
}

/// Finite f32 values of moderate magnitude
pub fn moderate_f32() -> impl Strategy<Value = f32> {
    -1.0e6f32..1.0e6f32
}

/// Finite f64 values of moderate magnitude
pub fn moderate_f64() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6f64
}

/// Special values every kernel must map to a documented result
pub fn special_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(f64::NAN),
        Just(f64::MIN_POSITIVE),
        Just(f64::from_bits(1)),
        Just(f64::MAX),
        Just(-f64::MAX),
    ]
}
