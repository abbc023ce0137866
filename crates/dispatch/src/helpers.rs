//! Slice drivers bridging exported functions to vector kernels
//!
//! Each driver walks the input in full-register chunks with unaligned loads
//! and stores. A partial tail is copied into a zero-padded [`AlignedBlock`]
//! and run through the same kernel, so tail lanes see the identical vector
//! code path as every other lane.

use lanekit_math::ops::horizontal_sum;
use lanekit_math::{AlignedBlock, Descriptor, SimdVector, VecOf};

/// Capacity of the tail block; the widest descriptor (64 x u8) fits
const TAIL_LANES: usize = 64;

/// Split `len` into the length covered by whole chunks and the tail length
#[inline(always)]
fn split(len: usize, lanes: usize) -> (usize, usize) {
    let tail = len % lanes;
    (len - tail, tail)
}

/// Apply a unary kernel over `input`, writing `output`
///
/// # Panics
///
/// Panics if the slices differ in length.
///
/// # Example
///
/// ```
/// use lanekit_dispatch::helpers::process_unary;
/// use lanekit_dispatch::lanekit_math::{math, Simd, target::Sse4};
///
/// let input = [0.0f32; 7];
/// let mut output = [0.0f32; 7];
/// process_unary(Simd::<f32, 4, Sse4>::new(), &input, &mut output, math::exp);
/// assert_eq!(output, [1.0; 7]);
/// ```
#[inline(always)]
pub fn process_unary<D, F>(d: D, input: &[D::Lane], output: &mut [D::Lane], kernel: F)
where
    D: Descriptor,
    F: Fn(D, VecOf<D>) -> VecOf<D>,
{
    assert_eq!(
        input.len(),
        output.len(),
        "Input and output slices must have the same length"
    );

    let n = d.lanes();
    let (body, tail) = split(input.len(), n);

    for (src, dst) in input[..body]
        .chunks_exact(n)
        .zip(output[..body].chunks_exact_mut(n))
    {
        d.store_u(kernel(d, d.load_u(src)), dst);
    }

    if tail > 0 {
        let mut block = AlignedBlock::<D::Lane, TAIL_LANES>::from_prefix(&input[body..]);
        let v = kernel(d, block.load_chunk(d, 0));
        block.store_chunk(d, 0, v);
        output[body..].copy_from_slice(&block.as_slice()[..tail]);
    }
}

/// Apply a binary kernel over `a` and `b`, writing `output`
///
/// # Panics
///
/// Panics if the slices differ in length.
#[inline(always)]
pub fn process_binary<D, F>(d: D, a: &[D::Lane], b: &[D::Lane], output: &mut [D::Lane], kernel: F)
where
    D: Descriptor,
    F: Fn(D, VecOf<D>, VecOf<D>) -> VecOf<D>,
{
    assert_eq!(a.len(), b.len(), "Input slices must have the same length");
    assert_eq!(
        a.len(),
        output.len(),
        "Input and output slices must have the same length"
    );

    let n = d.lanes();
    let (body, tail) = split(a.len(), n);

    for ((x, y), dst) in a[..body]
        .chunks_exact(n)
        .zip(b[..body].chunks_exact(n))
        .zip(output[..body].chunks_exact_mut(n))
    {
        d.store_u(kernel(d, d.load_u(x), d.load_u(y)), dst);
    }

    if tail > 0 {
        let x = AlignedBlock::<D::Lane, TAIL_LANES>::from_prefix(&a[body..]);
        let mut y = AlignedBlock::<D::Lane, TAIL_LANES>::from_prefix(&b[body..]);
        let v = kernel(d, x.load_chunk(d, 0), y.load_chunk(d, 0));
        y.store_chunk(d, 0, v);
        output[body..].copy_from_slice(&y.as_slice()[..tail]);
    }
}

/// Apply a kernel with two results over `input`, writing `first` and `second`
///
/// # Panics
///
/// Panics if the slices differ in length.
#[inline(always)]
pub fn process_unary_pair<D, F>(
    d: D,
    input: &[D::Lane],
    first: &mut [D::Lane],
    second: &mut [D::Lane],
    kernel: F,
) where
    D: Descriptor,
    F: Fn(D, VecOf<D>) -> (VecOf<D>, VecOf<D>),
{
    assert_eq!(
        input.len(),
        first.len(),
        "Input and output slices must have the same length"
    );
    assert_eq!(
        input.len(),
        second.len(),
        "Input and output slices must have the same length"
    );

    let n = d.lanes();
    let (body, tail) = split(input.len(), n);

    for ((src, p), q) in input[..body]
        .chunks_exact(n)
        .zip(first[..body].chunks_exact_mut(n))
        .zip(second[..body].chunks_exact_mut(n))
    {
        let (u, v) = kernel(d, d.load_u(src));
        d.store_u(u, p);
        d.store_u(v, q);
    }

    if tail > 0 {
        let mut p = AlignedBlock::<D::Lane, TAIL_LANES>::from_prefix(&input[body..]);
        let mut q = AlignedBlock::<D::Lane, TAIL_LANES>::new();
        let (u, v) = kernel(d, p.load_chunk(d, 0));
        p.store_chunk(d, 0, u);
        q.store_chunk(d, 0, v);
        first[body..].copy_from_slice(&p.as_slice()[..tail]);
        second[body..].copy_from_slice(&q.as_slice()[..tail]);
    }
}

/// Sum of every element of `input`
///
/// Lanes accumulate independently and are reduced once at the end, so the
/// rounding of float sums depends on the lane count.
#[inline(always)]
pub fn reduce_sum<D: Descriptor>(d: D, input: &[D::Lane]) -> D::Lane {
    let n = d.lanes();
    let (body, tail) = split(input.len(), n);

    let mut acc = d.zero();
    for chunk in input[..body].chunks_exact(n) {
        acc = acc.add(d.load_u(chunk));
    }
    if tail > 0 {
        let block = AlignedBlock::<D::Lane, TAIL_LANES>::from_prefix(&input[body..]);
        acc = acc.add(block.load_chunk(d, 0));
    }
    horizontal_sum(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanekit_math::target::{Avx2, Avx512, Scalar, Sse4};
    use lanekit_math::{math, Simd};

    #[test]
    fn test_process_unary_exact_chunks() {
        let d = Simd::<f32, 8, Avx2>::new();
        let input = [2.0f32; 16];
        let mut output = [0.0f32; 16];
        process_unary(d, &input, &mut output, math::exp);
        assert!(output.iter().all(|&y| (y - 7.389056).abs() < 1e-5));
    }

    #[test]
    fn test_process_unary_tail_matches_body() {
        let d = Simd::<f64, 8, Avx512>::new();
        let input: Vec<f64> = (0..13).map(|i| i as f64 * 0.25).collect();
        let mut output = vec![0.0; 13];
        process_unary(d, &input, &mut output, math::sin);

        let mut reference = vec![0.0; 16];
        let mut padded = input.clone();
        padded.resize(16, 0.0);
        process_unary(d, &padded, &mut reference, math::sin);
        assert_eq!(output[..], reference[..13]);
    }

    #[test]
    fn test_process_unary_empty() {
        let d = Simd::<f32, 4, Sse4>::new();
        let mut output: [f32; 0] = [];
        process_unary(d, &[], &mut output, math::log);
    }

    #[test]
    fn test_process_binary_basic() {
        let d = Simd::<i32, 4, Sse4>::new();
        let a = [1, 2, 3, 4, 5, 6];
        let b = [4, 5, 6, 7, 8, i32::MAX];
        let mut output = [0; 6];
        process_binary(d, &a, &b, &mut output, |_, x, y| x.add(y));
        assert_eq!(output, [5, 7, 9, 11, 13, i32::MIN + 5]);
    }

    #[test]
    fn test_process_unary_pair_sin_cos() {
        let d = Simd::<f32, 1, Scalar>::new();
        let input = [0.0f32, 1.0, -2.0];
        let (mut s, mut c) = ([0.0f32; 3], [0.0f32; 3]);
        process_unary_pair(d, &input, &mut s, &mut c, math::sin_cos);
        assert_eq!(s[0], 0.0);
        assert!((c[0] - 1.0).abs() <= f32::EPSILON);
        assert!((s[1] - 1.0f32.sin()).abs() < 1e-6);
        assert!((c[2] - (-2.0f32).cos()).abs() < 1e-6);
    }

    #[test]
    fn test_reduce_sum_with_tail() {
        let d = Simd::<u32, 8, Avx2>::new();
        let input: Vec<u32> = (1..=21).collect();
        assert_eq!(reduce_sum(d, &input), 231);
        assert_eq!(reduce_sum(d, &[]), 0);
    }

    #[test]
    #[should_panic(expected = "Input and output slices must have the same length")]
    fn test_process_unary_length_mismatch() {
        let d = Simd::<f32, 4, Sse4>::new();
        let mut output = [0.0f32; 3];
        process_unary(d, &[1.0; 4], &mut output, math::exp);
    }
}
