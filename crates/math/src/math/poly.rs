//! Shared kernel building blocks
//!
//! - [`estrin`]: polynomial evaluation by Estrin's scheme
//! - [`pow2i`] / [`ldexp_short`]: build 2^q by writing the exponent field
//! - [`splat`]: broadcast a double constant rounded to the lane type

use crate::descriptor::{FloatDescriptor, VecOf};
use crate::lane::{FloatLane, IntLane};
use crate::traits::{SimdFloat, SimdInt, SimdVector};

/// Longest coefficient table any kernel uses
const MAX_TERMS: usize = 24;

/// Broadcast `value`, rounded to the descriptor's lane type
#[inline(always)]
pub fn splat<D: FloatDescriptor>(d: D, value: f64) -> VecOf<D> {
    d.set(<D::Lane as FloatLane>::from_f64(value))
}

/// Broadcast an integer into the same-width integer vector of `V`
#[inline(always)]
pub(crate) fn int_splat<V: SimdFloat>(value: i64) -> V::Int {
    V::Int::splat(<<V::Lane as FloatLane>::Int as IntLane>::from_i64(value))
}

/// Evaluate `c[0] + c[1] x + c[2] x^2 + ...` by Estrin's scheme
///
/// Adjacent terms are paired as `c[i] + c[i+1] * p` with `p = x`, then the
/// pairs are paired again with `p = x^2`, `x^4`, ... The pairs at each level
/// are independent, which shortens the dependency chain compared to Horner.
///
/// # Panics
///
/// Panics if `coefficients` is empty or longer than 24 terms.
#[inline(always)]
pub fn estrin<V: SimdFloat>(x: V, coefficients: &[V::Lane]) -> V {
    let n = coefficients.len();
    assert!(n > 0 && n <= MAX_TERMS, "estrin needs 1..=24 coefficients, got {}", n);

    let mut terms = [V::zero(); MAX_TERMS];
    for (term, &c) in terms.iter_mut().zip(coefficients) {
        *term = V::splat(c);
    }

    let mut len = n;
    let mut power = x;
    while len > 1 {
        let half = len / 2;
        for i in 0..half {
            terms[i] = terms[2 * i + 1].mul_add(power, terms[2 * i]);
        }
        if len % 2 == 1 {
            terms[half] = terms[len - 1];
        }
        len = half + len % 2;
        power = power.mul(power);
    }
    terms[0]
}

/// 2^q for integer lanes q in the normal exponent range
#[inline(always)]
pub fn pow2i<V: SimdFloat>(q: V::Int) -> V {
    let biased = q.add(int_splat::<V>(V::Lane::EXPONENT_BIAS));
    V::from_int_bits(biased.shift_left(V::Lane::MANTISSA_BITS))
}

/// `y * 2^q`, splitting q in two halves so each factor stays normal
///
/// Covers |q| up to twice the exponent range, enough for results that
/// overflow to infinity or underflow into subnormals.
#[inline(always)]
pub fn ldexp_short<V: SimdFloat>(y: V, q: V::Int) -> V {
    let half = q.shift_right(1);
    y.mul(pow2i::<V>(half)).mul(pow2i::<V>(q.sub(half)))
}
