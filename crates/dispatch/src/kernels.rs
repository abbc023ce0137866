//! Exported slice functions
//!
//! Every function here is dispatched through its own table to the
//! monomorphization for the chosen target variant. Accuracy and domains are
//! those of the matching kernel in [`lanekit_math::math`].
//!
//! # Panics
//!
//! Every function panics if its slices differ in length.

use crate::export_dispatched;
use crate::helpers::{process_binary, process_unary, process_unary_pair, reduce_sum};
use lanekit_math::{math, Descriptor, Target};

macro_rules! unary_exports {
    ($($kernel:ident: $lane:ty, $desc:ident => $name:ident, $body:ident, $doc:literal;)*) => {$(
        #[inline(always)]
        fn $body<Tg: Target>(input: &[$lane], output: &mut [$lane]) {
            process_unary(<Tg::$desc as Descriptor>::new(), input, output, math::$kernel);
        }

        export_dispatched! {
            #[doc = $doc]
            pub fn $name(input: &[$lane], output: &mut [$lane]) => $body;
        }
    )*};
}

unary_exports! {
    exp: f32, F32 => exp_f32, exp_f32_body, "`e^x` of each element, max 1 ULP";
    exp: f64, F64 => exp_f64, exp_f64_body, "`e^x` of each element, max 1 ULP";
    exp2: f32, F32 => exp2_f32, exp2_f32_body, "`2^x` of each element, max 2 ULP";
    exp2: f64, F64 => exp2_f64, exp2_f64_body, "`2^x` of each element, max 2 ULP";
    expm1: f32, F32 => expm1_f32, expm1_f32_body, "`e^x - 1` of each element, max 3 ULP";
    expm1: f64, F64 => expm1_f64, expm1_f64_body, "`e^x - 1` of each element, max 3 ULP";
    log: f32, F32 => log_f32, log_f32_body, "Natural logarithm of each element, max 4 ULP";
    log: f64, F64 => log_f64, log_f64_body, "Natural logarithm of each element, max 2 ULP";
    log1p: f32, F32 => log1p_f32, log1p_f32_body, "`ln(1 + x)` of each element, max 3 ULP";
    log1p: f64, F64 => log1p_f64, log1p_f64_body, "`ln(1 + x)` of each element, max 3 ULP";
    log2: f32, F32 => log2_f32, log2_f32_body, "Base-2 logarithm of each element, max 3 ULP";
    log2: f64, F64 => log2_f64, log2_f64_body, "Base-2 logarithm of each element, max 3 ULP";
    log10: f32, F32 => log10_f32, log10_f32_body, "Base-10 logarithm of each element, max 3 ULP";
    log10: f64, F64 => log10_f64, log10_f64_body, "Base-10 logarithm of each element, max 3 ULP";
    sin: f32, F32 => sin_f32, sin_f32_body, "Sine of each element, max 3 ULP within +-39000";
    sin: f64, F64 => sin_f64, sin_f64_body, "Sine of each element, max 3 ULP within +-39000";
    cos: f32, F32 => cos_f32, cos_f32_body, "Cosine of each element, max 3 ULP within +-39000";
    cos: f64, F64 => cos_f64, cos_f64_body, "Cosine of each element, max 3 ULP within +-39000";
    tan: f32, F32 => tan_f32, tan_f32_body, "Tangent of each element, max 6 ULP within +-39000";
    tan: f64, F64 => tan_f64, tan_f64_body, "Tangent of each element, max 6 ULP within +-39000";
    asin: f32, F32 => asin_f32, asin_f32_body, "Inverse sine of each element, max 3 ULP";
    asin: f64, F64 => asin_f64, asin_f64_body, "Inverse sine of each element, max 3 ULP";
    acos: f32, F32 => acos_f32, acos_f32_body, "Inverse cosine of each element, max 2 ULP";
    acos: f64, F64 => acos_f64, acos_f64_body, "Inverse cosine of each element, max 2 ULP";
    atan: f32, F32 => atan_f32, atan_f32_body, "Inverse tangent of each element, max 3 ULP";
    atan: f64, F64 => atan_f64, atan_f64_body, "Inverse tangent of each element, max 3 ULP";
    sinh: f32, F32 => sinh_f32, sinh_f32_body, "Hyperbolic sine of each element, max 4 ULP";
    sinh: f64, F64 => sinh_f64, sinh_f64_body, "Hyperbolic sine of each element, max 4 ULP";
    cosh: f32, F32 => cosh_f32, cosh_f32_body, "Hyperbolic cosine of each element, max 2 ULP";
    cosh: f64, F64 => cosh_f64, cosh_f64_body, "Hyperbolic cosine of each element, max 2 ULP";
    tanh: f32, F32 => tanh_f32, tanh_f32_body, "Hyperbolic tangent of each element, max 3 ULP";
    tanh: f64, F64 => tanh_f64, tanh_f64_body, "Hyperbolic tangent of each element, max 3 ULP";
    asinh: f32, F32 => asinh_f32, asinh_f32_body, "Inverse hyperbolic sine of each element, max 3 ULP";
    asinh: f64, F64 => asinh_f64, asinh_f64_body, "Inverse hyperbolic sine of each element, max 3 ULP";
    acosh: f32, F32 => acosh_f32, acosh_f32_body, "Inverse hyperbolic cosine of each element, max 3 ULP";
    acosh: f64, F64 => acosh_f64, acosh_f64_body, "Inverse hyperbolic cosine of each element, max 3 ULP";
    atanh: f32, F32 => atanh_f32, atanh_f32_body, "Inverse hyperbolic tangent of each element, max 3 ULP";
    atanh: f64, F64 => atanh_f64, atanh_f64_body, "Inverse hyperbolic tangent of each element, max 3 ULP";
}

#[inline(always)]
fn atan2_f32_body<Tg: Target>(y: &[f32], x: &[f32], output: &mut [f32]) {
    process_binary(<Tg::F32 as Descriptor>::new(), y, x, output, math::atan2);
}

#[inline(always)]
fn atan2_f64_body<Tg: Target>(y: &[f64], x: &[f64], output: &mut [f64]) {
    process_binary(<Tg::F64 as Descriptor>::new(), y, x, output, math::atan2);
}

export_dispatched! {
    /// Angle of each point `(x[i], y[i])` in [-pi, pi], max 3 ULP
    pub fn atan2_f32(y: &[f32], x: &[f32], output: &mut [f32]) => atan2_f32_body;
}

export_dispatched! {
    /// Angle of each point `(x[i], y[i])` in [-pi, pi], max 3 ULP
    pub fn atan2_f64(y: &[f64], x: &[f64], output: &mut [f64]) => atan2_f64_body;
}

#[inline(always)]
fn sin_cos_f32_body<Tg: Target>(input: &[f32], sin_out: &mut [f32], cos_out: &mut [f32]) {
    process_unary_pair(<Tg::F32 as Descriptor>::new(), input, sin_out, cos_out, math::sin_cos);
}

#[inline(always)]
fn sin_cos_f64_body<Tg: Target>(input: &[f64], sin_out: &mut [f64], cos_out: &mut [f64]) {
    process_unary_pair(<Tg::F64 as Descriptor>::new(), input, sin_out, cos_out, math::sin_cos);
}

export_dispatched! {
    /// Sine and cosine of each element in one pass
    pub fn sin_cos_f32(input: &[f32], sin_out: &mut [f32], cos_out: &mut [f32]) => sin_cos_f32_body;
}

export_dispatched! {
    /// Sine and cosine of each element in one pass
    pub fn sin_cos_f64(input: &[f64], sin_out: &mut [f64], cos_out: &mut [f64]) => sin_cos_f64_body;
}

#[inline(always)]
fn sum_f32_body<Tg: Target>(input: &[f32]) -> f32 {
    reduce_sum(<Tg::F32 as Descriptor>::new(), input)
}

#[inline(always)]
fn sum_f64_body<Tg: Target>(input: &[f64]) -> f64 {
    reduce_sum(<Tg::F64 as Descriptor>::new(), input)
}

export_dispatched! {
    /// Sum of every element
    ///
    /// Float rounding depends on the chosen variant's lane count.
    pub fn sum_f32(input: &[f32]) -> f32 => sum_f32_body;
}

export_dispatched! {
    /// Sum of every element
    ///
    /// Float rounding depends on the chosen variant's lane count.
    pub fn sum_f64(input: &[f64]) -> f64 => sum_f64_body;
}
