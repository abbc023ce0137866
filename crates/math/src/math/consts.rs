//! Per-type kernel constants
//!
//! Minimax coefficient tables, Cody-Waite splits and domain thresholds,
//! one set per float lane type. Tables are ordered from the lowest-degree
//! coefficient up, the order [`estrin`](super::poly::estrin) expects.

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

/// Constants the math kernels select by lane type
pub trait KernelConstants: Sized + 'static {
    /// exp(x) = exp_poly(r) + 1 with `exp_poly(r) = r + r^2 * P(r)`; coefficients of P
    const EXP_POLY: &'static [Self];
    /// High part of ln 2 (trailing bits zero so `q * LN2_UPPER` is exact)
    const LN2_UPPER: Self;
    /// ln 2 - `LN2_UPPER`
    const LN2_LOWER: Self;
    /// Largest x with finite exp(x)
    const EXP_OVERFLOW: Self;
    /// exp(x) is flushed to zero below this
    const EXP_UNDERFLOW: Self;
    /// exp2(x) is infinite at or above this
    const EXP2_OVERFLOW: Self;
    /// exp2(x) is flushed to zero below this
    const EXP2_UNDERFLOW: Self;

    /// Bit pattern of sqrt(2)/2; log reduction centers the mantissa on it
    const LOG_MAGIC: i64;
    /// log(y) for y in [sqrt(2)/2, sqrt(2)]: `s^2 * P(s^2)` with s = (y-1)/(y+1)
    const LOG_POLY: &'static [Self];
    /// High part of ln 2 for log reconstruction
    const LN2_HI: Self;
    /// ln 2 - `LN2_HI`
    const LN2_LO: Self;
    /// Power of two applied to subnormal inputs before reduction
    const SUBNORMAL_SHIFT: i64;
    /// 2^`SUBNORMAL_SHIFT`
    const SUBNORMAL_SCALE: Self;

    /// pi/2 split into parts with trailing zero bits (Cody-Waite)
    const PIO2_PARTS: &'static [Self];
    /// sin(r) = r + r^3 * P(r^2); coefficients of P
    const SIN_POLY: &'static [Self];

    /// asin(y) = y + y^3 * P(y^2) for |y| <= 0.5
    const ASIN_POLY: &'static [Self];
    /// atan(d) = d + d^3 * P(d^2) for |d| <= 1
    const ATAN_POLY: &'static [Self];

    /// tanh(x) rounds to +-1 beyond this
    const TANH_SATURATION: Self;
}

impl KernelConstants for f32 {
    const EXP_POLY: &'static [f32] = &[
        0.5,
        0.166666671633720397949219,
        0.0416664853692054748535156,
        0.00833336077630519866943359,
        0.00139304355252534151077271,
        0.000198527617612853646278381,
    ];
    const LN2_UPPER: f32 = 0.693145751953125;
    const LN2_LOWER: f32 = 1.428606765330187045e-06;
    const EXP_OVERFLOW: f32 = 88.72283172607421875;
    const EXP_UNDERFLOW: f32 = -104.0;
    const EXP2_OVERFLOW: f32 = 128.0;
    const EXP2_UNDERFLOW: f32 = -151.0;

    const LOG_MAGIC: i64 = 0x3F35_04F3;
    const LOG_POLY: &'static [f32] = &[
        0.66666662693,
        0.40000972152,
        0.28498786688,
        0.24279078841,
    ];
    const LN2_HI: f32 = 0.69313812256;
    const LN2_LO: f32 = 9.0580006145e-6;
    const SUBNORMAL_SHIFT: i64 = 25;
    const SUBNORMAL_SCALE: f32 = 33554432.0;

    const PIO2_PARTS: &'static [f32] = &[
        1.5703125,
        0.00048351287841796875,
        3.1385570764541626e-07,
        6.07710062827671e-11,
    ];
    const SIN_POLY: &'static [f32] = &[
        -0.166666597127914428710938,
        0.00833307858556509017944336,
        -0.0001981069071916863322258,
        2.6083159809786593541503e-06,
    ];

    const ASIN_POLY: &'static [f32] = &[
        0.1666677296,
        0.07495029271,
        0.04547423869,
        0.02424046025,
        0.04197454825,
    ];
    const ATAN_POLY: &'static [f32] = &[
        -0.333331018686294555664062,
        0.199926957488059997558594,
        -0.142027363181114196777344,
        0.106347933411598205566406,
        -0.0748900920152664184570312,
        0.0425049886107444763183594,
        -0.0159569028764963150024414,
        0.00282363896258175373077393,
    ];

    const TANH_SATURATION: f32 = 9.0;
}

impl KernelConstants for f64 {
    const EXP_POLY: &'static [f64] = &[
        0.5,
        0.166666666666666851703837,
        0.0416666666666665047591422,
        0.00833333333331652721664984,
        0.00138888888889774492207962,
        0.000198412698960509205564975,
        2.4801587159235472998791e-05,
        2.75572362911928827629423e-06,
        2.75573911234900471893338e-07,
        2.51112930892876518610661e-08,
        2.08860621107283687536341e-09,
    ];
    const LN2_UPPER: f64 = 0.69314718055966295651160180568695068359375;
    const LN2_LOWER: f64 = 0.28235290563031577122588448175013436025525412068e-12;
    const EXP_OVERFLOW: f64 = 709.782712893384;
    const EXP_UNDERFLOW: f64 = -1000.0;
    const EXP2_OVERFLOW: f64 = 1024.0;
    const EXP2_UNDERFLOW: f64 = -1075.0;

    const LOG_MAGIC: i64 = 0x3FE6_A09E_667F_3BCD;
    const LOG_POLY: &'static [f64] = &[
        6.666666666666735130e-01,
        3.999999999940941908e-01,
        2.857142874366239149e-01,
        2.222219843214978396e-01,
        1.818357216161805012e-01,
        1.531383769920937332e-01,
        1.479819860511658591e-01,
    ];
    const LN2_HI: f64 = 6.93147180369123816490e-01;
    const LN2_LO: f64 = 1.90821492927058770002e-10;
    const SUBNORMAL_SHIFT: i64 = 54;
    const SUBNORMAL_SCALE: f64 = 18014398509481984.0;

    const PIO2_PARTS: &'static [f64] = &[
        1.5707963267923333,
        2.5633441515971907e-12,
        -2.6718907338610155e-24,
    ];
    const SIN_POLY: &'static [f64] = &[
        -0.166666666666666657414808,
        0.00833333333333332974823815,
        -0.000198412698412696162806809,
        2.75573192239198747630416e-06,
        -2.50521083763502045810755e-08,
        1.60590430605664501629054e-10,
        -7.64712219118158833288484e-13,
        2.81009972710863200091251e-15,
        -7.97255955009037868891952e-18,
    ];

    const ASIN_POLY: &'static [f64] = &[
        0.1666666666666497543,
        0.7500000000378581611e-1,
        0.4464285681377102438e-1,
        0.3038195928038132237e-1,
        0.2237176181932048341e-1,
        0.1735956991223614604e-1,
        0.1388715184501609218e-1,
        0.1215360525577377331e-1,
        0.6606077476277170610e-2,
        0.1929045477267910674e-1,
        -0.1581918243329996643e-1,
        0.3161587650653934628e-1,
    ];
    const ATAN_POLY: &'static [f64] = &[
        -0.333333333333311110369124,
        0.199999999996591265594148,
        -0.14285714266771329383765,
        0.111111105648261418443745,
        -0.090908995008245008229153,
        0.0769219538311769618355029,
        -0.0666573579361080525984562,
        0.0587666392926673580854313,
        -0.0523674852303482457616113,
        0.0466667150077840625632675,
        -0.0407629191276836500001934,
        0.0337852580001353069993897,
        -0.0254517624932312641616861,
        0.016599329773529201970117,
        -0.00889896195887655491740809,
        0.00370026744188713119232403,
        -0.00110611831486672482563471,
        0.000209850076645816976906797,
        -1.88796008463073496563746e-05,
    ];

    const TANH_SATURATION: f64 = 19.0;
}
