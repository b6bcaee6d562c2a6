//! Regularized incomplete gamma functions.
//!
//! Just enough special-function machinery to turn a chi-square statistic
//! into an upper-tail p-value: `Q(a, x)` evaluated via a power series for
//! small `x` and a modified Lentz continued fraction otherwise, with a
//! Lanczos log-gamma underneath. Deterministic, allocation-free, accurate
//! to roughly 1e-12 over the ranges a goodness-of-fit test produces.

use std::f64::consts::PI;

/// Convergence tolerance for the series and continued fraction.
const EPS: f64 = 1e-15;
/// Iteration cap; both expansions converge long before this for sane input.
const MAX_ITER: usize = 500;
/// Smallest magnitude allowed in Lentz denominators.
const TINY: f64 = 1e-300;

/// Lanczos coefficients (g = 7, n = 9).
const LANCZOS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural log of the gamma function.
pub(crate) fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection keeps the Lanczos sum in its accurate half-plane.
        PI.ln() - (PI * x).sin().abs().ln() - ln_gamma(1.0 - x)
    } else {
        let x = x - 1.0;
        let mut acc = LANCZOS[0];
        for (i, &c) in LANCZOS.iter().enumerate().skip(1) {
            acc += c / (x + i as f64);
        }
        let t = x + 7.5;
        0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + acc.ln()
    }
}

/// Regularized upper incomplete gamma function `Q(a, x)`.
///
/// For a chi-square statistic `x` with `df` degrees of freedom the upper
/// tail probability is `Q(df/2, x/2)`.
pub(crate) fn gamma_q(a: f64, x: f64) -> f64 {
    if !(a > 0.0) || x < 0.0 || !x.is_finite() {
        return f64::NAN;
    }
    if x == 0.0 {
        return 1.0;
    }
    if x < a + 1.0 {
        // Series converges fastest here; Q = 1 - P.
        1.0 - lower_series(a, x)
    } else {
        upper_continued_fraction(a, x)
    }
}

/// Series expansion of the regularized lower function `P(a, x)`.
fn lower_series(a: f64, x: f64) -> f64 {
    let mut term = 1.0 / a;
    let mut sum = term;
    let mut n = 1.0;
    for _ in 0..MAX_ITER {
        term *= x / (a + n);
        sum += term;
        if term.abs() < sum.abs() * EPS {
            break;
        }
        n += 1.0;
    }
    sum * (-x + a * x.ln() - ln_gamma(a)).exp()
}

/// Modified Lentz evaluation of the continued fraction for `Q(a, x)`.
fn upper_continued_fraction(a: f64, x: f64) -> f64 {
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..=MAX_ITER {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < TINY {
            d = TINY;
        }
        c = b + an / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < EPS {
            break;
        }
    }
    (-x + a * x.ln() - ln_gamma(a)).exp() * h
}
