//! Math routines that need special-case handling beyond what `f64` and
//! `libm` provide directly.

pub(crate) fn nan() -> f64 {
    f64::NAN
}

/// Larger of `x` and `y`. Unlike [`f64::max`], NaN wins over any number
/// except `+Inf`, and `+0` is preferred over `-0`.
pub(crate) fn max(x: f64, y: f64) -> f64 {
    if x == f64::INFINITY || y == f64::INFINITY {
        return f64::INFINITY;
    }
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 && x == y {
        return if x.is_sign_negative() { y } else { x };
    }
    if x > y { x } else { y }
}

/// Smaller of `x` and `y`. NaN wins over any number except `-Inf`, and `-0`
/// is preferred over `+0`.
pub(crate) fn min(x: f64, y: f64) -> f64 {
    if x == f64::NEG_INFINITY || y == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 && x == y {
        return if x.is_sign_negative() { x } else { y };
    }
    if x < y { x } else { y }
}

/// Positive difference `max(x - y, 0)`. NaN when both are the same infinity.
pub(crate) fn dim(x: f64, y: f64) -> f64 {
    let v = x - y;
    if v <= 0.0 { 0.0 } else { v }
}

/// Truncated remainder, sign follows the dividend.
pub(crate) fn fmod(x: f64, y: f64) -> f64 {
    x % y
}

/// Unbiased binary exponent of `x`.
pub(crate) fn logb(x: f64) -> f64 {
    if x == 0.0 {
        f64::NEG_INFINITY
    } else if x.is_infinite() {
        f64::INFINITY
    } else if x.is_nan() {
        x
    } else {
        libm::ilogb(x) as f64
    }
}
