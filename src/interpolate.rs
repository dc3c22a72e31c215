//! Scalar range helpers: clamping, normalization, and linear interpolation.
//!
//! All three functions are total over the extended real domain: NaN and
//! infinite inputs degrade to a documented fallback instead of panicking.
//! The fallback deliberately differs per function; see each contract.

/// Restricts `value` to `[lower, upper]` inclusive.
///
/// Inverted bounds are tolerated: if `lower > upper` the two are swapped
/// before clamping. A non-finite `value` returns `lower` exactly as passed,
/// before any swap.
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    if !value.is_finite() {
        return lower;
    }
    let (lo, hi) = if lower > upper {
        (upper, lower)
    } else {
        (lower, upper)
    };
    value.max(lo).min(hi)
}

/// Maps `value` linearly from `[min, max]` onto `[0, 1]`, clamping the
/// result into that range.
///
/// A zero-width range acts as a step: `1.0` when `value >= max`, else
/// `0.0`. Any non-finite input returns `0.0`. `min` need not be below
/// `max`; an inverted range still produces a result in `[0, 1]`.
pub fn normalize_clamped(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() || !min.is_finite() || !max.is_finite() {
        return 0.0;
    }
    if max == min {
        return if value >= max { 1.0 } else { 0.0 };
    }
    clamp((value - min) / (max - min), 0.0, 1.0)
}

/// Returns the point at fraction `t` along the segment from `start` to
/// `end`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate beyond the
/// segment. Any non-finite input returns `start` unchanged, so a NaN
/// `start` yields NaN.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    if !start.is_finite() || !end.is_finite() || !t.is_finite() {
        return start;
    }
    start + (end - start) * t
}
