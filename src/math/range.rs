//! Range helpers: interpolation, clamping, normalization, and remapping.
//!
//! Argument order follows the range-first convention (`clamp(start, end, value)`)
//! so that partially applied forms read naturally at call sites.

use crate::error::{Error, Result};

/// Linear interpolation from `a` to `b`. `t` is not clamped, so values
/// outside `[0, 1]` extrapolate.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Clamp `value` into the range spanned by `range_start` and `range_end`.
///
/// The bounds may be given in either order.
pub fn clamp(range_start: f64, range_end: f64, value: f64) -> f64 {
    let (lo, hi) = if range_start < range_end {
        (range_start, range_end)
    } else {
        (range_end, range_start)
    };
    value.max(lo).min(hi)
}

/// Clamp `value` into `[0, 1]`.
pub fn clamp_to_unit(value: f64) -> f64 {
    clamp(0.0, 1.0, value)
}

/// Position of `value` within `[min, max]` as a fraction.
///
/// Returns `0.5` for a zero-width range instead of dividing by zero.
pub fn normalize(min: f64, max: f64, value: f64) -> f64 {
    if max - min == 0.0 {
        return 0.5;
    }
    (value - min) / (max - min)
}

/// Map `value` from `[orig_min, orig_max]` into `[target_min, target_max]`.
///
/// The input is clamped to the original range first, so the output never
/// leaves the target range.
pub fn remap(orig_min: f64, orig_max: f64, target_min: f64, target_max: f64, value: f64) -> f64 {
    let clamped = clamp(orig_min, orig_max, value);
    let t = normalize(orig_min, orig_max, clamped);
    lerp(target_min, target_max, t)
}

fn check_unit_bounds(min: f64, max: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) {
        return Err(Error::OutOfUnitRange { min, max });
    }
    Ok(())
}

/// Re-express a unit value relative to the sub-range `[min, max]` of `[0, 1]`.
///
/// The result is clamped to `[0, 1]`. Fails with [`Error::OutOfUnitRange`]
/// when either bound lies outside `[0, 1]` and [`Error::ZeroRange`] when the
/// bounds coincide.
pub fn remap_unit(min: f64, max: f64, value: f64) -> Result<f64> {
    check_unit_bounds(min, max)?;
    if max - min == 0.0 {
        return Err(Error::ZeroRange { min, max });
    }
    Ok(clamp_to_unit((value - min) / (max - min)))
}

/// Unit mapping with dead zones below `low` and saturation above `high`.
///
/// Between the thresholds the mapping is linear.
pub fn normalize_with_dead_zones(low: f64, high: f64, value: f64) -> Result<f64> {
    check_unit_bounds(low, high)?;
    if high <= low {
        return Err(Error::InvalidThresholds { low, high });
    }
    Ok(clamp_to_unit((value - low) / (high - low)))
}
