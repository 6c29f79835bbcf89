//! Shaping curves over the unit interval.

use crate::error::{Error, Result};

/// Cubic Hermite interpolation: `3x² - 2x³`.
///
/// Only defined on `[0, 1]`; anything else is a [`Error::Domain`].
pub fn smooth_step(x: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&x) {
        return Err(Error::Domain { value: x });
    }
    Ok(x * x * (3.0 - 2.0 * x))
}

/// Gaussian falloff scaled so `x = 0` yields `strength` and `x = 1` is
/// effectively zero (four standard deviations out).
///
/// Intended for `x` in `[0, 1]`, but not restricted.
pub fn normalized_gaussian(x: f64, strength: f64) -> f64 {
    let scaled = x * 4.0;
    strength * (-(scaled * scaled) / 2.0).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn smooth_step_fixed_points() {
        assert_approx_eq!(smooth_step(0.0).unwrap(), 0.0);
        assert_approx_eq!(smooth_step(1.0).unwrap(), 1.0);
        assert_approx_eq!(smooth_step(0.5).unwrap(), 0.5);
    }

    #[test]
    fn smooth_step_is_eased() {
        let v = smooth_step(0.25).unwrap();
        assert!(v < 0.25, "smooth step should ease in, got {v}");
        let v = smooth_step(0.75).unwrap();
        assert!(v > 0.75, "smooth step should ease out, got {v}");
    }

    #[test]
    fn smooth_step_rejects_outside_unit() {
        assert_eq!(smooth_step(-0.1), Err(Error::Domain { value: -0.1 }));
        assert_eq!(smooth_step(1.1), Err(Error::Domain { value: 1.1 }));
    }

    #[test]
    fn gaussian_peak_at_zero() {
        assert_approx_eq!(normalized_gaussian(0.0, 1.0), 1.0);
        assert_approx_eq!(normalized_gaussian(0.0, 2.5), 2.5);
    }

    #[test]
    fn gaussian_decays_toward_one() {
        let mid = normalized_gaussian(0.5, 1.0);
        let end = normalized_gaussian(1.0, 1.0);
        assert_approx_eq!(mid, (-2.0f64).exp());
        assert!(end < 0.001, "expected near-zero tail, got {end}");
        assert!(mid > end);
    }

    #[test]
    fn gaussian_is_symmetric() {
        assert_approx_eq!(normalized_gaussian(-0.3, 1.0), normalized_gaussian(0.3, 1.0));
    }
}
