//! Random floats rounded to a fixed number of decimals.

use rand::Rng;

/// A uniform float in `[min, max)` rounded to `precision` decimal places.
///
/// The caller supplies the RNG; seed a `ChaCha8Rng` for reproducible output.
/// Rounding may land exactly on `max`. An empty, unordered, or non-finite
/// range returns `min`.
pub fn random_float<R: Rng + ?Sized>(min: f64, max: f64, precision: u32, rng: &mut R) -> f64 {
    if !(min < max && min.is_finite() && max.is_finite()) {
        return min;
    }
    let value = if (max - min).is_finite() {
        rng.gen_range(min..max)
    } else {
        // Width overflows; interpolate so neither term does.
        let t: f64 = rng.gen();
        min * (1.0 - t) + max * t
    };
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn stays_within_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = random_float(1.0, 2.0, 2, &mut rng);
            assert!((1.0..=2.0).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn respects_precision() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let v = random_float(0.0, 10.0, 2, &mut rng);
            let scaled = v * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{v} has too many decimals");
        }
    }

    #[test]
    fn zero_precision_gives_integers() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let v = random_float(0.0, 100.0, 0, &mut rng);
        assert_eq!(v, v.round());
    }

    #[test]
    fn nan_bounds_return_min() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(random_float(0.0, f64::NAN, 2, &mut rng), 0.0);
        assert!(random_float(f64::NAN, 1.0, 2, &mut rng).is_nan());
    }

    #[test]
    fn full_f64_span_stays_finite() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..100 {
            let v = random_float(f64::MIN, f64::MAX, 2, &mut rng);
            assert!(v.is_finite(), "{v}");
        }
    }

    #[test]
    fn inverted_range_returns_min() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(random_float(3.0, 1.0, 2, &mut rng), 3.0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(
                random_float(-5.0, 5.0, 3, &mut a),
                random_float(-5.0, 5.0, 3, &mut b)
            );
        }
    }

    #[test]
    fn empty_range_returns_min() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(random_float(4.0, 4.0, 2, &mut rng), 4.0);
    }
}
