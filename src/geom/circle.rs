//! Circle chords and ellipse sampling.

use std::f64::consts::TAU;

use super::point::Point2;

/// Width of the horizontal chord `height` below the top of a circle of radius `r`.
///
/// `height` should lie in `[0, 2r]`; outside that the result is NaN.
pub fn slice_length_on_circle(r: f64, height: f64) -> f64 {
    2.0 * (2.0 * r * height - height * height).sqrt()
}

/// Point on an axis-aligned ellipse at `angle` radians, measured
/// counter-clockwise from the positive x axis.
pub fn ellipse_point(center: Point2, radius_x: f64, radius_y: f64, angle: f64) -> Point2 {
    Point2::new(
        center.x + radius_x * angle.cos(),
        center.y + radius_y * angle.sin(),
    )
}

/// `count` points at evenly spaced angles around an ellipse, starting at angle 0.
pub fn ellipse_points(center: Point2, radius_x: f64, radius_y: f64, count: usize) -> Vec<Point2> {
    let step = TAU / count as f64;
    (0..count)
        .map(|i| ellipse_point(center, radius_x, radius_y, i as f64 * step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn slice_at_center_is_diameter() {
        assert_approx_eq!(slice_length_on_circle(5.0, 5.0), 10.0);
    }

    #[test]
    fn slice_near_edge() {
        assert_approx_eq!(slice_length_on_circle(5.0, 1.0), 6.0);
        assert_approx_eq!(slice_length_on_circle(5.0, 0.0), 0.0);
    }

    #[test]
    fn slice_outside_circle_is_nan() {
        assert!(slice_length_on_circle(5.0, 11.0).is_nan());
    }

    #[test]
    fn ellipse_axes() {
        let c = Point2::new(1.0, -1.0);
        let right = ellipse_point(c, 4.0, 2.0, 0.0);
        assert_approx_eq!(right.x, 5.0);
        assert_approx_eq!(right.y, -1.0);
        let top = ellipse_point(c, 4.0, 2.0, FRAC_PI_2);
        assert_approx_eq!(top.x, 1.0);
        assert_approx_eq!(top.y, 1.0);
    }

    #[test]
    fn ellipse_points_even_spacing() {
        let pts = ellipse_points(Point2::ORIGIN, 3.0, 1.0, 4);
        assert_eq!(pts.len(), 4);
        assert_approx_eq!(pts[0].x, 3.0);
        assert_approx_eq!(pts[1].y, 1.0);
        assert_approx_eq!(pts[2].x, -3.0);
        assert_approx_eq!(pts[3].y, -1.0);
    }

    #[test]
    fn ellipse_points_lie_on_ellipse() {
        for p in ellipse_points(Point2::ORIGIN, 3.0, 2.0, 17) {
            let v = (p.x / 3.0).powi(2) + (p.y / 2.0).powi(2);
            assert_approx_eq!(v, 1.0);
        }
    }

    #[test]
    fn ellipse_points_zero_count() {
        assert!(ellipse_points(Point2::ORIGIN, 1.0, 1.0, 0).is_empty());
    }
}
