//! Angle and arc conversions.

use std::f64::consts::PI;

/// Radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Length of the arc subtended by `angle` radians on a circle of `radius`.
pub fn arc_length(radius: f64, angle: f64) -> f64 {
    radius * angle
}

/// Angle in radians covered by an arc of `length` on a circle of `radius`.
///
/// A zero radius yields a non-finite result.
pub fn angle_from_arc_length(radius: f64, length: f64) -> f64 {
    length / radius
}
