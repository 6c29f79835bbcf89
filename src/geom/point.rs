//! 2D points.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::math::lerp;

/// A point (or vector) in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates as an `(x, y)` tuple.
    pub fn tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// 2D cross product (z component of the 3D cross).
    pub fn cross(self, other: Point2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn dot(self, other: Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Linear interpolation between two points; `t` is not clamped.
pub fn lerp_points(start: Point2, end: Point2, t: f64) -> Point2 {
    Point2::new(lerp(start.x, end.x, t), lerp(start.y, end.y, t))
}
