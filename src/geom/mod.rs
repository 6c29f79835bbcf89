//! 2D geometry helpers — points, segments, circles, and ellipses.

pub mod circle;
pub mod line;
pub mod point;

pub use circle::{ellipse_point, ellipse_points, slice_length_on_circle};
pub use line::{generate_line_points, lines_intersect, Line2};
pub use point::{lerp_points, Point2};
