//! Line segments: intersection and evenly spaced interior points.

use serde::{Deserialize, Serialize};

use super::point::{lerp_points, Point2};

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line2 {
    pub start: Point2,
    pub end: Point2,
}

impl Line2 {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Vector from `start` to `end`.
    pub fn direction(&self) -> Point2 {
        self.end - self.start
    }
}

/// Whether two segments touch, endpoints included.
///
/// Parallel segments intersect only when collinear and overlapping. A
/// zero-length segment is treated as a point.
pub fn lines_intersect(a: &Line2, b: &Line2) -> bool {
    let da = a.direction();
    let db = b.direction();
    let offset = b.start - a.start;
    let determinant = da.cross(db);
    let delta = offset.cross(da);

    if determinant == 0.0 {
        if delta != 0.0 {
            return false;
        }
        let len_sq = da.dot(da);
        if len_sq == 0.0 {
            return point_on_segment(a.start, b);
        }
        // Collinear: project b onto a's parameter space and test overlap.
        let t0 = offset.dot(da) / len_sq;
        let t1 = t0 + db.dot(da) / len_sq;
        return t0.min(t1) <= 1.0 && t0.max(t1) >= 0.0;
    }

    let t = offset.cross(db) / determinant;
    let u = delta / determinant;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

fn point_on_segment(p: Point2, segment: &Line2) -> bool {
    let d = segment.direction();
    let len_sq = d.dot(d);
    if len_sq == 0.0 {
        return p == segment.start;
    }
    let rel = p - segment.start;
    rel.cross(d) == 0.0 && (0.0..=len_sq).contains(&rel.dot(d))
}

/// `count` points evenly spaced strictly between the segment's endpoints.
pub fn generate_line_points(line: &Line2, count: usize) -> Vec<Point2> {
    let divisions = (count + 1) as f64;
    (1..=count)
        .map(|i| lerp_points(line.start, line.end, i as f64 / divisions))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Line2 {
        Line2::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn crossing_diagonals() {
        assert!(lines_intersect(&seg(0.0, 0.0, 1.0, 1.0), &seg(0.0, 1.0, 1.0, 0.0)));
    }

    #[test]
    fn disjoint_segments() {
        assert!(!lines_intersect(&seg(0.0, 0.0, 1.0, 1.0), &seg(2.0, 0.0, 3.0, -1.0)));
    }

    #[test]
    fn touching_at_endpoint() {
        assert!(lines_intersect(&seg(0.0, 0.0, 1.0, 1.0), &seg(1.0, 1.0, 2.0, 0.0)));
    }

    #[test]
    fn parallel_not_collinear() {
        assert!(!lines_intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn collinear_overlap() {
        assert!(lines_intersect(&seg(0.0, 0.0, 2.0, 0.0), &seg(1.0, 0.0, 3.0, 0.0)));
    }

    #[test]
    fn collinear_reversed_overlap() {
        assert!(lines_intersect(&seg(0.0, 0.0, 2.0, 2.0), &seg(3.0, 3.0, 1.0, 1.0)));
    }

    #[test]
    fn collinear_gap() {
        assert!(!lines_intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(2.0, 0.0, 3.0, 0.0)));
    }

    #[test]
    fn lines_would_cross_but_segments_do_not() {
        assert!(!lines_intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(2.0, -1.0, 2.0, 1.0)));
    }

    #[test]
    fn point_segment_on_other_segment() {
        let point = seg(1.0, 1.0, 1.0, 1.0);
        let diagonal = seg(0.0, 0.0, 2.0, 2.0);
        assert!(lines_intersect(&point, &diagonal));
        assert!(lines_intersect(&diagonal, &point));
    }

    #[test]
    fn point_segment_off_other_segment() {
        let diagonal = seg(0.0, 0.0, 2.0, 2.0);
        assert!(!lines_intersect(&seg(1.0, 2.0, 1.0, 2.0), &diagonal));
        assert!(!lines_intersect(&seg(3.0, 3.0, 3.0, 3.0), &diagonal));
    }

    #[test]
    fn two_point_segments() {
        let p = seg(1.0, 1.0, 1.0, 1.0);
        assert!(lines_intersect(&p, &p));
        assert!(!lines_intersect(&p, &seg(2.0, 1.0, 2.0, 1.0)));
    }

    #[test]
    fn two_interior_points() {
        let pts = generate_line_points(&seg(0.0, 0.0, 2.0, 2.0), 2);
        assert_eq!(pts.len(), 2);
        assert_approx_eq!(pts[0].x, 2.0 / 3.0);
        assert_approx_eq!(pts[0].y, 2.0 / 3.0);
        assert_approx_eq!(pts[1].x, 4.0 / 3.0);
        assert_approx_eq!(pts[1].y, 4.0 / 3.0);
    }

    #[test]
    fn zero_points() {
        assert!(generate_line_points(&seg(0.0, 0.0, 1.0, 1.0), 0).is_empty());
    }

    #[test]
    fn single_point_is_midpoint() {
        let pts = generate_line_points(&seg(-1.0, 4.0, 3.0, 0.0), 1);
        assert_eq!(pts, vec![Point2::new(1.0, 2.0)]);
    }
}
