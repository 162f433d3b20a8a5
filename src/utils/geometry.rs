// Determinants this close to zero are treated as parallel lines.
const DETERMINANT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }

    pub fn nan() -> Self {
        Point2D {
            x: f64::NAN,
            y: f64::NAN,
        }
    }

    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    pub start: Point2D,
    pub end: Point2D,
}

impl LineSegment {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        LineSegment { start, end }
    }
}

/// Intersection of the infinite lines through (p1, p2) and (p3, p4).
///
/// The candidate is accepted only when it lies strictly inside the bounding
/// box of all four input points on both axes; boundary contact counts as a
/// non-intersection. Parallel or rejected candidates come back as NaN/NaN.
pub fn determine_line_intersection(p1: Point2D, p2: Point2D, p3: Point2D, p4: Point2D) -> Point2D {
    let denominator = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denominator.abs() <= DETERMINANT_TOLERANCE {
        return Point2D::nan();
    }

    let det12 = p1.x * p2.y - p1.y * p2.x;
    let det34 = p3.x * p4.y - p3.y * p4.x;
    let x = (det12 * (p3.x - p4.x) - (p1.x - p2.x) * det34) / denominator;
    let y = (det12 * (p3.y - p4.y) - (p1.y - p2.y) * det34) / denominator;

    let min_x = p1.x.min(p2.x).min(p3.x).min(p4.x);
    let max_x = p1.x.max(p2.x).max(p3.x).max(p4.x);
    let min_y = p1.y.min(p2.y).min(p3.y).min(p4.y);
    let max_y = p1.y.max(p2.y).max(p3.y).max(p4.y);

    if x > min_x && x < max_x && y > min_y && y < max_y {
        Point2D::new(x, y)
    } else {
        Point2D::nan()
    }
}

pub fn determine_segment_intersection(first: &LineSegment, second: &LineSegment) -> Point2D {
    determine_line_intersection(first.start, first.end, second.start, second.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_crossing_segments() {
        let intersection = determine_line_intersection(
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(0.0, 2.0),
            Point2D::new(2.0, 0.0),
        );

        assert_relative_eq!(intersection.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(intersection.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_segments_yield_nan() {
        let intersection = determine_line_intersection(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(0.0, 1.0),
            Point2D::new(1.0, 2.0),
        );

        assert!(intersection.is_nan());
    }

    #[test]
    fn test_crossing_outside_bounding_box_rejected() {
        // Supporting lines cross at (3, 3), well past both segments.
        let intersection = determine_line_intersection(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(0.0, 6.0),
            Point2D::new(1.0, 5.0),
        );

        assert!(intersection.is_nan());
    }

    #[test]
    fn test_boundary_contact_rejected() {
        // The lines meet exactly at a shared endpoint, which sits on the
        // bounding box edge and is therefore not a crossing.
        let intersection = determine_line_intersection(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 0.0),
        );

        assert!(intersection.is_nan());
    }

    #[test]
    fn test_segment_wrapper_matches_point_form() {
        let first = LineSegment::new(Point2D::new(0.0, 1.0), Point2D::new(4.0, 1.0));
        let second = LineSegment::new(Point2D::new(2.0, 0.0), Point2D::new(2.0, 2.0));

        let intersection = determine_segment_intersection(&first, &second);

        assert_relative_eq!(intersection.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(intersection.y, 1.0, epsilon = 1e-12);
    }
}
