use super::vector_2d::distance;
use super::Point2;

/// Returns `true` when `p` lies within `tol` of the segment `a`–`b`.
///
/// Uses the degenerate-ellipse test `|pa| + |pb| - |ab| < tol`, which is
/// permissive near the endpoints and tightest at the segment's midpoint.
#[must_use]
pub fn is_point_on_segment(p: &Point2, a: &Point2, b: &Point2, tol: f64) -> bool {
    (distance(p, a) + distance(p, b) - distance(a, b)).abs() < tol
}

/// Returns `true` when `p` lies within `tol` of the circle of `radius`
/// around `center`.
///
/// The angular sweep of the arc is not considered: any point near the full
/// circle matches.
#[must_use]
pub fn is_point_on_arc(p: &Point2, center: &Point2, radius: f64, tol: f64) -> bool {
    (distance(p, center) - radius).abs() <= tol
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── is_point_on_segment tests ──

    #[test]
    fn segment_point_on_line() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        assert!(is_point_on_segment(&Point2::new(4.0, 0.0), &a, &b, 0.1));
    }

    #[test]
    fn segment_point_slightly_off_line() {
        // Offset 1 from the midpoint: excess = 2*sqrt(26) - 10 ≈ 0.198.
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        let p = Point2::new(5.0, 1.0);
        assert!(is_point_on_segment(&p, &a, &b, 0.2));
        assert!(!is_point_on_segment(&p, &a, &b, 0.19));
    }

    #[test]
    fn segment_point_beyond_endpoint() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        assert!(!is_point_on_segment(&Point2::new(12.0, 0.0), &a, &b, 1.0));
        assert!(is_point_on_segment(&Point2::new(10.4, 0.0), &a, &b, 1.0));
    }

    // ── is_point_on_arc tests ──

    #[test]
    fn segment_tolerance_is_exclusive() {
        // |pa| + |pb| - |ab| = 5 + 1 - 4 = 2 exactly.
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let p = Point2::new(5.0, 0.0);
        assert!(!is_point_on_segment(&p, &a, &b, 2.0));
        assert!(is_point_on_segment(&p, &a, &b, 2.0 + 1e-9));
    }

    #[test]
    fn arc_point_on_circle() {
        let c = Point2::new(0.0, 0.0);
        assert!(is_point_on_arc(&Point2::new(0.0, 10.0), &c, 10.0, 0.0));
    }

    #[test]
    fn arc_tolerance_is_inclusive() {
        let c = Point2::new(0.0, 0.0);
        assert!(is_point_on_arc(&Point2::new(12.0, 0.0), &c, 10.0, 2.0));
        assert!(!is_point_on_arc(&Point2::new(12.5, 0.0), &c, 10.0, 2.0));
    }

    #[test]
    fn arc_ignores_angular_range() {
        // Any direction from the center matches as long as the radius fits.
        let c = Point2::new(5.0, 5.0);
        assert!(is_point_on_arc(&Point2::new(5.0, -5.0), &c, 10.0, 0.5));
        assert!(is_point_on_arc(&Point2::new(-5.0, 5.0), &c, 10.0, 0.5));
    }

    #[test]
    fn arc_center_does_not_match() {
        let c = Point2::new(0.0, 0.0);
        assert!(!is_point_on_arc(&c, &c, 10.0, 1.0));
    }
}
