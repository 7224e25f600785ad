use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns the intersection
/// point, or `None` when the directions are parallel or degenerate.
#[must_use]
pub fn line_intersection(p1: &Point2, d1: &Vector2, p2: &Point2, d2: &Vector2) -> Option<Point2> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    Some(p1 + d1 * t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn perpendicular_lines_meet() {
        let p = line_intersection(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(5.0, -3.0),
            &Vector2::new(0.0, 1.0),
        )
        .unwrap();
        assert!((p.x - 5.0).abs() < TOL, "x={}", p.x);
        assert!(p.y.abs() < TOL, "y={}", p.y);
    }

    #[test]
    fn oblique_lines_meet() {
        // y = x and y = -x + 4 meet at (2, 2).
        let p = line_intersection(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 1.0),
            &Point2::new(0.0, 4.0),
            &Vector2::new(1.0, -1.0),
        )
        .unwrap();
        assert!((p.x - 2.0).abs() < TOL, "x={}", p.x);
        assert!((p.y - 2.0).abs() < TOL, "y={}", p.y);
    }

    #[test]
    fn parallel_lines_return_none() {
        let p = line_intersection(
            &Point2::new(0.0, 0.0),
            &Vector2::new(2.0, 1.0),
            &Point2::new(0.0, 1.0),
            &Vector2::new(-4.0, -2.0),
        );
        assert!(p.is_none());
    }

    #[test]
    fn zero_direction_returns_none() {
        let p = line_intersection(
            &Point2::new(0.0, 0.0),
            &Vector2::zeros(),
            &Point2::new(1.0, 1.0),
            &Vector2::new(0.0, 1.0),
        );
        assert!(p.is_none());
    }
}
