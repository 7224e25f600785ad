use crate::geometry::Element;

/// Computes the total length along an element sequence.
///
/// Sums tangent lengths and arc lengths; for an alignment's own elements
/// this is the length of the drivable path from the first IP to the last.
#[derive(Debug)]
pub struct Length<'a> {
    elements: &'a [Element],
}

impl<'a> Length<'a> {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(elements: &'a [Element]) -> Self {
        Self { elements }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.elements.iter().map(Element::length).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::RadiusSpec;
    use crate::math::Point2;
    use crate::operations::ComputeElements;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn straight_alignment_length() {
        let points = [Point2::new(0.0, 0.0), Point2::new(100.0, 0.0), Point2::new(200.0, 0.0)];
        let radii = RadiusSpec::default();
        let elements = ComputeElements::new(&points, &radii).execute();
        assert_abs_diff_eq!(Length::new(&elements).execute(), 200.0, epsilon = 1e-9);
    }

    #[test]
    fn curve_shortens_the_path() {
        let points = [Point2::new(0.0, 0.0), Point2::new(100.0, 0.0), Point2::new(100.0, 100.0)];
        let radii = RadiusSpec::new(20.0).unwrap();
        let elements = ComputeElements::new(&points, &radii).execute();
        // 80 + 80 straight, plus a quarter circle of radius 20.
        let expected = 160.0 + 10.0 * PI;
        assert_abs_diff_eq!(Length::new(&elements).execute(), expected, epsilon = 1e-9);
    }

    #[test]
    fn empty_sequence_is_zero() {
        assert_abs_diff_eq!(Length::new(&[]).execute(), 0.0);
    }
}
