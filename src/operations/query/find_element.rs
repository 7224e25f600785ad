use crate::geometry::Element;
use crate::math::{is_point_on_arc, is_point_on_segment, Point2};

/// Finds the element under a query point.
///
/// Tangents match with the segment test, arcs with the full-circle radius
/// test. The first matching element in sequence order wins, so tangents take
/// precedence over arcs even when an arc is numerically closer.
#[derive(Debug)]
pub struct FindElementAt<'a> {
    point: Point2,
    tolerance: f64,
    elements: &'a [Element],
}

impl<'a> FindElementAt<'a> {
    /// Creates a new `FindElementAt` query.
    #[must_use]
    pub fn new(point: Point2, elements: &'a [Element], tolerance: f64) -> Self {
        Self {
            point,
            tolerance,
            elements,
        }
    }

    /// Executes the query, returning the first matching element.
    #[must_use]
    pub fn execute(&self) -> Option<&'a Element> {
        self.elements.iter().find(|element| self.matches(element))
    }

    fn matches(&self, element: &Element) -> bool {
        match element {
            Element::Tangent(t) => {
                is_point_on_segment(&self.point, &t.start_point, &t.end_point, self.tolerance)
            }
            Element::Arc(a) => {
                is_point_on_arc(&self.point, &a.center_point, a.radius, self.tolerance)
            }
        }
    }
}
