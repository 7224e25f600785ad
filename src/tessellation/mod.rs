//! Polyline approximations of element sequences for renderers.

mod tessellate_elements;

pub use tessellate_elements::TessellateElements;

use crate::geometry::ElementId;
use crate::math::Point2;

/// A polyline approximation of one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// Element the polyline was traced from, when it came from a single one.
    pub source: Option<ElementId>,
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}
