//! Engines and queries over point sequences and element sequences.
//!
//! Each operation is a small struct built with `new` and run with
//! `execute`. The free functions below are the plain calling convention for
//! callers that do not need the operation values.

pub mod creation;
pub mod offset;
pub mod query;

pub use creation::ComputeElements;
pub use offset::ElementOffset;
pub use query::{FindElementAt, Length};

use crate::geometry::{Element, OffsetElement, RadiusSpec};
use crate::math::Point2;

/// Derives the tangent/arc elements of `points` with `radii`.
///
/// Returns an empty sequence for fewer than 2 points.
#[must_use]
pub fn compute_elements(points: &[Point2], radii: &RadiusSpec) -> Vec<Element> {
    ComputeElements::new(points, radii).execute()
}

/// Derives the parallel element sequence at signed `distance`.
#[must_use]
pub fn compute_offset(elements: &[Element], distance: f64) -> Vec<OffsetElement> {
    ElementOffset::new(elements, distance).execute()
}

/// Returns the first element within `tolerance` of `point`.
#[must_use]
pub fn find_element_at<'a>(
    point: &Point2,
    elements: &'a [Element],
    tolerance: f64,
) -> Option<&'a Element> {
    FindElementAt::new(*point, elements, tolerance).execute()
}
