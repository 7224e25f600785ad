use crate::math::{bearing, distance, Point2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A straight segment between two effective points of an alignment.
///
/// `start_point`/`end_point` are pulled back to the adjacent arcs' end/start
/// points when an arc exists at that IP. `original_start`/`original_end`
/// always keep the raw IP coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tangent {
    /// Position in the tangent sequence; tangent `i` runs from IP `i` to IP `i + 1`.
    pub index: usize,
    pub start_point: Point2,
    pub end_point: Point2,
    /// Clockwise from north, in `[0, 2π)`.
    pub bearing: f64,
    pub length: f64,
    pub original_start: Point2,
    pub original_end: Point2,
}

impl Tangent {
    /// Builds tangent `index` between two effective points, deriving bearing
    /// and length from them.
    #[must_use]
    pub fn new(
        index: usize,
        start_point: Point2,
        end_point: Point2,
        original_start: Point2,
        original_end: Point2,
    ) -> Self {
        Self {
            index,
            start_point,
            end_point,
            bearing: bearing(&start_point, &end_point),
            length: distance(&start_point, &end_point),
            original_start,
            original_end,
        }
    }
}
