use crate::math::{radial, Point2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A circular curve inserted at an interior IP, tangent to both adjoining
/// straight directions.
///
/// `start_angle` is the angle from the center to `end_point` and `end_angle`
/// the angle to `start_point`. The pair is stored for a renderer that walks
/// from the end side back to the start side with its anticlockwise flag set
/// to `is_right_turn`: `end_angle - start_angle` is non-negative for right
/// turns and non-positive for left turns, and the renderer's modulo-2π walk
/// in the flagged direction traces the minor arc.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arc {
    pub center_point: Point2,
    /// Always strictly positive.
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Signed deflection at the IP; positive is a clockwise (right) turn.
    pub deflection_angle: f64,
    pub is_right_turn: bool,
    pub start_point: Point2,
    pub end_point: Point2,
    pub ip_point: Point2,
    /// Distance from the IP to `start_point` and to `end_point`.
    pub tangent_length: f64,
    pub ip_index: usize,
}

impl Arc {
    /// Absolute central angle swept by the arc.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.deflection_angle.abs()
    }

    /// Arc length along the curve.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep()
    }

    /// Point at parameter `t` in `[0, 1]`, walking from `start_point` to
    /// `end_point` in the direction of travel.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        // end_angle points at start_point; travel rotates by the signed deflection.
        let angle = self.end_angle + self.deflection_angle * t;
        self.center_point + radial(angle) * self.radius
    }
}
