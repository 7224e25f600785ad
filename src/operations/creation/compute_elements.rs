use std::f64::consts::{PI, TAU};

use crate::geometry::{Arc, Element, RadiusSpec, Tangent};
use crate::math::{
    angle_between_vectors, line_intersection, perpendicular_vector, unit_vector, Point2,
};
use crate::settings::DEFLECTION_THRESHOLD;

/// Derives the tangent/arc element sequence of an alignment from its IPs.
///
/// The result is a pure function of `(points, radii)`: callers recompute it
/// from scratch after any edit instead of patching a previous result.
///
/// # Algorithm
///
/// 1. At every interior IP, measure the signed deflection between the
///    incoming and outgoing directions. Below [`DEFLECTION_THRESHOLD`] the IP
///    is treated as straight and gets no arc.
/// 2. Otherwise place the arc endpoints `R * tan(|Δ| / 2)` back along each
///    direction, and find the center where the inward perpendiculars meet.
/// 3. Join consecutive effective points (arc endpoints or raw IPs) with
///    tangents.
///
/// The output lists all tangents in IP order, then all arcs in IP order.
#[derive(Debug)]
pub struct ComputeElements<'a> {
    points: &'a [Point2],
    radii: &'a RadiusSpec,
}

impl<'a> ComputeElements<'a> {
    /// Creates a new `ComputeElements` operation.
    #[must_use]
    pub fn new(points: &'a [Point2], radii: &'a RadiusSpec) -> Self {
        Self { points, radii }
    }

    /// Executes the derivation.
    ///
    /// Returns an empty sequence for fewer than 2 points.
    #[must_use]
    pub fn execute(&self) -> Vec<Element> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }

        let mut arcs: Vec<Option<Arc>> = vec![None; n];
        for (i, slot) in arcs.iter_mut().enumerate().take(n - 1).skip(1) {
            *slot = self.build_arc(i);
        }

        let tangents = (0..n - 1).map(|i| {
            let start = arcs[i].map_or(self.points[i], |a| a.end_point);
            let end = arcs[i + 1].map_or(self.points[i + 1], |a| a.start_point);
            Element::Tangent(Tangent::new(
                i,
                start,
                end,
                self.points[i],
                self.points[i + 1],
            ))
        });

        let mut elements: Vec<Element> = tangents.collect();
        elements.extend(arcs.into_iter().flatten().map(Element::Arc));
        elements
    }

    /// Builds the arc at interior IP `i`, or `None` if the IP is effectively straight.
    fn build_arc(&self, i: usize) -> Option<Arc> {
        let ip = self.points[i];
        let incoming = unit_vector(&self.points[i - 1], &ip);
        let outgoing = unit_vector(&ip, &self.points[i + 1]);

        // Coincident IPs give a zero direction and therefore zero deflection.
        let deflection = angle_between_vectors(&incoming, &outgoing);
        if deflection.abs() < DEFLECTION_THRESHOLD {
            tracing::trace!(ip_index = i, deflection, "deflection below threshold, no arc");
            return None;
        }
        // A doubled-back IP has no usable circle: tan(|Δ| / 2) blows up near π.
        if deflection.abs() > PI - DEFLECTION_THRESHOLD {
            tracing::trace!(ip_index = i, deflection, "alignment reverses at IP, no arc");
            return None;
        }

        let is_right_turn = deflection > 0.0;
        let radius = self.radii.radius(i);
        if !radius.is_finite() || radius <= 0.0 {
            tracing::trace!(ip_index = i, radius, "non-positive radius, no arc");
            return None;
        }
        let tangent_length = radius * (deflection.abs() / 2.0).tan();
        if !tangent_length.is_finite() || tangent_length < 0.0 {
            tracing::trace!(ip_index = i, tangent_length, "unusable tangent length, no arc");
            return None;
        }

        let start_point = ip - incoming * tangent_length;
        let end_point = ip + outgoing * tangent_length;

        // (-y, x) points right of travel; flip both for a left turn so the
        // rays meet on the inside of the curve.
        let side = if is_right_turn { 1.0 } else { -1.0 };
        let in_perp = perpendicular_vector(&incoming) * side;
        let out_perp = perpendicular_vector(&outgoing) * side;

        let center_point = line_intersection(&start_point, &in_perp, &end_point, &out_perp)
            .unwrap_or_else(|| {
                tracing::trace!(ip_index = i, "parallel perpendiculars, fallback center");
                start_point + in_perp * radius
            });

        let to_end = end_point - center_point;
        let to_start = start_point - center_point;
        let start_angle = to_end.y.atan2(to_end.x);
        let mut end_angle = to_start.y.atan2(to_start.x);
        if is_right_turn && end_angle < start_angle {
            end_angle += TAU;
        } else if !is_right_turn && end_angle > start_angle {
            end_angle -= TAU;
        }

        Some(Arc {
            center_point,
            radius,
            start_angle,
            end_angle,
            deflection_angle: deflection,
            is_right_turn,
            start_point,
            end_point,
            ip_point: ip,
            tangent_length,
            ip_index: i,
        })
    }
}
