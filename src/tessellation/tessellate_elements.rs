use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::geometry::{Arc, Element};
use crate::math::{Point2, TOLERANCE};
use crate::settings::TessellationParams;

use super::Polyline;

/// Tessellates an element sequence into polylines.
///
/// Arcs are walked in the direction of travel, from `start_point` to
/// `end_point`, so right and left turns both trace their minor arc.
#[derive(Debug)]
pub struct TessellateElements<'a> {
    elements: &'a [Element],
    params: TessellationParams,
}

impl<'a> TessellateElements<'a> {
    /// Creates a new `TessellateElements` operation.
    #[must_use]
    pub fn new(elements: &'a [Element], params: TessellationParams) -> Self {
        Self { elements, params }
    }

    /// Returns one polyline per element, in input order.
    #[must_use]
    pub fn execute(&self) -> Vec<Polyline> {
        self.elements
            .iter()
            .map(|element| Polyline {
                source: Some(element.id()),
                points: self.element_points(element),
            })
            .collect()
    }

    /// Returns a single polyline following the direction of travel:
    /// tangent 0, the arc at IP 1, tangent 1, and so on.
    ///
    /// Repeated vertices where elements meet are emitted once.
    #[must_use]
    pub fn path(&self) -> Polyline {
        let mut tangents: Vec<_> = self.elements.iter().filter(|e| e.is_tangent()).collect();
        tangents.sort_by_key(|e| e.id());
        let arcs: BTreeMap<usize, &Arc> = self
            .elements
            .iter()
            .filter_map(Element::as_arc)
            .map(|a| (a.ip_index, a))
            .collect();

        let mut points: Vec<Point2> = Vec::new();
        for tangent in tangents {
            push_all(&mut points, self.element_points(tangent));
            if let Some(t) = tangent.as_tangent() {
                if let Some(arc) = arcs.get(&(t.index + 1)) {
                    push_all(&mut points, self.arc_points(arc));
                }
            }
        }
        Polyline {
            source: None,
            points,
        }
    }

    fn element_points(&self, element: &Element) -> Vec<Point2> {
        match element {
            Element::Tangent(t) => vec![t.start_point, t.end_point],
            Element::Arc(a) => self.arc_points(a),
        }
    }

    fn arc_points(&self, arc: &Arc) -> Vec<Point2> {
        let n = self.subdivision_count(arc.radius, arc.sweep());
        let mut points = Vec::with_capacity(n as usize + 1);
        points.push(arc.start_point);
        for j in 1..n {
            points.push(arc.point_at(f64::from(j) / f64::from(n)));
        }
        points.push(arc.end_point);
        points
    }

    /// Number of chords needed to stay within the tolerance, from the
    /// sagitta relation `s = r * (1 - cos(θ / 2))`.
    fn subdivision_count(&self, radius: f64, abs_sweep: f64) -> u32 {
        let TessellationParams {
            tolerance,
            min_segments,
            max_segments,
        } = self.params;
        let min_segments = min_segments.max(1);
        let max_segments = max_segments.max(min_segments);
        if radius < TOLERANCE || abs_sweep < TOLERANCE || tolerance <= 0.0 {
            return min_segments;
        }
        let max_angle = if tolerance >= radius {
            PI
        } else {
            2.0 * (1.0 - tolerance / radius).acos()
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (abs_sweep / max_angle).ceil().min(f64::from(max_segments)) as u32;
        n.clamp(min_segments, max_segments)
    }
}

fn push_all(path: &mut Vec<Point2>, points: Vec<Point2>) {
    for p in points {
        if path.last().map_or(true, |last| (last - p).norm() > TOLERANCE) {
            path.push(p);
        }
    }
}
