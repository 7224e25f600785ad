use crate::geometry::{Arc, Element, OffsetElement, Tangent};
use crate::math::{perpendicular_vector, radial, unit_vector};

/// Derives a parallel element sequence at a signed distance.
///
/// # Sign Convention
///
/// - Positive distance: right of the direction of travel
/// - Negative distance: left of the direction of travel
///
/// Tangents are translated along their perpendicular. Arcs keep their center
/// and change radius: offsetting toward the inside of a turn shrinks the
/// radius, toward the outside grows it. Arcs whose offset radius is not
/// positive are dropped. Output order follows input order.
#[derive(Debug)]
pub struct ElementOffset<'a> {
    elements: &'a [Element],
    distance: f64,
}

impl<'a> ElementOffset<'a> {
    /// Creates a new element offset operation.
    #[must_use]
    pub fn new(elements: &'a [Element], distance: f64) -> Self {
        Self { elements, distance }
    }

    /// Executes the offset.
    #[must_use]
    pub fn execute(&self) -> Vec<OffsetElement> {
        self.elements
            .iter()
            .filter_map(|element| {
                let offset = match element {
                    Element::Tangent(t) => Some(Element::Tangent(offset_tangent(t, self.distance))),
                    Element::Arc(a) => offset_arc(a, self.distance).map(Element::Arc),
                }?;
                Some(OffsetElement {
                    element: offset,
                    offset: self.distance,
                    parent: element.id(),
                })
            })
            .collect()
    }
}

fn offset_tangent(t: &Tangent, distance: f64) -> Tangent {
    let shift = perpendicular_vector(&unit_vector(&t.start_point, &t.end_point)) * distance;
    Tangent {
        start_point: t.start_point + shift,
        end_point: t.end_point + shift,
        original_start: t.original_start + shift,
        original_end: t.original_end + shift,
        ..*t
    }
}

fn offset_arc(a: &Arc, distance: f64) -> Option<Arc> {
    // Positive distance is the right side, which is the inside of a right turn.
    let radius = if a.is_right_turn {
        a.radius - distance
    } else {
        a.radius + distance
    };
    if radius <= 0.0 {
        tracing::trace!(ip_index = a.ip_index, radius, "offset arc collapsed, dropped");
        return None;
    }

    // Move each endpoint along its own radial so it meets the offset tangents.
    let delta = radius - a.radius;
    let start_point = a.start_point + radial(a.end_angle) * delta;
    let end_point = a.end_point + radial(a.start_angle) * delta;

    let tangent_length = radius * (a.sweep() / 2.0).tan();

    // The offset IP is where the two offset tangent lines cross, along the bisector.
    let incoming = unit_vector(&a.start_point, &a.ip_point);
    let outgoing = unit_vector(&a.ip_point, &a.end_point);
    let bisector = perpendicular_vector(&incoming) + perpendicular_vector(&outgoing);
    let ip_point = a.ip_point + bisector * (distance / (1.0 + incoming.dot(&outgoing)));

    Some(Arc {
        radius,
        start_point,
        end_point,
        ip_point,
        tangent_length,
        ..*a
    })
}
