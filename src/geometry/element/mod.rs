mod arc;
mod tangent;

pub use arc::Arc;
pub use tangent::Tangent;

use crate::math::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier of an element within one alignment.
///
/// Survives a recompute: after an IP is dragged, the tangent with the same
/// index or the arc at the same IP is "the same logical element".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementId {
    /// Tangent running from IP `i` to IP `i + 1`.
    Tangent(usize),
    /// Arc at interior IP `i`.
    Arc(usize),
}

/// One piece of an alignment's geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Element {
    Tangent(Tangent),
    Arc(Arc),
}

impl Element {
    /// Returns the stable identifier of this element.
    #[must_use]
    pub fn id(&self) -> ElementId {
        match self {
            Self::Tangent(t) => ElementId::Tangent(t.index),
            Self::Arc(a) => ElementId::Arc(a.ip_index),
        }
    }

    #[must_use]
    pub fn start_point(&self) -> Point2 {
        match self {
            Self::Tangent(t) => t.start_point,
            Self::Arc(a) => a.start_point,
        }
    }

    #[must_use]
    pub fn end_point(&self) -> Point2 {
        match self {
            Self::Tangent(t) => t.end_point,
            Self::Arc(a) => a.end_point,
        }
    }

    /// Length along the element.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Tangent(t) => t.length,
            Self::Arc(a) => a.length(),
        }
    }

    #[must_use]
    pub fn as_tangent(&self) -> Option<&Tangent> {
        match self {
            Self::Tangent(t) => Some(t),
            Self::Arc(_) => None,
        }
    }

    #[must_use]
    pub fn as_arc(&self) -> Option<&Arc> {
        match self {
            Self::Arc(a) => Some(a),
            Self::Tangent(_) => None,
        }
    }

    #[must_use]
    pub fn is_tangent(&self) -> bool {
        matches!(self, Self::Tangent(_))
    }

    #[must_use]
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::Arc(_))
    }
}

impl From<Tangent> for Element {
    fn from(t: Tangent) -> Self {
        Self::Tangent(t)
    }
}

impl From<Arc> for Element {
    fn from(a: Arc) -> Self {
        Self::Arc(a)
    }
}

/// An element of a parallel curve, traced back to the element it was
/// derived from by id only.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffsetElement {
    pub element: Element,
    /// Signed offset distance the element was derived with.
    pub offset: f64,
    pub parent: ElementId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_tangents_before_arcs() {
        let mut ids = vec![ElementId::Arc(1), ElementId::Tangent(2), ElementId::Tangent(0)];
        ids.sort();
        assert_eq!(
            ids,
            vec![ElementId::Tangent(0), ElementId::Tangent(2), ElementId::Arc(1)]
        );
    }

    #[test]
    fn tangent_element_accessors() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        let e = Element::from(Tangent::new(2, a, b, a, b));
        assert_eq!(e.id(), ElementId::Tangent(2));
        assert!(e.is_tangent());
        assert!(e.as_arc().is_none());
        assert_eq!(e.start_point(), a);
        assert_eq!(e.end_point(), b);
        assert!((e.length() - 5.0).abs() < 1e-12);
    }
}
