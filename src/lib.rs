//! Road alignment geometry.
//!
//! An alignment is sketched as an ordered sequence of intersection points
//! (IPs). The engines here turn that sequence into straight tangents joined
//! by circular arcs, derive parallel offset curves for lane and pavement
//! edges, and pick the element under a query point.

pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod observe;
pub mod operations;
pub mod settings;
pub mod tessellation;

pub use error::{Result, RoadlineError};
pub use geometry::{Arc, Element, ElementId, OffsetElement, RadiusSpec, Tangent};
pub use math::Point2;
pub use model::{Alignment, AlignmentId, AlignmentStore};
pub use operations::{compute_elements, compute_offset, find_element_at};
