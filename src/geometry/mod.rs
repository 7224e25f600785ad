pub mod element;
pub mod radius;

pub use element::{Arc, Element, ElementId, OffsetElement, Tangent};
pub use radius::RadiusSpec;
