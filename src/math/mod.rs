//! Planar vector arithmetic and predicates shared by every engine.

pub mod distance_2d;
pub mod intersect_2d;
pub mod vector_2d;

pub use distance_2d::{is_point_on_arc, is_point_on_segment};
pub use intersect_2d::line_intersection;
pub use vector_2d::{
    angle_between_vectors, bearing, distance, normalize_angle, perpendicular_vector, radial,
    unit_vector,
};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
