//! Vector helpers for the alignment plane.
//!
//! The plane is screen-like: `x` grows east and `y` grows south. Bearings are
//! measured clockwise from north, and a positive signed angle between two
//! directions is a clockwise (right-hand) turn.
use std::f64::consts::{PI, TAU};

use super::{Point2, Vector2, TOLERANCE};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Unit direction from `a` to `b`.
///
/// Returns the zero vector when the points coincide.
#[must_use]
pub fn unit_vector(a: &Point2, b: &Point2) -> Vector2 {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Vector2::zeros();
    }
    d / len
}

/// Rotates `v` by 90° using the fixed `(-y, x)` convention.
///
/// In this plane the result points to the right of `v`'s travel direction.
#[must_use]
pub fn perpendicular_vector(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Unit vector pointing from a circle's center toward `angle`.
#[must_use]
pub fn radial(angle: f64) -> Vector2 {
    Vector2::new(angle.cos(), angle.sin())
}

/// Bearing from `a` to `b`, clockwise from north, in `[0, 2π)`.
///
/// Coincident points yield `0`.
#[must_use]
pub fn bearing(a: &Point2, b: &Point2) -> f64 {
    // North is -y; written as a.y - b.y so coincident points stay at +0.0.
    let east = b.x - a.x;
    let north = a.y - b.y;
    normalize_angle(east.atan2(north))
}

/// Signed angle from `v1` to `v2` in `(-π, π]`. Positive is clockwise.
///
/// A zero vector on either side yields `0`.
#[must_use]
pub fn angle_between_vectors(v1: &Vector2, v2: &Vector2) -> f64 {
    let cross = v1.x * v2.y - v1.y * v2.x;
    let dot = v1.dot(v2);
    let angle = cross.atan2(dot);
    if angle <= -PI {
        angle + TAU
    } else {
        angle
    }
}

/// Reduces an angle to `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU {
        0.0
    } else {
        a
    }
}
