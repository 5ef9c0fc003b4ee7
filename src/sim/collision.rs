//! Collision detection between the paddle and falling items
//!
//! Everything here is axis-aligned: items and the paddle are rectangles in
//! field coordinates, so a hit is a plain box overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    /// Box with its top-left corner at `origin`
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }
}

/// Check whether two boxes overlap
///
/// Boxes are apart only when one lies strictly beyond the other on some
/// axis, so touching edges count as a hit.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    !(a.max.x < b.min.x || a.min.x > b.max.x || a.max.y < b.min.y || a.min.y > b.max.y)
}
