//! Axis-aligned collision testing
//!
//! Every body is a rectangle described by its center and size, so the whole
//! collision story is a pairwise AABB overlap test. The world's pruning pass
//! runs it over all pairs each frame; at tens of live bodies the O(n²) sweep
//! is nowhere near a bottleneck.

use glam::Vec2;

use super::entity::Body;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box spanning `center ± size / 2` on each axis
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict overlap test. Boxes that merely touch along an edge or corner
    /// do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && other.max.x > self.min.x
            && self.max.y > other.min.y
            && other.max.y > self.min.y
    }
}

/// Whether two bodies collide.
///
/// A body never collides with itself: identity is by instance (the same
/// element of the world's collection), not by value, so two distinct bodies
/// occupying identical rectangles do collide.
pub fn colliding(a: &Body, b: &Body) -> bool {
    if std::ptr::eq(a, b) {
        return false;
    }
    a.aabb().overlaps(&b.aabb())
}
