//! Overlap tests for centered rectangles and circles
//!
//! Every entity position is its center; sizes are full width/height.

use glam::Vec2;

/// Axis-aligned bounding box around a center point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let gap = (self.center - other.center).abs();
        let reach = self.half + other.half;
        gap.x < reach.x && gap.y < reach.y
    }
}

/// Do two centered rectangles overlap?
#[inline]
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    Aabb::new(a_pos, a_size).overlaps(&Aabb::new(b_pos, b_size))
}

/// Is `b` strictly closer than `radius` to `a`?
#[inline]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}
