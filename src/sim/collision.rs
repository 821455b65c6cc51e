//! Collision geometry and the magnet pull
//!
//! Everything on the field is an axis-aligned box, so overlap is a plain
//! interval test on both axes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap: boxes that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Horizontal step a magnet applies to an object centered at `object_x`
///
/// Returns 0 outside `radius` or when already aligned with the chef.
pub fn magnet_pull(object_x: f32, chef_x: f32, radius: f32, pull: f32) -> f32 {
    let dx = chef_x - object_x;
    if dx.abs() >= radius || dx == 0.0 {
        return 0.0;
    }
    pull.copysign(dx)
}
