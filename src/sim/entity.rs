//! Falling entities
//!
//! Pure data plus the per-tick fall. Horizontal motion only comes from the
//! magnet pull applied by the tick loop.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// Closed set of falling-object categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Ingredient the current recipe needs
    Wanted,
    /// Junk that hurts a little
    Unwanted,
    /// Kitchen hazard that hurts a lot
    Hazard,
    /// Magnet power-up
    Magnet,
    /// Slow-motion power-up
    SlowMotion,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Wanted,
        EntityKind::Unwanted,
        EntityKind::Hazard,
        EntityKind::Magnet,
        EntityKind::SlowMotion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Wanted => "wanted",
            EntityKind::Unwanted => "unwanted",
            EntityKind::Hazard => "hazard",
            EntityKind::Magnet => "magnet",
            EntityKind::SlowMotion => "slowmo",
        }
    }

    /// Whether catching this hurts the chef
    pub fn is_harmful(&self) -> bool {
        matches!(self, EntityKind::Unwanted | EntityKind::Hazard)
    }

    pub fn is_power_up(&self) -> bool {
        matches!(self, EntityKind::Magnet | EntityKind::SlowMotion)
    }
}

/// A single object falling from the top of the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingEntity {
    pub id: u32,
    pub kind: EntityKind,
    /// Ingredient, junk or hazard name ("magnet"/"slow" for power-ups)
    pub name: String,
    /// Top-left corner
    pub pos: Vec2,
    /// Fall speed at nominal rate, fixed for the entity's lifetime
    pub speed: f32,
    /// Side length of the square bounding box
    pub size: f32,
}

impl FallingEntity {
    /// Create an entity just above the top edge
    pub fn new(id: u32, kind: EntityKind, name: impl Into<String>, x: f32, speed: f32, size: f32) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            pos: Vec2::new(x, -size),
            speed,
            size,
        }
    }

    /// Fall one tick, scaled down while slow motion is active
    pub fn update(&mut self, slow_motion_active: bool, slow_motion_factor: f32) {
        let modifier = if slow_motion_active { slow_motion_factor } else { 1.0 };
        self.pos.y += self.speed * modifier;
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.size))
    }

    /// True once the entity has dropped past the bottom edge
    #[inline]
    pub fn is_off_field(&self, field_height: f32) -> bool {
        self.pos.y > field_height
    }
}
