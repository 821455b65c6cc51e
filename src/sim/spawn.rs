//! Falling entity spawner
//!
//! One weighted draw per spawn picks the category, then a uniform draw picks
//! the name from the matching pool. The RNG is seeded so a session replays
//! identically for the same inputs.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{EntityKind, FallingEntity};
use super::recipe::{Recipe, RecipeCatalog};
use crate::config::GameConfig;

/// Upper bounds of each category band, checked in order (first match wins)
pub const WANTED_BAND: f64 = 0.40;
pub const UNWANTED_BAND: f64 = 0.65;
pub const HAZARD_BAND: f64 = 0.80;
pub const MAGNET_BAND: f64 = 0.90;

/// Fixed names for power-up entities
pub const MAGNET_NAME: &str = "magnet";
pub const SLOW_MOTION_NAME: &str = "slow";

/// Map a roll in [0, 1) to a category
///
/// Without a current recipe the wanted band is skipped and low rolls land
/// in the unwanted band instead.
pub fn pick_kind(roll: f64, has_recipe: bool) -> EntityKind {
    if roll < WANTED_BAND && has_recipe {
        EntityKind::Wanted
    } else if roll < UNWANTED_BAND {
        EntityKind::Unwanted
    } else if roll < HAZARD_BAND {
        EntityKind::Hazard
    } else if roll < MAGNET_BAND {
        EntityKind::Magnet
    } else {
        EntityKind::SlowMotion
    }
}

/// Seeded generator for falling entities
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create one entity at a random column just above the field
    pub fn spawn(
        &mut self,
        id: u32,
        config: &GameConfig,
        catalog: &RecipeCatalog,
        current_recipe: Option<&Recipe>,
    ) -> FallingEntity {
        let max_x = (config.field_width - config.entity_size).max(0.0) as u32;
        let x = self.rng.random_range(0..=max_x) as f32;

        let roll: f64 = self.rng.random();
        let kind = pick_kind(roll, current_recipe.is_some());

        let name = match kind {
            EntityKind::Wanted => current_recipe
                .and_then(|recipe| recipe.ingredients.choose(&mut self.rng))
                .cloned(),
            EntityKind::Unwanted => catalog.unwanted().choose(&mut self.rng).cloned(),
            EntityKind::Hazard => catalog.hazards().choose(&mut self.rng).cloned(),
            EntityKind::Magnet => Some(MAGNET_NAME.to_string()),
            EntityKind::SlowMotion => Some(SLOW_MOTION_NAME.to_string()),
        }
        .unwrap_or_else(|| kind.as_str().to_string());

        let speed = self
            .rng
            .random_range(config.min_fall_speed..=config.max_fall_speed) as f32;

        log::debug!("Spawned {} '{}' at x={} speed={}", kind.as_str(), name, x, speed);
        FallingEntity::new(id, kind, name, x, speed, config.entity_size)
    }
}
