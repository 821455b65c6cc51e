//! Read-only view handed to the presentation layer each frame

use serde::{Deserialize, Serialize};

use super::entity::EntityKind;
use super::state::GameState;

/// One HUD line of recipe progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientProgress {
    pub name: String,
    pub collected: u32,
    pub required: u32,
}

/// A falling entity as the renderer needs it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub name: String,
    pub x: f32,
    pub y: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u64,
    pub high_score: u64,
    pub health: u32,
    pub max_health: u32,
    /// None once every recipe is done
    pub recipe: Option<String>,
    pub recipe_index: usize,
    pub ingredients: Vec<IngredientProgress>,
    /// Whole seconds left on the recipe countdown
    pub time_left: u32,
    pub magnet_active: bool,
    pub magnet_ticks: u32,
    pub slow_motion_active: bool,
    pub slow_motion_ticks: u32,
    pub recipe_just_completed: bool,
    pub game_over: bool,
    pub chef_x: f32,
    pub chef_y: f32,
    pub chef_catching: bool,
    pub entities: Vec<EntityView>,
}

impl GameState {
    /// Capture the current frame for drawing
    pub fn snapshot(&self) -> Snapshot {
        let progress = &self.progress;
        Snapshot {
            score: progress.score(),
            high_score: self.high_score(),
            health: progress.health(),
            max_health: progress.max_health(),
            recipe: progress.current_recipe().map(|r| r.name.clone()),
            recipe_index: progress.recipe_index(),
            ingredients: progress
                .progress()
                .iter()
                .map(|(name, collected)| IngredientProgress {
                    name: name.clone(),
                    collected: *collected,
                    required: progress.quota(),
                })
                .collect(),
            time_left: self.recipe_seconds_left(),
            magnet_active: self.chef.magnet_active(),
            magnet_ticks: self.chef.magnet_ticks(),
            slow_motion_active: progress.slow_motion_active(),
            slow_motion_ticks: progress.slow_motion_ticks(),
            recipe_just_completed: progress.recipe_just_completed(),
            game_over: self.is_game_over(),
            chef_x: self.chef.pos.x,
            chef_y: self.chef.pos.y,
            chef_catching: self.chef.is_catching(),
            entities: self
                .entities
                .iter()
                .map(|e| EntityView {
                    kind: e.kind,
                    name: e.name.clone(),
                    x: e.pos.x,
                    y: e.pos.y,
                })
                .collect(),
        }
    }
}
