//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick` per frame)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod recipe;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, magnet_pull};
pub use entity::{EntityKind, FallingEntity};
pub use recipe::{HAZARD_POOL, Recipe, RecipeCatalog, UNWANTED_POOL};
pub use snapshot::{EntityView, IngredientProgress, Snapshot};
pub use spawn::{Spawner, pick_kind};
pub use state::{Chef, DamageCause, GameEvent, GamePhase, GameState, ProgressTracker};
pub use tick::{TickInput, tick};
