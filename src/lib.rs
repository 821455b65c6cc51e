//! Pixel Chef: Kitchen Rush - a falling-ingredients arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, recipes, timers)
//! - `config`: Tunable game balance with validated JSON loading
//! - `highscores`: In-process session leaderboard
//!
//! Rendering, windowing and keyboard polling live outside this crate. A
//! presentation layer feeds [`sim::TickInput`] into [`sim::tick`] once per
//! frame and draws from [`sim::Snapshot`].

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use highscores::{ScoreEntry, SessionScores};

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Chef defaults
    pub const CHEF_WIDTH: f32 = 60.0;
    pub const CHEF_HEIGHT: f32 = 40.0;
    pub const CHEF_SPEED: f32 = 8.0;
    /// Chef stands this far above the bottom edge
    pub const CHEF_FLOOR_OFFSET: f32 = 60.0;
    /// Ticks the catch pose is held after grabbing anything
    pub const CATCH_ANIMATION_TICKS: u32 = 30;

    /// Falling entity defaults
    pub const ENTITY_SIZE: f32 = 30.0;
    pub const MIN_FALL_SPEED: u32 = 2;
    pub const MAX_FALL_SPEED: u32 = 5;

    /// One spawn per second at nominal rate
    pub const SPAWN_INTERVAL_TICKS: u32 = 60;

    /// Health
    pub const MAX_HEALTH: u32 = 100;
    pub const UNWANTED_DAMAGE: u32 = 15;
    pub const HAZARD_DAMAGE: u32 = 25;
    /// Penalty applied every time the recipe countdown runs out
    pub const TIMEOUT_PENALTY: u32 = 50;

    /// Units of each ingredient a recipe needs, regardless of recipe size
    pub const INGREDIENT_QUOTA: u32 = 3;

    /// Power-ups
    pub const MAGNET_DURATION_TICKS: u32 = 300; // 5s
    pub const MAGNET_RADIUS: f32 = 100.0;
    pub const MAGNET_PULL: f32 = 3.0;
    pub const SLOW_MOTION_DURATION_TICKS: u32 = 180; // 3s
    pub const SLOW_MOTION_FACTOR: f32 = 0.3;
}
