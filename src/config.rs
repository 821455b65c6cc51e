//! Game balance and field configuration
//!
//! Every field has a default matching the classic game, so a JSON file only
//! needs to name the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while building a configuration or recipe catalog
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`GameConfig`]
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric field is outside its allowed range
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    /// Chef or entity would not fit inside the play field
    #[error("{what} ({size}) is wider than the play field ({field_width})")]
    TooWide {
        what: &'static str,
        size: f32,
        field_width: f32,
    },

    /// Fall speed range is inverted
    #[error("fall speed range {min}..={max} is empty")]
    FallSpeedRange { min: u32, max: u32 },

    /// Catalog has no recipes
    #[error("recipe catalog is empty")]
    EmptyCatalog,

    /// A recipe lists no ingredients
    #[error("recipe '{name}' has no ingredients")]
    NoIngredients { name: String },

    /// A recipe has a zero reward or time limit
    #[error("recipe '{name}': {field} must be greater than zero")]
    InvalidRecipe { name: String, field: &'static str },

    /// Unwanted or hazard pool is empty
    #[error("{pool} pool is empty")]
    EmptyPool { pool: &'static str },
}

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Ticks per second, used to convert recipe time limits
    pub tick_rate: u32,

    // === Chef ===
    pub chef_width: f32,
    pub chef_height: f32,
    pub chef_speed: f32,

    // === Falling entities ===
    pub entity_size: f32,
    pub min_fall_speed: u32,
    pub max_fall_speed: u32,
    pub spawn_interval_ticks: u32,

    // === Health & scoring ===
    pub max_health: u32,
    pub unwanted_damage: u32,
    pub hazard_damage: u32,
    pub timeout_penalty: u32,
    pub ingredient_quota: u32,

    // === Power-ups ===
    pub magnet_duration_ticks: u32,
    pub magnet_radius: f32,
    pub magnet_pull: f32,
    pub slow_motion_duration_ticks: u32,
    pub slow_motion_factor: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            tick_rate: TICK_RATE,

            chef_width: CHEF_WIDTH,
            chef_height: CHEF_HEIGHT,
            chef_speed: CHEF_SPEED,

            entity_size: ENTITY_SIZE,
            min_fall_speed: MIN_FALL_SPEED,
            max_fall_speed: MAX_FALL_SPEED,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,

            max_health: MAX_HEALTH,
            unwanted_damage: UNWANTED_DAMAGE,
            hazard_damage: HAZARD_DAMAGE,
            timeout_penalty: TIMEOUT_PENALTY,
            ingredient_quota: INGREDIENT_QUOTA,

            magnet_duration_ticks: MAGNET_DURATION_TICKS,
            magnet_radius: MAGNET_RADIUS,
            magnet_pull: MAGNET_PULL,
            slow_motion_duration_ticks: SLOW_MOTION_DURATION_TICKS,
            slow_motion_factor: SLOW_MOTION_FACTOR,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive_f32 = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("chef_width", self.chef_width),
            ("chef_height", self.chef_height),
            ("chef_speed", self.chef_speed),
            ("entity_size", self.entity_size),
            ("slow_motion_factor", self.slow_motion_factor),
        ];
        for (field, value) in positive_f32 {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field });
            }
        }

        let positive_u32 = [
            ("tick_rate", self.tick_rate),
            ("min_fall_speed", self.min_fall_speed),
            ("spawn_interval_ticks", self.spawn_interval_ticks),
            ("max_health", self.max_health),
            ("ingredient_quota", self.ingredient_quota),
        ];
        for (field, value) in positive_u32 {
            if value == 0 {
                return Err(ConfigError::NotPositive { field });
            }
        }

        if self.min_fall_speed > self.max_fall_speed {
            return Err(ConfigError::FallSpeedRange {
                min: self.min_fall_speed,
                max: self.max_fall_speed,
            });
        }

        for (what, size) in [("chef", self.chef_width), ("entity", self.entity_size)] {
            if size > self.field_width {
                return Err(ConfigError::TooWide {
                    what,
                    size,
                    field_width: self.field_width,
                });
            }
        }

        Ok(())
    }

    /// Convert a recipe time limit in seconds to ticks
    pub fn seconds_to_ticks(&self, seconds: u32) -> i64 {
        i64::from(seconds) * i64::from(self.tick_rate)
    }
}
