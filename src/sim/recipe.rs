//! Recipe catalog
//!
//! Fixed, ordered content: the recipes a session works through plus the
//! name pools used for unwanted ingredients and hazards.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// A collection quota the player works toward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Required ingredient names (duplicates share one quota)
    pub ingredients: Vec<String>,
    /// Score awarded per collected unit
    pub points_per_ingredient: u32,
    /// Seconds allowed before the timeout penalty hits
    pub time_limit: u32,
}

impl Recipe {
    pub fn new(name: &str, ingredients: &[&str], points_per_ingredient: u32, time_limit: u32) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            points_per_ingredient,
            time_limit,
        }
    }

    /// Distinct ingredient names in first-seen order
    pub fn tracked_ingredients(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.ingredients.len());
        for name in &self.ingredients {
            if !seen.contains(&name.as_str()) {
                seen.push(name);
            }
        }
        seen
    }
}

/// Unwanted ingredients that fall alongside the real ones
pub const UNWANTED_POOL: [&str; 5] = ["rock", "trash", "bug", "dirt", "slime"];

/// Kitchen hazards
pub const HAZARD_POOL: [&str; 4] = ["fire", "knife", "oil", "steam"];

/// Immutable ordered recipe list plus spawn name pools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogData")]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    unwanted: Vec<String>,
    hazards: Vec<String>,
}

/// Wire form of a catalog; only becomes a [`RecipeCatalog`] after validation
#[derive(Deserialize)]
struct CatalogData {
    recipes: Vec<Recipe>,
    unwanted: Vec<String>,
    hazards: Vec<String>,
}

impl TryFrom<CatalogData> for RecipeCatalog {
    type Error = ConfigError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Self::new(data.recipes, data.unwanted, data.hazards)
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self {
            recipes: vec![
                Recipe::new("Pizza", &["tomato", "cheese", "dough"], 10, 30),
                Recipe::new("Burger", &["bun", "patty", "lettuce"], 15, 25),
                Recipe::new("Salad", &["lettuce", "tomato", "carrot"], 12, 35),
                Recipe::new("Pasta", &["noodles", "sauce", "cheese"], 18, 28),
                Recipe::new("Soup", &["broth", "carrot", "celery"], 14, 32),
            ],
            unwanted: UNWANTED_POOL.iter().map(|s| s.to_string()).collect(),
            hazards: HAZARD_POOL.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RecipeCatalog {
    /// Build a catalog, rejecting content the simulation can't run
    pub fn new(
        recipes: Vec<Recipe>,
        unwanted: Vec<String>,
        hazards: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let catalog = Self {
            recipes,
            unwanted,
            hazards,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check every recipe is winnable and both name pools have entries
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recipes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for recipe in &self.recipes {
            if recipe.ingredients.is_empty() {
                return Err(ConfigError::NoIngredients {
                    name: recipe.name.clone(),
                });
            }
            if recipe.points_per_ingredient == 0 {
                return Err(ConfigError::InvalidRecipe {
                    name: recipe.name.clone(),
                    field: "points_per_ingredient",
                });
            }
            if recipe.time_limit == 0 {
                return Err(ConfigError::InvalidRecipe {
                    name: recipe.name.clone(),
                    field: "time_limit",
                });
            }
        }
        if self.unwanted.is_empty() {
            return Err(ConfigError::EmptyPool { pool: "unwanted" });
        }
        if self.hazards.is_empty() {
            return Err(ConfigError::EmptyPool { pool: "hazard" });
        }
        Ok(())
    }

    /// Catalog with custom recipes and the default name pools
    pub fn with_recipes(recipes: Vec<Recipe>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Self::new(recipes, defaults.unwanted, defaults.hazards)
    }

    /// Recipe at `index`, or None once the catalog is exhausted
    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn unwanted(&self) -> &[String] {
        &self.unwanted
    }

    pub fn hazards(&self) -> &[String] {
        &self.hazards
    }
}
