//! Game state and core simulation types
//!
//! `GameState` is the single owner of the chef, the recipe tracker and the
//! live falling entities. The presentation layer reads it between ticks and
//! only ever mutates it through [`super::tick`] and [`GameState::reset`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::entity::FallingEntity;
use super::recipe::{Recipe, RecipeCatalog};
use super::spawn::Spawner;
use crate::config::{ConfigError, GameConfig};
use crate::consts::{CATCH_ANIMATION_TICKS, CHEF_FLOOR_OFFSET};
use crate::highscores::SessionScores;

/// Macro state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance the simulation
    Active,
    /// Run ended; only a reset leaves this phase
    GameOver,
}

/// What hurt the chef
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageCause {
    Unwanted,
    Hazard,
    Timeout,
}

/// Things that happened during a tick, for audio/visual feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A wanted ingredient was caught (points is 0 once its quota is full)
    IngredientCollected { name: String, points: u32 },
    /// Health was lost
    Damaged { cause: DamageCause, amount: u32, health: u32 },
    MagnetActivated,
    SlowMotionActivated,
    /// The recipe countdown ran out and restarted
    RecipeTimedOut { recipe: String },
    /// A recipe was finished; `next` is None when it was the last one
    RecipeCompleted { recipe: String, next: Option<String> },
    /// Run ended
    GameOver { score: u64, high_score: u64 },
}

/// The player-controlled chef
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chef {
    /// Top-left corner; y never changes
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    magnet_ticks: u32,
    catch_ticks: u32,
}

impl Chef {
    /// Chef centered at the bottom of the field
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                (config.field_width / 2.0 - config.chef_width / 2.0).floor(),
                config.field_height - CHEF_FLOOR_OFFSET,
            ),
            size: Vec2::new(config.chef_width, config.chef_height),
            speed: config.chef_speed,
            magnet_ticks: 0,
            catch_ticks: 0,
        }
    }

    /// Step left and/or right, each direction blocked independently at the walls
    pub fn update(&mut self, left: bool, right: bool, field_width: f32) {
        let max_x = field_width - self.size.x;
        if left && self.pos.x > 0.0 {
            self.pos.x -= self.speed;
        }
        if right && self.pos.x < max_x {
            self.pos.x += self.speed;
        }
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }

    /// Count down power-up and animation timers by one tick
    pub fn tick_timers(&mut self) {
        self.magnet_ticks = self.magnet_ticks.saturating_sub(1);
        self.catch_ticks = self.catch_ticks.saturating_sub(1);
    }

    /// Turn the magnet on, replacing any remaining duration
    pub fn activate_magnet(&mut self, duration: u32) {
        self.magnet_ticks = duration;
    }

    pub fn magnet_active(&self) -> bool {
        self.magnet_ticks > 0
    }

    pub fn magnet_ticks(&self) -> u32 {
        self.magnet_ticks
    }

    /// Hold the catch pose for a moment
    pub fn start_catch(&mut self) {
        self.catch_ticks = CATCH_ANIMATION_TICKS;
    }

    pub fn is_catching(&self) -> bool {
        self.catch_ticks > 0
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Score, health and recipe progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressTracker {
    catalog: RecipeCatalog,
    score: u64,
    health: u32,
    max_health: u32,
    quota: u32,
    recipe_index: usize,
    /// Collected count per tracked ingredient, in recipe order
    progress: Vec<(String, u32)>,
    slow_motion_ticks: u32,
    game_over: bool,
    recipe_just_completed: bool,
}

impl ProgressTracker {
    pub fn new(catalog: RecipeCatalog, max_health: u32, quota: u32) -> Self {
        let mut tracker = Self {
            catalog,
            score: 0,
            health: max_health,
            max_health,
            quota,
            recipe_index: 0,
            progress: Vec::new(),
            slow_motion_ticks: 0,
            game_over: false,
            recipe_just_completed: false,
        };
        tracker.reset_recipe_progress();
        tracker
    }

    fn reset_recipe_progress(&mut self) {
        if let Some(recipe) = self.catalog.get(self.recipe_index) {
            self.progress = recipe
                .tracked_ingredients()
                .into_iter()
                .map(|name| (name.to_string(), 0))
                .collect();
        }
    }

    /// Recipe being worked on, or None once the catalog is exhausted
    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.catalog.get(self.recipe_index)
    }

    /// Count a caught ingredient and return the points earned
    pub fn collect(&mut self, ingredient: &str) -> u32 {
        let Some(points) = self.current_recipe().map(|r| r.points_per_ingredient) else {
            return 0;
        };
        let quota = self.quota;
        match self.progress.iter_mut().find(|(name, _)| name == ingredient) {
            Some((_, count)) if *count < quota => {
                *count += 1;
                self.score += u64::from(points);
                points
            }
            _ => 0,
        }
    }

    /// True when the ingredient counts toward the current recipe and isn't full yet
    pub fn needs(&self, ingredient: &str) -> bool {
        self.current_recipe().is_some()
            && self
                .progress
                .iter()
                .any(|(name, count)| name == ingredient && *count < self.quota)
    }

    /// Every tracked ingredient has reached its quota
    pub fn is_recipe_complete(&self) -> bool {
        self.current_recipe().is_some() && self.progress.iter().all(|(_, count)| *count >= self.quota)
    }

    /// Move to the next recipe, or end the game after the last one
    pub fn advance_recipe(&mut self) {
        if self.current_recipe().is_none() {
            return;
        }
        self.recipe_index += 1;
        if self.current_recipe().is_some() {
            self.reset_recipe_progress();
            self.recipe_just_completed = true;
        } else {
            self.game_over = true;
        }
    }

    /// Lose health; reaching zero ends the game for good
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.game_over = true;
        }
    }

    /// Slow every falling entity, replacing any remaining duration
    pub fn activate_slow_motion(&mut self, duration: u32) {
        self.slow_motion_ticks = duration;
    }

    pub fn tick_slow_motion(&mut self) {
        self.slow_motion_ticks = self.slow_motion_ticks.saturating_sub(1);
    }

    /// Clear the one-shot "recipe complete" banner once it has been shown
    pub fn acknowledge_recipe_completed(&mut self) {
        self.recipe_just_completed = false;
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn quota(&self) -> u32 {
        self.quota
    }

    pub fn recipe_index(&self) -> usize {
        self.recipe_index
    }

    /// Number of recipes finished so far
    pub fn recipes_completed(&self) -> usize {
        self.recipe_index.min(self.catalog.len())
    }

    pub fn progress(&self) -> &[(String, u32)] {
        &self.progress
    }

    /// Collected count for one ingredient (0 when untracked)
    pub fn collected(&self, ingredient: &str) -> u32 {
        self.progress
            .iter()
            .find(|(name, _)| name == ingredient)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn slow_motion_active(&self) -> bool {
        self.slow_motion_ticks > 0
    }

    pub fn slow_motion_ticks(&self) -> u32 {
        self.slow_motion_ticks
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn recipe_just_completed(&self) -> bool {
        self.recipe_just_completed
    }
}

/// Complete simulation state
///
/// Chef, entities and config are open for reading and for test setup. The
/// phase and the countdowns only move through [`super::tick`] and
/// [`GameState::reset`].
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub chef: Chef,
    pub progress: ProgressTracker,
    /// Live falling entities in spawn order
    pub entities: Vec<FallingEntity>,
    pub spawner: Spawner,
    pub(super) phase: GamePhase,
    /// Ticks since the last spawn
    pub(super) spawn_timer: u32,
    /// Ticks left on the current recipe
    pub(super) recipe_timer: i64,
    /// Full countdown of the current recipe
    max_recipe_time: i64,
    /// Ticks simulated since the last reset
    pub(super) time_ticks: u64,
    /// Final scores of finished runs in this process
    pub(super) session: SessionScores,
    next_id: u32,
}

impl GameState {
    /// Classic game: default config and recipes
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), RecipeCatalog::default(), seed)
    }

    /// Create a session with custom balance and content
    pub fn with_config(
        config: GameConfig,
        catalog: RecipeCatalog,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        catalog.validate()?;
        Ok(Self::build(config, catalog, seed))
    }

    fn build(config: GameConfig, catalog: RecipeCatalog, seed: u64) -> Self {
        log::info!(
            "New kitchen: {} recipes, seed {}, field {}x{}",
            catalog.len(),
            seed,
            config.field_width,
            config.field_height
        );
        let mut state = Self {
            chef: Chef::new(&config),
            progress: ProgressTracker::new(catalog, config.max_health, config.ingredient_quota),
            config,
            entities: Vec::new(),
            spawner: Spawner::new(seed),
            phase: GamePhase::Active,
            spawn_timer: 0,
            recipe_timer: 0,
            max_recipe_time: 0,
            time_ticks: 0,
            session: SessionScores::new(),
            next_id: 1,
        };
        state.start_recipe_timer();
        state
    }

    /// Back to the start of a run. The RNG stream and session scores carry over.
    pub fn reset(&mut self) {
        let catalog = self.progress.catalog().clone();
        self.chef = Chef::new(&self.config);
        self.progress = ProgressTracker::new(catalog, self.config.max_health, self.config.ingredient_quota);
        self.entities.clear();
        self.spawn_timer = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Active;
        self.start_recipe_timer();
        log::info!("Kitchen reset");
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    pub fn recipe_timer(&self) -> i64 {
        self.recipe_timer
    }

    pub fn max_recipe_time(&self) -> i64 {
        self.max_recipe_time
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn session(&self) -> &SessionScores {
        &self.session
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Restart the countdown for the current recipe
    pub(super) fn start_recipe_timer(&mut self) {
        if let Some(recipe) = self.progress.current_recipe() {
            self.max_recipe_time = self.config.seconds_to_ticks(recipe.time_limit);
            self.recipe_timer = self.max_recipe_time;
        }
    }

    /// Whole seconds left on the recipe countdown
    pub fn recipe_seconds_left(&self) -> u32 {
        (self.recipe_timer.max(0) / i64::from(self.config.tick_rate)) as u32
    }

    /// Best score this session, counting the run in progress
    pub fn high_score(&self) -> u64 {
        self.session
            .top_score()
            .unwrap_or(0)
            .max(self.progress.score())
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Add one entity from the spawner
    pub fn spawn_entity(&mut self) {
        let id = self.next_entity_id();
        let entity = self.spawner.spawn(
            id,
            &self.config,
            self.progress.catalog(),
            self.progress.current_recipe(),
        );
        self.entities.push(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza_tracker() -> ProgressTracker {
        ProgressTracker::new(RecipeCatalog::default(), 100, 3)
    }

    #[test]
    fn test_collect_respects_quota() {
        let mut tracker = pizza_tracker();
        assert_eq!(tracker.collect("tomato"), 10);
        assert_eq!(tracker.collect("tomato"), 10);
        assert_eq!(tracker.collect("tomato"), 10);
        assert_eq!(tracker.collect("tomato"), 0);
        assert_eq!(tracker.collected("tomato"), 3);
        assert_eq!(tracker.score(), 30);
        assert!(!tracker.needs("tomato"));
        assert!(tracker.needs("cheese"));
    }

    #[test]
    fn test_collect_untracked_is_noop() {
        let mut tracker = pizza_tracker();
        assert_eq!(tracker.collect("patty"), 0);
        assert_eq!(tracker.score(), 0);
        assert_eq!(tracker.collected("patty"), 0);
    }

    #[test]
    fn test_advance_resets_progress() {
        let mut tracker = pizza_tracker();
        for name in ["tomato", "cheese", "dough"] {
            for _ in 0..3 {
                tracker.collect(name);
            }
        }
        assert!(tracker.is_recipe_complete());
        tracker.advance_recipe();
        assert_eq!(tracker.recipe_index(), 1);
        assert!(tracker.recipe_just_completed());
        assert!(!tracker.is_recipe_complete());
        assert_eq!(tracker.current_recipe().unwrap().name, "Burger");
        assert!(tracker.progress().iter().all(|(_, count)| *count == 0));

        tracker.acknowledge_recipe_completed();
        assert!(!tracker.recipe_just_completed());
    }

    #[test]
    fn test_last_recipe_ends_game() {
        let catalog = RecipeCatalog::with_recipes(vec![Recipe::new("Toast", &["bread"], 5, 10)]).unwrap();
        let mut tracker = ProgressTracker::new(catalog, 100, 3);
        for _ in 0..3 {
            tracker.collect("bread");
        }
        tracker.advance_recipe();
        assert!(tracker.is_game_over());
        assert!(!tracker.recipe_just_completed());
        assert!(tracker.current_recipe().is_none());
        assert!(!tracker.is_recipe_complete());

        // Stray calls after the catalog runs out are ignored
        assert_eq!(tracker.collect("bread"), 0);
        tracker.advance_recipe();
        assert_eq!(tracker.recipe_index(), 1);
        assert_eq!(tracker.score(), 15);
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut tracker = pizza_tracker();
        tracker.take_damage(80);
        assert_eq!(tracker.health(), 20);
        assert!(!tracker.is_game_over());
        tracker.take_damage(25);
        assert_eq!(tracker.health(), 0);
        assert!(tracker.is_game_over());
        tracker.take_damage(0);
        assert!(tracker.is_game_over());
    }

    #[test]
    fn test_slow_motion_does_not_stack() {
        let mut tracker = pizza_tracker();
        tracker.activate_slow_motion(180);
        for _ in 0..100 {
            tracker.tick_slow_motion();
        }
        tracker.activate_slow_motion(180);
        assert_eq!(tracker.slow_motion_ticks(), 180);
    }

    #[test]
    fn test_chef_movement_clamped() {
        let config = GameConfig::default();
        let mut chef = Chef::new(&config);
        assert_eq!(chef.pos, Vec2::new(370.0, 540.0));

        for _ in 0..100 {
            chef.update(true, false, config.field_width);
        }
        assert_eq!(chef.pos.x, 0.0);

        // Both held: left is blocked at the wall, right still applies
        chef.update(true, true, config.field_width);
        assert_eq!(chef.pos.x, 8.0);

        for _ in 0..200 {
            chef.update(false, true, config.field_width);
        }
        assert_eq!(chef.pos.x, 740.0);
    }

    #[test]
    fn test_magnet_timer() {
        let mut chef = Chef::new(&GameConfig::default());
        chef.activate_magnet(300);
        for _ in 0..299 {
            chef.tick_timers();
        }
        assert!(chef.magnet_active());
        chef.tick_timers();
        assert!(!chef.magnet_active());
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.recipe_timer, 30 * 60);
        assert_eq!(state.recipe_seconds_left(), 30);
        assert_eq!(state.progress.health(), 100);
        assert!(state.entities.is_empty());
        assert_eq!(state.high_score(), 0);
    }

    #[test]
    fn test_duplicate_ingredient_shares_one_quota() {
        let catalog =
            RecipeCatalog::with_recipes(vec![Recipe::new("Caprese", &["tomato", "basil", "tomato"], 5, 20)])
                .unwrap();
        let mut tracker = ProgressTracker::new(catalog, 100, 3);
        assert_eq!(tracker.progress().len(), 2);

        for _ in 0..3 {
            assert_eq!(tracker.collect("tomato"), 5);
        }
        assert!(!tracker.is_recipe_complete());
        for _ in 0..3 {
            tracker.collect("basil");
        }
        assert!(tracker.is_recipe_complete());
        assert_eq!(tracker.collect("tomato"), 0);
        assert_eq!(tracker.score(), 30);
    }

    #[test]
    fn test_with_config_rejects_invalid_config() {
        let config = GameConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert!(matches!(
            GameState::with_config(config, RecipeCatalog::default(), 1),
            Err(ConfigError::NotPositive { field: "tick_rate" })
        ));

        let config = GameConfig {
            min_fall_speed: 6,
            ..Default::default()
        };
        assert!(matches!(
            GameState::with_config(config, RecipeCatalog::default(), 1),
            Err(ConfigError::FallSpeedRange { min: 6, max: 5 })
        ));

        let state = GameState::with_config(GameConfig::default(), RecipeCatalog::default(), 1).unwrap();
        assert_eq!(state.recipe_seconds_left(), 30);
    }
}
