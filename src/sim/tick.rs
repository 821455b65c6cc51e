//! Fixed timestep simulation tick
//!
//! Core game loop that advances the kitchen by exactly one frame.

use super::autopilot;
use super::collision::magnet_pull;
use super::entity::{EntityKind, FallingEntity};
use super::state::{DamageCause, GameEvent, GamePhase, GameState};
use crate::highscores::ScoreEntry;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Start a new run; only honored after game over
    pub restart: bool,
    /// Idle/demo mode - the autopilot steers the chef
    pub autopilot: bool,
}

impl TickInput {
    pub fn left() -> Self {
        Self {
            left: true,
            ..Default::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Default::default()
        }
    }
}

/// Advance the game state by one tick and report what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.reset();
        }
        return events;
    }

    let input = if input.autopilot {
        autopilot::steer(state)
    } else {
        input.clone()
    };

    state.time_ticks += 1;

    // Power-up countdowns
    state.progress.tick_slow_motion();
    state.chef.tick_timers();

    // Chef movement
    state.chef.update(input.left, input.right, state.config.field_width);

    // Magnet pull, then fall
    let slow_motion = state.progress.slow_motion_active();
    let magnet = state.chef.magnet_active();
    let chef_x = state.chef.center_x();
    for entity in &mut state.entities {
        if magnet && entity.kind == EntityKind::Wanted {
            entity.pos.x += magnet_pull(
                entity.center_x(),
                chef_x,
                state.config.magnet_radius,
                state.config.magnet_pull,
            );
        }
        entity.update(slow_motion, state.config.slow_motion_factor);
    }
    let field_height = state.config.field_height;
    state.entities.retain(|e| !e.is_off_field(field_height));

    // Catches
    let chef_box = state.chef.bounds();
    let (caught, falling): (Vec<_>, Vec<_>) = std::mem::take(&mut state.entities)
        .into_iter()
        .partition(|e| e.bounds().overlaps(&chef_box));
    state.entities = falling;
    for entity in caught {
        resolve_catch(state, entity, &mut events);
    }

    // Spawn cadence
    if !state.progress.is_game_over() {
        state.spawn_timer += 1;
        if state.spawn_timer >= state.config.spawn_interval_ticks {
            state.spawn_entity();
            state.spawn_timer = 0;
        }
    }

    // Recipe countdown: penalize and restart, the recipe itself stays
    state.recipe_timer -= 1;
    if state.recipe_timer <= 0 {
        let recipe = state
            .progress
            .current_recipe()
            .map(|r| r.name.clone())
            .unwrap_or_default();
        log::warn!("⏰ Time ran out on {}", recipe);
        let penalty = state.config.timeout_penalty;
        damage(state, DamageCause::Timeout, penalty, &mut events);
        events.push(GameEvent::RecipeTimedOut { recipe });
        state.start_recipe_timer();
    }

    // Recipe completion
    if state.progress.is_recipe_complete() {
        let recipe = state
            .progress
            .current_recipe()
            .map(|r| r.name.clone())
            .unwrap_or_default();
        state.progress.advance_recipe();
        let next = state.progress.current_recipe().map(|r| r.name.clone());
        log::info!("🍽️ {} complete! Score: {}", recipe, state.progress.score());
        events.push(GameEvent::RecipeCompleted { recipe, next });
        if !state.progress.is_game_over() {
            state.start_recipe_timer();
        }
    }

    if state.progress.is_game_over() {
        end_run(state, &mut events);
    }

    events
}

/// Apply the effect of the chef catching one entity
fn resolve_catch(state: &mut GameState, entity: FallingEntity, events: &mut Vec<GameEvent>) {
    state.chef.start_catch();
    match entity.kind {
        EntityKind::Wanted => {
            let points = state.progress.collect(&entity.name);
            events.push(GameEvent::IngredientCollected {
                name: entity.name,
                points,
            });
        }
        EntityKind::Unwanted => {
            let amount = state.config.unwanted_damage;
            damage(state, DamageCause::Unwanted, amount, events);
        }
        EntityKind::Hazard => {
            let amount = state.config.hazard_damage;
            damage(state, DamageCause::Hazard, amount, events);
        }
        EntityKind::Magnet => {
            state.chef.activate_magnet(state.config.magnet_duration_ticks);
            log::debug!("🧲 Magnet on for {} ticks", state.config.magnet_duration_ticks);
            events.push(GameEvent::MagnetActivated);
        }
        EntityKind::SlowMotion => {
            state
                .progress
                .activate_slow_motion(state.config.slow_motion_duration_ticks);
            log::debug!("🐌 Slow motion on for {} ticks", state.config.slow_motion_duration_ticks);
            events.push(GameEvent::SlowMotionActivated);
        }
    }
}

fn damage(state: &mut GameState, cause: DamageCause, amount: u32, events: &mut Vec<GameEvent>) {
    state.progress.take_damage(amount);
    events.push(GameEvent::Damaged {
        cause,
        amount,
        health: state.progress.health(),
    });
}

/// Enter the terminal phase and record the run
fn end_run(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    let score = state.progress.score();
    let rank = state.session.record(ScoreEntry {
        score,
        recipes_completed: state.progress.recipes_completed(),
        ticks: state.time_ticks,
    });
    let high_score = state.high_score();
    match rank {
        Some(rank) => log::info!("Game over! Score {} (session rank #{})", score, rank),
        None => log::info!("Game over! Score {}", score),
    }
    events.push(GameEvent::GameOver { score, high_score });
}
