//! Property-based tests for the recipe tracker and the tick loop.
//!
//! Uses proptest to generate random operation and input sequences, then
//! verify the scoring, health and timer invariants hold after every step.

use pixel_chef::sim::{GameState, ProgressTracker, RecipeCatalog, TickInput, tick};
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

/// Names covering tracked, untracked-but-real and junk ingredients
const NAMES: [&str; 6] = ["tomato", "cheese", "dough", "patty", "lettuce", "rock"];

#[derive(Debug, Clone)]
enum TrackerOp {
    Collect(usize),
    Damage(u32),
    Advance,
    SlowMotion(u32),
    TickSlowMotion,
}

fn arb_tracker_ops(max_ops: usize) -> impl Strategy<Value = Vec<TrackerOp>> {
    proptest::collection::vec(
        prop_oneof![
            6 => (0..NAMES.len()).prop_map(TrackerOp::Collect),
            2 => (0..40u32).prop_map(TrackerOp::Damage),
            1 => Just(TrackerOp::Advance),
            1 => (1..400u32).prop_map(TrackerOp::SlowMotion),
            2 => Just(TrackerOp::TickSlowMotion),
        ],
        1..=max_ops,
    )
}

fn arb_inputs(max_ticks: usize) -> impl Strategy<Value = Vec<TickInput>> {
    proptest::collection::vec(
        (any::<bool>(), any::<bool>()).prop_map(|(left, right)| TickInput {
            left,
            right,
            ..Default::default()
        }),
        1..=max_ticks,
    )
}

// ===========================================================================
// Tracker invariants
// ===========================================================================

proptest! {
    #[test]
    fn collect_never_overfills_and_scores_exact_reward(ops in arb_tracker_ops(200)) {
        let mut tracker = ProgressTracker::new(RecipeCatalog::default(), 100, 3);
        let mut was_game_over = false;

        for op in ops {
            let score_before = tracker.score();
            match op {
                TrackerOp::Collect(i) => {
                    let name = NAMES[i];
                    let reward = tracker.current_recipe().map(|r| r.points_per_ingredient);
                    let needed = tracker.needs(name);
                    let count_before = tracker.collected(name);

                    let points = tracker.collect(name);

                    if needed {
                        prop_assert!(count_before < 3);
                        prop_assert_eq!(Some(points), reward);
                        prop_assert_eq!(tracker.collected(name), count_before + 1);
                    } else {
                        prop_assert_eq!(points, 0);
                        prop_assert_eq!(tracker.collected(name), count_before);
                    }
                    prop_assert_eq!(tracker.score(), score_before + u64::from(points));
                }
                TrackerOp::Damage(amount) => {
                    let health_before = tracker.health();
                    tracker.take_damage(amount);
                    prop_assert_eq!(tracker.health(), health_before.saturating_sub(amount));
                }
                TrackerOp::Advance => {
                    let index_before = tracker.recipe_index();
                    let had_recipe = tracker.current_recipe().is_some();
                    tracker.advance_recipe();
                    if had_recipe {
                        prop_assert_eq!(tracker.recipe_index(), index_before + 1);
                        if tracker.current_recipe().is_some() {
                            prop_assert!(tracker.recipe_just_completed());
                            prop_assert!(tracker.progress().iter().all(|(_, c)| *c == 0));
                        } else {
                            prop_assert!(tracker.is_game_over());
                        }
                    }
                }
                TrackerOp::SlowMotion(ticks) => {
                    tracker.activate_slow_motion(ticks);
                    prop_assert_eq!(tracker.slow_motion_ticks(), ticks);
                    prop_assert!(tracker.slow_motion_active());
                }
                TrackerOp::TickSlowMotion => tracker.tick_slow_motion(),
            }

            prop_assert!(tracker.score() >= score_before);
            prop_assert!(tracker.health() <= tracker.max_health());
            prop_assert!(tracker.progress().iter().all(|(_, c)| *c <= 3));
            prop_assert_eq!(
                tracker.is_recipe_complete(),
                tracker.current_recipe().is_some()
                    && tracker.progress().iter().all(|(_, c)| *c >= 3)
            );
            if tracker.health() == 0 {
                prop_assert!(tracker.is_game_over());
            }
            if was_game_over {
                prop_assert!(tracker.is_game_over());
            }
            was_game_over = tracker.is_game_over();
        }
    }

    #[test]
    fn slow_motion_flag_lasts_exactly_duration(duration in 1..500u32) {
        let mut tracker = ProgressTracker::new(RecipeCatalog::default(), 100, 3);
        tracker.activate_slow_motion(duration);
        let mut active = 0;
        while tracker.slow_motion_active() {
            active += 1;
            tracker.tick_slow_motion();
        }
        prop_assert_eq!(active, duration);
    }
}

// ===========================================================================
// Tick loop invariants
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn tick_keeps_state_consistent(seed in any::<u64>(), inputs in arb_inputs(3000)) {
        let mut state = GameState::new(seed);
        let max_x = state.config.field_width - state.chef.size.x;
        let mut last_score = 0;
        let mut last_recipe = 0;
        let mut was_game_over = false;

        for input in &inputs {
            tick(&mut state, input);

            prop_assert!(state.progress.score() >= last_score);
            prop_assert!(state.progress.recipe_index() >= last_recipe);
            prop_assert!(state.progress.health() <= state.progress.max_health());
            prop_assert!(state.chef.pos.x >= 0.0 && state.chef.pos.x <= max_x);
            prop_assert!(state.recipe_timer() > 0 && state.recipe_timer() <= state.max_recipe_time());
            prop_assert!(state.spawn_timer() < state.config.spawn_interval_ticks);
            prop_assert!(state
                .entities
                .iter()
                .all(|e| e.pos.y <= state.config.field_height && (2.0..=5.0).contains(&e.speed)));
            if state.progress.health() == 0 {
                prop_assert!(state.is_game_over());
            }
            if was_game_over {
                prop_assert!(state.is_game_over());
            }

            last_score = state.progress.score();
            last_recipe = state.progress.recipe_index();
            was_game_over = state.is_game_over();
        }
    }
}
