//! Idle/demo controller
//!
//! Looks at the field the same way a player would and picks a direction:
//! dodge anything harmful about to land on the chef, otherwise chase the
//! lowest useful catch. Pure function of the state, so demo runs stay
//! deterministic.

use super::entity::{EntityKind, FallingEntity};
use super::state::GameState;
use super::tick::TickInput;

/// How far above the chef's head a harmful entity counts as a threat
const THREAT_HEIGHT: f32 = 120.0;
/// Extra horizontal margin around the chef when checking threats
const THREAT_MARGIN: f32 = 10.0;

/// Pick this tick's directional intent
pub fn steer(state: &GameState) -> TickInput {
    let chef = &state.chef;
    let chef_left = chef.pos.x - THREAT_MARGIN;
    let chef_right = chef.pos.x + chef.size.x + THREAT_MARGIN;
    let chef_top = chef.pos.y;
    let chef_x = chef.center_x();

    let overlaps_column =
        |e: &FallingEntity| e.pos.x < chef_right && e.pos.x + e.size > chef_left;

    // Dodge the closest harmful entity that will land on us soon
    let threat = state
        .entities
        .iter()
        .filter(|e| e.kind.is_harmful() && overlaps_column(*e))
        .filter(|e| {
            let bottom = e.pos.y + e.size;
            bottom > chef_top - THREAT_HEIGHT && e.pos.y < chef_top + chef.size.y
        })
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    if let Some(threat) = threat {
        let at_left_wall = chef.pos.x <= 0.0;
        let at_right_wall = chef.pos.x + chef.size.x >= state.config.field_width;
        // Away from the threat unless a wall is in the way
        let go_left = if threat.center_x() > chef_x {
            !at_left_wall
        } else {
            at_right_wall
        };
        return if go_left {
            TickInput::left()
        } else {
            TickInput::right()
        };
    }

    // Chase the lowest catch that is still above the chef's feet
    let target = state
        .entities
        .iter()
        .filter(|e| is_worth_catching(state, e))
        .filter(|e| e.pos.y < chef_top + chef.size.y)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    match target {
        Some(target) => {
            let dx = target.center_x() - chef_x;
            if dx.abs() <= chef.speed / 2.0 {
                TickInput::default()
            } else if dx < 0.0 {
                TickInput::left()
            } else {
                TickInput::right()
            }
        }
        None => TickInput::default(),
    }
}

fn is_worth_catching(state: &GameState, entity: &FallingEntity) -> bool {
    match entity.kind {
        EntityKind::Wanted => state.progress.needs(&entity.name),
        kind => kind.is_power_up(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn place(state: &mut GameState, kind: EntityKind, name: &str, x: f32, y: f32) {
        let id = state.next_entity_id();
        let mut entity = FallingEntity::new(id, kind, name, x, 3.0, 30.0);
        entity.pos = Vec2::new(x, y);
        state.entities.push(entity);
    }

    #[test]
    fn test_idle_with_empty_field() {
        let state = GameState::new(1);
        assert_eq!(steer(&state), TickInput::default());
    }

    #[test]
    fn test_chases_needed_ingredient() {
        let mut state = GameState::new(1);
        place(&mut state, EntityKind::Wanted, "dough", 100.0, 200.0);
        assert_eq!(steer(&state), TickInput::left());

        state.entities.clear();
        place(&mut state, EntityKind::Magnet, "magnet", 700.0, 200.0);
        assert_eq!(steer(&state), TickInput::right());
    }

    #[test]
    fn test_ignores_full_ingredient() {
        let mut state = GameState::new(1);
        for _ in 0..3 {
            state.progress.collect("dough");
        }
        place(&mut state, EntityKind::Wanted, "dough", 100.0, 200.0);
        assert_eq!(steer(&state), TickInput::default());
    }

    #[test]
    fn test_dodges_hazard() {
        let mut state = GameState::new(1);
        // Chef spans 370..430; hazard lands slightly right of center
        place(&mut state, EntityKind::Hazard, "knife", 400.0, 480.0);
        place(&mut state, EntityKind::Wanted, "tomato", 600.0, 300.0);
        assert_eq!(steer(&state), TickInput::left());
    }

    #[test]
    fn test_dodges_right_when_pinned_left() {
        let mut state = GameState::new(1);
        state.chef.pos.x = 0.0;
        place(&mut state, EntityKind::Unwanted, "slime", 10.0, 480.0);
        assert_eq!(steer(&state), TickInput::right());
    }
}
