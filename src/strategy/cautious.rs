//! Cautious: a pursuer that disengages when badly hurt

use crate::core::types::Coord;
use crate::grid::grid::Grid;
use crate::grid::pathfinding::DEFAULT_RUBBLE_WEIGHT;
use crate::sim::action::Action;
use crate::sim::state::GameState;
use crate::sim::unit::Unit;

use super::{idle, nearest_enemy_position, path_step, pursuer};

pub fn decide_move(actor: &Unit, state: &mut GameState, retreat_threshold: f32) -> Action {
    if is_low(actor, retreat_threshold) {
        if let Some(threat) = nearest_enemy_position(actor, state) {
            return retreat_step(actor, state, threat);
        }
    }
    pursuer::decide_move(actor, state)
}

pub fn decide_act(actor: &Unit, state: &mut GameState, retreat_threshold: f32) -> Action {
    if is_low(actor, retreat_threshold) {
        // Too hurt to trade blows
        return idle(actor);
    }
    pursuer::decide_act(actor, state)
}

fn is_low(actor: &Unit, retreat_threshold: f32) -> bool {
    actor.health as f32 <= actor.stats.max_health as f32 * retreat_threshold
}

/// Path toward the threat's mirror image, falling back to whichever
/// adjacent tile puts the most distance between us
fn retreat_step(actor: &Unit, state: &mut GameState, threat: Coord) -> Action {
    let goal = flee_goal(actor.position, threat, state.grid());
    if goal != actor.position {
        if let Some(to) = path_step(actor, state, goal, DEFAULT_RUBBLE_WEIGHT, None) {
            return Action::Move { unit: actor.id, to };
        }
    }

    let best = actor
        .free_adjacent_tiles(state.grid())
        .iter()
        .map(|t| t.coord)
        .max_by_key(|c| c.distance_squared(threat));
    match best {
        Some(to) => Action::Move { unit: actor.id, to },
        None => idle(actor),
    }
}

/// The actor's position mirrored away from the threat, clamped to the board
fn flee_goal(position: Coord, threat: Coord, grid: &Grid) -> Coord {
    Coord::new(
        (2 * position.x - threat.x).clamp(0, grid.width() as i32 - 1),
        (2 * position.y - threat.y).clamp(0, grid.height() as i32 - 1),
    )
}
