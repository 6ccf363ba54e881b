//! Pursuer: close on the nearest visible enemy, finish the weakest
//!
//! "Nearest" is squared Euclidean distance; the approach path comes from
//! the shared pathfinder and the unit steps onto its second tile.

use crate::grid::pathfinding::DEFAULT_RUBBLE_WEIGHT;
use crate::sim::action::Action;
use crate::sim::state::GameState;
use crate::sim::unit::Unit;

use super::{idle, nearest_enemy_position, path_step, wanderer};

pub fn decide_move(actor: &Unit, state: &mut GameState) -> Action {
    if let Some(goal) = nearest_enemy_position(actor, state) {
        if let Some(to) = path_step(actor, state, goal, DEFAULT_RUBBLE_WEIGHT, None) {
            return Action::Move { unit: actor.id, to };
        }
    }
    // No enemy visible or no usable path: drift instead
    wanderer::decide_move(actor, state)
}

pub fn decide_act(actor: &Unit, state: &mut GameState) -> Action {
    let target = actor
        .enemies_in_action_range(state)
        .into_iter()
        .min_by_key(|e| (e.health, actor.position.distance_squared(e.position)))
        .map(|e| e.position);
    match target {
        Some(target) => Action::Attack {
            attacker: actor.id,
            target,
        },
        None => idle(actor),
    }
}
