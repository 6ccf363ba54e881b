//! Terrain-averse: a pursuer that refuses to wade through rubble

use rand::seq::SliceRandom;

use crate::core::types::Coord;
use crate::sim::action::Action;
use crate::sim::constants::RUBBLE_AVERSION_WEIGHT;
use crate::sim::state::GameState;
use crate::sim::unit::Unit;

use super::{idle, nearest_enemy_position, path_step};

pub fn decide_move(actor: &Unit, state: &mut GameState, max_rubble: u32) -> Action {
    if let Some(goal) = nearest_enemy_position(actor, state) {
        if let Some(to) = path_step(actor, state, goal, RUBBLE_AVERSION_WEIGHT, Some(max_rubble)) {
            return Action::Move { unit: actor.id, to };
        }
    }

    // Wander, but never onto rubble above the cap
    let candidates: Vec<Coord> = actor
        .free_adjacent_tiles(state.grid())
        .iter()
        .filter(|t| t.rubble() <= max_rubble)
        .map(|t| t.coord)
        .collect();
    match candidates.choose(state.rng_mut()).copied() {
        Some(to) => Action::Move { unit: actor.id, to },
        None => idle(actor),
    }
}
