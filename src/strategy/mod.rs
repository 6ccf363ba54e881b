//! Decision strategies: the pluggable policies driving unit behavior
//!
//! Each tick a unit's strategy is asked for a move action and an act
//! action. Strategies only read the board (plus the shared RNG); the one
//! exception is the healer's cost-free mending, documented there. "No valid
//! action" is always Idle, never an error.

pub mod cautious;
pub mod healer;
pub mod pursuer;
pub mod terrain_averse;
pub mod tethered;
pub mod wanderer;

use serde::{Deserialize, Serialize};

use crate::core::types::Coord;
use crate::grid::pathfinding::find_path;
use crate::sim::action::Action;
use crate::sim::state::GameState;
use crate::sim::unit::{Unit, UnitTemplate};

/// The selectable decision policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Strategy {
    /// Drift randomly, swing at whatever wanders into range
    Wanderer,
    /// Close on the nearest visible enemy, finish the weakest target
    Pursuer,
    /// Pursue while healthy, disengage and flee below a health fraction
    Cautious { retreat_threshold: f32 },
    /// Pursue, but treat rubble as nearly impassable
    TerrainAverse { max_rubble: u32 },
    /// Pursue without straying farther from home than from the target
    BaseTethered,
    /// Hold position, mend adjacent allies, spawn reinforcements
    HealerSpawner {
        template: Option<Box<UnitTemplate>>,
        heal_amount: i32,
    },
}

impl Strategy {
    pub fn decide_move(&self, actor: &Unit, state: &mut GameState) -> Action {
        match self {
            Strategy::Wanderer => wanderer::decide_move(actor, state),
            Strategy::Pursuer => pursuer::decide_move(actor, state),
            Strategy::Cautious { retreat_threshold } => {
                cautious::decide_move(actor, state, *retreat_threshold)
            }
            Strategy::TerrainAverse { max_rubble } => {
                terrain_averse::decide_move(actor, state, *max_rubble)
            }
            Strategy::BaseTethered => tethered::decide_move(actor, state),
            Strategy::HealerSpawner { .. } => healer::decide_move(actor, state),
        }
    }

    pub fn decide_act(&self, actor: &Unit, state: &mut GameState) -> Action {
        match self {
            Strategy::Wanderer => wanderer::decide_act(actor, state),
            Strategy::Pursuer => pursuer::decide_act(actor, state),
            Strategy::Cautious { retreat_threshold } => {
                cautious::decide_act(actor, state, *retreat_threshold)
            }
            Strategy::TerrainAverse { .. } => pursuer::decide_act(actor, state),
            Strategy::BaseTethered => pursuer::decide_act(actor, state),
            Strategy::HealerSpawner {
                template,
                heal_amount,
            } => healer::decide_act(actor, state, template.as_deref(), *heal_amount),
        }
    }
}

/// The actor's own Idle
fn idle(actor: &Unit) -> Action {
    Action::Idle { unit: actor.id }
}

/// Position of the nearest visible enemy, by squared Euclidean distance
fn nearest_enemy_position(actor: &Unit, state: &GameState) -> Option<Coord> {
    actor
        .enemies_in_sight(state)
        .into_iter()
        .min_by_key(|e| actor.position.distance_squared(e.position))
        .map(|e| e.position)
}

/// First step of a path toward `goal`, if one exists and is enterable.
///
/// A failed search is a normal outcome; callers fall back to wandering.
fn path_step(
    actor: &Unit,
    state: &GameState,
    goal: Coord,
    rubble_weight: f32,
    max_rubble: Option<u32>,
) -> Option<Coord> {
    let path = find_path(state.grid(), actor.position, goal, rubble_weight).ok()?;
    let next = *path.get(1)?;
    if state.grid().is_occupied(next) {
        return None;
    }
    if let Some(cap) = max_rubble {
        if state.grid().rubble(next).ok()? > cap {
            return None;
        }
    }
    Some(next)
}

/// A random unoccupied adjacent tile, if any
fn random_free_adjacent(actor: &Unit, state: &mut GameState) -> Option<Coord> {
    use rand::seq::SliceRandom;

    let free: Vec<Coord> = actor
        .free_adjacent_tiles(state.grid())
        .iter()
        .map(|t| t.coord)
        .collect();
    free.choose(state.rng_mut()).copied()
}
