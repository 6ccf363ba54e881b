//! Action variants: the only path by which the simulation mutates
//!
//! Each variant validates its preconditions against current state and fails
//! fast with no partial mutation. Execution errors mean the constructing
//! strategy approved something the board disallows.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::{Coord, UnitId};
use crate::sim::state::GameState;
use crate::sim::unit::Unit;

/// One intended state transition for one unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Action {
    /// Do nothing; always succeeds
    Idle { unit: UnitId },
    /// Step onto an adjacent free tile
    Move { unit: UnitId, to: Coord },
    /// Strike the occupant of a tile within action range
    Attack { attacker: UnitId, target: Coord },
    /// Place a freshly stamped unit onto a free tile
    Spawn {
        spawner: UnitId,
        unit: Box<Unit>,
        at: Coord,
    },
    /// Resolve a death: vacate the tile, drop bounty, leave the roster
    Die { unit: UnitId },
}

impl Action {
    /// The unit performing (or suffering) this action
    pub fn actor(&self) -> UnitId {
        match self {
            Action::Idle { unit } => *unit,
            Action::Move { unit, .. } => *unit,
            Action::Attack { attacker, .. } => *attacker,
            Action::Spawn { spawner, .. } => *spawner,
            Action::Die { unit } => *unit,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Action::Idle { .. })
    }

    pub fn is_die(&self) -> bool {
        matches!(self, Action::Die { .. })
    }

    /// Validate against current state and apply. Validation precedes every
    /// mutation, so a returned error leaves the board untouched.
    pub fn execute(&self, state: &mut GameState) -> Result<()> {
        match self {
            Action::Idle { .. } => Ok(()),
            Action::Move { unit, to } => execute_move(state, *unit, *to),
            Action::Attack { attacker, target } => execute_attack(state, *attacker, *target),
            Action::Spawn { unit, at, .. } => execute_spawn(state, unit, *at),
            Action::Die { unit } => execute_die(state, *unit),
        }
    }
}

fn execute_move(state: &mut GameState, id: UnitId, to: Coord) -> Result<()> {
    let mover = state
        .unit(id)
        .ok_or_else(|| SimError::InvalidState("unknown unit".into()))?;
    let from = mover.position;

    if !from.is_adjacent(to) {
        return Err(SimError::OutOfRange {
            origin: from,
            target: to,
            range: 1.5,
        });
    }
    let destination = state.grid().tile(to)?;
    if destination.is_occupied() {
        return Err(SimError::TileOccupied(to));
    }
    if mover.move_cooldown != 0 {
        return Err(SimError::CooldownActive {
            remaining: mover.move_cooldown,
        });
    }
    if !mover.is_alive() {
        return Err(SimError::InvalidState("unit is not alive".into()));
    }

    // Rough ground taxes the next move: scale by the tile being left
    let cooldown = mover.stats.move_cooldown * state.grid().rubble(from)?;

    state.grid_mut().remove_occupant(from)?;
    state.grid_mut().set_occupant(to, id)?;
    if let Some(mover) = state.unit_mut(id) {
        mover.position = to;
        mover.move_cooldown = cooldown;
    }
    Ok(())
}

fn execute_attack(state: &mut GameState, attacker: UnitId, target: Coord) -> Result<()> {
    let striker = state
        .unit(attacker)
        .ok_or_else(|| SimError::InvalidState("unknown unit".into()))?;
    let origin = striker.position;
    let range = striker.stats.action_range;

    if !origin.within_radius(target, range) {
        return Err(SimError::OutOfRange {
            origin,
            target,
            range,
        });
    }
    let victim_id = state
        .grid()
        .tile(target)?
        .occupant()
        .ok_or(SimError::TileVacant(target))?;
    if striker.action_cooldown != 0 {
        return Err(SimError::CooldownActive {
            remaining: striker.action_cooldown,
        });
    }
    if !striker.is_alive() {
        return Err(SimError::InvalidState("unit is not alive".into()));
    }

    let damage = striker.stats.attack_damage;
    let cooldown = striker.stats.action_cooldown * state.grid().rubble(origin)?;

    if let Some(victim) = state.unit_mut(victim_id) {
        // May mark the victim dead; its tile stays occupied until the sweep
        victim.take_damage(damage);
    }
    if let Some(striker) = state.unit_mut(attacker) {
        striker.action_cooldown = cooldown;
    }
    Ok(())
}

fn execute_spawn(state: &mut GameState, unit: &Unit, at: Coord) -> Result<()> {
    let destination = state.grid().tile(at)?;
    if destination.is_occupied() {
        return Err(SimError::TileOccupied(at));
    }
    if state.faction(unit.faction).is_none() {
        return Err(SimError::InvalidState("unknown faction".into()));
    }

    let mut newborn = unit.clone();
    newborn.position = at;
    newborn.home = at;
    state.grid_mut().set_occupant(at, newborn.id)?;
    if let Some(faction) = state.faction_mut(unit.faction) {
        faction.add_unit(newborn);
    }
    Ok(())
}

fn execute_die(state: &mut GameState, id: UnitId) -> Result<()> {
    let unit = state
        .unit(id)
        .ok_or_else(|| SimError::InvalidState("unknown unit".into()))?;
    let at = unit.position;

    // Idempotence guard: the tile must still hold this unit
    if state.grid().occupant(at) != Some(id) {
        return Err(SimError::TileVacant(at));
    }

    let bounty = unit.stats.bounty;
    let faction = unit.faction;

    if let Some(unit) = state.unit_mut(id) {
        unit.alive = false;
    }
    state.grid_mut().remove_occupant(at)?;
    state.grid_mut().add_resource(at, bounty)?;
    // The unit was found by searching the rosters, so its faction exists
    if let Some(faction) = state.faction_mut(faction) {
        faction.remove_unit(id);
    }
    Ok(())
}
