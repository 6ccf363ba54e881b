//! Turn scheduler: one tick of the simulation
//!
//! Units act one at a time in a shuffled order, each observing the board as
//! mutated by everyone before it. Deaths resolve in a sweep after the last
//! unit has acted.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::{FactionId, Tick, UnitId};
use crate::grid::grid::Grid;
use crate::sim::action::Action;
use crate::sim::faction::Faction;
use crate::sim::unit::Unit;

/// The move/act pair one unit executed this tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitTurn {
    pub unit: UnitId,
    pub movement: Action,
    pub action: Action,
}

/// Everything that was executed in one tick, in execution order, with the
/// death sweep appended at the end. This is what a renderer draws from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickLog {
    pub tick: Tick,
    pub turns: Vec<UnitTurn>,
    pub deaths: Vec<Action>,
}

/// Full simulation state: the grid, both factions, and the turn scheduler
#[derive(Debug)]
pub struct GameState {
    grid: Grid,
    factions: Vec<Faction>,
    pub tick: Tick,
    rng: ChaCha8Rng,
}

impl GameState {
    /// Build a game from a grid and factions; `seed` fixes the turn-order
    /// shuffle and every strategy's random choices.
    pub fn new(grid: Grid, factions: Vec<Faction>, seed: u64) -> Self {
        debug_assert_eq!(factions.len(), 2, "the simulation is two-sided");
        Self {
            grid,
            factions,
            tick: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn factions(&self) -> &[Faction] {
        &self.factions
    }

    pub fn faction(&self, id: FactionId) -> Option<&Faction> {
        self.factions.iter().find(|f| f.id == id)
    }

    pub(crate) fn faction_mut(&mut self, id: FactionId) -> Option<&mut Faction> {
        self.factions.iter_mut().find(|f| f.id == id)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.factions.iter().find_map(|f| f.unit(id))
    }

    pub(crate) fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.factions.iter_mut().find_map(|f| f.unit_mut(id))
    }

    pub(crate) fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Seed a unit onto the board before (or between) ticks
    pub fn place_unit(&mut self, unit: Unit) -> Result<()> {
        let at = unit.position;
        if self.grid.tile(at)?.is_occupied() {
            return Err(SimError::TileOccupied(at));
        }
        if self.faction(unit.faction).is_none() {
            return Err(SimError::InvalidState("unknown faction".into()));
        }
        self.grid.set_occupant(at, unit.id)?;
        if let Some(faction) = self.faction_mut(unit.faction) {
            faction.add_unit(unit);
        }
        Ok(())
    }

    /// Advance the simulation by one tick.
    ///
    /// Gathers both rosters, shuffles, and processes each unit strictly in
    /// order: cooldown decay, then a move and an act decision, each applied
    /// immediately so later units see the mutated board. Units spawned this
    /// tick are absent from the shuffle and first act next tick. After the
    /// last turn, every unit at zero health dies exactly once.
    pub fn run_tick(&mut self) -> TickLog {
        self.tick += 1;

        let mut order: Vec<UnitId> = self
            .factions
            .iter()
            .flat_map(|f| f.unit_ids())
            .collect();
        order.shuffle(&mut self.rng);

        let mut turns = Vec::with_capacity(order.len());
        for id in order {
            let Some(turn) = self.unit_turn(id) else {
                continue;
            };
            // A dead unit's pair is (Idle, Die); the Die belongs to the sweep
            if turn.action.is_die() {
                continue;
            }
            turns.push(turn);
        }

        let deaths = self.sweep_dead();
        tracing::debug!(
            tick = self.tick,
            turns = turns.len(),
            deaths = deaths.len(),
            "tick complete"
        );

        TickLog {
            tick: self.tick,
            turns,
            deaths,
        }
    }

    fn unit_turn(&mut self, id: UnitId) -> Option<UnitTurn> {
        let unit = self.unit_mut(id)?;
        unit.tick_cooldowns();
        if !unit.is_alive() {
            return Some(UnitTurn {
                unit: id,
                movement: Action::Idle { unit: id },
                action: Action::Die { unit: id },
            });
        }

        let actor = unit.clone();
        let movement = if actor.can_move() {
            actor.strategy.decide_move(&actor, self)
        } else {
            Action::Idle { unit: id }
        };
        let movement = self.apply(movement);

        // Re-read: the act decision sees the unit's post-move position
        let actor = self.unit(id)?.clone();
        let action = if actor.can_act() {
            actor.strategy.decide_act(&actor, self)
        } else {
            Action::Idle { unit: id }
        };
        let action = self.apply(action);

        Some(UnitTurn {
            unit: id,
            movement,
            action,
        })
    }

    /// Execute an action, downgrading a precondition violation to Idle.
    /// Strategies only construct actions they validated, so a rejection is
    /// a strategy bug worth surfacing in the log.
    fn apply(&mut self, action: Action) -> Action {
        match action.execute(self) {
            Ok(()) => action,
            Err(err) => {
                tracing::warn!(%err, "action rejected, treating as idle");
                Action::Idle {
                    unit: action.actor(),
                }
            }
        }
    }

    /// Resolve every death accumulated this tick, including units both
    /// spawned and killed since the shuffle was taken.
    fn sweep_dead(&mut self) -> Vec<Action> {
        let dead: Vec<UnitId> = self
            .factions
            .iter()
            .flat_map(|f| f.units().iter())
            .filter(|u| !u.is_alive() || u.health <= 0)
            .map(|u| u.id)
            .collect();

        let mut deaths = Vec::with_capacity(dead.len());
        for id in dead {
            let die = Action::Die { unit: id };
            match die.execute(self) {
                Ok(()) => deaths.push(die),
                Err(err) => tracing::warn!(%err, "death sweep rejected"),
            }
        }
        deaths
    }

    /// Win condition: rosters are checked in registration order and the
    /// first empty one loses. A double elimination therefore resolves to
    /// the later-checked faction.
    pub fn winner(&self) -> Option<FactionId> {
        for (idx, faction) in self.factions.iter().enumerate() {
            if faction.is_defeated() {
                let other = (idx + 1) % self.factions.len();
                return Some(self.factions[other].id);
            }
        }
        None
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    /// Total live units across both factions
    pub fn unit_count(&self) -> usize {
        self.factions.iter().map(|f| f.roster_size()).sum()
    }
}
