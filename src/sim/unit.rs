//! Unit entity: faction-owned actor with health, cooldowns, and ranges

use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, FactionId, UnitId};
use crate::grid::grid::Grid;
use crate::grid::tile::Tile;
use crate::sim::constants::{
    ADJACENCY_RADIUS, HEALER_BOUNTY, HEALER_MAX_HEALTH, HEALER_SPAWN_COOLDOWN,
    HEALER_VISION_RANGE, SOLDIER_ACTION_COOLDOWN, SOLDIER_ACTION_RANGE, SOLDIER_ATTACK_DAMAGE,
    SOLDIER_BOUNTY, SOLDIER_MAX_HEALTH, SOLDIER_MOVE_COOLDOWN, SOLDIER_VISION_RANGE,
};
use crate::sim::state::GameState;
use crate::strategy::Strategy;

/// Statline template units are stamped from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitStats {
    pub max_health: i32,
    pub attack_damage: i32,
    /// Radius a unit may target within (circular, squared-distance compare)
    pub action_range: f32,
    /// Radius a unit perceives within
    pub vision_range: f32,
    /// Base move cooldown, scaled up by the rubble of the tile being left
    pub move_cooldown: u32,
    /// Base action cooldown, scaled up by the rubble underfoot
    pub action_cooldown: u32,
    /// Resource deposited on the tile where the unit dies
    pub bounty: u32,
}

impl UnitStats {
    pub fn soldier() -> Self {
        Self {
            max_health: SOLDIER_MAX_HEALTH,
            attack_damage: SOLDIER_ATTACK_DAMAGE,
            action_range: SOLDIER_ACTION_RANGE,
            vision_range: SOLDIER_VISION_RANGE,
            move_cooldown: SOLDIER_MOVE_COOLDOWN,
            action_cooldown: SOLDIER_ACTION_COOLDOWN,
            bounty: SOLDIER_BOUNTY,
        }
    }

    pub fn healer() -> Self {
        Self {
            max_health: HEALER_MAX_HEALTH,
            attack_damage: 0,
            action_range: ADJACENCY_RADIUS,
            vision_range: HEALER_VISION_RANGE,
            move_cooldown: 0,
            action_cooldown: HEALER_SPAWN_COOLDOWN,
            bounty: HEALER_BOUNTY,
        }
    }
}

/// Stats plus strategy: everything a spawner needs to stamp out a unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitTemplate {
    pub stats: UnitStats,
    pub strategy: Strategy,
}

impl UnitTemplate {
    pub fn instantiate(&self, faction: FactionId, at: Coord) -> Unit {
        Unit::new(faction, at, self.stats, self.strategy.clone())
    }
}

/// A single combatant on the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    /// The owning faction; the roster owns the unit, this merely names it
    pub faction: FactionId,
    /// Mirrors the occupied tile's coordinate at all times
    pub position: Coord,
    /// Tile the unit was created on
    pub home: Coord,
    pub health: i32,
    pub stats: UnitStats,
    /// Remaining ticks until the unit may move again (0 = ready)
    pub move_cooldown: u32,
    /// Remaining ticks until the unit may act again (0 = ready)
    pub action_cooldown: u32,
    pub alive: bool,
    pub strategy: Strategy,
}

impl Unit {
    pub fn new(faction: FactionId, position: Coord, stats: UnitStats, strategy: Strategy) -> Self {
        Self {
            id: UnitId::new(),
            faction,
            position,
            home: position,
            health: stats.max_health,
            stats,
            move_cooldown: 0,
            action_cooldown: 0,
            alive: true,
            strategy,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn can_move(&self) -> bool {
        self.alive && self.move_cooldown == 0
    }

    pub fn can_act(&self) -> bool {
        self.alive && self.action_cooldown == 0
    }

    /// Decay both cooldowns one step toward ready, never below zero
    pub fn tick_cooldowns(&mut self) {
        self.move_cooldown = self.move_cooldown.saturating_sub(1);
        self.action_cooldown = self.action_cooldown.saturating_sub(1);
    }

    /// Apply damage; dropping to zero marks the unit dead but leaves its
    /// tile occupied until the death sweep
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
        if self.health <= 0 {
            self.health = 0;
            self.alive = false;
        }
    }

    /// Restore health, capped at the statline maximum
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.stats.max_health);
    }

    pub fn is_injured(&self) -> bool {
        self.health < self.stats.max_health
    }

    pub fn in_range(&self, target: Coord, radius: f32) -> bool {
        self.position.within_radius(target, radius)
    }

    pub fn in_action_range(&self, target: Coord) -> bool {
        self.in_range(target, self.stats.action_range)
    }

    pub fn in_sight(&self, target: Coord) -> bool {
        self.in_range(target, self.stats.vision_range)
    }

    /// The up-to-8 tiles surrounding the unit
    pub fn adjacent_tiles<'a>(&self, grid: &'a Grid) -> Vec<&'a Tile> {
        grid.tiles_in_radius(self.position, ADJACENCY_RADIUS)
    }

    /// Adjacent tiles with nobody standing on them
    pub fn free_adjacent_tiles<'a>(&self, grid: &'a Grid) -> Vec<&'a Tile> {
        self.adjacent_tiles(grid)
            .into_iter()
            .filter(|t| !t.is_occupied())
            .collect()
    }

    /// Living enemies within vision range
    pub fn enemies_in_sight<'a>(&self, state: &'a GameState) -> Vec<&'a Unit> {
        self.units_in_radius(state, self.stats.vision_range, false)
    }

    /// Living enemies the unit could attack this tick
    pub fn enemies_in_action_range<'a>(&self, state: &'a GameState) -> Vec<&'a Unit> {
        self.units_in_radius(state, self.stats.action_range, false)
    }

    /// Living allies within vision range
    pub fn allies_in_sight<'a>(&self, state: &'a GameState) -> Vec<&'a Unit> {
        self.units_in_radius(state, self.stats.vision_range, true)
    }

    fn units_in_radius<'a>(
        &self,
        state: &'a GameState,
        radius: f32,
        allied: bool,
    ) -> Vec<&'a Unit> {
        state
            .grid()
            .occupied_tiles_in_radius(self.position, radius)
            .into_iter()
            .filter_map(|t| t.occupant())
            .filter_map(|id| state.unit(id))
            .filter(|u| u.is_alive() && (u.faction == self.faction) == allied)
            .collect()
    }
}
