//! Simulation constants - all tunable values in one place

// Adjacency: a 1.5 circle admits the full 8-neighborhood (diagonals at
// sqrt(2)) without reaching tiles at distance 2
pub const ADJACENCY_RADIUS: f32 = 1.5;

// Soldier statline
pub const SOLDIER_MAX_HEALTH: i32 = 20;
pub const SOLDIER_ATTACK_DAMAGE: i32 = 4;
pub const SOLDIER_ACTION_RANGE: f32 = 3.0;
pub const SOLDIER_VISION_RANGE: f32 = 8.0;
pub const SOLDIER_MOVE_COOLDOWN: u32 = 1;
pub const SOLDIER_ACTION_COOLDOWN: u32 = 2;
pub const SOLDIER_BOUNTY: u32 = 10;

// Healer-spawner statline: tough, passive, slow to reinforce
pub const HEALER_MAX_HEALTH: i32 = 40;
pub const HEALER_HEAL_AMOUNT: i32 = 2;
pub const HEALER_VISION_RANGE: f32 = 6.0;
pub const HEALER_SPAWN_COOLDOWN: u32 = 12;
pub const HEALER_BOUNTY: u32 = 25;

// Strategy tuning
/// Health fraction at or below which a cautious unit disengages
pub const CAUTIOUS_RETREAT_FRACTION: f32 = 0.35;
/// Pathfinding rubble weight for terrain-averse units (default weight is 1)
pub const RUBBLE_AVERSION_WEIGHT: f32 = 10.0;
/// Rubble level above which terrain-averse units refuse to step
pub const RUBBLE_AVERSION_MAX: u32 = 2;

// Runner
pub const DEFAULT_MAX_TICKS: u64 = 10_000;
