//! Scenario setup: board layers and starting rosters
//!
//! Loaded from TOML or built in code; the simulation core itself never
//! reads files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::{Coord, FactionId};
use crate::grid::grid::Grid;
use crate::sim::constants::{
    CAUTIOUS_RETREAT_FRACTION, HEALER_HEAL_AMOUNT, RUBBLE_AVERSION_MAX,
};
use crate::sim::faction::Faction;
use crate::sim::state::GameState;
use crate::sim::unit::{Unit, UnitStats, UnitTemplate};
use crate::strategy::Strategy;

/// One unit's starting placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSetup {
    pub x: i32,
    pub y: i32,
    pub stats: UnitStats,
    pub strategy: Strategy,
}

/// One side's starting roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactionSetup {
    pub name: String,
    pub units: Vec<UnitSetup>,
}

/// A complete starting position: board layers plus both rosters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Rubble levels indexed `[y][x]`
    pub rubble: Vec<Vec<u32>>,
    /// Starting resource indexed `[y][x]`
    pub resource: Vec<Vec<u32>>,
    pub factions: Vec<FactionSetup>,
}

impl Scenario {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SimError::Scenario(format!("parse failed: {e}")))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SimError::Scenario(format!("encode failed: {e}")))
    }

    /// Load a scenario file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SimError::Scenario(format!("failed to read {path:?}: {e}")))?;
        Self::from_toml(&contents)
    }

    /// Assemble the starting game state. Fails before any board exists if
    /// the layers are ragged or a placement is invalid.
    pub fn build(&self, seed: u64) -> Result<GameState> {
        let grid = Grid::from_layers(&self.rubble, &self.resource)?;

        let factions: Vec<Faction> = self
            .factions
            .iter()
            .enumerate()
            .map(|(idx, setup)| Faction::new(FactionId(idx as u32 + 1), setup.name.clone()))
            .collect();

        let mut state = GameState::new(grid, factions, seed);
        for (idx, setup) in self.factions.iter().enumerate() {
            let faction_id = FactionId(idx as u32 + 1);
            for placement in &setup.units {
                let at = Coord::new(placement.x, placement.y);
                let unit = Unit::new(
                    faction_id,
                    at,
                    placement.stats,
                    placement.strategy.clone(),
                );
                state.place_unit(unit)?;
            }
        }
        Ok(state)
    }

    /// The built-in demo skirmish: an open arena ringed by rough,
    /// resource-lined walls, four units a side.
    pub fn default_skirmish() -> Self {
        let rubble = vec![
            vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            vec![2, 0, 0, 0, 0, 0, 0, 0, 0, 2],
            vec![2, 0, 0, 0, 0, 0, 0, 0, 0, 2],
            vec![2, 0, 0, 0, 0, 0, 0, 0, 0, 2],
            vec![2, 0, 0, 0, 0, 0, 0, 0, 0, 2],
            vec![2, 0, 0, 0, 0, 0, 0, 0, 0, 2],
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            vec![3, 3, 0, 0, 0, 0, 0, 0, 3, 3],
        ];
        let resource = vec![
            vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![10, 10, 10, 10, 10, 10, 10, 10, 10, 10],
            vec![10, 0, 0, 0, 0, 0, 0, 0, 0, 10],
            vec![10, 0, 0, 0, 0, 0, 0, 0, 0, 10],
            vec![10, 0, 0, 0, 0, 0, 0, 0, 0, 10],
            vec![10, 0, 0, 0, 0, 0, 0, 0, 0, 10],
            vec![10, 0, 0, 0, 0, 0, 0, 0, 0, 10],
            vec![10, 10, 10, 10, 10, 10, 10, 10, 10, 10],
            vec![10, 10, 0, 0, 0, 0, 0, 0, 10, 10],
        ];

        let reinforcement = UnitTemplate {
            stats: UnitStats::soldier(),
            strategy: Strategy::Pursuer,
        };
        let healer = |x: i32, y: i32| UnitSetup {
            x,
            y,
            stats: UnitStats::healer(),
            strategy: Strategy::HealerSpawner {
                template: Some(Box::new(reinforcement.clone())),
                heal_amount: HEALER_HEAL_AMOUNT,
            },
        };
        let soldier = |x: i32, y: i32, strategy: Strategy| UnitSetup {
            x,
            y,
            stats: UnitStats::soldier(),
            strategy,
        };

        Scenario {
            name: "skirmish".into(),
            rubble,
            resource,
            factions: vec![
                FactionSetup {
                    name: "North".into(),
                    units: vec![
                        healer(2, 2),
                        soldier(4, 2, Strategy::Pursuer),
                        soldier(
                            6,
                            2,
                            Strategy::Cautious {
                                retreat_threshold: CAUTIOUS_RETREAT_FRACTION,
                            },
                        ),
                        soldier(
                            7,
                            3,
                            Strategy::TerrainAverse {
                                max_rubble: RUBBLE_AVERSION_MAX,
                            },
                        ),
                    ],
                },
                FactionSetup {
                    name: "South".into(),
                    units: vec![
                        healer(7, 6),
                        soldier(5, 6, Strategy::Pursuer),
                        soldier(3, 6, Strategy::Wanderer),
                        soldier(2, 5, Strategy::BaseTethered),
                    ],
                },
            ],
        }
    }
}
