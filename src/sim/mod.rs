//! Simulation core: units, factions, actions, the scheduler, scenarios

pub mod action;
pub mod constants;
pub mod faction;
pub mod scenario;
pub mod state;
pub mod unit;

pub use action::Action;
pub use constants::*;
pub use faction::Faction;
pub use scenario::{FactionSetup, Scenario, UnitSetup};
pub use state::{GameState, TickLog, UnitTurn};
pub use unit::{Unit, UnitStats, UnitTemplate};
