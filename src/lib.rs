//! Rubblefield - Deterministic Turn-Based Grid Combat Simulation
//!
//! Two factions of autonomous units share a rectangular tile grid. Each
//! tick the scheduler shuffles every unit, asks its strategy for a move and
//! an act action, applies them immediately, then sweeps the fallen. The
//! simulation runs until one faction is eliminated.

pub mod core;
pub mod grid;
pub mod sim;
pub mod strategy;
