//! Core types and errors shared by every module

pub mod error;
pub mod types;

pub use error::{Result, SimError};
pub use types::{Coord, FactionId, Tick, UnitId};
