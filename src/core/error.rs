use thiserror::Error;

use crate::core::types::Coord;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("tile {0:?} is already occupied")]
    TileOccupied(Coord),

    #[error("tile {0:?} has no occupant")]
    TileVacant(Coord),

    #[error("coordinate {0:?} is outside the grid")]
    OutOfBounds(Coord),

    #[error("target {target:?} outside range {range} of {origin:?}")]
    OutOfRange {
        origin: Coord,
        target: Coord,
        range: f32,
    },

    #[error("cooldown still running: {remaining} ticks remaining")]
    CooldownActive { remaining: u32 },

    #[error("invalid unit state: {0}")]
    InvalidState(String),

    #[error("rubble level {level} at {coord:?} exceeds the valid bound")]
    InvalidTerrain { coord: Coord, level: u32 },

    #[error("no path from {from:?} to {to:?}")]
    PathNotFound { from: Coord, to: Coord },

    #[error("malformed grid data: {0}")]
    MalformedGrid(String),

    #[error("scenario error: {0}")]
    Scenario(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
