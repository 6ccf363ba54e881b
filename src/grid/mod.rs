//! Spatial substrate: tiles, the grid, and pathfinding over it

pub mod grid;
pub mod pathfinding;
pub mod tile;

pub use grid::Grid;
pub use pathfinding::{find_path, path_cost, DEFAULT_RUBBLE_WEIGHT};
pub use tile::{Tile, RUBBLE_MAX};
