//! Rectangular tile grid with occupancy and radius queries

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::{Coord, UnitId};
use crate::grid::tile::{Tile, RUBBLE_MAX};

/// Fixed-size board of tiles, row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// All-clear board (rubble 0, resource 0 everywhere)
    pub fn new(width: u32, height: u32) -> Self {
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                tiles.push(Tile::clear(Coord::new(x, y)));
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Build a board from rubble and resource layers, indexed `[y][x]`.
    ///
    /// Both layers must be rectangular and of identical shape; nothing is
    /// constructed on mismatch.
    pub fn from_layers(rubble: &[Vec<u32>], resource: &[Vec<u32>]) -> Result<Self> {
        if rubble.is_empty() || rubble[0].is_empty() {
            return Err(SimError::MalformedGrid("empty rubble layer".into()));
        }
        if rubble.len() != resource.len() {
            return Err(SimError::MalformedGrid(format!(
                "rubble has {} rows, resource has {}",
                rubble.len(),
                resource.len()
            )));
        }
        let width = rubble[0].len();
        for (y, (rubble_row, resource_row)) in rubble.iter().zip(resource).enumerate() {
            if rubble_row.len() != width || resource_row.len() != width {
                return Err(SimError::MalformedGrid(format!(
                    "row {} is ragged: rubble {}, resource {}, expected {}",
                    y,
                    rubble_row.len(),
                    resource_row.len(),
                    width
                )));
            }
        }

        let height = rubble.len();
        let mut tiles = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let coord = Coord::new(x as i32, y as i32);
                tiles.push(Tile::new(coord, rubble[y][x], resource[y][x])?);
            }
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            tiles,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width as i32
            && coord.y < self.height as i32
    }

    fn index(&self, coord: Coord) -> Result<usize> {
        if !self.in_bounds(coord) {
            return Err(SimError::OutOfBounds(coord));
        }
        Ok((coord.y as u32 * self.width + coord.x as u32) as usize)
    }

    pub fn tile(&self, coord: Coord) -> Result<&Tile> {
        let idx = self.index(coord)?;
        Ok(&self.tiles[idx])
    }

    fn tile_mut(&mut self, coord: Coord) -> Result<&mut Tile> {
        let idx = self.index(coord)?;
        Ok(&mut self.tiles[idx])
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.tile(coord).map(|t| t.is_occupied()).unwrap_or(false)
    }

    pub fn occupant(&self, coord: Coord) -> Option<UnitId> {
        self.tile(coord).ok().and_then(|t| t.occupant())
    }

    pub fn set_occupant(&mut self, coord: Coord, unit: UnitId) -> Result<()> {
        self.tile_mut(coord)?.set_occupant(unit)
    }

    pub fn remove_occupant(&mut self, coord: Coord) -> Result<UnitId> {
        self.tile_mut(coord)?.clear_occupant()
    }

    /// Rubble level at a coordinate, guarding the valid bound
    pub fn rubble(&self, coord: Coord) -> Result<u32> {
        let tile = self.tile(coord)?;
        let level = tile.rubble();
        if level > RUBBLE_MAX {
            return Err(SimError::InvalidTerrain { coord, level });
        }
        Ok(level)
    }

    pub fn set_rubble(&mut self, coord: Coord, level: u32) -> Result<()> {
        self.tile_mut(coord)?.set_rubble(level)
    }

    pub fn resource(&self, coord: Coord) -> Result<u32> {
        Ok(self.tile(coord)?.resource())
    }

    pub fn add_resource(&mut self, coord: Coord, amount: u32) -> Result<()> {
        self.tile_mut(coord)?.add_resource(amount);
        Ok(())
    }

    /// All tiles within Euclidean distance `radius` of `center`, excluding
    /// the center tile itself and anything off the board.
    ///
    /// Radius is real-valued: 1.0 reaches the 4 orthogonal neighbors, 1.5
    /// admits the full 8-neighborhood (diagonals at sqrt(2)), 2.0 does not
    /// reach tiles at distance 2... and so on via dx^2 + dy^2 <= r^2.
    pub fn tiles_in_radius(&self, center: Coord, radius: f32) -> Vec<&Tile> {
        if radius < 0.0 {
            return Vec::new();
        }
        let reach = radius.floor() as i32;
        let radius_squared = radius * radius;
        let mut found = Vec::new();
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if (dx * dx + dy * dy) as f32 > radius_squared {
                    continue;
                }
                if let Ok(tile) = self.tile(Coord::new(center.x + dx, center.y + dy)) {
                    found.push(tile);
                }
            }
        }
        found
    }

    /// Radius query filtered to occupied tiles
    pub fn occupied_tiles_in_radius(&self, center: Coord, radius: f32) -> Vec<&Tile> {
        self.tiles_in_radius(center, radius)
            .into_iter()
            .filter(|t| t.is_occupied())
            .collect()
    }

    /// Radius query filtered to tiles carrying resource
    pub fn resource_tiles_in_radius(&self, center: Coord, radius: f32) -> Vec<&Tile> {
        self.tiles_in_radius(center, radius)
            .into_iter()
            .filter(|t| t.resource() > 0)
            .collect()
    }
}
