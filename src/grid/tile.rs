//! A single tile: terrain, resource, and at most one occupant

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::{Coord, UnitId};

/// Highest legal rubble level. 0 is clear ground, 1-5 is rough terrain.
pub const RUBBLE_MAX: u32 = 5;

/// One cell of the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub coord: Coord,
    rubble: u32,
    resource: u32,
    occupant: Option<UnitId>,
}

impl Tile {
    pub fn new(coord: Coord, rubble: u32, resource: u32) -> Result<Self> {
        if rubble > RUBBLE_MAX {
            return Err(SimError::InvalidTerrain {
                coord,
                level: rubble,
            });
        }
        Ok(Self {
            coord,
            rubble,
            resource,
            occupant: None,
        })
    }

    /// A clear tile: no rubble, no resource, no occupant
    pub fn clear(coord: Coord) -> Self {
        Self {
            coord,
            rubble: 0,
            resource: 0,
            occupant: None,
        }
    }

    pub fn rubble(&self) -> u32 {
        self.rubble
    }

    pub fn set_rubble(&mut self, level: u32) -> Result<()> {
        if level > RUBBLE_MAX {
            return Err(SimError::InvalidTerrain {
                coord: self.coord,
                level,
            });
        }
        self.rubble = level;
        Ok(())
    }

    pub fn resource(&self) -> u32 {
        self.resource
    }

    /// Deposit resource onto the tile (bounty from a dead unit)
    pub fn add_resource(&mut self, amount: u32) {
        self.resource += amount;
    }

    pub fn occupant(&self) -> Option<UnitId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Install an occupant. One occupant per tile, ever.
    pub fn set_occupant(&mut self, unit: UnitId) -> Result<()> {
        if self.occupant.is_some() {
            return Err(SimError::TileOccupied(self.coord));
        }
        self.occupant = Some(unit);
        Ok(())
    }

    /// Vacate the tile, returning who was standing on it
    pub fn clear_occupant(&mut self) -> Result<UnitId> {
        self.occupant.take().ok_or(SimError::TileVacant(self.coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_rejects_excess_rubble() {
        let err = Tile::new(Coord::new(0, 0), RUBBLE_MAX + 1, 0).unwrap_err();
        assert!(matches!(err, SimError::InvalidTerrain { level: 6, .. }));
    }

    #[test]
    fn test_occupancy_round_trip() {
        let mut tile = Tile::new(Coord::new(1, 2), 0, 0).unwrap();
        let unit = UnitId::new();

        assert!(!tile.is_occupied());
        tile.set_occupant(unit).unwrap();
        assert!(tile.is_occupied());
        assert_eq!(tile.occupant(), Some(unit));

        assert_eq!(tile.clear_occupant().unwrap(), unit);
        assert!(!tile.is_occupied());
    }

    #[test]
    fn test_double_occupancy_fails() {
        let mut tile = Tile::new(Coord::new(0, 0), 0, 0).unwrap();
        tile.set_occupant(UnitId::new()).unwrap();
        assert_eq!(
            tile.set_occupant(UnitId::new()),
            Err(SimError::TileOccupied(Coord::new(0, 0)))
        );
    }

    #[test]
    fn test_clear_vacant_fails() {
        let mut tile = Tile::new(Coord::new(0, 0), 0, 0).unwrap();
        assert_eq!(
            tile.clear_occupant(),
            Err(SimError::TileVacant(Coord::new(0, 0)))
        );
    }

    #[test]
    fn test_resource_accumulates() {
        let mut tile = Tile::new(Coord::new(0, 0), 0, 10).unwrap();
        tile.add_resource(7);
        assert_eq!(tile.resource(), 17);
    }
}
