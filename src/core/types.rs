//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for factions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactionId(pub u32);

impl FactionId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance (ranges compare squared, no sqrt needed)
    pub fn distance_squared(&self, other: Coord) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Chebyshev distance: max(|dx|, |dy|)
    pub fn chebyshev(&self, other: Coord) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx.max(dy)
    }

    /// True when `other` lies within the circle of radius `r` around self
    pub fn within_radius(&self, other: Coord, r: f32) -> bool {
        self.distance_squared(other) as f32 <= r * r
    }

    /// True when `other` is one of the 8 surrounding tiles
    pub fn is_adjacent(&self, other: Coord) -> bool {
        self.chebyshev(other) == 1
    }

    /// The 8 surrounding coordinates, unclipped
    pub fn neighbors(&self) -> [Coord; 8] {
        [
            Coord::new(self.x - 1, self.y - 1),
            Coord::new(self.x, self.y - 1),
            Coord::new(self.x + 1, self.y - 1),
            Coord::new(self.x - 1, self.y),
            Coord::new(self.x + 1, self.y),
            Coord::new(self.x - 1, self.y + 1),
            Coord::new(self.x, self.y + 1),
            Coord::new(self.x + 1, self.y + 1),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_id_equality() {
        let a = FactionId(1);
        let b = FactionId(1);
        let c = FactionId(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_unit_ids_unique() {
        assert_ne!(UnitId::new(), UnitId::new());
    }

    #[test]
    fn test_distance_squared() {
        let a = Coord::new(0, 0);
        assert_eq!(a.distance_squared(Coord::new(3, 4)), 25);
        assert_eq!(a.distance_squared(Coord::new(-1, 1)), 2);
        assert_eq!(a.distance_squared(a), 0);
    }

    #[test]
    fn test_chebyshev() {
        let a = Coord::new(2, 2);
        assert_eq!(a.chebyshev(Coord::new(5, 3)), 3);
        assert_eq!(a.chebyshev(Coord::new(1, 1)), 1);
        assert_eq!(a.chebyshev(a), 0);
    }

    #[test]
    fn test_adjacency_is_eight_way() {
        let center = Coord::new(2, 2);
        let adjacent: Vec<Coord> = center
            .neighbors()
            .into_iter()
            .filter(|c| center.is_adjacent(*c))
            .collect();
        assert_eq!(adjacent.len(), 8);
        assert!(!center.is_adjacent(Coord::new(4, 4)));
        assert!(!center.is_adjacent(center));
    }

    #[test]
    fn test_diagonal_within_radius_1_5() {
        let center = Coord::new(0, 0);
        // sqrt(2) fits inside 1.5, distance 2 does not
        assert!(center.within_radius(Coord::new(1, 1), 1.5));
        assert!(!center.within_radius(Coord::new(2, 0), 1.5));
        // radius 1 excludes diagonals
        assert!(!center.within_radius(Coord::new(1, 1), 1.0));
        assert!(center.within_radius(Coord::new(0, 1), 1.0));
    }
}
