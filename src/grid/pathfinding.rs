//! A* pathfinding over the tile grid
//!
//! Respects rubble costs and routes around occupied tiles.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::AHashMap;

use crate::core::error::{Result, SimError};
use crate::core::types::Coord;
use crate::grid::grid::Grid;

/// Default rubble weight: cost of entering a tile is 1 + rubble * weight
pub const DEFAULT_RUBBLE_WEIGHT: f32 = 1.0;

/// Node in the A* open set
#[derive(Debug, Clone)]
struct PathNode {
    coord: Coord,
    f_cost: f32, // g_cost + heuristic
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for PathNode {}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a path using the A* algorithm.
///
/// Movement is 8-way; the cost of entering a tile is
/// `1 + rubble * rubble_weight`. Occupied tiles are impassable except the
/// goal itself, so callers can path toward (but never through) an occupied
/// destination. The heuristic is Chebyshev distance, admissible for 8-way
/// movement.
///
/// Returns the tile sequence from start to goal inclusive, or
/// `SimError::PathNotFound` when the frontier exhausts.
pub fn find_path(grid: &Grid, start: Coord, goal: Coord, rubble_weight: f32) -> Result<Vec<Coord>> {
    if start == goal {
        return Ok(vec![start]);
    }

    let mut open_set = BinaryHeap::new();
    let mut came_from: AHashMap<Coord, Coord> = AHashMap::new();
    let mut g_scores: AHashMap<Coord, f32> = AHashMap::new();

    g_scores.insert(start, 0.0);
    open_set.push(PathNode {
        coord: start,
        f_cost: start.chebyshev(goal) as f32,
    });

    while let Some(current) = open_set.pop() {
        if current.coord == goal {
            return Ok(reconstruct_path(&came_from, current.coord));
        }

        let current_g = *g_scores.get(&current.coord).unwrap_or(&f32::INFINITY);

        for neighbor in current.coord.neighbors() {
            let Ok(tile) = grid.tile(neighbor) else {
                continue;
            };

            // Units block every tile but the destination itself
            if tile.is_occupied() && neighbor != goal {
                continue;
            }

            let move_cost = 1.0 + tile.rubble() as f32 * rubble_weight;
            let tentative_g = current_g + move_cost;
            let neighbor_g = *g_scores.get(&neighbor).unwrap_or(&f32::INFINITY);

            if tentative_g < neighbor_g {
                came_from.insert(neighbor, current.coord);
                g_scores.insert(neighbor, tentative_g);

                let f_cost = tentative_g + neighbor.chebyshev(goal) as f32;
                open_set.push(PathNode {
                    coord: neighbor,
                    f_cost,
                });
            }
        }
    }

    Err(SimError::PathNotFound {
        from: start,
        to: goal,
    })
}

/// Reconstruct path from came_from map
fn reconstruct_path(came_from: &AHashMap<Coord, Coord>, mut current: Coord) -> Vec<Coord> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Cost of walking an already-built path (sum of entry costs, start free)
pub fn path_cost(grid: &Grid, path: &[Coord], rubble_weight: f32) -> f32 {
    path.iter()
        .skip(1)
        .filter_map(|coord| grid.tile(*coord).ok())
        .map(|tile| 1.0 + tile.rubble() as f32 * rubble_weight)
        .sum()
}
