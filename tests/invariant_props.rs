//! Property tests for the load-bearing board invariants

use proptest::prelude::*;

use rubblefield::core::types::Coord;
use rubblefield::grid::Grid;
use rubblefield::sim::Scenario;

proptest! {
    /// Radius queries return exactly the in-bounds tiles inside the circle,
    /// never the origin.
    #[test]
    fn tiles_in_radius_is_a_clipped_circle(
        x in 0i32..10,
        y in 0i32..9,
        radius in 0.0f32..6.0,
    ) {
        let grid = Grid::new(10, 9);
        let center = Coord::new(x, y);
        let tiles = grid.tiles_in_radius(center, radius);

        for tile in &tiles {
            prop_assert!(tile.coord != center);
            prop_assert!(center.within_radius(tile.coord, radius));
        }

        // Nothing inside the circle was missed
        let mut expected = 0usize;
        for ty in 0..9 {
            for tx in 0..10 {
                let c = Coord::new(tx, ty);
                if c != center && center.within_radius(c, radius) {
                    expected += 1;
                }
            }
        }
        prop_assert_eq!(tiles.len(), expected);
    }

    /// After any number of ticks from any seed, every roster unit is alive,
    /// healthy-bounded, and standing on the tile that reports it.
    #[test]
    fn simulation_preserves_board_invariants(
        seed in any::<u64>(),
        ticks in 1usize..25,
    ) {
        let mut state = Scenario::default_skirmish().build(seed).unwrap();

        for _ in 0..ticks {
            state.run_tick();

            let mut roster_count = 0;
            for faction in state.factions() {
                for unit in faction.units() {
                    roster_count += 1;
                    prop_assert!(unit.is_alive());
                    prop_assert!(unit.health > 0);
                    prop_assert!(unit.health <= unit.stats.max_health);
                    prop_assert_eq!(state.grid().occupant(unit.position), Some(unit.id));
                }
            }

            let mut occupied_count = 0;
            for y in 0..state.grid().height() as i32 {
                for x in 0..state.grid().width() as i32 {
                    let at = Coord::new(x, y);
                    if let Some(id) = state.grid().occupant(at) {
                        occupied_count += 1;
                        let unit = state.unit(id);
                        prop_assert!(unit.is_some());
                        prop_assert_eq!(unit.map(|u| u.position), Some(at));
                    }
                }
            }
            prop_assert_eq!(occupied_count, roster_count);

            if state.is_finished() {
                break;
            }
        }
    }
}
