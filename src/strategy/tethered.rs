//! Base-tethered: pursues, but never strays past its leash
//!
//! The unit remembers the tile it was created on and refuses any step that
//! would leave it closer to the target than to home (Chebyshev compare).
//! With nothing in sight it holds its ground.

use crate::grid::pathfinding::DEFAULT_RUBBLE_WEIGHT;
use crate::sim::action::Action;
use crate::sim::state::GameState;
use crate::sim::unit::Unit;

use super::{idle, nearest_enemy_position, path_step};

pub fn decide_move(actor: &Unit, state: &mut GameState) -> Action {
    let Some(target) = nearest_enemy_position(actor, state) else {
        return idle(actor);
    };

    if let Some(to) = path_step(actor, state, target, DEFAULT_RUBBLE_WEIGHT, None) {
        if to.chebyshev(actor.home) <= to.chebyshev(target) {
            return Action::Move { unit: actor.id, to };
        }
    }
    // Leash taut: hold position and let the act phase do the work
    idle(actor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Coord, FactionId};
    use crate::grid::grid::Grid;
    use crate::sim::faction::Faction;
    use crate::sim::unit::UnitStats;
    use crate::strategy::Strategy;

    fn arena(width: u32) -> GameState {
        GameState::new(
            Grid::new(width, 5),
            vec![
                Faction::new(FactionId(1), "North"),
                Faction::new(FactionId(2), "South"),
            ],
            17,
        )
    }

    fn put(state: &mut GameState, faction: u32, x: i32, y: i32) -> Unit {
        let unit = Unit::new(
            FactionId(faction),
            Coord::new(x, y),
            UnitStats::soldier(),
            Strategy::BaseTethered,
        );
        state.place_unit(unit.clone()).unwrap();
        unit
    }

    #[test]
    fn test_holds_position_with_nothing_in_sight() {
        let mut state = arena(20);
        let actor = put(&mut state, 1, 1, 2);
        put(&mut state, 2, 19, 2); // beyond vision

        assert!(decide_move(&actor, &mut state).is_idle());
    }

    #[test]
    fn test_advances_while_closer_to_home() {
        let mut state = arena(10);
        let actor = put(&mut state, 1, 1, 2);
        put(&mut state, 2, 7, 2);

        match decide_move(&actor, &mut state) {
            Action::Move { to, .. } => {
                assert!(to.x > actor.position.x);
                assert!(to.chebyshev(actor.home) <= to.chebyshev(Coord::new(7, 2)));
            }
            other => panic!("expected an approach move, got {other:?}"),
        }
    }

    #[test]
    fn test_stops_at_the_leash_midpoint() {
        let mut state = arena(10);
        // Home at (1,2); a unit already at the midpoint toward an enemy at
        // (5,2) would advance to x=3, closer to the enemy than to home
        let unit = put(&mut state, 1, 1, 2);
        Action::Move {
            unit: unit.id,
            to: Coord::new(2, 2),
        }
        .execute(&mut state)
        .unwrap();
        let actor = state.unit(unit.id).unwrap().clone();
        put(&mut state, 2, 5, 2);

        // Step to (3,2): chebyshev home = 2, chebyshev target = 2 -> allowed
        // The step after that would break the leash
        match decide_move(&actor, &mut state) {
            Action::Move { to, .. } => {
                assert!(to.chebyshev(actor.home) <= to.chebyshev(Coord::new(5, 2)));
            }
            action => assert!(action.is_idle()),
        }
    }

    #[test]
    fn test_refuses_to_cross_the_leash() {
        let mut state = arena(10);
        let unit = put(&mut state, 1, 1, 2);
        // Teleport the unit deep toward the enemy while home stays at (1,2)
        Action::Move {
            unit: unit.id,
            to: Coord::new(2, 2),
        }
        .execute(&mut state)
        .unwrap();
        Action::Move {
            unit: unit.id,
            to: Coord::new(3, 2),
        }
        .execute(&mut state)
        .unwrap();
        let actor = state.unit(unit.id).unwrap().clone();
        put(&mut state, 2, 5, 2);

        // Any further approach lands closer to the enemy than to home
        assert!(decide_move(&actor, &mut state).is_idle());
    }
}
