//! Wanderer: random drift, opportunistic swings

use rand::seq::SliceRandom;

use crate::core::types::Coord;
use crate::sim::action::Action;
use crate::sim::state::GameState;
use crate::sim::unit::Unit;

use super::{idle, random_free_adjacent};

pub fn decide_move(actor: &Unit, state: &mut GameState) -> Action {
    match random_free_adjacent(actor, state) {
        Some(to) => Action::Move { unit: actor.id, to },
        None => idle(actor),
    }
}

pub fn decide_act(actor: &Unit, state: &mut GameState) -> Action {
    let targets: Vec<Coord> = actor
        .enemies_in_action_range(state)
        .iter()
        .map(|e| e.position)
        .collect();
    match targets.choose(state.rng_mut()).copied() {
        Some(target) => Action::Attack {
            attacker: actor.id,
            target,
        },
        None => idle(actor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FactionId;
    use crate::grid::grid::Grid;
    use crate::sim::faction::Faction;
    use crate::sim::unit::UnitStats;
    use crate::strategy::Strategy;

    fn arena() -> GameState {
        GameState::new(
            Grid::new(7, 7),
            vec![
                Faction::new(FactionId(1), "North"),
                Faction::new(FactionId(2), "South"),
            ],
            3,
        )
    }

    fn put(state: &mut GameState, faction: u32, x: i32, y: i32) -> Unit {
        let unit = Unit::new(
            FactionId(faction),
            Coord::new(x, y),
            UnitStats::soldier(),
            Strategy::Wanderer,
        );
        state.place_unit(unit.clone()).unwrap();
        unit
    }

    #[test]
    fn test_moves_to_adjacent_free_tile() {
        let mut state = arena();
        let actor = put(&mut state, 1, 3, 3);

        match decide_move(&actor, &mut state) {
            Action::Move { to, .. } => {
                assert!(actor.position.is_adjacent(to));
                assert!(!state.grid().is_occupied(to));
            }
            other => panic!("expected a move, got {other:?}"),
        }
    }

    #[test]
    fn test_idles_when_boxed_in() {
        let mut state = arena();
        let actor = put(&mut state, 1, 3, 3);
        for neighbor in actor.position.neighbors() {
            state
                .grid_mut()
                .set_occupant(neighbor, crate::core::types::UnitId::new())
                .unwrap();
        }

        assert!(decide_move(&actor, &mut state).is_idle());
    }

    #[test]
    fn test_attacks_enemy_in_range() {
        let mut state = arena();
        let actor = put(&mut state, 1, 3, 3);
        let enemy = put(&mut state, 2, 4, 3);

        match decide_act(&actor, &mut state) {
            Action::Attack { target, .. } => assert_eq!(target, enemy.position),
            other => panic!("expected an attack, got {other:?}"),
        }
    }

    #[test]
    fn test_ignores_allies_and_distant_enemies() {
        let mut state = arena();
        let actor = put(&mut state, 1, 0, 0);
        put(&mut state, 1, 1, 0);
        put(&mut state, 2, 6, 6);

        assert!(decide_act(&actor, &mut state).is_idle());
    }
}
