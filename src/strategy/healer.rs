//! Healer-spawner: a stationary base unit
//!
//! Mends adjacent injured allies every act phase at no cooldown cost, and
//! when a template is configured it stamps reinforcements onto free
//! adjacent tiles. Healing is the one mutation that bypasses action
//! execution: it touches ally health only, never occupancy.

use crate::core::error::{Result, SimError};
use crate::core::types::UnitId;
use crate::sim::action::Action;
use crate::sim::constants::ADJACENCY_RADIUS;
use crate::sim::state::GameState;
use crate::sim::unit::{Unit, UnitTemplate};

use super::{idle, random_free_adjacent};

pub fn decide_move(actor: &Unit, _state: &mut GameState) -> Action {
    // Stationary by design of the role
    idle(actor)
}

pub fn decide_act(
    actor: &Unit,
    state: &mut GameState,
    template: Option<&UnitTemplate>,
    heal_amount: i32,
) -> Action {
    mend_adjacent(actor, state, heal_amount);

    match spawn_reinforcement(actor, state, template) {
        Ok(action) => action,
        Err(err) => {
            tracing::debug!(%err, "spawner cannot produce");
            idle(actor)
        }
    }
}

/// Restore health to every adjacent injured ally, capped at their maximum
fn mend_adjacent(actor: &Unit, state: &mut GameState, heal_amount: i32) {
    let injured: Vec<UnitId> = state
        .grid()
        .occupied_tiles_in_radius(actor.position, ADJACENCY_RADIUS)
        .into_iter()
        .filter_map(|t| t.occupant())
        .filter_map(|id| state.unit(id))
        .filter(|u| u.faction == actor.faction && u.is_alive() && u.is_injured())
        .map(|u| u.id)
        .collect();

    for id in injured {
        if let Some(ally) = state.unit_mut(id) {
            ally.heal(heal_amount);
        }
    }
}

/// Stamp a new unit onto a random free adjacent tile.
///
/// Charges the spawner's own action cooldown when it commits; the Spawn
/// action itself never touches cooldowns.
fn spawn_reinforcement(
    actor: &Unit,
    state: &mut GameState,
    template: Option<&UnitTemplate>,
) -> Result<Action> {
    let template = template
        .ok_or_else(|| SimError::InvalidState("spawner has no unit template".into()))?;

    let Some(at) = random_free_adjacent(actor, state) else {
        return Ok(idle(actor));
    };

    let newborn = template.instantiate(actor.faction, at);
    if let Some(me) = state.unit_mut(actor.id) {
        me.action_cooldown = actor.stats.action_cooldown;
    }
    Ok(Action::Spawn {
        spawner: actor.id,
        unit: Box::new(newborn),
        at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Coord, FactionId};
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
            23,
        )
    }

    fn template() -> UnitTemplate {
        UnitTemplate {
            stats: UnitStats::soldier(),
            strategy: Strategy::Pursuer,
        }
    }

    fn put_healer(state: &mut GameState, x: i32, y: i32) -> Unit {
        let unit = Unit::new(
            FactionId(1),
            Coord::new(x, y),
            UnitStats::healer(),
            Strategy::HealerSpawner {
                template: Some(Box::new(template())),
                heal_amount: 2,
            },
        );
        state.place_unit(unit.clone()).unwrap();
        unit
    }

    fn put_soldier(state: &mut GameState, faction: u32, x: i32, y: i32) -> Unit {
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
    fn test_never_moves() {
        let mut state = arena();
        let actor = put_healer(&mut state, 3, 3);
        assert!(decide_move(&actor, &mut state).is_idle());
    }

    #[test]
    fn test_heals_adjacent_injured_ally() {
        let mut state = arena();
        let actor = put_healer(&mut state, 3, 3);
        let ally = put_soldier(&mut state, 1, 4, 3);
        state.unit_mut(ally.id).unwrap().take_damage(10);
        let before = state.unit(ally.id).unwrap().health;

        decide_act(&actor, &mut state, Some(&template()), 2);

        assert_eq!(state.unit(ally.id).unwrap().health, before + 2);
    }

    #[test]
    fn test_healing_caps_at_max_health() {
        let mut state = arena();
        let actor = put_healer(&mut state, 3, 3);
        let ally = put_soldier(&mut state, 1, 4, 3);
        state.unit_mut(ally.id).unwrap().take_damage(1);

        decide_act(&actor, &mut state, Some(&template()), 50);

        let mended = state.unit(ally.id).unwrap();
        assert_eq!(mended.health, mended.stats.max_health);
    }

    #[test]
    fn test_does_not_heal_enemies_or_the_distant() {
        let mut state = arena();
        let actor = put_healer(&mut state, 3, 3);
        let enemy = put_soldier(&mut state, 2, 4, 3);
        let far_ally = put_soldier(&mut state, 1, 6, 6);
        state.unit_mut(enemy.id).unwrap().take_damage(5);
        state.unit_mut(far_ally.id).unwrap().take_damage(5);
        let enemy_hp = state.unit(enemy.id).unwrap().health;
        let far_hp = state.unit(far_ally.id).unwrap().health;

        decide_act(&actor, &mut state, Some(&template()), 2);

        assert_eq!(state.unit(enemy.id).unwrap().health, enemy_hp);
        assert_eq!(state.unit(far_ally.id).unwrap().health, far_hp);
    }

    #[test]
    fn test_spawns_onto_free_adjacent_tile() {
        let mut state = arena();
        let actor = put_healer(&mut state, 3, 3);
        let tmpl = template();

        match decide_act(&actor, &mut state, Some(&tmpl), 2) {
            Action::Spawn { at, unit, .. } => {
                assert!(actor.position.is_adjacent(at));
                assert_eq!(unit.faction, actor.faction);
            }
            other => panic!("expected a spawn, got {other:?}"),
        }
        // Committing to the spawn charged the cooldown
        assert_eq!(
            state.unit(actor.id).unwrap().action_cooldown,
            actor.stats.action_cooldown
        );
    }

    #[test]
    fn test_idles_without_a_template() {
        let mut state = arena();
        let actor = put_healer(&mut state, 3, 3);
        assert!(decide_act(&actor, &mut state, None, 2).is_idle());
        assert_eq!(state.unit(actor.id).unwrap().action_cooldown, 0);
    }

    #[test]
    fn test_idles_when_surrounded() {
        let mut state = arena();
        let actor = put_healer(&mut state, 3, 3);
        for neighbor in actor.position.neighbors() {
            if !state.grid().is_occupied(neighbor) {
                state
                    .grid_mut()
                    .set_occupant(neighbor, UnitId::new())
                    .unwrap();
            }
        }
        assert!(decide_act(&actor, &mut state, Some(&template()), 2).is_idle());
    }
}
