//! Faction: one side of the battle and the roster of units it owns

use serde::{Deserialize, Serialize};

use crate::core::types::{FactionId, UnitId};
use crate::sim::unit::Unit;

/// One of the two sides. Owns its units; a unit appears in exactly one
/// roster for its entire lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faction {
    pub id: FactionId,
    pub name: String,
    units: Vec<Unit>,
}

impl Faction {
    pub fn new(id: FactionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            units: Vec::new(),
        }
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    pub fn add_unit(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    /// Remove a unit from the roster, returning it if it was present
    pub fn remove_unit(&mut self, id: UnitId) -> Option<Unit> {
        let idx = self.units.iter().position(|u| u.id == id)?;
        Some(self.units.remove(idx))
    }

    pub fn unit_ids(&self) -> Vec<UnitId> {
        self.units.iter().map(|u| u.id).collect()
    }

    pub fn roster_size(&self) -> usize {
        self.units.len()
    }

    /// A faction with no units left has lost
    pub fn is_defeated(&self) -> bool {
        self.units.is_empty()
    }
}
