//! The fixed world map and bounds-checked territory access.
use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::faction::Faction;

const DEFAULT_WORLD_DATA: &str = include_str!("../assets/world.json");

/// Number of territories on the map. The map never grows or shrinks.
pub const TERRITORY_COUNT: usize = 5;

/// A single conquerable region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub owner: Faction,
    pub troops: u32,
}

impl Territory {
    /// Construct a territory from its starting values.
    #[must_use]
    pub fn new(name: &str, owner: Faction, troops: u32) -> Self {
        Self {
            name: name.to_string(),
            owner,
            troops,
        }
    }
}

/// The full territory collection, created once at game start.
///
/// Read access goes through [`WorldMap::get`]; mutation is reserved for the
/// attack path via the crate-private pair accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldMap {
    territories: Vec<Territory>,
}

impl WorldMap {
    /// Build the starting map from the embedded layout data.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Initialization`] when the embedded layout cannot
    /// be parsed or does not hold exactly [`TERRITORY_COUNT`] territories.
    pub fn initialize() -> Result<Self, GameError> {
        let territories: Vec<Territory> = serde_json::from_str(DEFAULT_WORLD_DATA)
            .map_err(|err| GameError::Initialization(err.to_string()))?;
        Self::from_territories(territories)
    }

    /// Build a map from explicit territories, e.g. for scripted scenarios.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Initialization`] unless exactly
    /// [`TERRITORY_COUNT`] territories are supplied.
    pub fn from_territories(territories: Vec<Territory>) -> Result<Self, GameError> {
        if territories.len() != TERRITORY_COUNT {
            return Err(GameError::Initialization(format!(
                "expected {TERRITORY_COUNT} territories, found {}",
                territories.len()
            )));
        }
        Ok(Self { territories })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Read access to one territory.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidIndex`] for an out-of-range index.
    pub fn get(&self, index: usize) -> Result<&Territory, GameError> {
        let len = self.territories.len();
        self.territories
            .get(index)
            .ok_or(GameError::InvalidIndex { index, len })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Territory> {
        self.territories.iter()
    }

    /// Number of territories currently held by `faction`.
    #[must_use]
    pub fn holdings(&self, faction: Faction) -> usize {
        self.territories
            .iter()
            .filter(|territory| territory.owner == faction)
            .count()
    }

    /// Mutable access to two distinct territories for battle resolution.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidIndex`] for an out-of-range index and
    /// [`GameError::InvalidAttack`] when both indices name the same slot.
    pub(crate) fn pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> Result<(&mut Territory, &mut Territory), GameError> {
        let len = self.territories.len();
        if first >= len {
            return Err(GameError::InvalidIndex { index: first, len });
        }
        if second >= len {
            return Err(GameError::InvalidIndex { index: second, len });
        }
        if first == second {
            return Err(GameError::InvalidAttack(
                crate::battle::AttackRejection::SelfAttack,
            ));
        }
        if first < second {
            let (head, tail) = self.territories.split_at_mut(second);
            Ok((&mut head[first], &mut tail[0]))
        } else {
            let (head, tail) = self.territories.split_at_mut(first);
            Ok((&mut tail[0], &mut head[second]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_builds_the_reference_layout() {
        let map = WorldMap::initialize().unwrap();
        assert_eq!(map.len(), TERRITORY_COUNT);

        let first = map.get(0).unwrap();
        assert_eq!(first.name, "Brazil");
        assert_eq!(first.owner, Faction::Green);
        assert_eq!(first.troops, 6);

        let last = map.get(4).unwrap();
        assert_eq!(last.name, "Argentina");
        assert_eq!(last.owner, Faction::Pink);
        assert_eq!(last.troops, 1);
    }

    #[test]
    fn every_starting_territory_has_a_distinct_owner() {
        let map = WorldMap::initialize().unwrap();
        for faction in Faction::ALL {
            assert_eq!(map.holdings(faction), 1);
        }
    }

    #[test]
    fn get_rejects_out_of_range_index() {
        let map = WorldMap::initialize().unwrap();
        let err = map.get(TERRITORY_COUNT).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidIndex {
                index: TERRITORY_COUNT,
                len: TERRITORY_COUNT
            }
        );
    }

    #[test]
    fn from_territories_enforces_the_fixed_size() {
        let short = vec![Territory::new("Lone", Faction::Green, 1)];
        assert!(matches!(
            WorldMap::from_territories(short),
            Err(GameError::Initialization(_))
        ));
    }

    #[test]
    fn pair_mut_rejects_self_pairs_and_returns_disjoint_slots() {
        let mut map = WorldMap::initialize().unwrap();
        assert!(matches!(
            map.pair_mut(2, 2),
            Err(GameError::InvalidAttack(_))
        ));

        let (first, second) = map.pair_mut(3, 1).unwrap();
        assert_eq!(first.name, "Italy");
        assert_eq!(second.name, "China");
    }
}
