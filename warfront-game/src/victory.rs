//! Mission completion checks over the current map.
use crate::faction::Faction;
use crate::mission::{Mission, MissionGoal};
use crate::territory::WorldMap;

/// Territory counts per faction, in [`Faction::ALL`] order.
///
/// Always recomputed from the map; nothing here is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FactionTally {
    counts: [usize; Faction::COUNT],
}

impl FactionTally {
    /// Tally territory ownership across the whole map.
    #[must_use]
    pub fn from_map(map: &WorldMap) -> Self {
        let mut counts = [0usize; Faction::COUNT];
        for territory in map.iter() {
            counts[territory.owner.palette_index()] += 1;
        }
        Self { counts }
    }

    /// Number of territories held by `faction`.
    #[must_use]
    pub fn count(&self, faction: Faction) -> usize {
        self.counts[faction.palette_index()]
    }
}

/// Whether `player` has completed `mission` on the current map.
///
/// Pure function of the map: no caching, no mutation, so repeated calls
/// against the same map always agree.
///
/// Elimination missions succeed when the target faction holds zero
/// territories while the player still holds at least one.
#[must_use]
pub fn check_victory(mission: &Mission, map: &WorldMap, player: Faction) -> bool {
    let tally = FactionTally::from_map(map);
    match mission.goal {
        MissionGoal::CountConquest { threshold } => tally.count(player) > threshold,
        MissionGoal::Eliminate { target } => tally.count(target) == 0 && tally.count(player) > 0,
    }
}
