//! The secret mission catalog and its uniform assignment draw.
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::GameError;
use crate::faction::Faction;

/// What the player has to achieve to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionGoal {
    /// Hold strictly more than `threshold` territories.
    CountConquest { threshold: usize },
    /// Wipe the target faction off the map while still holding land yourself.
    Eliminate { target: Faction },
}

/// A secret objective drawn once at game start and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: usize,
    pub description: String,
    pub goal: MissionGoal,
}

/// The fixed mission catalog, built once per process.
pub fn catalog() -> &'static [Mission] {
    static CATALOG: OnceLock<Vec<Mission>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            Mission {
                id: 0,
                description: String::from("Conquer more than 3 territories"),
                goal: MissionGoal::CountConquest { threshold: 3 },
            },
            Mission {
                id: 1,
                description: String::from("Conquer more than 4 territories"),
                goal: MissionGoal::CountConquest { threshold: 4 },
            },
            Mission {
                id: 2,
                description: String::from("Eliminate every troop of the Red army"),
                goal: MissionGoal::Eliminate {
                    target: Faction::Red,
                },
            },
            Mission {
                id: 3,
                description: String::from("Eliminate every troop of the Blue army"),
                goal: MissionGoal::Eliminate {
                    target: Faction::Blue,
                },
            },
            Mission {
                id: 4,
                description: String::from("Eliminate every troop of the Yellow army"),
                goal: MissionGoal::Eliminate {
                    target: Faction::Yellow,
                },
            },
        ]
    })
}

/// Look up a mission by id.
///
/// # Errors
///
/// Returns [`GameError::InvalidIndex`] for an id outside the catalog.
pub fn get(id: usize) -> Result<&'static Mission, GameError> {
    let missions = catalog();
    missions.get(id).ok_or(GameError::InvalidIndex {
        index: id,
        len: missions.len(),
    })
}

/// Draw the player's mission id uniformly from the whole catalog.
pub fn assign_random(rng: &mut impl Rng) -> usize {
    rng.gen_range(0..catalog().len())
}
