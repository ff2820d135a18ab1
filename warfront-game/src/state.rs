//! Owned session state: the map, the secret mission, and the seeded RNG.
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::battle::{self, AttackRejection, BattleOutcome, BattleResult};
use crate::faction::Faction;
use crate::mission::{self, Mission};
use crate::territory::WorldMap;
use crate::victory;

/// A full single-player game session.
///
/// Owns every piece of mutable state for one run; nothing in the crate keeps
/// process-wide globals. Drop the session and the game is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    map: WorldMap,
    pub player: Faction,
    mission_id: usize,
    pub turn: u32,
    /// Human-readable journal of everything that happened this session.
    pub logs: Vec<String>,
    seed: u64,
    #[serde(skip)]
    rng: Option<ChaCha20Rng>,
}

impl GameState {
    /// Start a fresh session from `seed`, drawing the secret mission.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Initialization`] when the embedded world layout
    /// cannot be built.
    pub fn new(seed: u64) -> Result<Self, GameError> {
        let map = WorldMap::initialize()?;
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mission_id = mission::assign_random(&mut rng);
        Self::build(map, mission_id, seed, rng)
    }

    /// Start a session over an explicit map and mission, e.g. for scripted
    /// scenarios and tooling.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidIndex`] when `mission_id` is outside the
    /// catalog and [`GameError::Initialization`] for a malformed map.
    pub fn with_map(map: WorldMap, mission_id: usize, seed: u64) -> Result<Self, GameError> {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        Self::build(map, mission_id, seed, rng)
    }

    fn build(
        map: WorldMap,
        mission_id: usize,
        seed: u64,
        rng: ChaCha20Rng,
    ) -> Result<Self, GameError> {
        let mission = mission::get(mission_id)?;
        // The player commands the faction holding the first territory.
        let player = map.get(0)?.owner;
        let mut state = Self {
            map,
            player,
            mission_id,
            turn: 0,
            logs: Vec::new(),
            seed,
            rng: Some(rng),
        };
        state
            .logs
            .push(format!("Secret mission drawn: {}", mission.description));
        Ok(state)
    }

    /// The session seed, for replaying a run.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Read access to the world map.
    #[must_use]
    pub const fn map(&self) -> &WorldMap {
        &self.map
    }

    /// Id of the mission assigned at start. Never changes mid-game.
    #[must_use]
    pub const fn mission_id(&self) -> usize {
        self.mission_id
    }

    /// The mission assigned at start.
    #[must_use]
    pub fn mission(&self) -> &'static Mission {
        mission::get(self.mission_id).unwrap_or_else(|_| &mission::catalog()[0])
    }

    /// Restore the non-serialized RNG after deserializing a snapshot.
    #[must_use]
    pub fn rehydrate(mut self) -> Self {
        self.rng = Some(ChaCha20Rng::seed_from_u64(self.seed));
        self
    }

    /// Validate and resolve one attack between two 0-based territory indices.
    ///
    /// Precondition violations reject the request without touching any state:
    /// the map, both territories, and the turn counter are exactly as before.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidIndex`] for an out-of-range index,
    /// [`GameError::InvalidAttack`] for self-attacks and same-faction attacks.
    pub fn attack(
        &mut self,
        attacker_idx: usize,
        defender_idx: usize,
    ) -> Result<BattleOutcome, GameError> {
        let attacker_owner = self.map.get(attacker_idx)?.owner;
        let defender_owner = self.map.get(defender_idx)?.owner;
        if attacker_idx == defender_idx {
            return Err(GameError::InvalidAttack(AttackRejection::SelfAttack));
        }
        if attacker_owner == defender_owner {
            return Err(GameError::InvalidAttack(AttackRejection::SameFaction(
                attacker_owner,
            )));
        }

        let rng = self.rng.as_mut().ok_or_else(|| {
            GameError::Initialization(String::from(
                "session rng missing; rehydrate after deserializing",
            ))
        })?;
        let (attacker, defender) = self.map.pair_mut(attacker_idx, defender_idx)?;
        let attacker_name = attacker.name.clone();
        let defender_name = defender.name.clone();
        let outcome = battle::resolve_attack(attacker, defender, rng);

        self.turn += 1;
        self.logs.push(battle_log_line(
            &attacker_name,
            &defender_name,
            attacker_owner,
            outcome,
        ));
        Ok(outcome)
    }

    /// Whether the player's secret mission is complete on the current map.
    #[must_use]
    pub fn check_victory(&self) -> bool {
        victory::check_victory(self.mission(), &self.map, self.player)
    }
}

fn battle_log_line(
    attacker: &str,
    defender: &str,
    conqueror: Faction,
    outcome: BattleOutcome,
) -> String {
    match outcome.result {
        BattleResult::Tie => format!(
            "{attacker} and {defender} tie at {} apiece; the defense loses one troop",
            outcome.attack_roll
        ),
        BattleResult::AttackerWins => format!(
            "{attacker} rolls {} against {} and takes {defender} for the {conqueror} army",
            outcome.attack_roll, outcome.defense_roll
        ),
        BattleResult::DefenderWins => format!(
            "{defender} holds with a {} against {}; the invaders lose one troop",
            outcome.defense_roll, outcome.attack_roll
        ),
    }
}
