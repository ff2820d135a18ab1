//! Dice-roll battle resolution between two territories.
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

use crate::faction::Faction;
use crate::territory::Territory;

/// Number of faces on the battle die.
pub const DIE_SIDES: u8 = 6;

/// Reason an attack request was rejected before any dice were rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackRejection {
    #[error("a territory cannot attack itself")]
    SelfAttack,
    #[error("attacker and defender both fight for the {0} army")]
    SameFaction(Faction),
}

/// Who came out ahead on the dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleResult {
    Tie,
    AttackerWins,
    DefenderWins,
}

/// Observable record of a single resolved battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub attack_roll: u8,
    pub defense_roll: u8,
    pub result: BattleResult,
    pub defender_changed_owner: bool,
}

/// Roll both dice and resolve one battle, mutating the two territories.
///
/// Callers must already have checked that the territories are distinct and
/// belong to different factions; see [`crate::state::GameState::attack`],
/// which rejects such requests without touching any state.
pub fn resolve_attack(
    attacker: &mut Territory,
    defender: &mut Territory,
    rng: &mut impl Rng,
) -> BattleOutcome {
    let attack_roll = roll_die(rng);
    let defense_roll = roll_die(rng);
    resolve_with_rolls(attacker, defender, attack_roll, defense_roll)
}

/// Resolve a battle for a fixed pair of rolls.
///
/// Split out from [`resolve_attack`] so scripted scenarios can pin the dice.
pub fn resolve_with_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    attack_roll: u8,
    defense_roll: u8,
) -> BattleOutcome {
    debug_assert_ne!(
        attacker.owner, defender.owner,
        "same-faction battles must be rejected by the caller"
    );

    let result = match attack_roll.cmp(&defense_roll) {
        Ordering::Equal => BattleResult::Tie,
        Ordering::Greater => BattleResult::AttackerWins,
        Ordering::Less => BattleResult::DefenderWins,
    };

    let mut defender_changed_owner = false;
    match result {
        BattleResult::Tie => {
            // A territory may legitimately sit at zero troops while still owned.
            defender.troops = defender.troops.saturating_sub(1);
        }
        BattleResult::AttackerWins => {
            // Both halves derive from the attacker's pre-battle count.
            let spoils = attacker.troops / 2;
            defender.owner = attacker.owner;
            defender.troops = spoils;
            attacker.troops = spoils;
            defender_changed_owner = true;
        }
        BattleResult::DefenderWins => {
            attacker.troops = attacker.troops.saturating_sub(1);
        }
    }

    BattleOutcome {
        attack_roll,
        defense_roll,
        result,
        defender_changed_owner,
    }
}

fn roll_die(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=DIE_SIDES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn pair() -> (Territory, Territory) {
        (
            Territory::new("Brazil", Faction::Green, 6),
            Territory::new("China", Faction::Red, 3),
        )
    }

    #[test]
    fn conquest_halves_both_counts_from_the_pre_attack_value() {
        let (mut attacker, mut defender) = pair();
        let outcome = resolve_with_rolls(&mut attacker, &mut defender, 6, 1);

        assert_eq!(outcome.result, BattleResult::AttackerWins);
        assert!(outcome.defender_changed_owner);
        assert_eq!(defender.owner, Faction::Green);
        assert_eq!(defender.troops, 3);
        assert_eq!(attacker.troops, 3);
    }

    #[test]
    fn conquest_with_odd_count_floors_both_halves() {
        let mut attacker = Territory::new("China", Faction::Red, 5);
        let mut defender = Territory::new("Canada", Faction::Yellow, 2);
        let outcome = resolve_with_rolls(&mut attacker, &mut defender, 5, 2);

        assert!(outcome.defender_changed_owner);
        assert_eq!(attacker.troops, 2);
        assert_eq!(defender.troops, 2);
        assert_eq!(defender.owner, Faction::Red);
    }

    #[test]
    fn tie_costs_the_defender_one_troop_without_conquest() {
        let mut attacker = Territory::new("Brazil", Faction::Green, 6);
        let mut defender = Territory::new("Argentina", Faction::Pink, 1);
        let outcome = resolve_with_rolls(&mut attacker, &mut defender, 4, 4);

        assert_eq!(outcome.result, BattleResult::Tie);
        assert!(!outcome.defender_changed_owner);
        assert_eq!(defender.owner, Faction::Pink);
        assert_eq!(defender.troops, 0);
        assert_eq!(attacker.troops, 6);
    }

    #[test]
    fn tie_at_zero_troops_stays_at_zero() {
        let mut attacker = Territory::new("Brazil", Faction::Green, 6);
        let mut defender = Territory::new("Argentina", Faction::Pink, 0);
        let outcome = resolve_with_rolls(&mut attacker, &mut defender, 2, 2);

        assert_eq!(outcome.result, BattleResult::Tie);
        assert_eq!(defender.troops, 0);
        assert_eq!(defender.owner, Faction::Pink);
    }

    #[test]
    fn defender_win_costs_the_attacker_one_troop() {
        let (mut attacker, mut defender) = pair();
        let outcome = resolve_with_rolls(&mut attacker, &mut defender, 2, 5);

        assert_eq!(outcome.result, BattleResult::DefenderWins);
        assert!(!outcome.defender_changed_owner);
        assert_eq!(attacker.troops, 5);
        assert_eq!(defender.troops, 3);
        assert_eq!(defender.owner, Faction::Red);
    }

    #[test]
    fn rolled_battles_stay_within_die_bounds_and_stay_consistent() {
        let mut rng = ChaCha20Rng::seed_from_u64(1337);
        for _ in 0..64 {
            let (mut attacker, mut defender) = pair();
            let outcome = resolve_attack(&mut attacker, &mut defender, &mut rng);

            assert!((1..=DIE_SIDES).contains(&outcome.attack_roll));
            assert!((1..=DIE_SIDES).contains(&outcome.defense_roll));
            let expected = match outcome.attack_roll.cmp(&outcome.defense_roll) {
                Ordering::Equal => BattleResult::Tie,
                Ordering::Greater => BattleResult::AttackerWins,
                Ordering::Less => BattleResult::DefenderWins,
            };
            assert_eq!(outcome.result, expected);
            assert_eq!(
                outcome.defender_changed_owner,
                outcome.result == BattleResult::AttackerWins
            );
        }
    }

    #[test]
    fn identical_seeds_produce_identical_battles() {
        let run = |seed: u64| {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let (mut attacker, mut defender) = pair();
            resolve_attack(&mut attacker, &mut defender, &mut rng)
        };
        assert_eq!(run(99), run(99));
    }
}
