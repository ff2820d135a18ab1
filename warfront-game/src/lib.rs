//! Warfront Game Engine
//!
//! Platform-agnostic core logic for the Warfront territorial conquest game.
//! This crate provides the map, battle, mission, and victory mechanics
//! without terminal or platform-specific dependencies.

pub mod battle;
pub mod faction;
pub mod mission;
pub mod state;
pub mod territory;
pub mod victory;

// Re-export commonly used types
pub use battle::{
    AttackRejection, BattleOutcome, BattleResult, DIE_SIDES, resolve_attack, resolve_with_rolls,
};
pub use faction::Faction;
pub use mission::{Mission, MissionGoal, assign_random, catalog};
pub use state::GameState;
pub use territory::{TERRITORY_COUNT, Territory, WorldMap};
pub use victory::{FactionTally, check_victory};

use thiserror::Error;

/// Errors surfaced by the game core.
///
/// Only [`GameError::Initialization`] is fatal; everything else is reported
/// to the player and the game loop continues. Nothing is ever retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The starting map, catalog entry, or session could not be built.
    #[error("game initialization failed: {0}")]
    Initialization(String),
    /// An index outside a fixed collection, rejected before any resolution.
    #[error("index {index} is out of range for a fixed collection of {len}")]
    InvalidIndex { index: usize, len: usize },
    /// An attack request that violates the battle preconditions.
    #[error("invalid attack: {0}")]
    InvalidAttack(AttackRejection),
}
