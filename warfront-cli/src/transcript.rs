//! JSON run report written when the session ends.
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use warfront_game::{Faction, GameState, WorldMap};

/// How the session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    Victory,
    Quit,
}

/// Everything worth keeping about a finished run.
///
/// This is a report for sharing and QA, not a save file; the game never
/// reads it back.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub seed: u64,
    pub player: Faction,
    pub mission: String,
    pub turns: u32,
    pub ending: Ending,
    pub victory: bool,
    pub final_map: WorldMap,
    pub journal: Vec<String>,
}

impl Transcript {
    #[must_use]
    pub fn from_session(state: &GameState, ending: Ending) -> Self {
        Self {
            seed: state.seed(),
            player: state.player,
            mission: state.mission().description.clone(),
            turns: state.turn,
            ending,
            victory: ending == Ending::Victory,
            final_map: state.map().clone(),
            journal: state.logs.clone(),
        }
    }

    /// Serialize the transcript and write it to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let encoded =
            serde_json::to_string_pretty(self).context("could not encode the transcript")?;
        fs::write(path, encoded).with_context(|| format!("could not write {}", path.display()))?;
        Ok(())
    }
}
