//! Terminal rendering for the map, mission, menu, and battle reports.
use colored::{Color, Colorize};

use warfront_game::{BattleOutcome, BattleResult, Faction, GameState, WorldMap};

pub fn announce_banner() {
    println!("{}", "Warfront".bright_cyan().bold());
    println!("{}", "===============================".cyan());
}

const fn faction_color(faction: Faction) -> Color {
    match faction {
        Faction::Green => Color::Green,
        Faction::Red => Color::Red,
        Faction::Yellow => Color::Yellow,
        Faction::Blue => Color::Blue,
        Faction::Pink => Color::Magenta,
    }
}

/// The world map as a numbered table, 1-based like the prompts.
#[must_use]
pub fn render_map(map: &WorldMap) -> String {
    let mut lines = vec![String::from("========== World Map ==========")];
    for (index, territory) in map.iter().enumerate() {
        lines.push(format!(
            "{:>2}. {:<12} {} army, troops: {}",
            index + 1,
            territory.name,
            territory.owner.name().color(faction_color(territory.owner)),
            territory.troops
        ));
    }
    lines.push(String::from("==============================="));
    lines.join("\n")
}

#[must_use]
pub fn render_mission(state: &GameState) -> String {
    format!(
        "Your secret mission, {} commander: {}",
        state.player.name().color(faction_color(state.player)),
        state.mission().description.bold()
    )
}

#[must_use]
pub fn render_menu() -> String {
    [
        "---- Actions ----",
        "1 - Attack",
        "2 - Check mission",
        "0 - Exit",
    ]
    .join("\n")
}

/// Dice summary plus the session journal's verdict on the battle.
#[must_use]
pub fn render_outcome(state: &GameState, outcome: BattleOutcome) -> String {
    let headline = state.logs.last().cloned().unwrap_or_default();
    let verdict = match outcome.result {
        BattleResult::AttackerWins => headline.green(),
        BattleResult::DefenderWins => headline.red(),
        BattleResult::Tie => headline.yellow(),
    };
    format!(
        "Attack die: {}  Defense die: {}\n{verdict}",
        outcome.attack_roll, outcome.defense_roll
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_lists_every_territory_with_one_based_numbers() {
        let state = GameState::new(5).unwrap();
        let rendered = render_map(state.map());
        assert!(rendered.contains("1. Brazil"));
        assert!(rendered.contains("5. Argentina"));
    }

    #[test]
    fn mission_line_carries_the_catalog_description() {
        let state = GameState::new(5).unwrap();
        let rendered = render_mission(&state);
        assert!(rendered.contains(&state.mission().description));
    }
}
