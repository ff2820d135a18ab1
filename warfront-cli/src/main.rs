mod screen;
mod transcript;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use warfront_game::{GameError, GameState};

use transcript::{Ending, Transcript};

#[derive(Debug, Parser)]
#[command(name = "warfront", version = "0.1.0")]
#[command(about = "Warfront - dice-driven territorial conquest for the terminal")]
struct Args {
    /// Seed for the session RNG; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Optional path to write a JSON transcript of the run on exit
    #[arg(long)]
    transcript: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Attack,
    CheckMission,
    Exit,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("starting session with seed {seed}");

    let mut state = GameState::new(seed).context("could not initialize the game session")?;
    screen::announce_banner();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let ending = run_loop(&mut state, &mut input)?;

    match ending {
        Ending::Victory => println!("{}", "Mission complete - victory!".bright_green().bold()),
        Ending::Quit => println!("Leaving the war table."),
    }

    if let Some(path) = args.transcript.as_deref() {
        Transcript::from_session(&state, ending)
            .write_to(path)
            .with_context(|| format!("could not write transcript to {}", path.display()))?;
        info!("transcript written to {}", path.display());
    }
    Ok(())
}

fn run_loop(state: &mut GameState, input: &mut impl BufRead) -> Result<Ending> {
    loop {
        println!("\n{}", screen::render_map(state.map()));
        println!("{}", screen::render_mission(state));
        println!("{}", screen::render_menu());

        let Some(line) = read_line(input, "Choose your action: ")? else {
            return Ok(Ending::Quit);
        };
        match parse_menu_choice(&line) {
            Some(MenuChoice::Attack) => attack_phase(state, input)?,
            Some(MenuChoice::CheckMission) => {
                if state.check_victory() {
                    return Ok(Ending::Victory);
                }
                println!("{}", "The mission is not complete yet.".yellow());
            }
            Some(MenuChoice::Exit) => return Ok(Ending::Quit),
            None => println!("{}", "Unknown command; pick 1, 2 or 0.".red()),
        }
    }
}

fn attack_phase(state: &mut GameState, input: &mut impl BufRead) -> Result<()> {
    println!("{}", "=== Attack Phase ===".bold());
    let len = state.map().len();

    let Some(attacker_line) = read_line(input, &format!("Attacker (1 to {len}): "))? else {
        return Ok(());
    };
    let Some(attacker_idx) = parse_territory_index(&attacker_line, len) else {
        println!("{}", "That is not a territory on this map.".red());
        return Ok(());
    };

    let Some(defender_line) = read_line(input, &format!("Defender (1 to {len}): "))? else {
        return Ok(());
    };
    let Some(defender_idx) = parse_territory_index(&defender_line, len) else {
        println!("{}", "That is not a territory on this map.".red());
        return Ok(());
    };

    match state.attack(attacker_idx, defender_idx) {
        Ok(outcome) => {
            debug!("turn {} resolved: {outcome:?}", state.turn);
            println!("{}", screen::render_outcome(state, outcome));
        }
        Err(err @ (GameError::InvalidAttack(_) | GameError::InvalidIndex { .. })) => {
            println!("{}", format!("Attack rejected: {err}").yellow());
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::Attack),
        "2" => Some(MenuChoice::CheckMission),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Translate a 1-based displayed index into 0-based storage, bounds included.
fn parse_territory_index(line: &str, len: usize) -> Option<usize> {
    let value: usize = line.trim().parse().ok()?;
    if (1..=len).contains(&value) {
        Some(value - 1)
    } else {
        None
    }
}

fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("could not flush stdout")?;

    let mut buffer = String::new();
    let read = input
        .read_line(&mut buffer)
        .context("could not read from the terminal")?;
    if read == 0 {
        // EOF ends the session cleanly, same as choosing exit.
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}
