//! Headless Skirmish Runner
//!
//! Drives a scenario to completion and emits a JSON or text result.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use rubblefield::sim::constants::DEFAULT_MAX_TICKS;
use rubblefield::sim::{GameState, Scenario};

/// Headless Skirmish Runner - drive AI vs AI grid battles
#[derive(Parser, Debug)]
#[command(name = "skirmish_runner")]
#[command(about = "Run a two-faction skirmish to completion and report the outcome")]
struct Args {
    /// Scenario TOML file (built-in skirmish when omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Maximum ticks before calling the battle a draw
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print per-tick activity while running
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct SkirmishResult {
    outcome: String,
    ticks: u64,
    survivors: Vec<FactionSurvivors>,
    seed: u64,
}

#[derive(Serialize)]
struct FactionSurvivors {
    name: String,
    units: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rubblefield=warn")),
        )
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);

    let scenario = match &args.scenario {
        Some(path) => match Scenario::load(path) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario {path:?}: {e}");
                std::process::exit(1);
            }
        },
        None => Scenario::default_skirmish(),
    };

    let mut state = match scenario.build(seed) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to build scenario '{}': {e}", scenario.name);
            std::process::exit(1);
        }
    };

    if args.verbose {
        eprintln!("=== Skirmish '{}' (seed {seed}) ===", scenario.name);
        for faction in state.factions() {
            eprintln!("  {}: {} units", faction.name, faction.roster_size());
        }
    }

    while !state.is_finished() && state.tick < args.max_ticks {
        let log = state.run_tick();

        if args.verbose {
            let moves = log.turns.iter().filter(|t| !t.movement.is_idle()).count();
            let acts = log.turns.iter().filter(|t| !t.action.is_idle()).count();
            eprintln!(
                "[{}] {} turns ({} moves, {} acts), {} deaths",
                log.tick,
                log.turns.len(),
                moves,
                acts,
                log.deaths.len()
            );
        }
    }

    let result = summarize(&state, seed);
    match args.format.as_str() {
        "json" => match serde_json::to_string_pretty(&result) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Failed to encode result: {e}");
                std::process::exit(1);
            }
        },
        "text" => {
            println!("Skirmish Result");
            println!("===============");
            println!("Outcome: {}", result.outcome);
            println!("Ticks: {}", result.ticks);
            for side in &result.survivors {
                println!("  {}: {} units standing", side.name, side.units);
            }
            println!("Seed: {}", result.seed);
        }
        other => {
            eprintln!("Unknown format '{other}', use json or text");
            std::process::exit(1);
        }
    }
}

fn summarize(state: &GameState, seed: u64) -> SkirmishResult {
    let outcome = match state.winner() {
        Some(id) => state
            .faction(id)
            .map(|f| format!("{} wins", f.name))
            .unwrap_or_else(|| "unknown".to_string()),
        None => "draw (tick limit)".to_string(),
    };

    SkirmishResult {
        outcome,
        ticks: state.tick,
        survivors: state
            .factions()
            .iter()
            .map(|f| FactionSurvivors {
                name: f.name.clone(),
                units: f.roster_size(),
            })
            .collect(),
        seed,
    }
}
