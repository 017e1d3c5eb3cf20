//! Checkers CLI
//!
//! Play against the minimax engine, watch it play itself, or run matches.

use std::env;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use checkers_core::{Color, Engine, GameStatus, Move, SearchLimits};
use checkers_play::{minimax_for, Game, HumanPlayer, MatchConfig, MatchRunner};
use minimax_engine::{MinimaxEngine, PruningMode, SearchConfig};
use random_engine::RandomEngine;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Cylindrical Checkers");
    println!();
    println!("Usage:");
    println!("  checkers play [--color black|white] [--depth D]");
    println!("  checkers selfplay [--depth D] [--max-turns N]");
    println!("  checkers match <engine1> <engine2> [--games N] [--depth D] [--config FILE]");
    println!();
    println!("Engines:");
    println!("  minimax            - Alpha-beta with material eval");
    println!("  minimax-canonical  - Same search, canonical alpha-beta window");
    println!("  random             - Uniformly random legal turn");
    println!();
    println!("Moves are four digits: start row, start column, end row, end column (e.g. 2130).");
    println!("Set RUST_LOG=info (or debug) to see engine and match logs on stderr.");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Value following `flag`, parsed; `default` when absent.
fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> Result<T> {
    match args.iter().position(|a| a == flag) {
        None => Ok(default),
        Some(i) => {
            let raw = args
                .get(i + 1)
                .with_context(|| format!("{flag} needs a value"))?;
            raw.parse()
                .map_err(|_| anyhow::anyhow!("invalid value for {flag}: {raw}"))
        }
    }
}

fn create_engine(spec: &str, config: &MatchConfig) -> Result<Box<dyn Engine>> {
    match spec.to_lowercase().as_str() {
        "minimax" => Ok(Box::new(minimax_for(config))),
        "minimax-canonical" => Ok(Box::new(MinimaxEngine::with_config(SearchConfig {
            max_depth: config.depth,
            pruning: PruningMode::Canonical,
        }))),
        "random" => Ok(Box::new(RandomEngine::new())),
        other => bail!("unknown engine: {other}"),
    }
}

fn print_turn(game: &Game, moves: &[Move]) {
    for mv in moves {
        println!("Turn {}: {mv}", game.turn());
    }
    print!("{}", game.board());
}

fn announce(status: GameStatus) -> bool {
    match status {
        GameStatus::Won(winner) => {
            println!("{winner} wins!");
            true
        }
        GameStatus::Ongoing => false,
    }
}

fn run_play(args: &[String]) -> Result<()> {
    let human_color = match flag_value(args, "--color", String::from("black"))?
        .to_lowercase()
        .as_str()
    {
        "black" | "b" => Color::Black,
        "white" | "w" => Color::White,
        other => bail!("unknown color: {other}"),
    };
    let depth: u8 = flag_value(args, "--depth", 4)?;

    let mut engine = MinimaxEngine::with_config(SearchConfig {
        max_depth: depth,
        ..SearchConfig::default()
    });
    let limits = SearchLimits::depth(depth);
    let stdin = io::stdin();
    let mut human = HumanPlayer::new(stdin.lock(), io::stdout());
    let mut game = Game::new();

    println!("You play {human_color}. Black moves first.");
    print!("{}", game.board());

    while !announce(game.status()) {
        if game.to_move() == human_color {
            human.play_turn(&mut game)?;
        } else {
            match game.play_engine_turn(&mut engine, limits)? {
                Some(moves) => print_turn(&game, &moves),
                None => break,
            }
        }
        game.end_turn();
    }
    Ok(())
}

fn run_selfplay(args: &[String]) -> Result<()> {
    let depth: u8 = flag_value(args, "--depth", 4)?;
    let max_turns: u32 = flag_value(args, "--max-turns", 200)?;

    let config = SearchConfig {
        max_depth: depth,
        ..SearchConfig::default()
    };
    let mut black = MinimaxEngine::with_config(config.clone());
    let mut white = MinimaxEngine::with_config(config);
    let limits = SearchLimits::depth(depth);
    let mut game = Game::new();

    print!("{}", game.board());
    while game.turn() <= max_turns {
        if announce(game.status()) {
            return Ok(());
        }
        let engine: &mut dyn Engine = match game.to_move() {
            Color::Black => &mut black,
            Color::White => &mut white,
        };
        match game.play_engine_turn(engine, limits)? {
            Some(moves) => print_turn(&game, &moves),
            None => break,
        }
        io::stdout().flush()?;
        game.end_turn();
    }
    if !announce(game.status()) {
        println!("Draw after {max_turns} turns.");
    }
    Ok(())
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine names");
    }
    let (engine1_spec, engine2_spec) = (&args[0], &args[1]);
    let rest = &args[2..];

    let mut config = match rest.iter().position(|a| a == "--config") {
        Some(_) => {
            let path: String = flag_value(rest, "--config", String::new())?;
            MatchConfig::load(&path).with_context(|| format!("loading {path}"))?
        }
        None => MatchConfig::default(),
    };
    config.num_games = flag_value(rest, "--games", config.num_games)?;
    config.depth = flag_value(rest, "--depth", config.depth)?;

    println!("=== Match: {engine1_spec} vs {engine2_spec} ===");
    println!(
        "Games: {}, Depth: {}, Max turns: {}",
        config.num_games, config.depth, config.max_turns
    );
    println!();

    let mut engine1 = create_engine(engine1_spec, &config)?;
    let mut engine2 = create_engine(engine2_spec, &config)?;

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "play" => run_play(&args[1..]),
        "selfplay" => run_selfplay(&args[1..]),
        "match" => run_match(&args[1..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
