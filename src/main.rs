use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pebble_mancala::{
    AiAgent, GameConfig, GameResult, GameRng, GameState, MoveResult, PitId, RulesEngine, Session,
    Side, SideMap, TurnEngine,
};

#[derive(Parser)]
#[command(name = "pebble-mancala", version, about = "Two-player Mancala in the terminal")]
struct Cli {
    /// TOML config file (missing file means defaults).
    #[arg(long, default_value = "pebble-mancala.toml")]
    config: PathBuf,

    /// Override the RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override which side moves first.
    #[arg(long)]
    first: Option<Side>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game in the terminal; enter a column (0-5) to sow.
    Play {
        /// Let the computer play the configured AI side.
        #[arg(long)]
        ai: bool,
    },
    /// Play random games against each other and print the tally.
    Simulate {
        #[arg(long, default_value_t = 1000)]
        games: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(first) = cli.first {
        config = config.with_first_turn(first);
    }

    match cli.command {
        Command::Play { ai } => {
            if ai {
                config = config.with_ai_enabled(true);
            }
            play(config)
        }
        Command::Simulate { games } => {
            simulate(&config, games);
            Ok(())
        }
    }
}

fn play(config: GameConfig) -> Result<()> {
    let mut session = Session::new(config);
    let started = Instant::now();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let state = session.state();
        println!("\n{}", state.board);

        if let Some(result) = session.result() {
            println!("{}", describe(result));
            print!("new game? [y/N] ");
            io::stdout().flush()?;
            match lines.next().transpose()? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    session.new_game();
                    continue;
                }
                _ => return Ok(()),
            }
        }

        let Some(side) = state.side_to_move() else {
            return Ok(());
        };

        if session.is_ai_controlled(side) {
            println!("{side} is thinking...");
            let result = loop {
                if let Some(result) = session.tick(started.elapsed()) {
                    break result;
                }
                std::thread::sleep(Duration::from_millis(20));
            };
            report(&result);
            continue;
        }

        print!("{side} ({:?} row) > ", side.row());
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose().context("reading move")? else {
            return Ok(());
        };

        match line.trim() {
            "q" | "quit" => return Ok(()),
            "n" | "new" => session.new_game(),
            input => {
                let pit = input
                    .parse::<usize>()
                    .ok()
                    .and_then(|col| PitId::try_new(side.row(), col));
                match pit.and_then(|pit| session.click(pit)) {
                    Some(result) => report(&result),
                    None => println!("enter a column 0-5, 'n' for a new game or 'q' to quit"),
                }
            }
        }
    }
}

fn report(result: &MoveResult) {
    if let Some(reason) = result.rejection() {
        println!("illegal move: {reason}");
        return;
    }

    println!("{} played {}", result.side, result.pit);
    if let Some(capture) = result.capture {
        println!("captured {} from {}", capture.captured, capture.opposite);
    }
    if result.extra_turn && !result.game_over {
        println!("{} goes again", result.side);
    }
}

fn describe(result: GameResult) -> String {
    match result {
        GameResult::Winner(side) => format!("{side} wins"),
        GameResult::Draw => "draw".to_string(),
    }
}

fn simulate(config: &GameConfig, games: u32) {
    let engine = TurnEngine::new();
    let mut rng = GameRng::new(config.seed);
    let mut wins: SideMap<u32> = SideMap::with_value(0);
    let mut draws = 0;
    let mut total_moves = 0u64;

    for _ in 0..games {
        let mut agents = SideMap::new(|side| AiAgent::new(side, Duration::ZERO, rng.fork()));
        let mut state = GameState::new(config.first_turn);

        while let Some(side) = state.side_to_move() {
            let Some(mv) = agents[side].choose(&engine, &state) else {
                break;
            };
            engine.apply_move(&mut state, mv.pit, mv.side);
        }

        total_moves += u64::from(state.move_count());
        match engine.is_terminal(&state) {
            Some(GameResult::Winner(side)) => wins[side] += 1,
            Some(GameResult::Draw) => draws += 1,
            None => {}
        }
    }

    println!("games: {games}");
    println!("left wins: {}", wins[Side::Left]);
    println!("right wins: {}", wins[Side::Right]);
    println!("draws: {draws}");
    if games > 0 {
        println!("avg moves: {:.1}", total_moves as f64 / f64::from(games));
    }
}
