use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use clap::{Parser, ValueEnum};
use crossbeam_channel::Receiver;
use inarow::prelude::*;

/// Play random N-in-a-row matches between two threads and log every move.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board edge length (3..=9). Three in a row wins on 3x3, four above.
    #[arg(short, long, default_value_t = 3)]
    size: usize,

    /// Number of matches to play back to back.
    #[arg(short, long, default_value_t = 1)]
    matches: usize,

    /// Side that opens each match.
    #[arg(short, long, value_enum, default_value_t = First::A)]
    first: First,

    /// Seed for reproducible series.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory receiving game_coordinates_<id>.txt logs.
    #[arg(long, default_value = "history")]
    history_dir: PathBuf,

    /// Arena capacity in bytes.
    #[arg(long, default_value_t = ArenaConfig::DEFAULT_CAPACITY)]
    arena_bytes: usize,

    /// Print the board after every move.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    render: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum First {
    A,
    B,
    Random,
}

impl From<First> for FirstMover {
    fn from(first: First) -> Self {
        match first {
            First::A => FirstMover::A,
            First::B => FirstMover::B,
            First::Random => FirstMover::Random,
        }
    }
}

impl Args {
    fn config(&self) -> MatchConfig {
        MatchConfig {
            board_size: self.size,
            matches: self.matches,
            first: self.first.into(),
            seed: self.seed,
            history_dir: self.history_dir.clone(),
            arena: ArenaConfig::new(self.arena_bytes),
        }
    }
}

type BoxError = Box<dyn Error + Send + Sync>;

/// Replay each turn onto a private board and print it.
///
/// Runs on its own thread, fed by the runner's event channel, so printing
/// never happens while a side holds the match lock.
fn render_turns(events: Receiver<TurnEvent>, size: usize) -> Result<(), BoxError> {
    let mut arena = Arena::with_capacity(size * size);
    let mut moves: Vec<(Mark, Coord)> = Vec::new();
    for event in events {
        if event.move_number == 1 {
            moves.clear();
        }
        moves.push((event.mark, event.coord));

        arena.reset();
        let mut board = Board::new_in(&mut arena, size)?;
        for &(mark, coord) in &moves {
            board.place(coord, mark)?;
        }
        println!(
            "match {} move {}: {} ({}) at {}",
            event.match_id,
            event.move_number,
            event.mark,
            event.mark.symbol(),
            event.coord
        );
        print!("{board}");
        if let Some(outcome) = event.outcome {
            println!("{outcome}\n");
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<SeriesReport, BoxError> {
    let mut runner = MatchRunner::new(args.config())?;

    let renderer = if args.render {
        let (tx, rx) = crossbeam_channel::unbounded();
        runner = runner.with_events(tx);
        let size = args.size;
        Some(thread::spawn(move || render_turns(rx, size)))
    } else {
        None
    };

    let series = runner.run_series();
    // Shutting down drops the event sender, which ends the renderer.
    runner.shutdown();
    if let Some(handle) = renderer {
        handle
            .join()
            .map_err(|_| BoxError::from("render thread panicked"))??;
    }
    Ok(series?)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(series) => {
            println!("{series}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("inarow: {e}");
            ExitCode::FAILURE
        }
    }
}
