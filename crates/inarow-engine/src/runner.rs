//! Match lifecycle and series aggregation.
//!
//! [`MatchRunner`] owns the arena for the whole run. Each match resets it,
//! carves a fresh board, opens the match log, and plays both sides on
//! scoped threads. The arena is reset between matches and only released
//! by [`MatchRunner::shutdown`] or when the runner is dropped.

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use inarow_arena::Arena;
use inarow_board::Board;
use inarow_core::{Mark, MatchId, Outcome};
use inarow_log::{log_path, open_match_log, LogError, MatchLogWriter};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::MatchConfig;
use crate::coordinator::{TurnCoordinator, TurnEvent};
use crate::error::MatchError;
use crate::mover::{MoveGenerator, RandomMover};

// ── MatchReport ───────────────────────────────────────────────────

/// Result of one completed match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    /// Id keying the log file.
    pub id: MatchId,
    /// Side that opened.
    pub first: Mark,
    /// Winner or draw.
    pub outcome: Outcome,
    /// Moves placed.
    pub moves: usize,
    /// Path of the match log.
    pub log_path: PathBuf,
    /// Wall-clock time from thread spawn to join.
    pub elapsed: Duration,
}

// ── SeriesReport ──────────────────────────────────────────────────

/// Tallies over a run of matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeriesReport {
    /// Matches won by side A.
    pub a_wins: usize,
    /// Matches won by side B.
    pub b_wins: usize,
    /// Drawn matches.
    pub draws: usize,
    /// Moves placed across all matches.
    pub total_moves: usize,
    /// Wall-clock time for the whole series.
    pub elapsed: Duration,
}

impl SeriesReport {
    /// Fold one match into the tallies.
    pub fn record(&mut self, report: &MatchReport) {
        match report.outcome {
            Outcome::Win(Mark::A) => self.a_wins += 1,
            Outcome::Win(Mark::B) => self.b_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.total_moves += report.moves;
    }

    /// Matches recorded.
    pub fn played(&self) -> usize {
        self.a_wins + self.b_wins + self.draws
    }
}

impl fmt::Display for SeriesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} matches: Player 1 won {}, Player 2 won {}, {} tied ({} moves) in {:.6} seconds",
            self.played(),
            self.a_wins,
            self.b_wins,
            self.draws,
            self.total_moves,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Allocate a match id whose log does not exist yet and create the log.
///
/// Another process writing to the same history directory may already hold
/// an id; such ids are skipped.
fn create_log(dir: &Path, size: usize) -> Result<(MatchId, MatchLogWriter<BufWriter<File>>), MatchError> {
    loop {
        let id = MatchId::next();
        match open_match_log(dir, id, size) {
            Ok(writer) => return Ok((id, writer)),
            Err(LogError::Taken { path }) => {
                log::warn!("match {id}: {} already exists, skipping id", path.display());
            }
            Err(e) => return Err(e.into()),
        }
    }
}

// ── MatchRunner ───────────────────────────────────────────────────

/// Plays matches according to a [`MatchConfig`].
pub struct MatchRunner {
    config: MatchConfig,
    arena: Arena,
    rng: ChaCha8Rng,
    events: Option<Sender<TurnEvent>>,
}

impl MatchRunner {
    /// Validate `config` and create the arena.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        let arena = Arena::new(&config.arena);
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Ok(Self {
            config,
            arena,
            rng,
            events: None,
        })
    }

    /// Publish every turn of every match to `events`.
    pub fn with_events(mut self, events: Sender<TurnEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// The validated configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The backing arena.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Play one match between two [`RandomMover`]s.
    ///
    /// Both movers are seeded from the runner's stream, so a seeded
    /// config replays the same series.
    pub fn run_match(&mut self) -> Result<MatchReport, MatchError> {
        let mut a = RandomMover::seeded(self.rng.random());
        let mut b = RandomMover::seeded(self.rng.random());
        self.run_match_with(&mut a, &mut b)
    }

    /// Play one match with caller-supplied movers for A and B.
    pub fn run_match_with(
        &mut self,
        a: &mut dyn MoveGenerator,
        b: &mut dyn MoveGenerator,
    ) -> Result<MatchReport, MatchError> {
        let size = self.config.board_size;
        let first = self.config.first.resolve(&mut self.rng);

        self.arena.reset();
        let board = Board::new_in(&mut self.arena, size)?;
        let (id, writer) = create_log(&self.config.history_dir, size)?;
        let mut coordinator = TurnCoordinator::new(id, board, first, writer);
        if let Some(events) = &self.events {
            coordinator = coordinator.with_events(events.clone());
        }
        log::info!("match {id}: {size}x{size}, {first} opens");

        let started = Instant::now();
        let (ra, rb) = thread::scope(|s| {
            let c = &coordinator;
            let ha = s.spawn(move || c.run_side(Mark::A, a));
            let hb = s.spawn(move || c.run_side(Mark::B, b));
            (ha.join(), hb.join())
        });
        let elapsed = started.elapsed();
        let (state, mut writer) = coordinator.into_parts();
        writer.flush()?;

        ra.map_err(|_| MatchError::WorkerPanicked(Mark::A))??;
        rb.map_err(|_| MatchError::WorkerPanicked(Mark::B))??;
        let outcome = state.outcome().ok_or(MatchError::Unfinished)?;

        log::info!("match {id}: {outcome} after {} moves", state.moves());
        Ok(MatchReport {
            id,
            first,
            outcome,
            moves: state.moves(),
            log_path: log_path(&self.config.history_dir, id),
            elapsed,
        })
    }

    /// Play `config.matches` matches back to back, reusing the arena.
    ///
    /// Stops at the first failed match.
    pub fn run_series(&mut self) -> Result<SeriesReport, MatchError> {
        let started = Instant::now();
        let mut series = SeriesReport::default();
        for _ in 0..self.config.matches {
            let report = self.run_match()?;
            series.record(&report);
        }
        series.elapsed = started.elapsed();
        log::info!("{series}");
        Ok(series)
    }

    /// Release the arena.
    pub fn shutdown(self) {
        self.arena.destroy();
    }
}
