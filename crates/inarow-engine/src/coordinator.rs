//! Strict turn alternation between two worker threads.
//!
//! Both sides share one [`TurnCoordinator`]. Everything mutable about a
//! match (board, [`MatchState`], log writer) lives behind a single
//! `Mutex`, and a `Condvar` carries the [`Handoff`] between the sides:
//!
//! ```text
//!   Ready(first) ──A plays──▶ Ready(B) ──B plays──▶ Ready(A) ── ... ──▶ Over
//!                                                                    ▲
//!                    win, draw, error, or panic on either side ──────┘
//! ```
//!
//! A side waits only for the handoff to name it or to reach `Over`. While
//! it holds the lock it proposes, places, logs, and evaluates; then it
//! passes the handoff to the other side (or ends it) and notifies. The
//! pass happens in a drop guard, so an early return through `?` or an
//! unwinding panic still ends the handoff and wakes the other side.

use std::io::Write;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crossbeam_channel::Sender;
use inarow_board::{assess, Board, PlacementError};
use inarow_core::{Coord, Mark, MatchId, Outcome};
use inarow_log::MatchLogWriter;

use crate::error::MatchError;
use crate::mover::MoveGenerator;

/// Which side may move next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handoff {
    /// The named side holds the turn.
    Ready(Mark),
    /// The match is over. Never left once entered.
    Over,
}

/// Turn bookkeeping shared by both sides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    handoff: Handoff,
    first: Mark,
    moves: usize,
    outcome: Option<Outcome>,
}

impl MatchState {
    /// Fresh state with `first` holding the turn.
    pub fn new(first: Mark) -> Self {
        Self {
            handoff: Handoff::Ready(first),
            first,
            moves: 0,
            outcome: None,
        }
    }

    /// Current handoff.
    pub fn handoff(&self) -> Handoff {
        self.handoff
    }

    /// Whether the match has ended, with or without an outcome.
    pub fn is_finished(&self) -> bool {
        self.handoff == Handoff::Over
    }

    /// The side that opened.
    pub fn first(&self) -> Mark {
        self.first
    }

    /// Moves placed so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// The outcome, once one has been reached.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

/// Published after each completed turn, before the other side is woken.
///
/// Events arrive in move order; consumers render them on their own thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnEvent {
    /// Match the move belongs to.
    pub match_id: MatchId,
    /// Side that moved.
    pub mark: Mark,
    /// Cell it took.
    pub coord: Coord,
    /// 1-based position of the move in the match.
    pub move_number: usize,
    /// Set on the move that ended the match.
    pub outcome: Option<Outcome>,
}

struct Table<'a, W: Write> {
    board: Board<'a>,
    state: MatchState,
    writer: MatchLogWriter<W>,
}

/// Shared coordination point for the two sides of one match.
pub struct TurnCoordinator<'a, W: Write> {
    match_id: MatchId,
    table: Mutex<Table<'a, W>>,
    turn: Condvar,
    events: Option<Sender<TurnEvent>>,
}

impl<'a, W: Write + Send> TurnCoordinator<'a, W> {
    /// Set up a match on `board` with `first` to move.
    pub fn new(match_id: MatchId, board: Board<'a>, first: Mark, writer: MatchLogWriter<W>) -> Self {
        Self {
            match_id,
            table: Mutex::new(Table {
                board,
                state: MatchState::new(first),
                writer,
            }),
            turn: Condvar::new(),
            events: None,
        }
    }

    /// Publish a [`TurnEvent`] to `events` after every turn.
    ///
    /// `events` should be unbounded: sends happen while the turn is held.
    pub fn with_events(mut self, events: Sender<TurnEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Id of the match being coordinated.
    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    /// Snapshot of the shared state.
    pub fn state(&self) -> MatchState {
        self.lock().state.clone()
    }

    /// Play `mark`'s side until the match is over.
    ///
    /// Run once per side, each on its own thread. Returns `Ok` once the
    /// handoff reaches [`Handoff::Over`], whoever ended it.
    ///
    /// # Errors
    ///
    /// An off-board proposal or a log write failure ends the match for
    /// both sides and is returned from the side that hit it.
    pub fn run_side<G: MoveGenerator + ?Sized>(&self, mark: Mark, mover: &mut G) -> Result<(), MatchError> {
        loop {
            let table = self
                .turn
                .wait_while(self.lock(), |t| t.state.handoff == Handoff::Ready(mark.other()))
                .unwrap_or_else(PoisonError::into_inner);
            if table.state.is_finished() {
                return Ok(());
            }

            let mut guard = HandoffGuard {
                table,
                turn: &self.turn,
                match_id: self.match_id,
                next: Handoff::Over,
            };
            let event = guard.play(mark, mover)?;
            if event.outcome.is_none() {
                guard.next = Handoff::Ready(mark.other());
            }
            // Sent before the handoff passes so events keep turn order.
            // The channel is unbounded; a dropped receiver only means
            // nobody is watching.
            if let Some(events) = &self.events {
                let _ = events.send(event);
            }
            drop(guard);
        }
    }

    /// Tear down, returning the final state and the log writer.
    pub fn into_parts(self) -> (MatchState, MatchLogWriter<W>) {
        let table = self.table.into_inner().unwrap_or_else(PoisonError::into_inner);
        (table.state, table.writer)
    }

    fn lock(&self) -> MutexGuard<'_, Table<'a, W>> {
        // A poisoned lock means a side panicked; its guard has already
        // ended the handoff, so the state is still consistent.
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the lock for one turn and passes the handoff on drop.
struct HandoffGuard<'g, 'a, W: Write> {
    table: MutexGuard<'g, Table<'a, W>>,
    turn: &'g Condvar,
    match_id: MatchId,
    next: Handoff,
}

impl<W: Write> HandoffGuard<'_, '_, W> {
    fn play<G: MoveGenerator + ?Sized>(
        &mut self,
        mark: Mark,
        mover: &mut G,
    ) -> Result<TurnEvent, MatchError> {
        let match_id = self.match_id;
        let Table {
            board,
            state,
            writer,
        } = &mut *self.table;

        let coord = loop {
            let coord = mover.propose(board, mark);
            match board.place(coord, mark) {
                Ok(()) => break coord,
                Err(PlacementError::Occupied { .. }) => continue,
                Err(e) => return Err(e.into()),
            }
        };
        state.moves += 1;
        writer.record_move(mark, coord)?;
        log::debug!("match {match_id}: move {} {mark} at {coord}", state.moves);

        let outcome = assess(board);
        if let Some(outcome) = outcome {
            state.outcome = Some(outcome);
            writer.record_outcome(outcome)?;
        }
        Ok(TurnEvent {
            match_id,
            mark,
            coord,
            move_number: state.moves,
            outcome,
        })
    }
}

impl<W: Write> Drop for HandoffGuard<'_, '_, W> {
    fn drop(&mut self) {
        let state = &mut self.table.state;
        if self.next == Handoff::Over && state.outcome.is_none() {
            log::warn!(
                "match {} aborted after {} moves",
                self.match_id,
                state.moves
            );
        }
        state.handoff = self.next;
        self.turn.notify_all();
    }
}
