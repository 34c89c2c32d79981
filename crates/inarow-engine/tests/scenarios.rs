//! Scripted matches with known endings, plus failure paths.

use std::fs;

use inarow_arena::ArenaConfig;
use inarow_board::{Board, PlacementError};
use inarow_core::{Coord, Mark, MatchId, Outcome};
use inarow_engine::{FirstMover, MatchConfig, MatchError, MatchRunner, MoveGenerator};
use inarow_log::log_path;
use inarow_test_utils::{read_log, ScriptedMover, TempHistory};

#[test]
fn horizontal_win_on_three() {
    let history = TempHistory::new().unwrap();
    let mut runner = MatchRunner::new(history.config(3, 1, 1)).unwrap();
    let mut a = ScriptedMover::one_based(&[(1, 1), (1, 2), (1, 3)]);
    let mut b = ScriptedMover::one_based(&[(2, 1), (2, 2)]);

    let report = runner.run_match_with(&mut a, &mut b).unwrap();
    assert_eq!(report.outcome, Outcome::Win(Mark::A));
    assert_eq!(report.moves, 5);

    let text = fs::read_to_string(&report.log_path).unwrap();
    assert_eq!(
        text,
        "size:3\n\
         Player 1: (1, 1)\n\
         Player 2: (2, 1)\n\
         Player 1: (1, 2)\n\
         Player 2: (2, 2)\n\
         Player 1: (1, 3)\n\
         Player 1 wins\n"
    );
}

#[test]
fn full_board_without_run_is_a_tie() {
    // X O X
    // X O O
    // O X X
    let history = TempHistory::new().unwrap();
    let mut runner = MatchRunner::new(history.config(3, 1, 1)).unwrap();
    let mut a = ScriptedMover::one_based(&[(1, 1), (1, 3), (2, 1), (3, 2), (3, 3)]);
    let mut b = ScriptedMover::one_based(&[(1, 2), (2, 2), (2, 3), (3, 1)]);

    let report = runner.run_match_with(&mut a, &mut b).unwrap();
    assert_eq!(report.outcome, Outcome::Draw);
    assert_eq!(report.moves, 9);

    let record = read_log(&report.log_path).unwrap();
    assert_eq!(record.outcome, Some(Outcome::Draw));
    let text = fs::read_to_string(&report.log_path).unwrap();
    assert!(text.ends_with("Player 1: (3, 3)\nTie\n"));
    assert_eq!(text.matches("Tie").count(), 1);
}

#[test]
fn b_opening_keeps_player_numbers() {
    let history = TempHistory::new().unwrap();
    let config = MatchConfig {
        first: FirstMover::B,
        ..history.config(3, 1, 1)
    };
    let mut runner = MatchRunner::new(config).unwrap();
    let mut a = ScriptedMover::one_based(&[(3, 1), (3, 2)]);
    let mut b = ScriptedMover::one_based(&[(1, 1), (2, 2), (3, 3)]);

    let report = runner.run_match_with(&mut a, &mut b).unwrap();
    assert_eq!(report.first, Mark::B);
    assert_eq!(report.outcome, Outcome::Win(Mark::B));
    let text = fs::read_to_string(&report.log_path).unwrap();
    assert!(text.starts_with("size:3\nPlayer 2: (1, 1)\nPlayer 1: (3, 1)\n"));
    assert!(text.ends_with("Player 2 wins\n"));
}

#[test]
fn four_in_a_row_needed_above_three() {
    let history = TempHistory::new().unwrap();
    let mut runner = MatchRunner::new(history.config(5, 1, 1)).unwrap();
    let mut a = ScriptedMover::one_based(&[(1, 1), (2, 2), (3, 3), (4, 4)]);
    let mut b = ScriptedMover::one_based(&[(5, 1), (5, 2), (5, 3)]);

    let report = runner.run_match_with(&mut a, &mut b).unwrap();
    assert_eq!(report.outcome, Outcome::Win(Mark::A));
    assert_eq!(report.moves, 7);
}

#[test]
fn collisions_are_retried_not_skipped() {
    let history = TempHistory::new().unwrap();
    let mut runner = MatchRunner::new(history.config(3, 1, 1)).unwrap();
    let mut a = ScriptedMover::one_based(&[(1, 1), (1, 2), (1, 3)]);
    let mut b = ScriptedMover::one_based(&[(1, 1), (1, 1), (2, 1), (1, 2), (2, 2)]);

    let report = runner.run_match_with(&mut a, &mut b).unwrap();
    assert_eq!(report.outcome, Outcome::Win(Mark::A));
    assert_eq!(report.moves, 5);
    assert_eq!(b.proposals(), 5);
}

#[test]
fn off_board_proposal_fails_without_deadlock() {
    let history = TempHistory::new().unwrap();
    let mut runner = MatchRunner::new(history.config(3, 2, 1)).unwrap();
    let mut a = ScriptedMover::one_based(&[(1, 1)]);
    let mut b = ScriptedMover::one_based(&[(4, 4)]);

    let err = runner.run_match_with(&mut a, &mut b).unwrap_err();
    assert!(matches!(
        err,
        MatchError::Placement(PlacementError::OutOfRange { size: 3, .. })
    ));

    let logs = history.logs().unwrap();
    assert_eq!(logs.len(), 1);
    let record = read_log(&logs[0]).unwrap();
    assert!(!record.is_complete());
    assert_eq!(record.moves.len(), 1);

    // The runner is still usable and the arena was reset.
    let report = runner.run_match().unwrap();
    assert!(report.moves >= 3);
}

struct Panicking;

impl MoveGenerator for Panicking {
    fn propose(&mut self, _board: &Board<'_>, _mark: Mark) -> Coord {
        panic!("generator failure");
    }
}

#[test]
fn panicking_generator_is_reported() {
    let history = TempHistory::new().unwrap();
    let mut runner = MatchRunner::new(history.config(4, 1, 1)).unwrap();
    let mut a = ScriptedMover::default();
    let mut b = Panicking;
    let err = runner.run_match_with(&mut a, &mut b).unwrap_err();
    assert!(matches!(err, MatchError::WorkerPanicked(Mark::B)));
}

#[test]
fn events_mirror_the_log() {
    let history = TempHistory::new().unwrap();
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut runner = MatchRunner::new(history.config(4, 1, 8))
        .unwrap()
        .with_events(tx);
    let report = runner.run_match().unwrap();
    drop(runner);

    let events: Vec<_> = rx.iter().collect();
    let record = read_log(&report.log_path).unwrap();
    assert_eq!(events.len(), record.moves.len());
    for (event, &(mark, coord)) in events.iter().zip(&record.moves) {
        assert_eq!(event.match_id, report.id);
        assert_eq!((event.mark, event.coord), (mark, coord));
    }
    assert_eq!(events.last().and_then(|e| e.outcome), Some(report.outcome));
}

#[test]
fn unwritable_history_is_a_log_error() {
    let history = TempHistory::new().unwrap();
    let blocker = history.path().join("not-a-dir");
    fs::write(&blocker, b"").unwrap();
    let config = MatchConfig {
        history_dir: blocker,
        ..history.config(3, 1, 1)
    };
    let mut runner = MatchRunner::new(config).unwrap();
    assert!(matches!(runner.run_match(), Err(MatchError::Log(_))));
}

#[test]
fn arena_holding_exactly_one_board_is_enough() {
    let history = TempHistory::new().unwrap();
    let config = MatchConfig {
        arena: ArenaConfig::new(9),
        ..history.config(3, 3, 8)
    };
    let mut runner = MatchRunner::new(config).unwrap();
    let series = runner.run_series().unwrap();
    assert_eq!(series.played(), 3);
    assert_eq!(runner.arena().used(), 9);
}

#[test]
fn taken_log_names_are_skipped() {
    let history = TempHistory::new().unwrap();
    let base = MatchId::next().0;
    let taken: Vec<MatchId> = (1..=64).map(|k| MatchId(base + k)).collect();
    for &id in &taken {
        fs::write(log_path(history.path(), id), "taken\n").unwrap();
    }

    let mut runner = MatchRunner::new(history.config(3, 1, 4)).unwrap();
    let report = runner.run_match().unwrap();
    assert!(report.id.0 > base);
    assert!(!taken.contains(&report.id));
    assert!(read_log(&report.log_path).unwrap().is_complete());
    for &id in &taken {
        let text = fs::read_to_string(log_path(history.path(), id)).unwrap();
        assert_eq!(text, "taken\n");
    }
}

