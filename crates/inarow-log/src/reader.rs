//! Match log parser.
//!
//! [`MatchRecord::parse`] reads a log from any `BufRead` source and checks
//! its structure: a size header, strictly alternating moves on distinct
//! in-range cells, and at most one terminal line, which must come last.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use inarow_core::{Coord, Mark, Outcome, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

use crate::error::LogError;

/// A parsed match log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    /// Board edge length from the `size:` header.
    pub size: usize,
    /// Moves in play order, with zero-based coordinates.
    pub moves: Vec<(Mark, Coord)>,
    /// Terminal outcome, or `None` if the log stops before one.
    pub outcome: Option<Outcome>,
}

impl MatchRecord {
    /// Parse and validate a log.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, LogError> {
        let mut lines = reader.lines().enumerate();

        let size = match lines.next() {
            Some((_, line)) => parse_header(&line?)?,
            None => return Err(LogError::malformed(1, "empty log")),
        };

        let mut moves: Vec<(Mark, Coord)> = Vec::new();
        let mut seen = HashSet::new();
        let mut outcome = None;

        for (index, line) in lines {
            let number = index + 1;
            let line = line?;
            if outcome.is_some() {
                return Err(LogError::malformed(number, "line after outcome"));
            }
            match parse_line(&line).ok_or_else(|| LogError::malformed(number, line.clone()))? {
                Line::Move(mark, coord) => {
                    if let Some(&(prev, _)) = moves.last() {
                        if prev == mark {
                            return Err(LogError::malformed(number, format!("{mark} moved twice")));
                        }
                    }
                    if !coord.within(size) {
                        return Err(LogError::malformed(number, format!("{coord} off the board")));
                    }
                    if !seen.insert(coord) {
                        return Err(LogError::malformed(number, format!("{coord} played twice")));
                    }
                    moves.push((mark, coord));
                }
                Line::End(result) => outcome = Some(result),
            }
        }

        Ok(Self {
            size,
            moves,
            outcome,
        })
    }

    /// Open and parse the log file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, LogError> {
        Self::parse(BufReader::new(File::open(path)?))
    }

    /// The side that moved first, if any move was made.
    pub fn first_mover(&self) -> Option<Mark> {
        self.moves.first().map(|&(mark, _)| mark)
    }

    /// Whether the log ends with an outcome line.
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }
}

enum Line {
    Move(Mark, Coord),
    End(Outcome),
}

fn parse_header(line: &str) -> Result<usize, LogError> {
    let size = line
        .strip_prefix("size:")
        .and_then(|s| s.trim().parse::<usize>().ok())
        .ok_or_else(|| LogError::malformed(1, format!("bad header {line:?}")))?;
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(LogError::malformed(1, format!("unsupported size {size}")));
    }
    Ok(size)
}

fn parse_line(line: &str) -> Option<Line> {
    if line == "Tie" {
        return Some(Line::End(Outcome::Draw));
    }
    let rest = line.strip_prefix("Player ")?;
    if let Some(player) = rest.strip_suffix(" wins") {
        return Some(Line::End(Outcome::Win(parse_player(player)?)));
    }
    let (player, coord) = rest.split_once(": ")?;
    let (row, col) = coord
        .strip_prefix('(')?
        .strip_suffix(')')?
        .split_once(", ")?;
    let coord = Coord::from_one_based(row.parse().ok()?, col.parse().ok()?)?;
    Some(Line::Move(parse_player(player)?, coord))
}

fn parse_player(s: &str) -> Option<Mark> {
    Mark::from_player(s.parse().ok()?)
}
