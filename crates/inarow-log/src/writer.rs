//! Match log writer.
//!
//! [`MatchLogWriter`] streams move lines to any `Write` sink. The size
//! header is written immediately on construction.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use inarow_core::{Coord, Mark, MatchId, Outcome};

use crate::error::LogError;

/// Writes one match's log to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use inarow_core::{Coord, Mark, Outcome};
/// use inarow_log::{MatchLogWriter, MatchRecord};
///
/// let mut buf = Vec::new();
/// let mut log = MatchLogWriter::new(&mut buf, 3).unwrap();
/// log.record_move(Mark::A, Coord::new(0, 0)).unwrap();
/// log.record_move(Mark::B, Coord::new(1, 1)).unwrap();
/// log.record_outcome(Outcome::Draw).unwrap();
/// assert_eq!(log.moves_written(), 2);
/// drop(log);
///
/// let text = String::from_utf8(buf).unwrap();
/// assert_eq!(text, "size:3\nPlayer 1: (1, 1)\nPlayer 2: (2, 2)\nTie\n");
/// ```
pub struct MatchLogWriter<W: Write> {
    writer: W,
    moves_written: usize,
    finished: bool,
}

impl<W: Write> MatchLogWriter<W> {
    /// Create a log writer, immediately writing the `size:<N>` header.
    pub fn new(mut writer: W, size: usize) -> Result<Self, LogError> {
        writeln!(writer, "size:{size}")?;
        Ok(Self {
            writer,
            moves_written: 0,
            finished: false,
        })
    }

    /// Append `Player <n>: (<row>, <col>)` with a 1-based coordinate.
    ///
    /// # Errors
    ///
    /// [`LogError::AlreadyFinished`] once an outcome has been recorded.
    pub fn record_move(&mut self, mark: Mark, coord: Coord) -> Result<(), LogError> {
        if self.finished {
            return Err(LogError::AlreadyFinished);
        }
        writeln!(self.writer, "{mark}: {coord}")?;
        self.moves_written += 1;
        Ok(())
    }

    /// Append the terminal line (`Player <n> wins` or `Tie`) and flush.
    ///
    /// # Errors
    ///
    /// [`LogError::AlreadyFinished`] if called twice.
    pub fn record_outcome(&mut self, outcome: Outcome) -> Result<(), LogError> {
        if self.finished {
            return Err(LogError::AlreadyFinished);
        }
        writeln!(self.writer, "{outcome}")?;
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), LogError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of move lines written so far.
    pub fn moves_written(&self) -> usize {
        self.moves_written
    }

    /// Whether the terminal line has been written.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Path of the log for `id` inside `dir`.
pub fn log_path(dir: &Path, id: MatchId) -> PathBuf {
    dir.join(format!("game_coordinates_{id}.txt"))
}

/// Create `dir` if needed and create the log for `id`.
///
/// The file must not exist yet, so two matches can never share a log.
///
/// # Errors
///
/// [`LogError::Taken`] if a log for `id` is already present in `dir`;
/// callers retry with a fresh id. [`LogError::Io`] for anything else.
pub fn open_match_log(
    dir: &Path,
    id: MatchId,
    size: usize,
) -> Result<MatchLogWriter<BufWriter<File>>, LogError> {
    fs::create_dir_all(dir)?;
    let path = log_path(dir, id);
    let file = match OpenOptions::new().append(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Err(LogError::Taken { path }),
        Err(e) => return Err(e.into()),
    };
    log::debug!("opened match log {}", path.display());
    MatchLogWriter::new(BufWriter::new(file), size)
}
