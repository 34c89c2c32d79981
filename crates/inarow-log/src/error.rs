//! Error types for writing and parsing match logs.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while writing or reading a match log.
#[derive(Debug)]
pub enum LogError {
    /// An I/O error occurred on the underlying sink or source.
    Io(io::Error),
    /// A line was written after the terminal outcome line.
    AlreadyFinished,
    /// A log for this match id is already on disk.
    Taken {
        /// Path of the existing log.
        path: PathBuf,
    },
    /// A log line could not be parsed or breaks the log's structure.
    Malformed {
        /// 1-based line number.
        line: usize,
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl LogError {
    pub(crate) fn malformed(line: usize, detail: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::AlreadyFinished => write!(f, "match log already has an outcome line"),
            Self::Taken { path } => write!(f, "match log {} already exists", path.display()),
            Self::Malformed { line, detail } => write!(f, "malformed log at line {line}: {detail}"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LogError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
