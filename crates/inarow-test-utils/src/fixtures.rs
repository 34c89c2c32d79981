//! Filesystem fixtures for tests that write match logs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use inarow_engine::MatchConfig;
use inarow_log::{LogError, MatchRecord};

static NEXT_DIR: AtomicU64 = AtomicU64::new(0);

/// A fresh history directory under the system temp dir, removed on drop.
pub struct TempHistory {
    dir: PathBuf,
}

impl TempHistory {
    /// Create an empty directory unique to this process and call.
    pub fn new() -> io::Result<Self> {
        let dir = std::env::temp_dir().join(format!(
            "inarow-history-{}-{}",
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::Relaxed)
        ));
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Default config writing logs into this directory.
    pub fn config(&self, board_size: usize, matches: usize, seed: u64) -> MatchConfig {
        MatchConfig {
            board_size,
            matches,
            seed: Some(seed),
            history_dir: self.dir.clone(),
            ..MatchConfig::default()
        }
    }

    /// Paths of every `game_coordinates_*.txt` log, sorted.
    pub fn logs(&self) -> io::Result<Vec<PathBuf>> {
        let mut logs = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let is_log = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("game_coordinates_") && n.ends_with(".txt"));
            if is_log {
                logs.push(path);
            }
        }
        logs.sort();
        Ok(logs)
    }
}

impl Drop for TempHistory {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

/// Parse the log at `path`.
pub fn read_log(path: &Path) -> Result<MatchRecord, LogError> {
    MatchRecord::from_path(path)
}
