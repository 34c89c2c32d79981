//! Match identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Per-process base for [`MatchId::next`], taken from the wall clock on
/// first use so that ids from separate runs do not collide in a shared
/// history directory.
static MATCH_ID_BASE: OnceLock<u64> = OnceLock::new();

/// Counter for unique [`MatchId`] allocation within this process.
static MATCH_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique identifier of one match. Keys the match log file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchId(pub u64);

impl MatchId {
    /// Allocate a fresh id.
    ///
    /// Ids are unique within the process and, barring clock rewinds,
    /// across processes. Thread-safe.
    pub fn next() -> Self {
        let base = *MATCH_ID_BASE.get_or_init(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_micros() as u64)
                .unwrap_or(0)
        });
        Self(base.wrapping_add(MATCH_ID_COUNTER.fetch_add(1, Ordering::Relaxed)))
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MatchId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
