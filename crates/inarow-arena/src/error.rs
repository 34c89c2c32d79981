//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The buffer cannot hold the requested allocation.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes left between the aligned bump pointer and the end.
        remaining: usize,
        /// Total capacity of the arena.
        capacity: usize,
    },
    /// A [`Block`](crate::Block) from a generation that has been reset away.
    StaleBlock {
        /// The generation encoded in the block.
        block_generation: u32,
        /// The arena's current generation.
        current: u32,
    },
    /// A block whose range is not inside the arena's allocated region.
    UnknownBlock {
        /// Start offset of the block.
        offset: usize,
        /// Length of the block in bytes.
        len: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                remaining,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, \
                     {remaining} of {capacity} bytes remaining"
                )
            }
            Self::StaleBlock {
                block_generation,
                current,
            } => {
                write!(
                    f,
                    "stale block: generation {block_generation}, arena is at {current}"
                )
            }
            Self::UnknownBlock { offset, len } => {
                write!(f, "block at offset {offset} (len {len}) is not allocated")
            }
        }
    }
}

impl Error for ArenaError {}
