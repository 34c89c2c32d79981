//! Allocation handles.
//!
//! A [`Block`] encodes the location of an allocation within the arena. It
//! is generation-scoped: the `generation` field allows O(1) staleness
//! checks after a [`reset`](crate::Arena::reset).

use std::fmt;
use std::ops::Range;

/// Location of one allocation within an [`Arena`](crate::Arena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Block {
    /// Arena generation when this allocation was made.
    pub(crate) generation: u32,
    /// Byte offset of the first byte.
    pub(crate) offset: usize,
    /// Length in bytes.
    pub(crate) len: usize,
}

impl Block {
    pub(crate) fn new(generation: u32, offset: usize, len: usize) -> Self {
        Self {
            generation,
            offset,
            len,
        }
    }

    /// The generation this block belongs to.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Byte offset within the arena buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte range covered by the block.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block(gen={}, off={}, len={})",
            self.generation, self.offset, self.len
        )
    }
}
