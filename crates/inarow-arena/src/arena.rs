//! The bump arena.
//!
//! An [`Arena`] is a pre-allocated byte buffer with a cursor that advances
//! on each allocation. It is never grown, never freed piecewise, only
//! reset (cursor back to zero) or destroyed at shutdown.

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::Block;

/// Round `offset` up to the next multiple of `align`.
///
/// Returns `None` if the rounded offset does not fit in `usize`.
///
/// # Panics
///
/// Panics if `align` is not a power of two. A bad alignment is a
/// programming error, not a runtime condition.
pub fn align_forward(offset: usize, align: usize) -> Option<usize> {
    assert!(
        align.is_power_of_two(),
        "arena alignment must be a power of two, got {align}"
    );
    Some(offset.checked_add(align - 1)? & !(align - 1))
}

/// Fixed-capacity bump allocator.
///
/// The single-writer discipline is enforced by `&mut self` on every
/// mutating method. Boards borrow their storage through
/// [`alloc_slice`](Self::alloc_slice), so the borrow checker rejects a
/// `reset` while any board is alive.
#[derive(Debug)]
pub struct Arena {
    /// Backing storage. Allocated to full capacity at creation.
    buf: Vec<u8>,
    alignment: usize,
    /// Start offset of the most recent allocation.
    previous_offset: usize,
    /// Bump pointer: next free byte.
    current_offset: usize,
    generation: u32,
}

impl Arena {
    /// Create an arena from a config.
    ///
    /// # Panics
    ///
    /// Panics if `config.alignment` is not a power of two.
    pub fn new(config: &ArenaConfig) -> Self {
        assert!(
            config.alignment.is_power_of_two(),
            "arena alignment must be a power of two, got {}",
            config.alignment
        );
        log::debug!(
            "arena init: {} bytes, {}-byte alignment",
            config.capacity,
            config.alignment
        );
        Self {
            buf: vec![0; config.capacity],
            alignment: config.alignment,
            previous_offset: 0,
            current_offset: 0,
            generation: 0,
        }
    }

    /// Create a pointer-aligned arena of `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(&ArenaConfig::new(capacity))
    }

    /// Bump-allocate `size` zeroed bytes.
    ///
    /// The bump pointer is first aligned forward, then advanced by `size`.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::CapacityExceeded`] if the aligned allocation
    /// would run past the end of the buffer. The arena is left unchanged.
    pub fn allocate(&mut self, size: usize) -> Result<Block, ArenaError> {
        let capacity = self.buf.len();
        let exceeded = |remaining| ArenaError::CapacityExceeded {
            requested: size,
            remaining,
            capacity,
        };

        let start = align_forward(self.current_offset, self.alignment)
            .filter(|&start| start <= capacity)
            .ok_or_else(|| exceeded(0))?;
        let end = start
            .checked_add(size)
            .filter(|&end| end <= capacity)
            .ok_or_else(|| exceeded(capacity - start))?;

        // Memory from before a reset is stale; zero it on the way out.
        self.buf[start..end].fill(0);
        self.previous_offset = start;
        self.current_offset = end;
        Ok(Block::new(self.generation, start, size))
    }

    /// Allocate `size` zeroed bytes and borrow them directly.
    ///
    /// The returned slice keeps the arena mutably borrowed, so no other
    /// allocation or reset can happen while it is alive.
    pub fn alloc_slice(&mut self, size: usize) -> Result<&mut [u8], ArenaError> {
        let block = self.allocate(size)?;
        Ok(&mut self.buf[block.range()])
    }

    /// Resolve a block to its bytes.
    pub fn bytes(&self, block: &Block) -> Result<&[u8], ArenaError> {
        self.check(block)?;
        Ok(&self.buf[block.range()])
    }

    /// Resolve a block to its bytes, mutably.
    pub fn bytes_mut(&mut self, block: &Block) -> Result<&mut [u8], ArenaError> {
        self.check(block)?;
        Ok(&mut self.buf[block.range()])
    }

    fn check(&self, block: &Block) -> Result<(), ArenaError> {
        if block.generation != self.generation {
            return Err(ArenaError::StaleBlock {
                block_generation: block.generation,
                current: self.generation,
            });
        }
        if block.offset + block.len > self.current_offset {
            return Err(ArenaError::UnknownBlock {
                offset: block.offset,
                len: block.len,
            });
        }
        Ok(())
    }

    /// Rewind both offsets to zero without deallocating or clearing.
    ///
    /// Every [`Block`] handed out before the reset becomes stale. The
    /// buffer contents are left in place; the next `allocate` zeroes what
    /// it hands out.
    pub fn reset(&mut self) {
        log::debug!(
            "arena reset: generation {} released {} bytes",
            self.generation,
            self.current_offset
        );
        self.previous_offset = 0;
        self.current_offset = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Release the buffer.
    ///
    /// Consumes the arena; neither it nor anything borrowed from it can be
    /// used afterwards.
    pub fn destroy(self) {
        log::debug!("arena destroy: {} bytes released", self.buf.len());
        drop(self);
    }

    /// Bytes currently allocated, including alignment padding.
    pub fn used(&self) -> usize {
        self.current_offset
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes between the bump pointer and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.current_offset
    }

    /// Start offset of the most recent allocation.
    pub fn previous_offset(&self) -> usize {
        self.previous_offset
    }

    /// Alignment applied to every allocation.
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Current generation (number of resets so far, wrapping).
    pub fn generation(&self) -> u32 {
        self.generation
    }
}
