//! Arena configuration parameters.

/// Configuration for the arena allocator.
///
/// All values are immutable after the arena is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Total buffer size in bytes. The arena never grows past this.
    ///
    /// Default: 1 MiB, which holds thousands of 9x9 boards.
    pub capacity: usize,

    /// Alignment applied to the start of every allocation.
    ///
    /// Default: the pointer width. Must be a power of two.
    pub alignment: usize,
}

impl ArenaConfig {
    /// Default capacity: 1 MiB.
    pub const DEFAULT_CAPACITY: usize = 1 << 20;

    /// Default alignment: pointer width.
    pub const DEFAULT_ALIGNMENT: usize = std::mem::size_of::<usize>();

    /// Create a config with the given capacity and pointer alignment.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            alignment: Self::DEFAULT_ALIGNMENT,
        }
    }

    /// Bytes consumed by an allocation of `len` bytes starting from an
    /// aligned offset, including the padding needed to realign afterwards.
    pub fn footprint(&self, len: usize) -> usize {
        let align = self.alignment.max(1);
        len.div_ceil(align) * align
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
