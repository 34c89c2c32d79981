//! Fixed-capacity bump arena backing inarow matches.
//!
//! One [`Arena`] is created at process start and serves every board for
//! the lifetime of the run. Allocations are carved sequentially from a
//! single contiguous byte buffer and released only in bulk:
//!
//! ```text
//! Arena
//! ├── buf: Vec<u8>          (capacity fixed at creation, never grows)
//! ├── previous_offset       (start of the most recent allocation)
//! ├── current_offset        (bump pointer, always <= capacity)
//! └── generation            (advanced by reset(); stamps every Block)
//! ```
//!
//! Allocations come back either as generation-stamped [`Block`] handles,
//! resolved through [`Arena::bytes`] / [`Arena::bytes_mut`], or as a
//! borrowed slice from [`Arena::alloc_slice`]. A handle from before a
//! [`reset`](Arena::reset) is rejected as stale; a borrowed slice prevents
//! `reset` from compiling while it is alive.
//!
//! All allocations are zero-filled before they are handed out. No
//! `unsafe`: the buffer is a plain `Vec<u8>` and alignment is applied to
//! offsets within it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod handle;

pub use arena::{align_forward, Arena};
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::Block;
