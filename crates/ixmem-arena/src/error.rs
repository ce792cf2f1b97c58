//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// [`OutOfSpace`](Self::OutOfSpace) is the only condition a well-behaved
/// caller can hit. The others report a violated precondition: a handle
/// that was already freed, or one that never came from this arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The free list is exhausted; every slot is occupied.
    OutOfSpace {
        /// Total slot count of the arena.
        capacity: usize,
    },
    /// A handle whose index lies outside the arena.
    OutOfBounds {
        /// The index encoded in the handle.
        index: usize,
        /// Total slot count of the arena.
        capacity: usize,
    },
    /// The slot named by the handle is currently on the free list.
    AlreadyFree {
        /// The slot index.
        index: usize,
    },
    /// The slot was freed and reallocated since the handle was issued.
    StaleHandle {
        /// The slot index.
        index: usize,
        /// The generation encoded in the handle.
        handle_generation: u32,
        /// The slot's current generation.
        slot_generation: u32,
    },
}

impl ArenaError {
    /// Whether this error reports a caller precondition violation
    /// (double free, use after free, foreign handle) rather than exhaustion.
    pub fn is_precondition_violation(&self) -> bool {
        !matches!(self, Self::OutOfSpace { .. })
    }
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfSpace { capacity } => {
                write!(f, "arena out of space: all {capacity} slots occupied")
            }
            Self::OutOfBounds { index, capacity } => {
                write!(f, "slot index {index} out of bounds for capacity {capacity}")
            }
            Self::AlreadyFree { index } => write!(f, "slot {index} is already free"),
            Self::StaleHandle {
                index,
                handle_generation,
                slot_generation,
            } => {
                write!(
                    f,
                    "stale handle for slot {index}: generation {handle_generation}, slot is at {slot_generation}"
                )
            }
        }
    }
}

impl Error for ArenaError {}
