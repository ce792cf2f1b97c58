//! Generation-tagged slot handles.
//!
//! A [`SlotHandle`] is the arena's stand-in for a pointer: the slot index
//! plus the slot's generation at allocation time. The generation allows
//! O(1) staleness checks without a lookup table.

use std::fmt;

/// Names one occupied slot of an [`Arena`](crate::Arena).
///
/// Handles are plain `Copy` values and never own the payload; the arena
/// does. A handle stays valid until its slot is freed, after which every
/// lookup through it is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl SlotHandle {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the arena.
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Slot generation when this handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotHandle(idx={}, gen={})", self.index, self.generation)
    }
}
