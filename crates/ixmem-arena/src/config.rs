//! Arena configuration parameters.

use ixmem_core::{check_capacity, ConfigError};

/// Configuration for the slab arena.
///
/// The slot count is fixed for the arena's lifetime; there is no resizing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of slots carved out at construction.
    ///
    /// Must be in `1..=MAX_CAPACITY`. Slot indices are stored as `u32`
    /// inside handles and free-list links.
    pub capacity: usize,
}

impl ArenaConfig {
    /// Default slot count.
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Largest slot count addressable by a `u32` slot index.
    pub const MAX_CAPACITY: usize = u32::MAX as usize;

    /// Create a config with the given slot count.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check that the slot count is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_capacity(self.capacity, 1, Self::MAX_CAPACITY)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
