//! Configuration errors shared by all fixed-capacity structures.

use std::error::Error;
use std::fmt;

/// A construction-time capacity was rejected.
///
/// Capacity is fixed for an instance's lifetime, so this is the only
/// point at which sizing can fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Capacity (or key universe) of zero.
    ZeroCapacity,
    /// Capacity is below the structure's minimum.
    CapacityTooSmall {
        /// Smallest accepted capacity.
        minimum: usize,
        /// The configured value.
        requested: usize,
    },
    /// Capacity does not fit the structure's index type.
    CapacityTooLarge {
        /// Largest accepted capacity.
        maximum: usize,
        /// The configured value.
        requested: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "capacity must be at least 1"),
            Self::CapacityTooSmall { minimum, requested } => {
                write!(f, "capacity {requested} is below minimum of {minimum}")
            }
            Self::CapacityTooLarge { maximum, requested } => {
                write!(f, "capacity {requested} exceeds maximum of {maximum}")
            }
        }
    }
}

impl Error for ConfigError {}
