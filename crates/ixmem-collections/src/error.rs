//! Errors reported by the index-linked collections.

use std::error::Error;
use std::fmt;

use ixmem_arena::ArenaError;

/// Errors from collection operations.
///
/// All variants are local and recoverable; no operation panics or leaves
/// the structure inconsistent when it returns one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionError {
    /// A bounded buffer has no room for another element.
    Overflow {
        /// Number of elements the buffer can hold.
        capacity: usize,
    },
    /// Removal from an empty stack or queue.
    Underflow,
    /// The operation is not supported in the structure's current shape.
    InvalidOperation {
        /// What made the operation impossible.
        reason: &'static str,
    },
    /// Insert of a key that is already present.
    DuplicateKey {
        /// The offending key.
        key: usize,
    },
    /// Delete of a key that is not present.
    MissingKey {
        /// The offending key.
        key: usize,
    },
    /// A key outside `0..universe`.
    KeyOutOfUniverse {
        /// The offending key.
        key: usize,
        /// Size of the key universe.
        universe: usize,
    },
    /// `link` was given an element that is not the root of its set.
    NotARoot,
    /// The backing arena rejected an allocation or a handle.
    Arena(ArenaError),
}

impl CollectionError {
    /// Whether this error reports a broken caller precondition (duplicate
    /// insert, delete of an absent key, stale handle and the like) rather
    /// than a capacity or shape limit.
    pub fn is_precondition_violation(&self) -> bool {
        match self {
            Self::DuplicateKey { .. }
            | Self::MissingKey { .. }
            | Self::KeyOutOfUniverse { .. }
            | Self::NotARoot => true,
            Self::Arena(e) => e.is_precondition_violation(),
            Self::Overflow { .. } | Self::Underflow | Self::InvalidOperation { .. } => false,
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { capacity } => write!(f, "overflow: capacity {capacity} reached"),
            Self::Underflow => write!(f, "underflow: structure is empty"),
            Self::InvalidOperation { reason } => write!(f, "invalid operation: {reason}"),
            Self::DuplicateKey { key } => write!(f, "key {key} is already present"),
            Self::MissingKey { key } => write!(f, "key {key} is not present"),
            Self::KeyOutOfUniverse { key, universe } => {
                write!(f, "key {key} is outside the universe 0..{universe}")
            }
            Self::NotARoot => write!(f, "element is not the root of its set"),
            Self::Arena(e) => write!(f, "arena: {e}"),
        }
    }
}

impl Error for CollectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for CollectionError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_errors_chain_as_source() {
        let e: CollectionError = ArenaError::OutOfSpace { capacity: 3 }.into();
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "arena: arena out of space: all 3 slots occupied");
        assert!(!e.is_precondition_violation());
    }

    #[test]
    fn classification() {
        assert!(CollectionError::DuplicateKey { key: 1 }.is_precondition_violation());
        assert!(CollectionError::Arena(ArenaError::AlreadyFree { index: 0 })
            .is_precondition_violation());
        assert!(!CollectionError::Underflow.is_precondition_violation());
        assert!(!CollectionError::InvalidOperation { reason: "tail" }
            .is_precondition_violation());
    }
}
