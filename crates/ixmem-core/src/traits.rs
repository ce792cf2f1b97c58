//! Capacity accounting shared by every fixed-size structure.

/// A structure whose storage is carved out once at construction.
///
/// `capacity()` is the number of elements the structure can hold at the
/// same time, which may be less than its backing buffer (a circular queue
/// sacrifices one slot). It never changes after construction.
pub trait Bounded {
    /// Maximum number of live elements.
    fn capacity(&self) -> usize;

    /// Number of live elements.
    fn len(&self) -> usize;

    /// Whether no elements are live.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the next insertion would fail for lack of space.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Free element slots left.
    fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }
}
