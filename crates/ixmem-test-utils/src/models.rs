//! Reference models the structures under test are compared against.

use std::collections::VecDeque;
use std::hash::Hash;

use indexmap::IndexMap;

/// A bounded FIFO queue.
#[derive(Debug)]
pub struct FifoModel<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> FifoModel<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns `false` (and drops `value`) when full.
    pub fn enqueue(&mut self, value: T) -> bool {
        if self.items.len() == self.capacity {
            return false;
        }
        self.items.push_back(value);
        true
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

/// Two LIFO stacks drawing on one shared capacity.
#[derive(Debug)]
pub struct DualStackModel<T> {
    left: Vec<T>,
    right: Vec<T>,
    capacity: usize,
}

impl<T> DualStackModel<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
            capacity,
        }
    }

    /// Returns `false` (and drops `value`) when the shared buffer is full.
    pub fn push(&mut self, left: bool, value: T) -> bool {
        if self.left.len() + self.right.len() == self.capacity {
            return false;
        }
        if left {
            self.left.push(value);
        } else {
            self.right.push(value);
        }
        true
    }

    pub fn pop(&mut self, left: bool) -> Option<T> {
        if left {
            self.left.pop()
        } else {
            self.right.pop()
        }
    }

    pub fn len_of(&self, left: bool) -> usize {
        if left {
            self.left.len()
        } else {
            self.right.len()
        }
    }
}

/// A map whose removal moves the last entry into the hole, matching the
/// dense-array order of a dense/sparse dictionary exactly.
#[derive(Debug)]
pub struct SwapRemoveModel<K, V> {
    entries: IndexMap<K, V>,
}

impl<K: Hash + Eq + Copy, V> SwapRemoveModel<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns `false` when the key is already present.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value);
        true
    }

    pub fn remove(&mut self, key: K) -> Option<V> {
        self.entries.swap_remove(&key)
    }

    /// Dense position of `key`, if present.
    pub fn position(&self, key: K) -> Option<usize> {
        self.entries.get_index_of(&key)
    }

    pub fn keys(&self) -> Vec<K> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Hash + Eq + Copy, V> Default for SwapRemoveModel<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
