//! Doubly linked list with O(1) unlink of any node.

use ixmem_arena::{Arena, SlotHandle};
use ixmem_core::{Bounded, ConfigError};

use crate::error::CollectionError;

#[derive(Debug)]
struct DoublyNode<T> {
    value: T,
    prev: Option<SlotHandle>,
    next: Option<SlotHandle>,
}

/// A doubly linked list stored in a private arena.
///
/// Invariant: following `next` from `head` ends at `tail`, whose `next`
/// is `None`; following `prev` from `tail` ends at `head` the same way.
#[derive(Debug)]
pub struct DoublyList<T> {
    arena: Arena<DoublyNode<T>>,
    head: Option<SlotHandle>,
    tail: Option<SlotHandle>,
}

impl<T> DoublyList<T> {
    /// Create an empty list able to hold `capacity` nodes.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            arena: Arena::with_capacity(capacity)?,
            head: None,
            tail: None,
        })
    }

    /// Link `value` in before the current head.
    pub fn push_front(&mut self, value: T) -> Result<SlotHandle, CollectionError> {
        let handle = self.arena.allocate(DoublyNode {
            value,
            prev: None,
            next: self.head,
        })?;
        match self.head {
            Some(old) => self.set_prev(old, Some(handle)),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        Ok(handle)
    }

    /// Link `value` in after the current tail.
    pub fn push_back(&mut self, value: T) -> Result<SlotHandle, CollectionError> {
        let handle = self.arena.allocate(DoublyNode {
            value,
            prev: self.tail,
            next: None,
        })?;
        match self.tail {
            Some(old) => self.set_next(old, Some(handle)),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        Ok(handle)
    }

    /// Link `value` in directly after `node`.
    pub fn insert_after(&mut self, node: SlotHandle, value: T) -> Result<SlotHandle, CollectionError> {
        let after = self.arena.resolve(node)?.next;
        let handle = self.arena.allocate(DoublyNode {
            value,
            prev: Some(node),
            next: after,
        })?;
        self.set_next(node, Some(handle));
        match after {
            Some(a) => self.set_prev(a, Some(handle)),
            None => self.tail = Some(handle),
        }
        Ok(handle)
    }

    /// Unlink `node` and return its payload. O(1), any position.
    pub fn delete(&mut self, node: SlotHandle) -> Result<T, CollectionError> {
        let DoublyNode { value, prev, next } = self.arena.free(node)?;
        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.set_prev(n, prev),
            None => self.tail = prev,
        }
        Ok(value)
    }

    /// Unlink and return the head's payload.
    pub fn pop_front(&mut self) -> Result<T, CollectionError> {
        let head = self.head.ok_or(CollectionError::Underflow)?;
        self.delete(head)
    }

    /// Unlink and return the tail's payload.
    pub fn pop_back(&mut self) -> Result<T, CollectionError> {
        let tail = self.tail.ok_or(CollectionError::Underflow)?;
        self.delete(tail)
    }

    /// First node whose payload satisfies `pred`, scanning from the head.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<SlotHandle> {
        self.iter().find(|(_, v)| pred(v)).map(|(h, _)| h)
    }

    /// Handle of the head node.
    pub fn head(&self) -> Option<SlotHandle> {
        self.head
    }

    /// Handle of the tail node.
    pub fn tail(&self) -> Option<SlotHandle> {
        self.tail
    }

    /// Handle of the node after `node`.
    pub fn next(&self, node: SlotHandle) -> Option<SlotHandle> {
        self.arena.get(node)?.next
    }

    /// Handle of the node before `node`.
    pub fn prev(&self, node: SlotHandle) -> Option<SlotHandle> {
        self.arena.get(node)?.prev
    }

    /// Payload stored at `node`.
    pub fn get(&self, node: SlotHandle) -> Option<&T> {
        self.arena.get(node).map(|n| &n.value)
    }

    /// Mutable payload stored at `node`.
    pub fn get_mut(&mut self, node: SlotHandle) -> Option<&mut T> {
        self.arena.get_mut(node).map(|n| &mut n.value)
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.arena.len(),
        }
    }

    // Links of live nodes always name live nodes, so a failed lookup here
    // can only follow a bug in this file; it is skipped rather than panicking.
    fn set_next(&mut self, node: SlotHandle, next: Option<SlotHandle>) {
        if let Some(n) = self.arena.get_mut(node) {
            n.next = next;
        }
    }

    fn set_prev(&mut self, node: SlotHandle, prev: Option<SlotHandle>) {
        if let Some(n) = self.arena.get_mut(node) {
            n.prev = prev;
        }
    }
}

impl<T> Bounded for DoublyList<T> {
    fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    fn len(&self) -> usize {
        self.arena.len()
    }
}

/// Iterator over a [`DoublyList`], yielding each node's handle with its
/// payload. Double-ended.
pub struct Iter<'a, T> {
    arena: &'a Arena<DoublyNode<T>>,
    front: Option<SlotHandle>,
    back: Option<SlotHandle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (SlotHandle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        let node = self.arena.get(handle)?;
        self.front = node.next;
        self.remaining -= 1;
        Some((handle, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        let node = self.arena.get(handle)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some((handle, &node.value))
    }
}
