//! Circular-buffer FIFO queue with one sacrificed slot.
//!
//! `head` is the index of the oldest element and `tail` the next write
//! slot, both taken modulo the ring size N. Keeping one slot permanently
//! empty makes `head == tail` mean empty and `head == (tail + 1) % N`
//! mean full, so at most N-1 elements are stored.

use ixmem_core::{alloc_buffer, check_capacity, Bounded, ConfigError};

use crate::error::CollectionError;

/// A bounded FIFO queue over a ring of fixed size.
#[derive(Debug)]
pub struct CircularQueue<T> {
    buf: Box<[Option<T>]>,
    head: usize,
    tail: usize,
}

impl<T> CircularQueue<T> {
    /// Create an empty queue over a ring of `slots` slots.
    ///
    /// The queue holds at most `slots - 1` elements, so `slots` must be
    /// at least 2.
    pub fn new(slots: usize) -> Result<Self, ConfigError> {
        check_capacity(slots, 2, usize::MAX)?;
        Ok(Self {
            buf: alloc_buffer(slots, |_| None)?,
            head: 0,
            tail: 0,
        })
    }

    /// Create a queue able to hold `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        check_capacity(capacity, 1, usize::MAX - 1)?;
        Self::new(capacity + 1)
    }

    /// Append `value` at the tail.
    ///
    /// Fails with [`CollectionError::Overflow`] when N-1 elements are
    /// already queued; `value` is dropped.
    pub fn enqueue(&mut self, value: T) -> Result<(), CollectionError> {
        let next = self.advance(self.tail);
        if next == self.head {
            log::debug!("circular queue overflow at {} elements", self.capacity());
            return Err(CollectionError::Overflow {
                capacity: self.capacity(),
            });
        }
        self.buf[self.tail] = Some(value);
        self.tail = next;
        Ok(())
    }

    /// Remove and return the oldest element.
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        if self.head == self.tail {
            log::debug!("circular queue underflow");
            return Err(CollectionError::Underflow);
        }
        let value = self.buf[self.head].take();
        self.head = self.advance(self.head);
        value.ok_or(CollectionError::Underflow)
    }

    /// The oldest element, if any.
    pub fn peek(&self) -> Option<&T> {
        if self.head == self.tail {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    /// Ring index of the oldest element.
    pub fn head_index(&self) -> usize {
        self.head
    }

    /// Ring index the next enqueue writes to.
    pub fn tail_index(&self) -> usize {
        self.tail
    }

    /// Size of the ring, including the sacrificed slot.
    pub fn slots(&self) -> usize {
        self.buf.len()
    }

    /// Drop every queued element and rewind both cursors.
    pub fn clear(&mut self) {
        for slot in self.buf.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len()).filter_map(move |i| self.buf[(self.head + i) % self.buf.len()].as_ref())
    }

    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.buf.len()
    }
}

impl<T> Bounded for CircularQueue<T> {
    fn capacity(&self) -> usize {
        self.buf.len() - 1
    }

    fn len(&self) -> usize {
        (self.tail + self.buf.len() - self.head) % self.buf.len()
    }
}
