//! FIFO queue built from two LIFO stacks.
//!
//! Enqueue pushes onto the inbox. Dequeue pops the outbox, first pouring
//! the whole inbox into it (reversing its order) when the outbox is empty.
//! Each element is poured at most once, so every operation is amortized
//! O(1). Both stacks live in one [`TwoEndedStack`] buffer: inbox on the
//! left, outbox on the right.

use ixmem_core::{Bounded, ConfigError};

use crate::error::CollectionError;
use crate::stack::{Side, TwoEndedStack};

const INBOX: Side = Side::Left;
const OUTBOX: Side = Side::Right;

/// A bounded FIFO queue over two stacks sharing `capacity` slots.
#[derive(Debug)]
pub struct StackQueue<T> {
    stacks: TwoEndedStack<T>,
    pours: u64,
    transfers: u64,
}

impl<T> StackQueue<T> {
    /// Create an empty queue able to hold `capacity` elements.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            stacks: TwoEndedStack::new(capacity)?,
            pours: 0,
            transfers: 0,
        })
    }

    /// Append `value` at the back.
    pub fn enqueue(&mut self, value: T) -> Result<(), CollectionError> {
        self.stacks.push(INBOX, value)
    }

    /// Remove and return the front element.
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        if self.stacks.len_of(OUTBOX) == 0 {
            self.pour()?;
        }
        self.stacks.pop(OUTBOX)
    }

    /// The front element, if any.
    pub fn peek(&self) -> Option<&T> {
        // Before a pour the oldest element sits at the inbox bottom.
        self.stacks
            .peek(OUTBOX)
            .or_else(|| self.stacks.bottom(INBOX))
    }

    /// Number of times the inbox has been poured into the outbox.
    pub fn pours(&self) -> u64 {
        self.pours
    }

    /// Total elements moved from inbox to outbox over the queue's life.
    pub fn transfers(&self) -> u64 {
        self.transfers
    }

    fn pour(&mut self) -> Result<(), CollectionError> {
        if self.stacks.len_of(INBOX) == 0 {
            return Err(CollectionError::Underflow);
        }
        let moved = self.stacks.len_of(INBOX);
        // Each pop frees exactly the slot the following push consumes.
        for _ in 0..moved {
            let value = self.stacks.pop(INBOX)?;
            self.stacks.push(OUTBOX, value)?;
        }
        self.pours += 1;
        self.transfers += moved as u64;
        log::trace!("poured {moved} elements into outbox (pour #{})", self.pours);
        Ok(())
    }
}

impl<T> Bounded for StackQueue<T> {
    fn capacity(&self) -> usize {
        self.stacks.capacity()
    }

    fn len(&self) -> usize {
        self.stacks.len()
    }
}
