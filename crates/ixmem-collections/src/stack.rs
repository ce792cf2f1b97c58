//! Two stacks sharing one fixed buffer, growing toward each other.
//!
//! ```text
//!  index:  0   1   2   3   4   5   6   7
//!        ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!        │ a │ b │ c │   │   │ z │ y │ x │
//!        └───┴───┴───┴───┴───┴───┴───┴───┘
//!                      ▲       ▲
//!                    left    right
//!        Left stack:  [0, left)   grows →
//!        Right stack: [right, N)  grows ←
//! ```
//!
//! `left` is the exclusive upper bound of the left stack and `right` the
//! inclusive lower bound of the right one, so the gap `[left, right)` is
//! the free space. Both pushes check `left < right` before writing; the
//! stacks can never overwrite each other.

use ixmem_core::{alloc_buffer, check_capacity, Bounded, ConfigError};

use crate::error::CollectionError;

/// Which of the two stacks an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Grows rightward from index 0.
    Left,
    /// Grows leftward from index N-1.
    Right,
}

/// Two LIFO stacks over one buffer of `capacity` slots.
///
/// Either stack may use all the space the other leaves free. Overflow is
/// reported only when the buffer as a whole is full.
#[derive(Debug)]
pub struct TwoEndedStack<T> {
    buf: Box<[Option<T>]>,
    left: usize,
    right: usize,
}

impl<T> TwoEndedStack<T> {
    /// Create two empty stacks sharing `capacity` slots.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        check_capacity(capacity, 1, usize::MAX)?;
        Ok(Self {
            buf: alloc_buffer(capacity, |_| None)?,
            left: 0,
            right: capacity,
        })
    }

    /// Push `value` onto the `side` stack.
    ///
    /// Fails with [`CollectionError::Overflow`] when the two stacks meet;
    /// `value` is dropped and neither stack changes.
    pub fn push(&mut self, side: Side, value: T) -> Result<(), CollectionError> {
        if self.left >= self.right {
            log::debug!("two-ended stack overflow on {side:?} side");
            return Err(CollectionError::Overflow {
                capacity: self.buf.len(),
            });
        }
        match side {
            Side::Left => {
                self.buf[self.left] = Some(value);
                self.left += 1;
            }
            Side::Right => {
                self.right -= 1;
                self.buf[self.right] = Some(value);
            }
        }
        Ok(())
    }

    /// Pop the most recently pushed value from the `side` stack.
    pub fn pop(&mut self, side: Side) -> Result<T, CollectionError> {
        if self.len_of(side) == 0 {
            log::debug!("two-ended stack underflow on {side:?} side");
            return Err(CollectionError::Underflow);
        }
        let slot = match side {
            Side::Left => {
                self.left -= 1;
                self.left
            }
            Side::Right => {
                self.right += 1;
                self.right - 1
            }
        };
        self.buf[slot].take().ok_or(CollectionError::Underflow)
    }

    /// Top of the `side` stack.
    pub fn peek(&self, side: Side) -> Option<&T> {
        if self.len_of(side) == 0 {
            return None;
        }
        let slot = match side {
            Side::Left => self.left - 1,
            Side::Right => self.right,
        };
        self.buf[slot].as_ref()
    }

    /// Bottom (oldest element) of the `side` stack.
    pub fn bottom(&self, side: Side) -> Option<&T> {
        if self.len_of(side) == 0 {
            return None;
        }
        let slot = match side {
            Side::Left => 0,
            Side::Right => self.buf.len() - 1,
        };
        self.buf[slot].as_ref()
    }

    /// Number of elements on the `side` stack.
    pub fn len_of(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left,
            Side::Right => self.buf.len() - self.right,
        }
    }
}

impl<T> Bounded for TwoEndedStack<T> {
    fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn len(&self) -> usize {
        self.left + (self.buf.len() - self.right)
    }
}
