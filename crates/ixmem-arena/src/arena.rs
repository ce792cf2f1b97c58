//! The slab arena: O(1) allocate and free over a fixed slot array.
//!
//! Every slot starts on the free list, threaded in index order
//! (`0 → 1 → … → N-1`). [`Arena::allocate`] pops the head and
//! [`Arena::free`] pushes the released slot back onto the head, so the
//! most recently freed slot is the next one handed out.

use std::mem;

use ixmem_core::{alloc_buffer, Bounded, ConfigError};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::SlotHandle;
use crate::slot::{Slot, SlotState};

/// Fixed-capacity slab allocator with an intrusive free list.
///
/// The arena exclusively owns every payload. Callers hold [`SlotHandle`]s,
/// which are lookups into the arena and never owners, so freeing a slot
/// cannot leave a second owner behind.
///
/// Invariant: the free list is acyclic and `len() + free_len() == capacity()`
/// after every operation.
pub struct Arena<T> {
    slots: Box<[Slot<T>]>,
    /// First free slot, `None` when every slot is occupied.
    free_head: Option<u32>,
    /// Number of occupied slots.
    len: usize,
}

impl<T> Arena<T> {
    /// Create an arena with every slot on the free list.
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity = config.capacity;
        let slots = alloc_buffer(capacity, |i| {
            let next = if i + 1 < capacity {
                Some((i + 1) as u32)
            } else {
                None
            };
            Slot::free(next)
        })?;
        Ok(Self {
            slots,
            free_head: Some(0),
            len: 0,
        })
    }

    /// Create an arena with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        Self::new(ArenaConfig::new(capacity))
    }

    /// Pop the free-list head and store `value` in it.
    ///
    /// Returns [`ArenaError::OutOfSpace`] when the free list is exhausted;
    /// `value` is dropped in that case.
    pub fn allocate(&mut self, value: T) -> Result<SlotHandle, ArenaError> {
        let Some(index) = self.free_head else {
            log::debug!("arena exhausted at {} slots", self.slots.len());
            return Err(ArenaError::OutOfSpace {
                capacity: self.slots.len(),
            });
        };
        let slot = &mut self.slots[index as usize];
        let next = match slot.state {
            SlotState::Free { next } => next,
            SlotState::Occupied(_) => unreachable!("free list head {index} is occupied"),
        };
        slot.state = SlotState::Occupied(value);
        self.free_head = next;
        self.len += 1;
        log::trace!("allocated slot {index} (gen {})", slot.generation);
        Ok(SlotHandle::new(index, slot.generation))
    }

    /// Release the slot named by `handle` and return its payload.
    ///
    /// The slot is pushed onto the free-list head and its generation is
    /// bumped, so `handle` and every copy of it become stale.
    ///
    /// # Errors
    ///
    /// Freeing a slot twice reports [`ArenaError::AlreadyFree`] (or
    /// [`ArenaError::StaleHandle`] once the slot has been reallocated)
    /// and leaves the free list untouched.
    pub fn free(&mut self, handle: SlotHandle) -> Result<T, ArenaError> {
        self.check(handle)?;
        let index = handle.index;
        let slot = &mut self.slots[index as usize];
        let prev = mem::replace(
            &mut slot.state,
            SlotState::Free {
                next: self.free_head,
            },
        );
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = Some(index);
        self.len -= 1;
        log::trace!("freed slot {index}, now gen {}", slot.generation);
        match prev {
            SlotState::Occupied(value) => Ok(value),
            // `check` rejected free slots above.
            SlotState::Free { .. } => unreachable!("slot {index} passed check while free"),
        }
    }

    /// Verify that `handle` names a currently occupied slot of this arena.
    pub fn check(&self, handle: SlotHandle) -> Result<(), ArenaError> {
        let index = handle.index();
        let Some(slot) = self.slots.get(index) else {
            return Err(ArenaError::OutOfBounds {
                index,
                capacity: self.slots.len(),
            });
        };
        if slot.is_free() {
            log::debug!("rejected handle {handle}: slot is free");
            return Err(ArenaError::AlreadyFree { index });
        }
        if slot.generation != handle.generation {
            log::debug!("rejected handle {handle}: slot is at gen {}", slot.generation);
            return Err(ArenaError::StaleHandle {
                index,
                handle_generation: handle.generation,
                slot_generation: slot.generation,
            });
        }
        Ok(())
    }

    /// Borrow the payload behind `handle`, reporting why if it is invalid.
    pub fn resolve(&self, handle: SlotHandle) -> Result<&T, ArenaError> {
        self.check(handle)?;
        match self.slots[handle.index()].occupant() {
            Some(value) => Ok(value),
            None => unreachable!("slot {} passed check while free", handle.index),
        }
    }

    /// Mutably borrow the payload behind `handle`, reporting why if it is invalid.
    pub fn resolve_mut(&mut self, handle: SlotHandle) -> Result<&mut T, ArenaError> {
        self.check(handle)?;
        match self.slots[handle.index()].occupant_mut() {
            Some(value) => Ok(value),
            None => unreachable!("slot {} passed check while free", handle.index),
        }
    }

    /// Borrow the payload behind `handle`, or `None` if it is invalid.
    pub fn get(&self, handle: SlotHandle) -> Option<&T> {
        self.resolve(handle).ok()
    }

    /// Mutably borrow the payload behind `handle`, or `None` if it is invalid.
    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        self.resolve_mut(handle).ok()
    }

    /// Mutably borrow two distinct payloads at once.
    ///
    /// Returns `None` if either handle is invalid or both name the same slot.
    pub fn get2_mut(&mut self, a: SlotHandle, b: SlotHandle) -> Option<(&mut T, &mut T)> {
        if a.index == b.index {
            return None;
        }
        self.check(a).ok()?;
        self.check(b).ok()?;
        let (lo, hi, swapped) = if a.index < b.index {
            (a.index(), b.index(), false)
        } else {
            (b.index(), a.index(), true)
        };
        let (head, tail) = self.slots.split_at_mut(hi);
        let first = head[lo].occupant_mut()?;
        let second = tail[0].occupant_mut()?;
        if swapped {
            Some((second, first))
        } else {
            Some((first, second))
        }
    }

    /// Whether `handle` names a currently occupied slot.
    pub fn contains(&self, handle: SlotHandle) -> bool {
        self.check(handle).is_ok()
    }

    /// Length of the free list, found by walking it.
    ///
    /// O(free slots). The walk is bounded by the capacity so a corrupted
    /// (cyclic) list cannot hang the caller.
    pub fn free_len(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.free_head;
        while let Some(index) = cursor {
            if count == self.slots.len() {
                break;
            }
            count += 1;
            cursor = match self.slots[index as usize].state {
                SlotState::Free { next } => next,
                SlotState::Occupied(_) => break,
            };
        }
        count
    }

    /// Index of the slot the next [`allocate`](Self::allocate) will use.
    pub fn next_free(&self) -> Option<usize> {
        self.free_head.map(|i| i as usize)
    }

    /// Free every slot, dropping all payloads.
    ///
    /// Occupied slots have their generation bumped exactly as if each had
    /// been freed individually. The free list is rebuilt in index order.
    pub fn clear(&mut self) {
        let capacity = self.slots.len();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if !slot.is_free() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            let next = if i + 1 < capacity {
                Some((i + 1) as u32)
            } else {
                None
            };
            slot.state = SlotState::Free { next };
        }
        self.free_head = Some(0);
        self.len = 0;
    }

    /// Iterate over occupied slots in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots.iter().enumerate(),
        }
    }
}

impl<T> Bounded for Arena<T> {
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.slots.len())
            .field("len", &self.len)
            .field("free_head", &self.free_head)
            .finish()
    }
}

/// Iterator over the occupied slots of an [`Arena`], in index order.
pub struct Iter<'a, T> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Slot<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (SlotHandle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        for (i, slot) in self.inner.by_ref() {
            if let Some(value) = slot.occupant() {
                return Some((SlotHandle::new(i as u32, slot.generation), value));
            }
        }
        None
    }
}

impl<'a, T> IntoIterator for &'a Arena<T> {
    type Item = (SlotHandle, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
