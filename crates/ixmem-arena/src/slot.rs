//! Slot storage shared between the free list and occupants.

/// What a slot currently holds.
///
/// The free-list link and the payload are mutually exclusive: a slot's
/// link field is only meaningful while it sits on the free list, and the
/// payload only while it is occupied.
#[derive(Debug)]
pub(crate) enum SlotState<T> {
    /// On the free list. `next` is the following free slot, `None` at the end.
    Free { next: Option<u32> },
    /// Holding a caller's value.
    Occupied(T),
}

#[derive(Debug)]
pub(crate) struct Slot<T> {
    /// Bumped on every free.
    pub(crate) generation: u32,
    pub(crate) state: SlotState<T>,
}

impl<T> Slot<T> {
    pub(crate) fn free(next: Option<u32>) -> Self {
        Self {
            generation: 0,
            state: SlotState::Free { next },
        }
    }

    pub(crate) fn is_free(&self) -> bool {
        matches!(self.state, SlotState::Free { .. })
    }

    pub(crate) fn occupant(&self) -> Option<&T> {
        match &self.state {
            SlotState::Occupied(value) => Some(value),
            SlotState::Free { .. } => None,
        }
    }

    pub(crate) fn occupant_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            SlotState::Occupied(value) => Some(value),
            SlotState::Free { .. } => None,
        }
    }
}
