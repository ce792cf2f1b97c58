//! Linked lists whose links are arena slot handles.
//!
//! Each node occupies one arena slot. While a slot is free its link field
//! threads the arena's free list; once allocated to a list the node's own
//! `next` (and `prev`) links encode sequence order instead. The two uses
//! never overlap on the same slot.
//!
//! - [`SinglyList`]: `next` links only. Deletion borrows the successor's
//!   payload, so the tail cannot be deleted through it.
//! - [`DoublyList`]: `prev` and `next` links. Any node is unlinked in O(1).

mod doubly;
mod singly;

pub use doubly::{DoublyList, Iter as DoublyIter};
pub use singly::{Iter as SinglyIter, SinglyList};
