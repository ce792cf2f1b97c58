//! Fixed-capacity slab arena with an intrusive free list.
//!
//! The arena is the addressable memory every ixmem structure is built on:
//! a fixed number of slots carved out at construction, each either free
//! (threaded onto the free list) or occupied by a caller's value. Slots are
//! named by generation-tagged [`SlotHandle`]s instead of pointers.
//!
//! # Architecture
//!
//! ```text
//! Arena<T>
//! ├── slots: Box<[Slot<T>]>        (capacity fixed by ArenaConfig)
//! │   └── Slot { generation, state: Free { next } | Occupied(T) }
//! ├── free_head: Option<u32>       (None once exhausted)
//! └── len                          (occupied slot count)
//! ```
//!
//! Allocation pops the free-list head and freeing pushes onto it, so both
//! are O(1) with no scanning. Freeing bumps the slot's generation, which
//! turns every handle issued before the free into a detectable
//! [`ArenaError::StaleHandle`] instead of a silent alias of the next
//! occupant.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod handle;
mod slot;

// Public re-exports for the primary API surface.
pub use arena::{Arena, Iter};
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::SlotHandle;
