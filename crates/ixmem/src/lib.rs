//! ixmem: pointer-free manual memory management.
//!
//! A fixed-size slab arena with an intrusive free list stands in for the
//! heap, and classic linked structures are built on top of it with slot
//! handles and buffer cursors in place of pointers. This is the facade
//! crate re-exporting the public API of the ixmem sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use ixmem::prelude::*;
//!
//! // A five-slot arena.
//! let mut arena: Arena<&str> = Arena::with_capacity(5).unwrap();
//! let a = arena.allocate("a").unwrap();
//! assert_eq!(arena.free(a).unwrap(), "a");
//! // The freed handle is stale; the slot itself is reused.
//! assert!(arena.get(a).is_none());
//! let b = arena.allocate("b").unwrap();
//! assert_eq!(a.index(), b.index());
//!
//! // Union-find over arena slots.
//! let mut forest = DisjointSetForest::new(3).unwrap();
//! let x = forest.make_set('x').unwrap();
//! let y = forest.make_set('y').unwrap();
//! forest.union(x, y).unwrap();
//! assert!(forest.same_set(x, y).unwrap());
//!
//! // A ring of four slots holds three elements.
//! let mut queue = CircularQueue::new(4).unwrap();
//! for i in 0..3 {
//!     queue.enqueue(i).unwrap();
//! }
//! assert_eq!(queue.enqueue(3), Err(CollectionError::Overflow { capacity: 3 }));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ixmem-core` | `ConfigError`, the `Bounded` trait |
//! | [`arena`] | `ixmem-arena` | `Arena`, `SlotHandle`, `ArenaError` |
//! | [`collections`] | `ixmem-collections` | lists, stacks, queues, union-find, sparse sets |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Configuration errors and the capacity trait (`ixmem-core`).
pub use ixmem_core as types;

/// The slab arena and its handles (`ixmem-arena`).
pub use ixmem_arena as arena;

/// Structures built on index arithmetic (`ixmem-collections`).
pub use ixmem_collections as collections;

/// Common imports for typical ixmem usage.
///
/// ```rust
/// use ixmem::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use ixmem_core::{Bounded, ConfigError};

    // Arena
    pub use ixmem_arena::{Arena, ArenaConfig, ArenaError, SlotHandle};

    // Collections
    pub use ixmem_collections::{
        CircularQueue, CollectionError, DenseSparseDictionary, DisjointSetForest, DoublyList,
        ElementId, Side, SinglyList, StackQueue, TwoEndedStack,
    };
}
