//! Classic linked structures expressed over index arithmetic.
//!
//! Every "pointer" in these structures is an index into storage the
//! structure owns exclusively: a slot handle into an [`ixmem_arena::Arena`]
//! for the lists and the disjoint-set forest, or a plain cursor into a
//! fixed buffer for the stacks and queues. No structure shares mutable
//! storage with another instance, and none resizes after construction.
//!
//! | Structure | Storage | Core operations |
//! |-----------|---------|-----------------|
//! | [`SinglyList`] | arena, `next` links | push_front, delete by successor copy |
//! | [`DoublyList`] | arena, `prev`/`next` links | push/pop both ends, O(1) delete |
//! | [`TwoEndedStack`] | one buffer, two cursors | push/pop per [`Side`] |
//! | [`CircularQueue`] | ring, one sacrificed slot | enqueue/dequeue |
//! | [`StackQueue`] | a [`TwoEndedStack`] | enqueue/dequeue, amortized O(1) |
//! | [`DisjointSetForest`] | arena, parent links | make_set, find_set, union |
//! | [`DenseSparseDictionary`] | dense + sparse arrays | insert, search, delete |
//!
//! # Concurrency
//!
//! All operations take `&self` or `&mut self` and never block. Share an
//! instance across threads by wrapping the whole structure in one mutex.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense_sparse;
pub mod disjoint;
pub mod error;
pub mod list;
pub mod ring;
pub mod stack;
pub mod stack_queue;

pub use dense_sparse::DenseSparseDictionary;
pub use disjoint::{DisjointSetForest, ElementId};
pub use error::CollectionError;
pub use list::{DoublyList, SinglyList};
pub use ring::CircularQueue;
pub use stack::{Side, TwoEndedStack};
pub use stack_queue::StackQueue;
