//! Disjoint-set forest with union by rank and path compression.
//!
//! Elements live in an arena slot each; a parent link is a slot handle,
//! and a root is an element with no parent (rather than a self-loop), so
//! "root" can never be confused with "unset". Elements are never freed,
//! which keeps every handle issued by [`DisjointSetForest::make_set`]
//! valid for the forest's lifetime.

use smallvec::SmallVec;

use ixmem_arena::{Arena, SlotHandle};
use ixmem_core::{Bounded, ConfigError};

use crate::error::CollectionError;

/// Names one element of a [`DisjointSetForest`].
pub type ElementId = SlotHandle;

#[derive(Debug)]
struct Element<T> {
    value: T,
    parent: Option<ElementId>,
    /// Upper bound on the height of the subtree below this element.
    /// Only meaningful while the element is a root.
    rank: u32,
}

/// Union-find over a fixed number of elements.
///
/// [`find_set`](Self::find_set) and [`union`](Self::union) run in
/// O(α(N)) amortized time.
#[derive(Debug)]
pub struct DisjointSetForest<T> {
    arena: Arena<Element<T>>,
    sets: usize,
}

impl<T> DisjointSetForest<T> {
    /// Create an empty forest with room for `capacity` elements.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            arena: Arena::with_capacity(capacity)?,
            sets: 0,
        })
    }

    /// Add `value` as a new singleton set and return its element.
    pub fn make_set(&mut self, value: T) -> Result<ElementId, CollectionError> {
        let id = self.arena.allocate(Element {
            value,
            parent: None,
            rank: 0,
        })?;
        self.sets += 1;
        Ok(id)
    }

    /// Root of the set containing `x`.
    ///
    /// Every element visited on the way up is re-pointed directly at the
    /// root, so a repeated call on `x` takes at most one hop.
    pub fn find_set(&mut self, x: ElementId) -> Result<ElementId, CollectionError> {
        self.arena.check(x)?;
        let mut path: SmallVec<[ElementId; 16]> = SmallVec::new();
        let mut cursor = x;
        while let Some(parent) = self.parent(cursor) {
            path.push(cursor);
            cursor = parent;
        }
        let root = cursor;
        for node in path {
            if let Some(e) = self.arena.get_mut(node) {
                e.parent = Some(root);
            }
        }
        Ok(root)
    }

    /// Merge the sets containing `x` and `y` and return the new root.
    ///
    /// Either argument may be absent (`None`); the call is then a no-op
    /// returning `Ok(None)`. Merging an element with its own set returns
    /// the existing root.
    pub fn union(
        &mut self,
        x: impl Into<Option<ElementId>>,
        y: impl Into<Option<ElementId>>,
    ) -> Result<Option<ElementId>, CollectionError> {
        let (Some(x), Some(y)) = (x.into(), y.into()) else {
            return Ok(None);
        };
        let x_root = self.find_set(x)?;
        let y_root = self.find_set(y)?;
        self.link(x_root, y_root).map(Some)
    }

    /// Attach the lower-rank root beneath the higher-rank one.
    ///
    /// On a tie `y_root` becomes the parent and its rank grows by one.
    /// Both arguments must be roots.
    pub fn link(&mut self, x_root: ElementId, y_root: ElementId) -> Result<ElementId, CollectionError> {
        let x_rank = self.root_rank(x_root)?;
        let y_rank = self.root_rank(y_root)?;
        if x_root == y_root {
            return Ok(x_root);
        }
        let (child, parent) = if x_rank > y_rank {
            (y_root, x_root)
        } else {
            (x_root, y_root)
        };
        self.arena.resolve_mut(child)?.parent = Some(parent);
        if x_rank == y_rank {
            let p = self.arena.resolve_mut(parent)?;
            p.rank += 1;
            log::trace!("rank of {parent} raised to {}", p.rank);
        }
        self.sets -= 1;
        Ok(parent)
    }

    /// Whether `x` and `y` belong to the same set. Compresses both paths.
    pub fn same_set(&mut self, x: ElementId, y: ElementId) -> Result<bool, CollectionError> {
        Ok(self.find_set(x)? == self.find_set(y)?)
    }

    /// Whether `x` is the root of its set.
    pub fn is_root(&self, x: ElementId) -> bool {
        self.arena.get(x).is_some_and(|e| e.parent.is_none())
    }

    /// Rank of `x`.
    pub fn rank(&self, x: ElementId) -> Option<u32> {
        self.arena.get(x).map(|e| e.rank)
    }

    /// Number of parent hops from `x` to its root, without compressing.
    pub fn depth(&self, x: ElementId) -> Option<usize> {
        self.arena.get(x)?;
        let mut hops = 0;
        let mut cursor = x;
        while let Some(parent) = self.parent(cursor) {
            hops += 1;
            cursor = parent;
        }
        Some(hops)
    }

    /// Payload of `x`.
    pub fn value(&self, x: ElementId) -> Option<&T> {
        self.arena.get(x).map(|e| &e.value)
    }

    /// Mutable payload of `x`.
    pub fn value_mut(&mut self, x: ElementId) -> Option<&mut T> {
        self.arena.get_mut(x).map(|e| &mut e.value)
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    fn parent(&self, x: ElementId) -> Option<ElementId> {
        self.arena.get(x).and_then(|e| e.parent)
    }

    fn root_rank(&self, x: ElementId) -> Result<u32, CollectionError> {
        let e = self.arena.resolve(x)?;
        if e.parent.is_some() {
            return Err(CollectionError::NotARoot);
        }
        Ok(e.rank)
    }
}

impl<T> Bounded for DisjointSetForest<T> {
    fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    fn len(&self) -> usize {
        self.arena.len()
    }
}
