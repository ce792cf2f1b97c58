//! O(1) dictionary over a bounded key universe using a dense/sparse pair.
//!
//! `dense` holds the present keys (with their values) packed at the
//! front; `sparse[k]` records where key `k` sits in `dense`. A sparse
//! entry is trusted only when it points inside `dense` *and* the key
//! stored there is `k`:
//!
//! ```text
//!   sparse: k=0 k=1 k=2 k=3 k=4        dense: pos 0   pos 1
//!          ┌───┬───┬───┬───┬───┐            ┌─────┬─────┐
//!          │ 1 │ 0 │ 0 │ 1 │ 0 │            │ k=1 │ k=3 │
//!          └───┴───┴───┴───┴───┘            └─────┴─────┘
//!   k=0 → pos 1 holds k=3: absent (stale entry)
//!   k=3 → pos 1 holds k=3: present
//! ```
//!
//! Delete moves the last dense entry into the hole and repairs that
//! key's sparse entry, so nothing is shifted. Sparse entries are never
//! cleared; the double check makes that unnecessary.

use ixmem_core::{alloc_buffer, alloc_vec, check_capacity, Bounded, ConfigError};

use crate::error::CollectionError;

/// Dictionary from keys in `0..universe` to values of type `V`.
///
/// With `V = ()` it is a plain sparse set; see
/// [`insert_key`](DenseSparseDictionary::insert_key).
#[derive(Debug)]
pub struct DenseSparseDictionary<V = ()> {
    dense: Vec<(usize, V)>,
    sparse: Box<[usize]>,
}

impl<V> DenseSparseDictionary<V> {
    /// Create an empty dictionary over keys `0..universe`.
    pub fn new(universe: usize) -> Result<Self, ConfigError> {
        check_capacity(universe, 1, usize::MAX)?;
        Ok(Self {
            dense: alloc_vec(universe)?,
            sparse: alloc_buffer(universe, |_| 0)?,
        })
    }

    /// Dense position of `key`, or `None` if it is absent.
    pub fn search(&self, key: usize) -> Option<usize> {
        let pos = *self.sparse.get(key)?;
        match self.dense.get(pos) {
            Some((k, _)) if *k == key => Some(pos),
            _ => None,
        }
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: usize) -> bool {
        self.search(key).is_some()
    }

    /// Add `key` with `value` at the end of the dense array and return its position.
    ///
    /// # Errors
    ///
    /// [`CollectionError::DuplicateKey`] if `key` is already present and
    /// [`CollectionError::KeyOutOfUniverse`] if it is outside the universe.
    /// The dictionary is unchanged in both cases.
    pub fn insert(&mut self, key: usize, value: V) -> Result<usize, CollectionError> {
        self.check_key(key)?;
        if self.contains(key) {
            log::debug!("rejected duplicate insert of key {key}");
            return Err(CollectionError::DuplicateKey { key });
        }
        let pos = self.dense.len();
        self.dense.push((key, value));
        self.sparse[key] = pos;
        Ok(pos)
    }

    /// Remove `key` and return its value. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::MissingKey`] if `key` is absent and
    /// [`CollectionError::KeyOutOfUniverse`] if it is outside the universe.
    pub fn delete(&mut self, key: usize) -> Result<V, CollectionError> {
        self.check_key(key)?;
        let Some(pos) = self.search(key) else {
            log::debug!("rejected delete of absent key {key}");
            return Err(CollectionError::MissingKey { key });
        };
        let (_, value) = self.dense.swap_remove(pos);
        if let Some((moved, _)) = self.dense.get(pos) {
            self.sparse[*moved] = pos;
        }
        Ok(value)
    }

    /// Value stored under `key`.
    pub fn get(&self, key: usize) -> Option<&V> {
        let pos = self.search(key)?;
        Some(&self.dense[pos].1)
    }

    /// Mutable value stored under `key`.
    pub fn get_mut(&mut self, key: usize) -> Option<&mut V> {
        let pos = self.search(key)?;
        Some(&mut self.dense[pos].1)
    }

    /// Present keys in dense order.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.dense.iter().map(|(k, _)| *k)
    }

    /// Present entries in dense order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &V)> + '_ {
        self.dense.iter().map(|(k, v)| (*k, v))
    }

    /// Remove every key. Sparse entries are left stale.
    pub fn clear(&mut self) {
        self.dense.clear();
    }

    /// Size of the key universe.
    pub fn universe(&self) -> usize {
        self.sparse.len()
    }

    fn check_key(&self, key: usize) -> Result<(), CollectionError> {
        if key >= self.sparse.len() {
            return Err(CollectionError::KeyOutOfUniverse {
                key,
                universe: self.sparse.len(),
            });
        }
        Ok(())
    }
}

impl DenseSparseDictionary<()> {
    /// Add `key` to a set-like dictionary.
    pub fn insert_key(&mut self, key: usize) -> Result<usize, CollectionError> {
        self.insert(key, ())
    }
}

impl<V> Bounded for DenseSparseDictionary<V> {
    fn capacity(&self) -> usize {
        self.sparse.len()
    }

    fn len(&self) -> usize {
        self.dense.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_search() {
        let mut d = DenseSparseDictionary::new(10).unwrap();
        assert_eq!(d.insert_key(7), Ok(0));
        assert_eq!(d.insert_key(2), Ok(1));
        assert_eq!(d.search(7), Some(0));
        assert_eq!(d.search(2), Some(1));
        assert_eq!(d.search(3), None);
    }

    #[test]
    fn delete_swaps_last_into_hole() {
        let mut d = DenseSparseDictionary::new(10).unwrap();
        for k in [4, 5, 6] {
            d.insert(k, k * 10).unwrap();
        }
        assert_eq!(d.delete(4), Ok(40));
        assert_eq!(d.keys().collect::<Vec<_>>(), vec![6, 5]);
        assert_eq!(d.search(6), Some(0));
        assert_eq!(d.get(6), Some(&60));
        assert!(!d.contains(4));
    }

    #[test]
    fn stale_sparse_entries_do_not_alias() {
        let mut d = DenseSparseDictionary::new(8).unwrap();
        d.insert_key(3).unwrap();
        d.delete(3).unwrap();
        // sparse[3] and every never-touched sparse[k] still read 0.
        for k in 0..8 {
            assert_eq!(d.search(k), None);
        }
        d.insert_key(5).unwrap();
        assert_eq!(d.search(3), None);
        assert_eq!(d.search(0), None);
        assert_eq!(d.search(5), Some(0));
    }

    #[test]
    fn duplicate_insert_rejected() {
        let mut d = DenseSparseDictionary::new(4).unwrap();
        d.insert(1, 'a').unwrap();
        assert_eq!(
            d.insert(1, 'b'),
            Err(CollectionError::DuplicateKey { key: 1 })
        );
        assert_eq!(d.get(1), Some(&'a'));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn delete_absent_rejected() {
        let mut d: DenseSparseDictionary = DenseSparseDictionary::new(4).unwrap();
        assert_eq!(d.delete(2), Err(CollectionError::MissingKey { key: 2 }));
    }

    #[test]
    fn keys_outside_universe_rejected() {
        let mut d: DenseSparseDictionary = DenseSparseDictionary::new(4).unwrap();
        assert_eq!(
            d.insert_key(4),
            Err(CollectionError::KeyOutOfUniverse {
                key: 4,
                universe: 4
            })
        );
        assert_eq!(d.search(100), None);
        assert!(matches!(
            d.delete(4),
            Err(CollectionError::KeyOutOfUniverse { .. })
        ));
    }

    #[test]
    fn unaddressable_universe_rejected() {
        assert!(matches!(
            DenseSparseDictionary::<()>::new(usize::MAX),
            Err(ConfigError::CapacityTooLarge { .. })
        ));
    }

    #[test]
    fn get_mut_and_clear() {
        let mut d = DenseSparseDictionary::new(4).unwrap();
        d.insert(0, 1).unwrap();
        *d.get_mut(0).unwrap() += 1;
        assert_eq!(d.iter().collect::<Vec<_>>(), vec![(0, &2)]);
        d.clear();
        assert!(d.is_empty());
        assert_eq!(d.search(0), None);
        assert_eq!(d.universe(), 4);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use ixmem_test_utils::ops::dict_ops;
        use ixmem_test_utils::{DictOp, SwapRemoveModel};
        use proptest::prelude::*;

        const UNIVERSE: usize = 16;

        proptest! {
            #[test]
            fn matches_swap_remove_model(ops in dict_ops(UNIVERSE, 300)) {
                let mut d = DenseSparseDictionary::new(UNIVERSE).unwrap();
                let mut model = SwapRemoveModel::new();
                for op in ops {
                    match op {
                        DictOp::Insert(k) => {
                            let got = d.insert(k, k + 1);
                            if k >= UNIVERSE {
                                prop_assert!(got.is_err());
                            } else {
                                prop_assert_eq!(got.is_ok(), model.insert(k, k + 1));
                            }
                        }
                        DictOp::Delete(k) => {
                            prop_assert_eq!(d.delete(k).ok(), model.remove(k));
                        }
                        DictOp::Search(k) => {
                            prop_assert_eq!(d.search(k), model.position(k));
                        }
                    }
                    prop_assert_eq!(d.keys().collect::<Vec<_>>(), model.keys());
                    prop_assert_eq!(d.len(), model.len());
                    prop_assert_eq!(d.is_empty(), model.is_empty());
                    for k in d.keys() {
                        prop_assert_eq!(d.search(k).map(|p| d.dense[p].0), Some(k));
                    }
                }
            }
        }
    }
}
