//! Singly linked list with O(1) predecessor-free deletion.

use std::mem;

use ixmem_arena::{Arena, SlotHandle};
use ixmem_core::{Bounded, ConfigError};

use crate::error::CollectionError;

#[derive(Debug)]
struct SinglyNode<T> {
    value: T,
    next: Option<SlotHandle>,
}

/// A singly linked list stored in a private arena.
///
/// Nodes are named by [`SlotHandle`]s returned from
/// [`push_front`](Self::push_front). [`delete`](Self::delete) runs in O(1)
/// without a predecessor pointer by copying the successor's payload into
/// the doomed node and freeing the successor's slot instead.
#[derive(Debug)]
pub struct SinglyList<T> {
    arena: Arena<SinglyNode<T>>,
    head: Option<SlotHandle>,
}

impl<T> SinglyList<T> {
    /// Create an empty list able to hold `capacity` nodes.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            arena: Arena::with_capacity(capacity)?,
            head: None,
        })
    }

    /// Link `value` in as the new head. O(1).
    pub fn push_front(&mut self, value: T) -> Result<SlotHandle, CollectionError> {
        let node = SinglyNode {
            value,
            next: self.head,
        };
        let handle = self.arena.allocate(node)?;
        self.head = Some(handle);
        Ok(handle)
    }

    /// Unlink and return the head's payload.
    pub fn pop_front(&mut self) -> Result<T, CollectionError> {
        let head = self.head.ok_or(CollectionError::Underflow)?;
        let node = self.arena.free(head)?;
        self.head = node.next;
        Ok(node.value)
    }

    /// Remove the element stored at `node` and return it. O(1).
    ///
    /// The successor's payload and link are moved into `node`'s slot and
    /// the successor's slot is freed. Afterwards `node` names the element
    /// that used to follow it, and the successor's handle is stale.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidOperation`] if `node` is the tail, which
    /// has no successor to borrow from; the list is left unchanged. Use
    /// [`DoublyList`](crate::DoublyList) when tail deletion is needed.
    pub fn delete(&mut self, node: SlotHandle) -> Result<T, CollectionError> {
        let successor = self.arena.resolve(node)?.next.ok_or(
            CollectionError::InvalidOperation {
                reason: "tail of a singly linked list has no successor to copy from",
            },
        )?;
        let SinglyNode {
            value: borrowed,
            next: after,
        } = self.arena.free(successor)?;
        let target = self.arena.resolve_mut(node)?;
        target.next = after;
        Ok(mem::replace(&mut target.value, borrowed))
    }

    /// First node whose payload satisfies `pred`, scanning from the head.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<SlotHandle> {
        self.iter().find(|(_, v)| pred(v)).map(|(h, _)| h)
    }

    /// Handle of the head node.
    pub fn head(&self) -> Option<SlotHandle> {
        self.head
    }

    /// Handle of the node after `node`.
    pub fn next(&self, node: SlotHandle) -> Option<SlotHandle> {
        self.arena.get(node)?.next
    }

    /// Payload stored at `node`.
    pub fn get(&self, node: SlotHandle) -> Option<&T> {
        self.arena.get(node).map(|n| &n.value)
    }

    /// Mutable payload stored at `node`.
    pub fn get_mut(&mut self, node: SlotHandle) -> Option<&mut T> {
        self.arena.get_mut(node).map(|n| &mut n.value)
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            cursor: self.head,
        }
    }
}

impl<T> Bounded for SinglyList<T> {
    fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    fn len(&self) -> usize {
        self.arena.len()
    }
}

/// Head-to-tail iterator over a [`SinglyList`], yielding each node's
/// handle with its payload.
pub struct Iter<'a, T> {
    arena: &'a Arena<SinglyNode<T>>,
    cursor: Option<SlotHandle>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (SlotHandle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        let node = self.arena.get(handle)?;
        self.cursor = node.next;
        Some((handle, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ixmem_arena::ArenaError;

    fn values<T: Clone>(list: &SinglyList<T>) -> Vec<T> {
        list.iter().map(|(_, v)| v.clone()).collect()
    }

    fn built(n: i32) -> (SinglyList<i32>, Vec<SlotHandle>) {
        let mut list = SinglyList::new(n as usize).unwrap();
        let handles = (0..n).map(|i| list.push_front(i).unwrap()).collect();
        (list, handles)
    }

    #[test]
    fn push_front_prepends() {
        let (list, _) = built(4);
        assert_eq!(values(&list), vec![3, 2, 1, 0]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn push_beyond_capacity_is_out_of_space() {
        let (mut list, _) = built(2);
        assert_eq!(
            list.push_front(9),
            Err(CollectionError::Arena(ArenaError::OutOfSpace { capacity: 2 }))
        );
        assert_eq!(values(&list), vec![1, 0]);
    }

    #[test]
    fn delete_middle_removes_one_and_keeps_order() {
        let (mut list, handles) = built(5);
        // List is 4 3 2 1 0; delete the node holding 2.
        assert_eq!(list.delete(handles[2]), Ok(2));
        assert_eq!(values(&list), vec![4, 3, 1, 0]);
        assert_eq!(list.len(), 4);
        // The handle now carries the successor's value.
        assert_eq!(list.get(handles[2]), Some(&1));
        assert_eq!(list.get(handles[1]), None);
    }

    #[test]
    fn delete_head() {
        let (mut list, handles) = built(3);
        assert_eq!(list.delete(handles[2]), Ok(2));
        assert_eq!(values(&list), vec![1, 0]);
        assert_eq!(list.head(), Some(handles[2]));
    }

    #[test]
    fn delete_tail_is_invalid_operation() {
        let (mut list, handles) = built(3);
        let err = list.delete(handles[0]).unwrap_err();
        assert!(matches!(err, CollectionError::InvalidOperation { .. }));
        assert_eq!(values(&list), vec![2, 1, 0]);
    }

    #[test]
    fn delete_sole_node_is_invalid_operation() {
        let (mut list, handles) = built(1);
        assert!(matches!(
            list.delete(handles[0]),
            Err(CollectionError::InvalidOperation { .. })
        ));
        assert_eq!(list.pop_front(), Ok(0));
    }

    #[test]
    fn delete_with_stale_handle_is_rejected() {
        let (mut list, handles) = built(3);
        list.delete(handles[2]).unwrap();
        // handles[1] was freed by the delete above.
        assert!(matches!(
            list.delete(handles[1]),
            Err(CollectionError::Arena(ArenaError::AlreadyFree { .. }))
        ));
    }

    #[test]
    fn pop_front_until_underflow() {
        let (mut list, _) = built(2);
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_front(), Ok(0));
        assert_eq!(list.pop_front(), Err(CollectionError::Underflow));
        assert!(list.is_empty());
    }

    #[test]
    fn freed_slots_are_reused() {
        let (mut list, _) = built(3);
        list.pop_front().unwrap();
        assert!(list.push_front(10).is_ok());
        assert_eq!(values(&list), vec![10, 1, 0]);
    }

    #[test]
    fn find_and_traverse() {
        let (list, handles) = built(4);
        assert_eq!(list.find(|&v| v == 1), Some(handles[1]));
        assert_eq!(list.find(|&v| v == 9), None);
        assert_eq!(list.next(handles[1]), Some(handles[0]));
        assert_eq!(list.next(handles[0]), None);
    }

    #[test]
    fn get_mut_updates_payload() {
        let (mut list, handles) = built(2);
        *list.get_mut(handles[0]).unwrap() = 100;
        assert_eq!(values(&list), vec![1, 100]);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn delete_non_tail_matches_vec_remove(
                n in 2i32..40,
                picks in proptest::collection::vec(any::<usize>(), 1..20),
            ) {
                let (mut list, _) = built(n);
                let mut model: Vec<i32> = (0..n).rev().collect();
                for pick in picks {
                    if model.len() < 2 {
                        break;
                    }
                    // Any position except the tail.
                    let pos = pick % (model.len() - 1);
                    let handle = list.iter().nth(pos).map(|(h, _)| h).unwrap();
                    let removed = list.delete(handle).unwrap();
                    prop_assert_eq!(removed, model.remove(pos));
                    prop_assert_eq!(values(&list), model.clone());
                }
            }
        }
    }
}
