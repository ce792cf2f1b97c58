//! Integration tests: the documented behavioural properties of each
//! structure, exercised only through the public API.

use std::sync::{Arc, Mutex};
use std::thread;

use ixmem_core::Bounded;
use ixmem_collections::{
    CircularQueue, CollectionError, DenseSparseDictionary, DisjointSetForest, DoublyList, ElementId,
    Side, SinglyList, StackQueue, TwoEndedStack,
};
use ixmem_test_utils::init_logging;

#[test]
fn singly_delete_preserves_relative_order() {
    init_logging();
    let mut list = SinglyList::new(10).unwrap();
    let handles: Vec<_> = (0..10).map(|i| list.push_front(i).unwrap()).collect();
    // Delete every odd value that is not the tail (value 0 is the tail).
    for i in [9, 7, 5, 3, 1] {
        assert_eq!(list.delete(handles[i]).unwrap(), i);
    }
    let left: Vec<_> = list.iter().map(|(_, v)| *v).collect();
    assert_eq!(left, vec![8, 6, 4, 2, 0]);
    let tail = list.find(|&v| v == 0).unwrap();
    assert!(matches!(
        list.delete(tail),
        Err(CollectionError::InvalidOperation { .. })
    ));
    assert_eq!(list.len(), 5);
}

#[test]
fn doubly_list_deletes_tail_directly() {
    init_logging();
    let mut list = DoublyList::new(3).unwrap();
    let a = list.push_back("a").unwrap();
    let b = list.push_back("b").unwrap();
    assert_eq!(list.delete(b), Ok("b"));
    assert_eq!(list.tail(), Some(a));
}

#[test]
fn two_ended_stack_stays_disjoint_and_lifo() {
    init_logging();
    let mut s = TwoEndedStack::new(5).unwrap();
    s.push(Side::Left, 1).unwrap();
    s.push(Side::Right, -1).unwrap();
    s.push(Side::Left, 2).unwrap();
    s.push(Side::Right, -2).unwrap();
    s.push(Side::Left, 3).unwrap();
    assert_eq!(
        s.push(Side::Right, -3),
        Err(CollectionError::Overflow { capacity: 5 })
    );
    assert_eq!(s.len_of(Side::Left) + s.len_of(Side::Right), s.capacity());
    assert_eq!(s.pop(Side::Left), Ok(3));
    assert_eq!(s.pop(Side::Right), Ok(-2));
    assert_eq!(s.pop(Side::Right), Ok(-1));
    assert_eq!(s.pop(Side::Right), Err(CollectionError::Underflow));
    assert_eq!(s.pop(Side::Left), Ok(2));
}

#[test]
fn circular_queue_fifo_overflow_underflow() {
    init_logging();
    let mut q = CircularQueue::new(5).unwrap();
    q.enqueue("a").unwrap();
    q.enqueue("b").unwrap();
    assert_eq!(q.dequeue(), Ok("a"));
    assert_eq!(q.dequeue(), Ok("b"));
    assert_eq!(q.dequeue(), Err(CollectionError::Underflow));
    for s in ["c", "d", "e", "f"] {
        q.enqueue(s).unwrap();
    }
    assert_eq!(q.enqueue("g"), Err(CollectionError::Overflow { capacity: 4 }));
    let drained: Vec<_> = std::iter::from_fn(|| q.dequeue().ok()).collect();
    assert_eq!(drained, vec!["c", "d", "e", "f"]);
}

#[test]
fn stack_queue_agrees_with_circular_queue() {
    init_logging();
    let mut ring = CircularQueue::with_capacity(6).unwrap();
    let mut stacks = StackQueue::new(6).unwrap();
    for round in 0..20 {
        for i in 0..(round % 4) {
            let v = round * 10 + i;
            assert_eq!(ring.enqueue(v).is_ok(), stacks.enqueue(v).is_ok());
        }
        for _ in 0..(round % 3) {
            assert_eq!(ring.dequeue().ok(), stacks.dequeue().ok());
        }
    }
    assert_eq!(ring.len(), stacks.len());
}

#[test]
fn union_find_scenario() {
    init_logging();
    let mut f = DisjointSetForest::new(10).unwrap();
    let e: Vec<_> = (1..=10).map(|v| f.make_set(v).unwrap()).collect();
    f.union(e[0], e[1]).unwrap();
    f.union(e[1], e[2]).unwrap();
    assert_eq!(f.find_set(e[0]).unwrap(), f.find_set(e[2]).unwrap());
    for x in 3..10 {
        assert_ne!(f.find_set(e[0]).unwrap(), f.find_set(e[x]).unwrap());
    }
    assert_eq!(f.union(None::<ElementId>, e[4]).unwrap(), None);
    assert_eq!(f.set_count(), 8);
}

#[test]
fn dictionary_round_trip_and_no_stale_aliasing() {
    init_logging();
    let mut d = DenseSparseDictionary::new(32).unwrap();
    for k in 0..32 {
        d.insert_key(k).unwrap();
        assert!(d.contains(k));
        d.delete(k).unwrap();
        assert!(!d.contains(k));
    }
    d.insert_key(11).unwrap();
    d.delete(11).unwrap();
    // The last remaining key is gone; no other key may appear present.
    for k in 0..32 {
        assert_eq!(d.search(k), None);
    }
}

#[test]
fn one_mutex_per_instance_is_enough_for_sharing() {
    init_logging();
    let queue = Arc::new(Mutex::new(CircularQueue::with_capacity(1000).unwrap()));
    let producers: Vec<_> = (0..4)
        .map(|t| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..100 {
                    queue.lock().unwrap().enqueue(t * 100 + i).unwrap();
                }
            })
        })
        .collect();
    for p in producers {
        p.join().unwrap();
    }
    let mut q = queue.lock().unwrap();
    assert_eq!(q.len(), 400);
    let mut seen: Vec<_> = std::iter::from_fn(|| q.dequeue().ok()).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..400).collect::<Vec<_>>());
}
