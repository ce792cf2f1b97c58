//! Operation-sequence strategies for property tests.
//!
//! Each enum mirrors the public operations of one structure. Operands that
//! name existing elements are drawn as raw `usize` picks and reduced modulo
//! the live set by the test, so every generated sequence stays meaningful
//! however the structure evolves.

use proptest::prelude::*;

/// One step against a slab arena.
#[derive(Clone, Debug)]
pub enum ArenaOp {
    Allocate(u32),
    /// Free the live handle at `pick % live.len()`.
    Free(usize),
    /// Replay a handle that was already freed.
    FreeStale(usize),
}

/// One step against a pair of stacks sharing a buffer.
#[derive(Clone, Debug)]
pub enum StackOp {
    /// `true` targets the left stack.
    Push(bool, i32),
    Pop(bool),
}

/// One step against a FIFO queue.
#[derive(Clone, Debug)]
pub enum QueueOp {
    Enqueue(i32),
    Dequeue,
}

/// One step against a dense/sparse dictionary over a bounded universe.
#[derive(Clone, Debug)]
pub enum DictOp {
    Insert(usize),
    Delete(usize),
    Search(usize),
}

/// One step against a disjoint-set forest of a fixed element count.
#[derive(Clone, Debug)]
pub enum UnionOp {
    Union(usize, usize),
    Find(usize),
}

pub fn arena_ops(max_len: usize) -> impl Strategy<Value = Vec<ArenaOp>> {
    let op = prop_oneof![
        3 => any::<u32>().prop_map(ArenaOp::Allocate),
        2 => any::<usize>().prop_map(ArenaOp::Free),
        1 => any::<usize>().prop_map(ArenaOp::FreeStale),
    ];
    proptest::collection::vec(op, 0..max_len)
}

pub fn stack_ops(max_len: usize) -> impl Strategy<Value = Vec<StackOp>> {
    let op = prop_oneof![
        3 => (any::<bool>(), any::<i32>()).prop_map(|(left, v)| StackOp::Push(left, v)),
        2 => any::<bool>().prop_map(StackOp::Pop),
    ];
    proptest::collection::vec(op, 0..max_len)
}

pub fn queue_ops(max_len: usize) -> impl Strategy<Value = Vec<QueueOp>> {
    let op = prop_oneof![
        3 => any::<i32>().prop_map(QueueOp::Enqueue),
        2 => Just(QueueOp::Dequeue),
    ];
    proptest::collection::vec(op, 0..max_len)
}

/// Keys are drawn from `0..universe + 2` so out-of-universe keys occur.
pub fn dict_ops(universe: usize, max_len: usize) -> impl Strategy<Value = Vec<DictOp>> {
    let key = 0..universe + 2;
    let op = prop_oneof![
        3 => key.clone().prop_map(DictOp::Insert),
        2 => key.clone().prop_map(DictOp::Delete),
        2 => key.prop_map(DictOp::Search),
    ];
    proptest::collection::vec(op, 0..max_len)
}

pub fn union_ops(elements: usize, max_len: usize) -> impl Strategy<Value = Vec<UnionOp>> {
    let op = prop_oneof![
        2 => (0..elements, 0..elements).prop_map(|(x, y)| UnionOp::Union(x, y)),
        1 => (0..elements).prop_map(UnionOp::Find),
    ];
    proptest::collection::vec(op, 0..max_len)
}
