//! The ordered frontier of generated but unexpanded nodes.
//!
//! `BinaryHeap` is a max-heap, so entries are ordered by `Reverse((priority, sequence))`
//! to pop the lowest `f = g + h` first, and among equal priorities the entry pushed
//! first. Nodes themselves are never compared.
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::node::StateNode;

/// A node together with its ordering key.
#[derive(Debug)]
pub struct FrontierEntry {
    /// `g + h` of `node` at insertion time.
    pub priority: u32,
    /// Insertion counter; strictly increasing within one frontier.
    pub sequence: u64,
    pub node: StateNode,
}

impl FrontierEntry {
    fn key(&self) -> Reverse<(u32, u64)> {
        Reverse((self.priority, self.sequence))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-priority queue of [`StateNode`]s with FIFO tie-breaking.
///
/// The frontier does not deduplicate: the same board may be pushed several times
/// with different costs, and every copy stays queued until popped.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `node` at priority `node.f()`. O(log n).
    pub fn push(&mut self, node: StateNode) {
        let entry = FrontierEntry {
            priority: node.f(),
            sequence: self.next_sequence,
            node,
        };
        self.next_sequence += 1;
        self.heap.push(entry);
    }

    /// Removes and returns the node with the lowest priority, or `None` when empty.
    /// O(log n).
    pub fn pop(&mut self) -> Option<StateNode> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
