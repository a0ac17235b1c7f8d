use std::collections::{BinaryHeap, VecDeque};
use std::sync::Arc;

use crate::search::node::SearchNode;

/// Ordered access to the states awaiting expansion.
///
/// The three implementations differ only in pop order: LIFO for depth-first,
/// FIFO for breadth-first, and lowest `cost + heuristic` first for A*.
/// Frontiers are single-threaded and own their nodes until popped.
pub trait Frontier<T> {
    fn is_empty(&self) -> bool;

    fn push(&mut self, node: Arc<SearchNode<T>>);

    /// Removes and returns one node, or `None` if the frontier is empty.
    fn pop(&mut self) -> Option<Arc<SearchNode<T>>>;
}

/// A LIFO frontier backing depth-first search.
#[derive(Debug, Default)]
pub struct StackFrontier<T> {
    items: Vec<Arc<SearchNode<T>>>,
}

impl<T> StackFrontier<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, node: Arc<SearchNode<T>>) {
        self.items.push(node);
    }

    fn pop(&mut self) -> Option<Arc<SearchNode<T>>> {
        self.items.pop()
    }
}

/// A FIFO frontier backing breadth-first search.
#[derive(Debug, Default)]
pub struct QueueFrontier<T> {
    items: VecDeque<Arc<SearchNode<T>>>,
}

impl<T> QueueFrontier<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, node: Arc<SearchNode<T>>) {
        self.items.push_back(node);
    }

    fn pop(&mut self) -> Option<Arc<SearchNode<T>>> {
        self.items.pop_front()
    }
}

/// Heap entry ordering nodes by *ascending* priority. `BinaryHeap` is a
/// max-heap, so the comparison is reversed here rather than at every call
/// site. `f64::total_cmp` gives the total order `Ord` requires.
#[derive(Debug)]
struct HeapEntry<T>(Arc<SearchNode<T>>);

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.priority() == other.0.priority()
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.0.priority().total_cmp(&self.0.priority())
    }
}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-heap frontier backing A*, ordered by `cost + heuristic`.
#[derive(Debug)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<HeapEntry<T>>,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for PriorityFrontier<T> {
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn push(&mut self, node: Arc<SearchNode<T>>) {
        self.heap.push(HeapEntry(node));
    }

    fn pop(&mut self) -> Option<Arc<SearchNode<T>>> {
        self.heap.pop().map(|entry| entry.0)
    }
}
