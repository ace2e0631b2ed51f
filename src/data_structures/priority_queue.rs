use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue over `(node, priority)` pairs backed by `BinaryHeap`
///
/// Equal priorities pop in ascending node order, which keeps Dijkstra and
/// topological ordering deterministic.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, node: V, priority: P) {
        self.heap.push(Reverse((priority, node)));
    }

    /// Removes the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, node))| (node, priority))
    }

    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, node))| (*node, *priority))
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
