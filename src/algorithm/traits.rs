use num_traits::Float;
use std::fmt::Debug;

/// A visitation strategy bound to a graph
pub trait Traversal {
    /// Get the name of the traversal
    fn name(&self) -> &'static str;

    /// Visits every node reachable from `from_node`, calling `callback` once per
    /// node at its first visit. An out-of-range start visits nothing.
    fn traverse<F>(&self, from_node: usize, callback: F)
    where
        F: FnMut(usize);

    /// Collects the visitation order into a vector
    fn order(&self, from_node: usize) -> Vec<usize> {
        let mut visited = Vec::new();
        self.traverse(from_node, |node| visited.push(node));
        visited
    }
}

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Distances from source to each node, infinite when unreachable
    pub distances: Vec<W>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source node
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Returns true if `target` can be reached from the source
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distances
            .get(target)
            .map_or(false, |distance| distance.is_finite())
    }

    /// Shortest path from the source to `target`, both endpoints included
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);

            // a predecessor chain longer than the graph means a corrupted tree
            if path.len() > self.predecessors.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}
