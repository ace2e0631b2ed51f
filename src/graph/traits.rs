use std::fmt::Debug;

/// Read-only view of a directed graph whose nodes are indexed `0..nodes_count`
///
/// Traversal and ordering algorithms only need adjacency, so they are written
/// against this trait and accept both [`DirectedGraph`](super::DirectedGraph)
/// and [`WeightedGraph`](super::WeightedGraph).
pub trait Graph: Debug {
    /// Returns the number of nodes in the graph
    fn nodes_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the destinations of `node`, in insertion order.
    /// Out-of-range nodes yield nothing.
    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: usize) -> bool {
        node < self.nodes_count()
    }

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, source: usize, destination: usize) -> bool {
        self.neighbors(source).any(|target| target == destination)
    }
}
