use crate::graph::traits::Graph;
use crate::{Error, Result};

/// An unweighted directed graph implementation using adjacency lists
///
/// Each node keeps its destinations in insertion order; that order is the
/// tie-break every traversal uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// Outgoing edges for each node: node -> [destination]
    adjacency: Vec<Vec<usize>>,
}

impl DirectedGraph {
    /// Creates a graph with `nodes_count` nodes and no edges
    pub fn new(nodes_count: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); nodes_count],
        }
    }

    /// Builds a graph from an edge list, failing on the first out-of-range endpoint.
    /// Duplicate pairs are ignored.
    pub fn from_edges(nodes_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = DirectedGraph::new(nodes_count);
        for &(source, destination) in edges {
            if source >= nodes_count {
                return Err(Error::InvalidNode(source));
            }
            if destination >= nodes_count {
                return Err(Error::InvalidNode(destination));
            }
            graph.add_edge(source, destination);
        }
        Ok(graph)
    }

    /// Adds the edge `source -> destination`.
    ///
    /// Returns false if either index is out of range or the edge already exists.
    pub fn add_edge(&mut self, source: usize, destination: usize) -> bool {
        if !self.has_node(source) || !self.has_node(destination) {
            return false;
        }

        let outgoing = &mut self.adjacency[source];
        if outgoing.contains(&destination) {
            return false;
        }
        outgoing.push(destination);
        true
    }

    /// Removes the edge `source -> destination`, keeping the order of the remaining edges.
    ///
    /// Returns false if the edge does not exist or an index is out of range.
    pub fn remove_edge(&mut self, source: usize, destination: usize) -> bool {
        let Some(outgoing) = self.adjacency.get_mut(source) else {
            return false;
        };

        match outgoing.iter().position(|&target| target == destination) {
            Some(index) => {
                outgoing.remove(index);
                true
            }
            None => false,
        }
    }

    /// Destinations of `source` in insertion order; empty when `source` is out of range
    pub fn edges(&self, source: usize) -> &[usize] {
        self.adjacency
            .get(source)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Graph for DirectedGraph {
    fn nodes_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.edges(node).iter().copied())
    }

    fn has_edge(&self, source: usize, destination: usize) -> bool {
        self.edges(source).contains(&destination)
    }
}
