use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// A directed graph with a non-negative cost on every edge
///
/// At most one edge is stored per ordered `(source, destination)` pair.
/// Re-adding an existing pair is rejected; use [`WeightedGraph::update_cost`]
/// to overwrite a cost.
#[derive(Debug, Clone)]
pub struct WeightedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Outgoing edges for each node: node -> [(destination, cost)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> WeightedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a graph with `nodes_count` nodes and no edges
    pub fn new(nodes_count: usize) -> Self {
        WeightedGraph {
            adjacency: vec![Vec::new(); nodes_count],
        }
    }

    /// Builds a graph from `(source, destination, cost)` triples.
    /// Out-of-range endpoints are an error; duplicates and negative costs are skipped.
    pub fn from_edges(nodes_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = WeightedGraph::new(nodes_count);
        for &(source, destination, cost) in edges {
            if source >= nodes_count {
                return Err(Error::InvalidNode(source));
            }
            if destination >= nodes_count {
                return Err(Error::InvalidNode(destination));
            }
            graph.add_edge(source, destination, cost);
        }
        Ok(graph)
    }

    /// Adds `source -> destination` with the given cost.
    ///
    /// Returns false if an index is out of range, the cost is negative or NaN,
    /// or the edge already exists.
    pub fn add_edge(&mut self, source: usize, destination: usize, cost: W) -> bool {
        if !self.has_node(source) || !self.has_node(destination) || !Self::valid_cost(cost) {
            return false;
        }

        let outgoing = &mut self.adjacency[source];
        if outgoing.iter().any(|(target, _)| *target == destination) {
            return false;
        }
        outgoing.push((destination, cost));
        true
    }

    /// Removes the edge `source -> destination`. Returns false if it does not exist.
    pub fn remove_edge(&mut self, source: usize, destination: usize) -> bool {
        let Some(outgoing) = self.adjacency.get_mut(source) else {
            return false;
        };

        match outgoing.iter().position(|(target, _)| *target == destination) {
            Some(index) => {
                outgoing.remove(index);
                true
            }
            None => false,
        }
    }

    /// Overwrites the cost of an existing edge
    pub fn update_cost(&mut self, source: usize, destination: usize, cost: W) -> bool {
        if !Self::valid_cost(cost) {
            return false;
        }

        let Some(outgoing) = self.adjacency.get_mut(source) else {
            return false;
        };

        for edge in outgoing.iter_mut() {
            if edge.0 == destination {
                edge.1 = cost;
                return true;
            }
        }
        false
    }

    /// `(destination, cost)` pairs of `source` in insertion order; empty when out of range
    pub fn edges(&self, source: usize) -> &[(usize, W)] {
        self.adjacency
            .get(source)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Gets the cost of an edge if it exists
    pub fn cost(&self, source: usize, destination: usize) -> Option<W> {
        self.edges(source)
            .iter()
            .find(|(target, _)| *target == destination)
            .map(|(_, cost)| *cost)
    }

    /// Every edge as `(source, destination, cost)`, by ascending source then insertion order
    pub fn all_edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, outgoing)| {
                outgoing
                    .iter()
                    .map(move |&(destination, cost)| (source, destination, cost))
            })
    }

    fn valid_cost(cost: W) -> bool {
        !cost.is_nan() && cost >= W::zero()
    }
}

impl<W> Graph for WeightedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn nodes_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.edges(node).iter().map(|(target, _)| *target))
    }
}
