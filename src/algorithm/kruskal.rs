use log::debug;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::data_structures::UnionFind;
use crate::graph::{Graph, WeightedGraph};

/// An accepted spanning-tree edge, in the orientation it was stored in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpanningEdge {
    pub source: usize,
    pub destination: usize,
}

/// Minimum spanning forest with the cost of every accepted edge
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest<W>
where
    W: Float + Debug + Copy,
{
    /// Accepted edges as `(edge, cost)` in acceptance order
    pub edges: Vec<(SpanningEdge, W)>,
    pub total_weight: W,
    /// Number of trees, isolated nodes included
    pub components: usize,
}

/// Kruskal's minimum spanning forest over the undirected reading of a weighted graph
///
/// `u -> v` and `v -> u` are the same candidate; the cheaper orientation is
/// kept, the first one stored on a tie. Candidates are stably sorted by cost,
/// so equal costs are taken in the order their pair was first met while
/// scanning sources ascending, each in adjacency order.
#[derive(Debug)]
pub struct Kruskal<'a, W>
where
    W: Float + Debug + Copy + Ord,
{
    graph: &'a WeightedGraph<W>,
}

impl<'a, W> Kruskal<'a, W>
where
    W: Float + Debug + Copy + Ord,
{
    pub fn new(graph: &'a WeightedGraph<W>) -> Self {
        Kruskal { graph }
    }

    /// Edges of a minimum spanning forest, one tree per connected component
    pub fn minimum_spanning_tree(&self) -> Vec<SpanningEdge> {
        self.minimum_spanning_forest()
            .edges
            .into_iter()
            .map(|(edge, _)| edge)
            .collect()
    }

    pub fn minimum_spanning_forest(&self) -> SpanningForest<W> {
        let candidates = self.candidates();
        let mut sets = UnionFind::new(self.graph.nodes_count());
        let mut edges = Vec::with_capacity(self.graph.nodes_count().saturating_sub(1));
        let mut total_weight = W::zero();

        for (source, destination, cost) in candidates {
            if sets.union(source, destination) {
                total_weight = total_weight + cost;
                edges.push((SpanningEdge { source, destination }, cost));
            }
        }

        debug!(
            "Kruskal accepted {} edges over {} components, total weight {:?}",
            edges.len(),
            sets.components(),
            total_weight
        );

        SpanningForest {
            edges,
            total_weight,
            components: sets.components(),
        }
    }

    /// One candidate per unordered node pair, sorted by ascending cost
    fn candidates(&self) -> Vec<(usize, usize, W)> {
        let mut candidates: Vec<(usize, usize, W)> = Vec::with_capacity(self.graph.edge_count());
        let mut by_pair: HashMap<(usize, usize), usize> = HashMap::new();

        for (source, destination, cost) in self.graph.all_edges() {
            let pair = (source.min(destination), source.max(destination));
            match by_pair.get(&pair) {
                Some(&index) => {
                    if cost < candidates[index].2 {
                        candidates[index] = (source, destination, cost);
                    }
                }
                None => {
                    by_pair.insert(pair, candidates.len());
                    candidates.push((source, destination, cost));
                }
            }
        }

        candidates.sort_by_key(|&(_, _, cost)| cost);
        candidates
    }
}
