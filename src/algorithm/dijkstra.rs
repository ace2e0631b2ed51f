use log::debug;
use num_traits::Float;
use std::fmt::Debug;

use crate::algorithm::ShortestPathResult;
use crate::data_structures::MinQueue;
use crate::graph::{Graph, WeightedGraph};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm bound to a weighted graph
///
/// Costs are assumed non-negative, which [`WeightedGraph::add_edge`] enforces.
#[derive(Debug)]
pub struct Dijkstra<'a, W>
where
    W: Float + Debug + Copy + Ord,
{
    graph: &'a WeightedGraph<W>,
}

impl<'a, W> Dijkstra<'a, W>
where
    W: Float + Debug + Copy + Ord,
{
    /// Creates a new Dijkstra algorithm instance
    pub fn new(graph: &'a WeightedGraph<W>) -> Self {
        Dijkstra { graph }
    }

    pub fn name(&self) -> &'static str {
        "Dijkstra"
    }

    /// Minimum total cost from `source` to every node, indexed by node.
    /// Unreachable nodes get infinity; an out-of-range source reaches nothing.
    pub fn minimum_weights(&self, source: usize) -> Vec<W> {
        match self.shortest_paths(source) {
            Ok(result) => result.distances,
            Err(_) => vec![W::infinity(); self.graph.nodes_count()],
        }
    }

    /// Compute shortest paths from a source node to all other nodes
    pub fn shortest_paths(&self, source: usize) -> Result<ShortestPathResult<W>> {
        if !self.graph.has_node(source) {
            return Err(Error::SourceNotFound);
        }

        let n = self.graph.nodes_count();
        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];

        distances[source] = W::zero();

        let mut queue = MinQueue::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // stale entry for an already settled node
            if settled[u] {
                continue;
            }
            settled[u] = true;

            for &(v, cost) in self.graph.edges(u) {
                if settled[v] {
                    continue;
                }

                let candidate = dist_u + cost;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    queue.push(v, candidate);
                }
            }
        }

        debug!(
            "Dijkstra from {}: {} of {} nodes reachable",
            source,
            settled.iter().filter(|&&done| done).count(),
            n
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
