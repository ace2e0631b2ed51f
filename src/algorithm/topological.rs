use log::{debug, warn};

use crate::data_structures::MinQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Kahn's algorithm with a min-heap of ready nodes
///
/// For every edge `u -> v`, `u` is emitted before `v`. Among nodes whose
/// predecessors have all been emitted, the smallest index goes first, so the
/// order is fully determined by the graph.
#[derive(Debug)]
pub struct TopologicalSort<'a, G: Graph> {
    graph: &'a G,
}

impl<'a, G: Graph> TopologicalSort<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        TopologicalSort { graph }
    }

    /// Streams the nodes in topological order.
    ///
    /// On a cyclic graph the nodes that can be ordered are still streamed, then
    /// [`Error::CycleDetected`] reports how many were left out.
    pub fn sort<F>(&self, mut callback: F) -> Result<()>
    where
        F: FnMut(usize),
    {
        let total = self.graph.nodes_count();
        let mut in_degree = vec![0usize; total];
        for node in 0..total {
            for next in self.graph.neighbors(node) {
                in_degree[next] += 1;
            }
        }

        let mut ready = MinQueue::new();
        for (node, &degree) in in_degree.iter().enumerate() {
            if degree == 0 {
                ready.push(node, ());
            }
        }

        let mut emitted = 0;
        while let Some((node, ())) = ready.pop() {
            callback(node);
            emitted += 1;

            for next in self.graph.neighbors(node) {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    ready.push(next, ());
                }
            }
        }

        if emitted < total {
            warn!(
                "Topological sort stopped after {} of {} nodes: graph has a cycle",
                emitted, total
            );
            return Err(Error::CycleDetected { emitted, total });
        }

        debug!("Topological sort ordered {} nodes", total);
        Ok(())
    }

    /// Collects the topological order into a vector
    pub fn order(&self) -> Result<Vec<usize>> {
        let mut order = Vec::with_capacity(self.graph.nodes_count());
        self.sort(|node| order.push(node))?;
        Ok(order)
    }

    /// Returns true if the graph has no directed cycle
    pub fn is_acyclic(&self) -> bool {
        self.sort(|_| {}).is_ok()
    }
}
