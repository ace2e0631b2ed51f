use log::trace;
use std::collections::VecDeque;

use crate::algorithm::Traversal;
use crate::graph::Graph;

/// Breadth-first traversal; nodes are marked when enqueued so each is queued once
#[derive(Debug)]
pub struct BreadthFirstTraversal<'a, G: Graph> {
    graph: &'a G,
}

impl<'a, G: Graph> BreadthFirstTraversal<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        BreadthFirstTraversal { graph }
    }

    /// Hop count from `from_node` to every node, `None` when unreachable
    pub fn levels(&self, from_node: usize) -> Vec<Option<usize>> {
        let mut levels = vec![None; self.graph.nodes_count()];
        if !self.graph.has_node(from_node) {
            return levels;
        }

        levels[from_node] = Some(0);
        let mut queue = VecDeque::from([from_node]);
        while let Some(node) = queue.pop_front() {
            let next_level = levels[node].map(|level| level + 1);
            for next in self.graph.neighbors(node) {
                if levels[next].is_none() {
                    levels[next] = next_level;
                    queue.push_back(next);
                }
            }
        }

        levels
    }
}

impl<G: Graph> Traversal for BreadthFirstTraversal<'_, G> {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn traverse<F>(&self, from_node: usize, mut callback: F)
    where
        F: FnMut(usize),
    {
        if !self.graph.has_node(from_node) {
            return;
        }
        trace!("BFS from node {}", from_node);

        let mut visited = vec![false; self.graph.nodes_count()];
        let mut queue = VecDeque::new();
        visited[from_node] = true;
        queue.push_back(from_node);

        while let Some(node) = queue.pop_front() {
            callback(node);
            for next in self.graph.neighbors(node) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }
}
