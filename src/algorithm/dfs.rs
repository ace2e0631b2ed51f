use log::trace;

use crate::algorithm::Traversal;
use crate::graph::Graph;

/// Pre-order depth-first traversal
///
/// Equivalent to the recursive formulation: a node is reported, then each of
/// its unvisited neighbours is explored fully, in adjacency order, before the
/// next one. An explicit stack of neighbour iterators replaces recursion so
/// long chains cannot overflow the call stack.
#[derive(Debug)]
pub struct DepthFirstTraversal<'a, G: Graph> {
    graph: &'a G,
}

impl<'a, G: Graph> DepthFirstTraversal<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        DepthFirstTraversal { graph }
    }
}

impl<G: Graph> Traversal for DepthFirstTraversal<'_, G> {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn traverse<F>(&self, from_node: usize, mut callback: F)
    where
        F: FnMut(usize),
    {
        if !self.graph.has_node(from_node) {
            return;
        }
        trace!("DFS from node {}", from_node);

        let mut visited = vec![false; self.graph.nodes_count()];
        visited[from_node] = true;
        callback(from_node);

        let mut stack = vec![self.graph.neighbors(from_node)];
        while let Some(neighbors) = stack.last_mut() {
            match neighbors.find(|&next| !visited[next]) {
                Some(next) => {
                    visited[next] = true;
                    callback(next);
                    stack.push(self.graph.neighbors(next));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}
