use crate::graph::{DirectedGraph, WeightedGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with roughly `edge_factor * n` edges.
/// Self-loops and duplicate pairs are skipped, so the edge count may fall short.
pub fn generate_random_directed<R: Rng + ?Sized>(
    n: usize,
    edge_factor: f64,
    rng: &mut R,
) -> DirectedGraph {
    let mut graph = DirectedGraph::new(n);
    if n < 2 {
        return graph;
    }

    let attempts = (edge_factor * n as f64) as usize;
    for _ in 0..attempts {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v);
        }
    }

    graph
}

/// Generates a random DAG: every edge points from a lower to a higher index
/// of a shuffled node order, so the result is acyclic but not trivially sorted.
pub fn generate_random_dag<R: Rng + ?Sized>(
    n: usize,
    edge_factor: f64,
    rng: &mut R,
) -> DirectedGraph {
    let mut graph = DirectedGraph::new(n);
    if n < 2 {
        return graph;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let attempts = (edge_factor * n as f64) as usize;
    for _ in 0..attempts {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        if i < j {
            graph.add_edge(order[i], order[j]);
        }
    }

    graph
}

/// Generates a random weighted directed graph with costs in `[1, 100)`
pub fn generate_random_weighted<R: Rng + ?Sized>(
    n: usize,
    edge_factor: f64,
    rng: &mut R,
) -> WeightedGraph<OrderedFloat<f64>> {
    let mut graph = WeightedGraph::new(n);
    if n < 2 {
        return graph;
    }

    let attempts = (edge_factor * n as f64) as usize;
    for _ in 0..attempts {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let cost = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, cost);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with unit-cost edges in both directions
/// between horizontal and vertical neighbours
pub fn generate_grid(width: usize, height: usize) -> WeightedGraph<OrderedFloat<f64>> {
    let mut graph = WeightedGraph::new(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), OrderedFloat(1.0));
                graph.add_edge(index(x + 1, y), current, OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), OrderedFloat(1.0));
                graph.add_edge(index(x, y + 1), current, OrderedFloat(1.0));
            }
        }
    }

    graph
}
