use graph_kit::algorithm::kruskal::SpanningEdge;
use graph_kit::data_structures::UnionFind;
use graph_kit::graph::generators::generate_random_weighted;
use graph_kit::graph::{Graph, WeightedGraph};
use graph_kit::Kruskal;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn create_weighted_graph() -> WeightedGraph<OrderedFloat<f64>> {
    WeightedGraph::from_edges(
        5,
        &[
            (0, 1, OrderedFloat(5.0)),
            (1, 2, OrderedFloat(1.0)),
            (2, 0, OrderedFloat(7.0)),
            (0, 2, OrderedFloat(9.0)),
            (4, 3, OrderedFloat(8.0)),
            (3, 1, OrderedFloat(1.0)),
            (1, 3, OrderedFloat(15.0)),
        ],
    )
    .unwrap()
}

fn edge(source: usize, destination: usize) -> SpanningEdge {
    SpanningEdge {
        source,
        destination,
    }
}

fn components(graph: &WeightedGraph<OrderedFloat<f64>>) -> usize {
    let mut sets = UnionFind::new(graph.nodes_count());
    for (u, v, _) in graph.all_edges() {
        sets.union(u, v);
    }
    sets.components()
}

#[test]
fn test_kruskal() {
    let graph = create_weighted_graph();
    let kruskal = Kruskal::new(&graph);

    assert_eq!(
        kruskal.minimum_spanning_tree(),
        vec![edge(1, 2), edge(3, 1), edge(0, 1), edge(4, 3)]
    );

    let forest = kruskal.minimum_spanning_forest();
    assert_eq!(forest.total_weight, OrderedFloat(15.0));
    assert_eq!(forest.components, 1);
}

#[test]
fn test_kruskal_disconnected_forest() {
    // two triangles and an isolated node
    let graph = WeightedGraph::from_edges(
        7,
        &[
            (0, 1, OrderedFloat(1.0)),
            (1, 2, OrderedFloat(2.0)),
            (2, 0, OrderedFloat(3.0)),
            (3, 4, OrderedFloat(4.0)),
            (4, 5, OrderedFloat(1.0)),
            (5, 3, OrderedFloat(1.0)),
        ],
    )
    .unwrap();

    let forest = Kruskal::new(&graph).minimum_spanning_forest();
    let edges: Vec<SpanningEdge> = forest.edges.iter().map(|(spanning, _)| *spanning).collect();

    assert_eq!(edges, vec![edge(0, 1), edge(4, 5), edge(5, 3), edge(1, 2)]);
    assert_eq!(forest.total_weight, OrderedFloat(5.0));
    assert_eq!(forest.components, 3);
}

#[test]
fn test_kruskal_treats_opposite_edges_as_one() {
    let graph = WeightedGraph::from_edges(
        2,
        &[(0, 1, OrderedFloat(4.0)), (1, 0, OrderedFloat(2.0))],
    )
    .unwrap();

    let forest = Kruskal::new(&graph).minimum_spanning_forest();
    assert_eq!(forest.edges, vec![(edge(1, 0), OrderedFloat(2.0))]);
}

#[test]
fn test_kruskal_empty_graph() {
    let graph: WeightedGraph<OrderedFloat<f64>> = WeightedGraph::new(3);
    let forest = Kruskal::new(&graph).minimum_spanning_forest();
    assert!(forest.edges.is_empty());
    assert_eq!(forest.components, 3);
    assert_eq!(forest.total_weight, OrderedFloat(0.0));
}

#[test]
fn test_kruskal_forest_properties() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..20 {
        let graph = generate_random_weighted(40, 1.5, &mut rng);
        let forest = Kruskal::new(&graph).minimum_spanning_forest();

        let expected_components = components(&graph);
        assert_eq!(forest.components, expected_components);
        assert_eq!(forest.edges.len(), graph.nodes_count() - expected_components);

        // accepted edges never close a cycle
        let mut sets = UnionFind::new(graph.nodes_count());
        for (spanning, cost) in &forest.edges {
            assert!(sets.union(spanning.source, spanning.destination));
            assert_eq!(graph.cost(spanning.source, spanning.destination), Some(*cost));
        }

        // cycle property: no graph edge is cheaper than the heaviest forest edge
        // on the path between its endpoints
        let total: f64 = forest.edges.iter().map(|(_, cost)| cost.into_inner()).sum();
        assert!((total - forest.total_weight.into_inner()).abs() < 1e-9);
        for (u, v, cost) in graph.all_edges() {
            let heaviest = heaviest_on_tree_path(&forest.edges, graph.nodes_count(), u, v);
            if let Some(heaviest) = heaviest {
                assert!(heaviest <= cost.into_inner() + 1e-9);
            }
        }
    }
}

/// Heaviest cost on the forest path between `u` and `v`, `None` if they are not connected
fn heaviest_on_tree_path(
    edges: &[(SpanningEdge, OrderedFloat<f64>)],
    n: usize,
    u: usize,
    v: usize,
) -> Option<f64> {
    let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
    for (spanning, cost) in edges {
        adjacency[spanning.source].push((spanning.destination, cost.into_inner()));
        adjacency[spanning.destination].push((spanning.source, cost.into_inner()));
    }

    // DFS carrying the heaviest edge seen so far
    let mut best = vec![None; n];
    best[u] = Some(0.0_f64);
    let mut stack = vec![u];
    while let Some(node) = stack.pop() {
        let current = best[node].unwrap_or(0.0);
        for &(next, cost) in &adjacency[node] {
            if best[next].is_none() && next != u {
                best[next] = Some(current.max(cost));
                stack.push(next);
            }
        }
    }

    if u == v {
        None
    } else {
        best[v]
    }
}
