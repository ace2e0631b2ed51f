use graph_kit::graph::generators::{generate_random_dag, generate_random_weighted};
use graph_kit::graph::Graph;
use graph_kit::{
    BreadthFirstTraversal, DebtSimplifier, DepthFirstTraversal, Dijkstra, Kruskal,
    TopologicalSort, Traversal,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::env;
use std::time::{Duration, Instant};

#[derive(Debug, Serialize)]
struct BenchmarkRecord {
    nodes: usize,
    edges: usize,
    dfs_ms: f64,
    bfs_ms: f64,
    topological_ms: f64,
    dijkstra_ms: f64,
    kruskal_ms: f64,
    simplify_ms: f64,
    settlements: usize,
}

fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn run(size: usize, edge_factor: f64, rng: &mut StdRng) -> graph_kit::Result<BenchmarkRecord> {
    let weighted = generate_random_weighted(size, edge_factor, rng);
    let dag = generate_random_dag(size, edge_factor, rng);
    info!(
        "Graph with {} nodes, {} weighted edges, {} DAG edges",
        size,
        weighted.edge_count(),
        dag.edge_count()
    );

    let (_, dfs) = time(|| DepthFirstTraversal::new(&weighted).order(0));
    let (_, bfs) = time(|| BreadthFirstTraversal::new(&weighted).order(0));
    let (_, topological) = time(|| TopologicalSort::new(&dag).order());
    let (_, dijkstra) = time(|| Dijkstra::new(&weighted).minimum_weights(0));
    let (_, kruskal) = time(|| Kruskal::new(&weighted).minimum_spanning_tree());

    // one party per node, one payment per weighted edge
    let mut splitwise: DebtSimplifier<usize> = DebtSimplifier::new().with_tolerance(1e-9);
    for (source, destination, cost) in weighted.all_edges() {
        splitwise.add_transaction(source, destination, cost.into_inner())?;
    }
    let (settlements, simplify) = time(|| splitwise.simplify());

    Ok(BenchmarkRecord {
        nodes: size,
        edges: weighted.edge_count(),
        dfs_ms: millis(dfs),
        bfs_ms: millis(bfs),
        topological_ms: millis(topological),
        dijkstra_ms: millis(dijkstra),
        kruskal_ms: millis(kruskal),
        simplify_ms: millis(simplify),
        settlements: settlements.len(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: benchmark [sizes,comma,separated] [edge_factor] [--json]
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    let graph_sizes: Vec<usize> = match positional.first() {
        Some(list) => list
            .split(',')
            .map(|size| size.trim().parse())
            .collect::<Result<_, _>>()?,
        None => vec![1_000, 10_000, 50_000, 100_000],
    };
    let edge_factor: f64 = match positional.get(1) {
        Some(factor) => factor.parse()?,
        None => 2.0,
    };

    let mut rng = StdRng::seed_from_u64(42);
    let results: Vec<BenchmarkRecord> = graph_sizes
        .iter()
        .map(|&size| run(size, edge_factor, &mut rng))
        .collect::<graph_kit::Result<_>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("=====================================================");
    println!("Benchmark: graph algorithms and debt simplification");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<8} | {:<8} | {:<8} | {:<10} | {:<10} | {:<10} | {:<11}",
        "Nodes", "Edges", "DFS", "BFS", "Topo", "Dijkstra", "Kruskal", "Simplify", "Settlements"
    );
    println!("-----------------------------------------------------");
    for record in &results {
        println!(
            "{:<10} | {:<10} | {:<8.2} | {:<8.2} | {:<8.2} | {:<10.2} | {:<10.2} | {:<10.2} | {:<11}",
            record.nodes,
            record.edges,
            record.dfs_ms,
            record.bfs_ms,
            record.topological_ms,
            record.dijkstra_ms,
            record.kruskal_ms,
            record.simplify_ms,
            record.settlements
        );
    }

    Ok(())
}
