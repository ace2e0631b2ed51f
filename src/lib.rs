//! Graph Kit - directed graph algorithms and debt simplification
//!
//! Directed graphs (unweighted and edge-weighted) with depth-first and
//! breadth-first traversal, topological ordering, Dijkstra shortest paths and
//! Kruskal minimum spanning forests.
//!
//! The [`splitwise`] module reduces a ledger of pairwise transactions to a
//! short list of settlements that zero out every party's net balance.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod splitwise;

pub use algorithm::{
    bfs::BreadthFirstTraversal, dfs::DepthFirstTraversal, dijkstra::Dijkstra,
    kruskal::Kruskal, topological::TopologicalSort, ShortestPathResult, Traversal,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, WeightedGraph};
pub use splitwise::{DebtSimplifier, Settlement, Transaction};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid node index: {0}")]
    InvalidNode(usize),

    #[error("Source node not found in graph")]
    SourceNotFound,

    #[error("Cycle detected: only {emitted} of {total} nodes could be ordered")]
    CycleDetected { emitted: usize, total: usize },

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
