pub mod traits;
pub mod dfs;
pub mod bfs;
pub mod topological;
pub mod dijkstra;
pub mod kruskal;

pub use traits::{ShortestPathResult, Traversal};
