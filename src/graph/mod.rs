pub mod traits;
pub mod directed;
pub mod weighted;
pub mod generators;

pub use traits::Graph;
pub use directed::DirectedGraph;
pub use weighted::WeightedGraph;
