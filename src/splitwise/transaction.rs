use serde::{Deserialize, Serialize};

/// A recorded payment: `source` advanced `weight` on behalf of `destination`,
/// so `destination` now owes `source` that amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction<P = String> {
    pub source: P,
    pub destination: P,
    pub weight: f64,
}

/// A payment instruction: `source` pays `destination` a positive `weight`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement<P = String> {
    pub source: P,
    pub destination: P,
    pub weight: f64,
}

impl<P> Settlement<P> {
    pub fn new(source: impl Into<P>, destination: impl Into<P>, weight: f64) -> Self {
        Settlement {
            source: source.into(),
            destination: destination.into(),
            weight,
        }
    }
}
