//! Debt simplification over a ledger of pairwise transactions

pub mod transaction;
pub mod simplifier;

pub use transaction::{Settlement, Transaction};
pub use simplifier::DebtSimplifier;
