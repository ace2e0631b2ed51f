use log::{debug, warn};
use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use crate::splitwise::{Settlement, Transaction};
use crate::{Error, Result};

/// Reduces a ledger of transactions to a short list of settlements
///
/// Balances are recomputed from the full history on every call, so
/// [`simplify`](Self::simplify) is a pure function of the recorded
/// transactions.
///
/// The party type defaults to `String`; annotate the binding when relying on
/// the default:
///
/// ```
/// use graph_kit::{DebtSimplifier, Settlement};
///
/// let mut splitwise: DebtSimplifier = DebtSimplifier::new();
/// splitwise.add_transaction("a", "b", 10.0).unwrap();
/// let expected: Vec<Settlement> = vec![Settlement::new("b", "a", 10.0)];
/// assert_eq!(splitwise.simplify(), expected);
/// ```
#[derive(Debug, Clone)]
pub struct DebtSimplifier<P = String> {
    transactions: Vec<Transaction<P>>,
    /// Balances whose magnitude is at or below this are treated as settled
    tolerance: f64,
}

impl<P> DebtSimplifier<P>
where
    P: Ord + Clone + Debug,
{
    pub fn new() -> Self {
        DebtSimplifier {
            transactions: Vec::new(),
            tolerance: 0.0,
        }
    }

    /// Sets the zero threshold used when deciding a balance is settled.
    /// The default of `0.0` requires exact zeros.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.abs();
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Records that `source` paid `weight` on behalf of `destination`
    pub fn add_transaction(
        &mut self,
        source: impl Into<P>,
        destination: impl Into<P>,
        weight: f64,
    ) -> Result<()> {
        let source = source.into();
        let destination = destination.into();

        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidTransaction(format!(
                "{:?} -> {:?}: weight must be positive and finite, got {}",
                source, destination, weight
            )));
        }

        self.transactions.push(Transaction {
            source,
            destination,
            weight,
        });
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction<P>] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    /// Net amount each party still has to pay: positive owes, negative is owed.
    /// Every party that appears in a transaction has an entry, settled ones included.
    pub fn balances(&self) -> BTreeMap<P, f64> {
        let mut balances = BTreeMap::new();
        for transaction in &self.transactions {
            *balances.entry(transaction.source.clone()).or_insert(0.0) -= transaction.weight;
            *balances.entry(transaction.destination.clone()).or_insert(0.0) += transaction.weight;
        }
        balances
    }

    /// Greedy settlement: the party owing the most pays the party owed the most,
    /// as much as settles one of them, until every balance is zero.
    ///
    /// Ties on amount go to the smallest party identifier. Each settlement
    /// clears at least one party, so `n` unsettled parties need at most
    /// `n - 1` settlements.
    pub fn simplify(&self) -> Vec<Settlement<P>> {
        // payers: largest debt first; payees: most negative balance first
        let mut payers: BTreeSet<(Reverse<OrderedFloat<f64>>, P)> = BTreeSet::new();
        let mut payees: BTreeSet<(OrderedFloat<f64>, P)> = BTreeSet::new();

        for (party, balance) in self.balances() {
            if balance > self.tolerance {
                payers.insert((Reverse(OrderedFloat(balance)), party));
            } else if balance < -self.tolerance {
                payees.insert((OrderedFloat(balance), party));
            }
        }

        let mut settlements = Vec::with_capacity((payers.len() + payees.len()).saturating_sub(1));

        while !payers.is_empty() && !payees.is_empty() {
            let (Some((Reverse(OrderedFloat(owes)), payer)), Some((OrderedFloat(balance), payee))) =
                (payers.pop_first(), payees.pop_first())
            else {
                break;
            };
            let owed = -balance;
            let amount = owes.min(owed);

            debug!("Settlement: {:?} pays {:?} {}", payer, payee, amount);
            settlements.push(Settlement {
                source: payer.clone(),
                destination: payee.clone(),
                weight: amount,
            });

            let payer_rest = owes - amount;
            if payer_rest > self.tolerance {
                payers.insert((Reverse(OrderedFloat(payer_rest)), payer));
            }
            let payee_rest = owed - amount;
            if payee_rest > self.tolerance {
                payees.insert((OrderedFloat(-payee_rest), payee));
            }
        }

        if !payers.is_empty() || !payees.is_empty() {
            warn!(
                "{} balances left unmatched after simplification; consider a larger tolerance",
                payers.len() + payees.len()
            );
        }

        settlements
    }

    /// Nets the debts between each pair of parties without routing money
    /// through third parties.
    ///
    /// Sorted by descending amount, then by payer and payee.
    pub fn net_pairwise(&self) -> Vec<Settlement<P>> {
        // keyed by (low, high): positive means high owes low
        let mut pairs: BTreeMap<(P, P), f64> = BTreeMap::new();
        for transaction in &self.transactions {
            let Transaction {
                source,
                destination,
                weight,
            } = transaction;

            match source.cmp(destination) {
                Ordering::Less => {
                    *pairs
                        .entry((source.clone(), destination.clone()))
                        .or_insert(0.0) += weight;
                }
                Ordering::Greater => {
                    *pairs
                        .entry((destination.clone(), source.clone()))
                        .or_insert(0.0) -= weight;
                }
                Ordering::Equal => {}
            }
        }

        let mut settlements: Vec<Settlement<P>> = pairs
            .into_iter()
            .filter_map(|((low, high), amount)| {
                if amount > self.tolerance {
                    Some(Settlement {
                        source: high,
                        destination: low,
                        weight: amount,
                    })
                } else if amount < -self.tolerance {
                    Some(Settlement {
                        source: low,
                        destination: high,
                        weight: -amount,
                    })
                } else {
                    None
                }
            })
            .collect();

        settlements.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.source.cmp(&b.source))
                .then_with(|| a.destination.cmp(&b.destination))
        });
        settlements
    }
}

impl<P> Default for DebtSimplifier<P>
where
    P: Ord + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
