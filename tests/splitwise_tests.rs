use approx::assert_relative_eq;
use graph_kit::{DebtSimplifier, Error, Settlement};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

fn settlement(source: &str, destination: &str, weight: f64) -> Settlement {
    Settlement::new(source, destination, weight)
}

/// Net balances implied by a list of settlements: payers go down, payees go up
fn settled_balances(settlements: &[Settlement]) -> BTreeMap<String, f64> {
    let mut balances = BTreeMap::new();
    for s in settlements {
        *balances.entry(s.source.clone()).or_insert(0.0) += s.weight;
        *balances.entry(s.destination.clone()).or_insert(0.0) -= s.weight;
    }
    balances
}

#[test]
fn test_simple_splitwise() {
    let mut splitwise: DebtSimplifier = DebtSimplifier::new();
    splitwise.add_transaction("x", "y", 1.0).unwrap();
    splitwise.add_transaction("y", "z", 2.0).unwrap();
    splitwise.add_transaction("z", "x", 3.0).unwrap();
    splitwise.add_transaction("x", "y", 4.0).unwrap();

    assert_eq!(
        splitwise.net_pairwise(),
        vec![
            settlement("y", "x", 5.0),
            settlement("x", "z", 3.0),
            settlement("z", "y", 2.0),
        ]
    );

    // x is owed 2, y owes 3, z is owed 1
    assert_eq!(
        splitwise.simplify(),
        vec![settlement("y", "x", 2.0), settlement("y", "z", 1.0)]
    );
}

#[test]
fn test_complex_splitwise() {
    let mut splitwise: DebtSimplifier = DebtSimplifier::new();
    splitwise.add_transaction("a", "b", 1.0).unwrap();
    splitwise.add_transaction("b", "c", 2.0).unwrap();
    splitwise.add_transaction("a", "c", 3.0).unwrap();

    assert_eq!(
        splitwise.simplify(),
        vec![settlement("c", "a", 4.0), settlement("c", "b", 1.0)]
    );
}

#[test]
fn test_balances_include_settled_parties() {
    let mut splitwise: DebtSimplifier = DebtSimplifier::new();
    splitwise.add_transaction("a", "b", 5.0).unwrap();
    splitwise.add_transaction("b", "a", 5.0).unwrap();
    splitwise.add_transaction("c", "d", 2.0).unwrap();

    let balances = splitwise.balances();
    assert_eq!(balances.len(), 4);
    assert_eq!(balances["a"], 0.0);
    assert_eq!(balances["b"], 0.0);
    assert_eq!(balances["c"], -2.0);
    assert_eq!(balances["d"], 2.0);

    assert_eq!(splitwise.simplify(), vec![settlement("d", "c", 2.0)]);
    assert!(splitwise.net_pairwise().iter().all(|s| s.source != "a" && s.source != "b"));
}

#[test]
fn test_ties_are_broken_by_name() {
    let mut splitwise: DebtSimplifier = DebtSimplifier::new();
    // b and a each owe 3, d and c are each owed 3
    splitwise.add_transaction("d", "b", 3.0).unwrap();
    splitwise.add_transaction("c", "a", 3.0).unwrap();

    assert_eq!(
        splitwise.simplify(),
        vec![settlement("a", "c", 3.0), settlement("b", "d", 3.0)]
    );
}

#[test]
fn test_simplify_is_idempotent_and_empty_ledger() {
    let mut splitwise: DebtSimplifier = DebtSimplifier::new();
    assert!(splitwise.simplify().is_empty());
    assert!(splitwise.is_empty());

    splitwise.add_transaction("p", "q", 10.0).unwrap();
    splitwise.add_transaction("q", "r", 10.0).unwrap();

    let first = splitwise.simplify();
    assert_eq!(first, splitwise.simplify());
    assert_eq!(first, vec![settlement("r", "p", 10.0)]);
    assert_eq!(splitwise.len(), 2);

    splitwise.clear();
    assert!(splitwise.simplify().is_empty());
}

#[test]
fn test_rejects_invalid_weights() {
    let mut splitwise: DebtSimplifier = DebtSimplifier::new();

    for weight in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = splitwise.add_transaction("a", "b", weight);
        assert!(matches!(result, Err(Error::InvalidTransaction(_))));
    }
    assert!(splitwise.is_empty());

    // paying yourself is recorded but nets to nothing
    splitwise.add_transaction("a", "a", 4.0).unwrap();
    assert_eq!(splitwise.balances()["a"], 0.0);
    assert!(splitwise.simplify().is_empty());
    assert!(splitwise.net_pairwise().is_empty());
}

#[test]
fn test_tolerance_absorbs_rounding() {
    let mut exact: DebtSimplifier = DebtSimplifier::new();
    for _ in 0..10 {
        exact.add_transaction("a", "b", 0.1).unwrap();
    }
    exact.add_transaction("b", "a", 1.0).unwrap();

    // 0.1 summed ten times is not exactly 1.0
    assert!(exact.balances()["a"] != 0.0);
    assert_eq!(exact.simplify().len(), 1);

    let tolerant = exact.clone().with_tolerance(1e-9);
    assert_eq!(tolerant.tolerance(), 1e-9);
    assert!(tolerant.simplify().is_empty());
}

#[test]
fn test_non_string_parties() {
    let mut splitwise: DebtSimplifier<u32> = DebtSimplifier::new();
    splitwise.add_transaction(1u32, 2u32, 7.5).unwrap();
    splitwise.add_transaction(3u32, 2u32, 2.5).unwrap();

    let settlements = splitwise.simplify();
    assert_eq!(
        settlements,
        vec![Settlement::<u32>::new(2u32, 1u32, 7.5), Settlement::<u32>::new(2u32, 3u32, 2.5)]
    );
    assert_eq!(splitwise.transactions()[1].source, 3);
}

#[test]
fn test_settlements_reconstruct_balances() {
    let mut rng = StdRng::seed_from_u64(2024);
    let parties = ["ana", "ben", "cai", "dee", "eli", "fay", "gus", "hal"];

    for _ in 0..50 {
        let mut splitwise: DebtSimplifier = DebtSimplifier::new().with_tolerance(1e-9);
        for _ in 0..rng.gen_range(1..30) {
            let source = parties[rng.gen_range(0..parties.len())];
            let destination = parties[rng.gen_range(0..parties.len())];
            // whole cents keep the sums well conditioned
            let weight = rng.gen_range(1..10_000) as f64 / 100.0;
            splitwise.add_transaction(source, destination, weight).unwrap();
        }

        let balances = splitwise.balances();
        let settlements = splitwise.simplify();
        let replayed = settled_balances(&settlements);

        let unsettled = balances.values().filter(|b| b.abs() > 1e-9).count();
        assert!(settlements.len() <= unsettled.saturating_sub(1));

        for s in &settlements {
            assert!(s.weight > 0.0, "settlement {:?} is not positive", s);
            assert_ne!(s.source, s.destination);
        }

        for (party, balance) in &balances {
            let paid = replayed.get(party).copied().unwrap_or(0.0);
            assert_relative_eq!(paid, *balance, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_settlements_serialize_as_json() {
    let settlements = vec![settlement("c", "a", 4.0)];
    let json = serde_json::to_string(&settlements).unwrap();
    assert_eq!(json, r#"[{"source":"c","destination":"a","weight":4.0}]"#);
}
