//! Optimizer correctness tests
//!
//! Verifies the dynamic program against exhaustive enumeration on small
//! heights and pins the tie-break and hand-computed cost values.

use num_bigint::BigUint;
use num_traits::One;
use test_case::test_case;

use strategos::optimizer::{optimal_splits, optimal_strategies};
use strategos::strategy::wf_paths;

/// Cheapest well-formed strategy of height `n` by brute force.
fn brute_force_min(n: usize, l: u64, r: u64) -> u64 {
    let reachable = (BigUint::one() << n) - BigUint::one();
    wf_paths(&reachable)
        .expect("enumeration succeeds")
        .iter()
        .map(|p| {
            let (pl, pr) = p.count();
            pl * l + pr * r
        })
        .min()
        .expect("at least one well-formed strategy")
}

#[test]
fn dp_matches_brute_force_on_small_heights() {
    for n in 2..=5 {
        for (l, r) in [(1, 1), (2, 3), (1, 10), (7, 2)] {
            let dp = optimal_splits(n, l, r).expect("search succeeds");
            assert_eq!(
                dp[n].cost,
                brute_force_min(n, l, r),
                "n={} l={} r={}",
                n,
                l,
                r
            );
        }
    }
}

#[test]
fn dp_satisfies_its_recurrence() {
    let (l, r) = (3, 5);
    let table = optimal_splits(12, l, r).expect("search succeeds");

    for i in 2..table.len() {
        let best = (1..i)
            .map(|j| table[j].cost + table[i - j].cost + (i - j) as u64 * l + j as u64 * r)
            .min()
            .expect("nonempty split range");
        assert_eq!(table[i].cost, best, "height {}", i);
    }
}

#[test]
fn costs_invariant_under_edge_exchange() {
    for (l, r) in [(1, 2), (4, 9), (10, 1)] {
        let a = optimal_splits(16, l, r).expect("search succeeds");
        let b = optimal_splits(16, r, l).expect("search succeeds");
        for i in 0..a.len() {
            assert_eq!(a[i].cost, b[i].cost, "height {} l={} r={}", i, l, r);
        }
    }
}

// Hand-computed expectations.
#[test_case(2, 1, 1 => (2, 1); "two leaves balanced")]
#[test_case(3, 1, 1 => (5, 1); "three leaves")]
#[test_case(6, 1, 1 => (16, 3); "tie resolved toward largest split")]
#[test_case(10, 1, 1 => (34, 5); "ten leaves unit costs")]
#[test_case(5, 2, 3 => (29, 2); "asymmetric costs")]
#[test_case(3, 10, 1 => (23, 2); "swapped costs mirror the split")]
fn optimal_cost_and_split(n: usize, l: u64, r: u64) -> (u64, usize) {
    let table = optimal_splits(n, l, r).expect("search succeeds");
    (table[n].cost, table[n].index)
}

#[test]
fn constructed_strategies_realize_reported_costs() {
    let (l, r) = (5, 7);
    let table = optimal_strategies(12, l, r).expect("search succeeds");

    for (i, (cost, strategy)) in table.iter().enumerate().skip(2) {
        assert_eq!(strategy.height(), i);
        assert!(strategy.well_formed(), "height {} not well-formed", i);
        assert!(!strategy.crosses(), "height {} crosses", i);

        let (pl, pr) = strategy.count();
        assert_eq!(pl * l + pr * r, *cost, "height {}", i);
    }
}

#[test]
fn unit_cost_edge_counts_for_ten_leaves() {
    let table = optimal_strategies(10, 1, 1).expect("search succeeds");
    let (cost, strategy) = &table[10];

    assert_eq!(*cost, 34);
    assert_eq!(strategy.count(), (19, 15));
}

#[test]
fn floor_roundtrip_preserves_counts() {
    use strategos::Strategy;

    let table = optimal_strategies(9, 2, 3).expect("search succeeds");
    let (_, strategy) = &table[9];

    let rebuilt = Strategy::new(strategy.floors().to_vec()).expect("floors stay in bounds");
    assert_eq!(rebuilt.count(), strategy.count());
    assert_eq!(&rebuilt, strategy);
}
