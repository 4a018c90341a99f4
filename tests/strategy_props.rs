//! Structural property tests for strategies
//!
//! Random merge trees over single-node strategies, checking the
//! invariants merge is supposed to preserve.

use proptest::prelude::*;
use strategos::Strategy;

/// Fold `n` single-node strategies into one via seeded merges,
/// tracking the edge counts each merge is expected to add.
fn build_merge_tree(n: usize, seeds: &[usize]) -> (Strategy, u64, u64) {
    let mut parts: Vec<Strategy> = (0..n).map(|_| Strategy::single()).collect();
    let mut left = 0u64;
    let mut right = 0u64;
    let mut k = 0;

    while parts.len() > 1 {
        let idx = seeds[k % seeds.len()] % (parts.len() - 1);
        let b = parts.remove(idx + 1);
        let a = parts[idx].clone();

        // merge adds other.height() left edges, self.height() right.
        left += b.height() as u64;
        right += a.height() as u64;
        parts[idx] = a.merge(&b);
        k += 1;
    }

    let strategy = parts.pop().expect("one strategy remains");
    (strategy, left, right)
}

proptest! {
    #[test]
    fn merge_trees_keep_their_invariants(
        n in 1usize..10,
        seeds in proptest::collection::vec(0usize..64, 1..16),
    ) {
        let (strategy, left, right) = build_merge_tree(n, &seeds);

        // Heights add along merges of singles.
        prop_assert_eq!(strategy.height(), n);

        // Merge preserves well-formedness and non-crossing.
        prop_assert!(strategy.well_formed());
        prop_assert!(!strategy.crosses());

        // Edge counts follow the merge accounting exactly.
        prop_assert_eq!(strategy.count(), (left, right));
    }

    #[test]
    fn floor_sequences_round_trip(
        n in 2usize..9,
        seeds in proptest::collection::vec(0usize..64, 1..16),
    ) {
        let (strategy, _, _) = build_merge_tree(n, &seeds);

        // Reconstructing from the exposed floors yields the same value
        // and the same derived counts.
        let rebuilt = Strategy::new(strategy.floors().to_vec()).expect("floors stay in bounds");
        prop_assert_eq!(rebuilt.count(), strategy.count());
        prop_assert_eq!(rebuilt, strategy);
    }

    #[test]
    fn merge_of_well_formed_is_well_formed(
        na in 1usize..6,
        nb in 1usize..6,
        seeds_a in proptest::collection::vec(0usize..64, 1..8),
        seeds_b in proptest::collection::vec(0usize..64, 1..8),
    ) {
        let (a, ..) = build_merge_tree(na, &seeds_a);
        let (b, ..) = build_merge_tree(nb, &seeds_b);

        let merged = a.merge(&b);
        prop_assert_eq!(merged.height(), a.height() + b.height());
        prop_assert!(merged.well_formed());

        let (ml, mr) = merged.count();
        let (al, ar) = a.count();
        let (bl, br) = b.count();
        prop_assert_eq!(ml, al + bl + b.height() as u64);
        prop_assert_eq!(mr, ar + br + a.height() as u64);
    }
}
