//! Dynamic-programming strategy search
//!
//! Computes, for every height up to `n`, the minimum total cost of a
//! well-formed strategy given a fixed scalar cost per left edge and per
//! right edge, in O(n²) time. A strategy of height `i` splits at the
//! root into a left branch of height `j` and a right branch of height
//! `i-j`; every node of the left branch needs one left edge descending
//! to it from the split point and symmetrically for the right, so the
//! split costs
//!
//! ```text
//! opt(j) + opt(i-j) + (i-j)·l + j·r
//! ```
//!
//! The optimal split is symmetric under exchanging the two edge costs,
//! so the search normalizes to `l <= r`, scans only `j <= i/2`, and
//! mirrors the recorded split indices if the caller's costs were
//! swapped.

use tracing::debug;

use crate::strategy::Strategy;
use crate::StrategyError;

/// One row of the search table: minimum cost and the root split index
/// realizing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// Minimum total edge cost for this height
    pub cost: u64,
    /// Height of the left branch of the optimal root split
    pub index: usize,
}

/// Minimum cost and optimal split index for every height `0..=n`
///
/// The light-weight query mode: no strategies are materialized, so
/// memory stays O(n) even for very large `n`. Entries 0 and 1 are
/// trivial (cost 0). Ties between splits resolve toward the largest
/// qualifying index; published operation counts depend on this exact
/// choice, so it must not change.
pub fn optimal_splits(n: usize, left: u64, right: u64) -> Result<Vec<Split>, StrategyError> {
    if n == 0 {
        return Err(StrategyError::InvalidHeight(0));
    }

    let (l, r, swapped) = if left > right {
        (right, left, true)
    } else {
        (left, right, false)
    };

    let mut table = vec![Split { cost: 0, index: 0 }, Split { cost: 0, index: 1 }];
    for i in 2..=n {
        let iu = i as u64;
        // Upper-bound sentinel, beaten by every real split.
        let mut best = Split {
            cost: (iu + 1) * (iu + 1) * (l + r),
            index: 0,
        };
        for j in 1..=i / 2 {
            let ju = j as u64;
            let score = table[j].cost + table[i - j].cost + (iu - ju) * l + ju * r;
            if score <= best.cost {
                best = Split {
                    cost: score,
                    index: j,
                };
            }
        }
        table.push(best);
    }

    if swapped {
        // Mirror every recorded split back into the caller's
        // orientation (including the trivial entries).
        for (i, entry) in table.iter_mut().enumerate() {
            entry.index = i - entry.index;
        }
    }

    debug!(
        n,
        left,
        right,
        cost = table[n].cost,
        "strategy search complete"
    );
    Ok(table)
}

/// Minimum cost and optimal [`Strategy`] for every height `0..=n`
///
/// Resolves the split indices of [`optimal_splits`] bottom-up into
/// strategy trees via [`Strategy::merge`]. Entries 0 and 1 hold the
/// trivial single-node strategy.
pub fn optimal_strategies(
    n: usize,
    left: u64,
    right: u64,
) -> Result<Vec<(u64, Strategy)>, StrategyError> {
    let splits = optimal_splits(n, left, right)?;

    let mut table: Vec<(u64, Strategy)> = Vec::with_capacity(splits.len());
    table.push((0, Strategy::single()));
    table.push((0, Strategy::single()));
    for i in 2..splits.len() {
        let j = splits[i].index;
        let merged = table[j].1.merge(&table[i - j].1);
        table.push((splits[i].cost, merged));
    }
    Ok(table)
}
