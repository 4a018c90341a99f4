//! Chain-level operation totals
//!
//! Bridges the per-degree formula costs and the strategy search: a
//! [`Party`] cost triple is collapsed into scalar edge weights, the
//! optimizer picks a strategy, and the strategy's edge counts are
//! expanded back into one grand-total [`CostVector`] for the whole
//! chain.

pub mod published;

use crate::cost::{CostVector, Weights};
use crate::optimizer;
use crate::strategy::Strategy;
use crate::StrategyError;

/// Per-degree cost triple for one party of the key exchange
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Party {
    /// Cost of one point multiplication step (one left edge)
    pub mul: CostVector,
    /// Cost of one isogeny evaluation step (one right edge)
    pub isogeny: CostVector,
    /// Cost of computing the next curve, paid once per chain element
    pub next_curve: CostVector,
}

impl Party {
    /// Construct a cost triple
    pub fn new(mul: CostVector, isogeny: CostVector, next_curve: CostVector) -> Self {
        Self {
            mul,
            isogeny,
            next_curve,
        }
    }
}

/// Result of a chain-level operation count
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct ChainCost {
    /// The optimal strategy the totals were computed for
    pub strategy: Strategy,
    /// Grand-total operation count for evaluating the whole chain
    pub total: CostVector,
    /// The optimizer's scalar cost, useful for quick comparisons
    /// between competing formula sets
    pub scalar: u64,
}

/// Total operation count for the optimal strategy of a chain
///
/// Scalar edge weights are derived from the triple: with `weights`
/// absent both edges weigh 1; otherwise the mul and isogeny vectors are
/// collapsed via [`CostVector::weigh`] and must come out positive. The
/// grand total is then
///
/// ```text
/// left·mul + right·isogeny + n·next_curve
/// ```
///
/// over the optimal strategy's edge counts.
pub fn opcount(
    n: usize,
    costs: &Party,
    weights: Option<&Weights>,
) -> Result<ChainCost, StrategyError> {
    let (l, r) = match weights {
        None => (1, 1),
        Some(w) => {
            let l = costs.mul.weigh(w);
            if l <= 0 {
                return Err(StrategyError::NonPositiveWeight {
                    kind: "mul",
                    value: l,
                });
            }
            let r = costs.isogeny.weigh(w);
            if r <= 0 {
                return Err(StrategyError::NonPositiveWeight {
                    kind: "isogeny",
                    value: r,
                });
            }
            (l as u64, r as u64)
        }
    };

    let mut table = optimizer::optimal_strategies(n, l, r)?;
    // Entry n is the full-height result (the table always reaches it).
    let (scalar, strategy) = table.swap_remove(n);

    let (left_edges, right_edges) = strategy.count();
    let total = costs
        .mul
        .scale(left_edges as i64)
        .add(&costs.isogeny.scale(right_edges as i64))
        .add(&costs.next_curve.scale(n as i64));

    Ok(ChainCost {
        strategy,
        total,
        scalar,
    })
}
