//! # Strategy Search for Isogeny Chain Evaluation
//!
//! This library finds minimum-cost evaluation strategies for chains of
//! isogeny computations, and symbolically counts the algebraic
//! operations of the curve-arithmetic formulas that weight the search.
//!
//! ## Core Pipeline
//!
//! 1. **Formula counting**: express a formula as a shared-subexpression
//!    DAG and extract its [`CostVector`] (every node counted once)
//! 2. **Weight derivation**: collapse per-degree cost triples into
//!    scalar left/right edge weights via [`CostVector::weigh`]
//! 3. **Strategy search**: O(n²) dynamic programming over splitting
//!    trees ([`optimizer::optimal_strategies`])
//! 4. **Grand total**: combine edge counts with the cost triple into
//!    one operation-count vector ([`exchange::opcount`])
//!
//! ## Usage Example
//!
//! ```ignore
//! use strategos::exchange;
//!
//! let table = exchange::published::djp();
//! let report = exchange::opcount(10, &table[&4], None)?;
//! println!("{} at scalar cost {}", report.total, report.scalar);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements one subsystem of the search
pub mod cost;      // Named operation-count vectors
pub mod formula;   // Symbolic expression DAG and cost counting
pub mod strategy;  // Compact binary splitting trees
pub mod optimizer; // Dynamic-programming strategy search
pub mod exchange;  // Chain-level operation totals

// Re-exports for convenience
pub use cost::{CostVector, Weights};
pub use exchange::{ChainCost, Party};
pub use formula::{Formula, OpCostTable, OpKind};
pub use strategy::{EdgeKind, Strategy};

use num_bigint::BigUint;
use thiserror::Error;

/// Errors raised by strategy construction and the search entry points
///
/// All variants are raised synchronously at the point of violation and
/// are never retried; a computation either fully succeeds or fails
/// fast with one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// Floor value exceeds the structural bound for its level
    #[error("malformed strategy: floor {floor} is too large for level {level}")]
    MalformedFloor {
        /// Level index (0 = root level) the floor was destined for
        level: usize,
        /// The offending floor bitfield
        floor: BigUint,
    },

    /// Height or chain length must be at least 1
    #[error("height must be positive, got {0}")]
    InvalidHeight(usize),

    /// Scalar multiplier must be at least 1
    #[error("scalar multiplier must be positive, got {0}")]
    InvalidScalar(u64),

    /// Exponent must be at least 1
    #[error("exponent must be positive, got {0}")]
    InvalidExponent(u32),

    /// Leaf-reachability bitfield must have at least one bit set
    #[error("reachability bitfield must be nonzero")]
    EmptyReachable,

    /// Derived edge weight must be positive to drive the optimizer
    #[error("edge weight for {kind} must be positive, weighed to {value}")]
    NonPositiveWeight {
        /// Which cost triple member produced the weight
        kind: &'static str,
        /// The non-positive weighed value
        value: i64,
    },
}
