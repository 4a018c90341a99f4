//! Exhaustive strategy enumeration
//!
//! Verification tooling, not production search: [`paths`] is
//! exponential in the height, [`wf_paths`] in the number of ambiguous
//! splits. Both exist so that the optimizer can be checked against
//! brute force on small instances, and to study structural counting
//! properties of well-formed strategies.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::Strategy;
use crate::StrategyError;

/// All structurally valid strategies of height `n`
///
/// Includes strategies that are not well-formed. Grows as
/// `4^(n(n-1)/2)`; intended for small `n` only.
pub fn paths(n: usize) -> Result<Vec<Strategy>, StrategyError> {
    if n == 0 {
        return Err(StrategyError::InvalidHeight(0));
    }
    if n == 1 {
        return Ok(vec![Strategy::single()]);
    }

    let subpaths = paths(n - 1)?;
    let limit = 1u64 << (2 * (n - 1)); // 4^(n-1)
    let mut out = Vec::with_capacity(subpaths.len() * limit as usize);
    for p in &subpaths {
        for j in 0..limit {
            out.push(p.cat(BigUint::from(j))?);
        }
    }
    Ok(out)
}

/// All well-formed strategies matching a leaf-reachability bitfield
///
/// Every returned strategy has height `ceil(log2(reachable + 1))`; bit
/// `k` of `reachable` demands that leaf `k` be reachable from the root.
/// Passing `2^h - 1` therefore enumerates every well-formed strategy of
/// height `h`. Recursion branches only where the bitfield leaves a
/// split ambiguous.
pub fn wf_paths(reachable: &BigUint) -> Result<Vec<Strategy>, StrategyError> {
    if reachable.is_zero() {
        return Err(StrategyError::EmptyReachable);
    }
    if reachable.is_one() {
        return Ok(vec![Strategy::single()]);
    }

    // Candidate bottom floors: the leftmost leaf fixes its bit, every
    // other demanded leaf may hang from either neighbouring position,
    // and the topmost always hangs left.
    let mut floors: Vec<BigUint> = vec![reachable & BigUint::one()];
    let mut rest = reachable >> 1u32;
    let mut left = BigUint::from(2u32);
    let mut right = BigUint::from(4u32);

    while rest > BigUint::one() {
        if rest.bit(0) {
            let mut extended: Vec<BigUint> = floors.iter().map(|f| f | &left).collect();
            extended.extend(floors.iter().map(|f| f | &right));
            floors = extended;
        }
        left <<= 2u32;
        right <<= 2u32;
        rest >>= 1u32;
    }

    let floors: Vec<BigUint> = floors.iter().map(|f| f | &left).collect();

    let mut out = Vec::new();
    for floor in floors {
        for p in wf_paths(&h4(&floor))? {
            out.push(p.cat(floor.clone())?);
        }
    }
    Ok(out)
}

// Collapse every 2-bit group to one bit: bit k of the result is set iff
// group k of `n` is nonzero. Maps a floor to the reachability bitfield
// it imposes on the level above.
fn h4(n: &BigUint) -> BigUint {
    let three = BigUint::from(3u32);
    let mut res = BigUint::zero();
    let mut i = BigUint::one();
    let mut n = n.clone();

    while !n.is_zero() {
        if !(&n & &three).is_zero() {
            res |= &i;
        }
        i <<= 1u32;
        n >>= 2u32;
    }
    res
}
