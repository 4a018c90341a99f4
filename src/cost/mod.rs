//! Named operation-count vectors
//!
//! A [`CostVector`] is a sparse vector over named operation kinds
//! ("m", "a", "mod", ...). It is the unit of algebraic cost everywhere:
//! formula counting accumulates into one, published formula data is
//! expressed as them, and the optimizer consumes scalar weights derived
//! from them via [`CostVector::weigh`].
//!
//! Counts are signed: subtraction may transiently produce negative
//! counts, which is algebraically permitted but meaningless as a
//! physical cost.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Sparse vector of per-kind operation counts
///
/// Insertion order of kinds is irrelevant for value semantics but is
/// preserved for display. Every operation returns a fresh vector; a
/// vector handed to a caller is never mutated afterwards.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct CostVector {
    counts: Vec<(String, i64)>,
}

impl CostVector {
    /// Create an empty (zero) cost vector
    pub fn new() -> Self {
        Self { counts: Vec::new() }
    }

    /// Create a vector with a single kind
    pub fn of(kind: &str, count: i64) -> Self {
        Self {
            counts: vec![(kind.to_string(), count)],
        }
    }

    /// Add `count` occurrences of `kind`, consuming and returning self
    ///
    /// Builder-style constructor for multi-kind literals.
    pub fn and(mut self, kind: &str, count: i64) -> Self {
        self.bump(kind, count);
        self
    }

    /// Count recorded for `kind` (0 if absent)
    pub fn count(&self, kind: &str) -> i64 {
        self.counts
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }

    /// Iterate over (kind, count) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// True if no kind has a nonzero count
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|(_, v)| *v == 0)
    }

    /// Key-wise sum of two vectors (key sets union)
    pub fn add(&self, other: &CostVector) -> CostVector {
        let mut out = self.clone();
        for (kind, count) in other.iter() {
            out.bump(kind, count);
        }
        out
    }

    /// Vector with every count negated
    pub fn negate(&self) -> CostVector {
        self.scale(-1)
    }

    /// Key-wise difference, `self + (-other)`
    pub fn subtract(&self, other: &CostVector) -> CostVector {
        self.add(&other.negate())
    }

    /// Vector with every count multiplied by `k`
    ///
    /// Negative `k` is permitted (it is how subtraction is built).
    pub fn scale(&self, k: i64) -> CostVector {
        CostVector {
            counts: self.counts.iter().map(|(n, v)| (n.clone(), v * k)).collect(),
        }
    }

    /// Collapse to a single scalar under the given weights
    ///
    /// Returns Σ count(k) · weight(k) over the kinds the weight set
    /// names; kinds absent from this vector count as 0.
    pub fn weigh(&self, weights: &Weights) -> i64 {
        weights
            .iter()
            .map(|(kind, weight)| self.count(kind) * weight)
            .sum()
    }

    fn bump(&mut self, kind: &str, count: i64) {
        match self.counts.iter_mut().find(|(k, _)| k == kind) {
            Some((_, v)) => *v += count,
            None => self.counts.push((kind.to_string(), count)),
        }
    }
}

// Value equality: order-independent, absent key == count 0
impl PartialEq for CostVector {
    fn eq(&self, other: &Self) -> bool {
        self.counts.iter().all(|(k, v)| other.count(k) == *v)
            && other.counts.iter().all(|(k, v)| self.count(k) == *v)
    }
}

impl Eq for CostVector {}

impl Add for CostVector {
    type Output = CostVector;

    fn add(self, rhs: CostVector) -> CostVector {
        CostVector::add(&self, &rhs)
    }
}

impl Add for &CostVector {
    type Output = CostVector;

    fn add(self, rhs: &CostVector) -> CostVector {
        CostVector::add(self, rhs)
    }
}

impl Sub for CostVector {
    type Output = CostVector;

    fn sub(self, rhs: CostVector) -> CostVector {
        self.subtract(&rhs)
    }
}

impl Mul<i64> for CostVector {
    type Output = CostVector;

    fn mul(self, k: i64) -> CostVector {
        self.scale(k)
    }
}

impl Mul<i64> for &CostVector {
    type Output = CostVector;

    fn mul(self, k: i64) -> CostVector {
        self.scale(k)
    }
}

impl fmt::Display for CostVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.counts.is_empty() {
            return write!(f, "0");
        }
        let terms: Vec<String> = self
            .counts
            .iter()
            .map(|(k, v)| format!("{}{}", v, k))
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}

/// Weight assignment for collapsing a [`CostVector`] to a scalar
///
/// Kinds added via [`Weights::unit`] carry weight 1; [`Weights::and`]
/// overrides or extends with explicit weights. Kinds not named weigh 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Weights {
    entries: Vec<(String, i64)>,
}

impl Weights {
    /// Weight set assigning 1 to each of the given kinds
    pub fn unit<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: kinds.into_iter().map(|k| (k.into(), 1)).collect(),
        }
    }

    /// Set an explicit weight for `kind`, overriding any earlier value
    pub fn and(mut self, kind: &str, weight: i64) -> Self {
        match self.entries.iter_mut().find(|(k, _)| k == kind) {
            Some((_, w)) => *w = weight,
            None => self.entries.push((kind.to_string(), weight)),
        }
        self
    }

    /// Iterate over (kind, weight) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(k, w)| (k.as_str(), *w))
    }
}
