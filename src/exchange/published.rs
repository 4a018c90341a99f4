//! Published formula costs
//!
//! Arithmetic in GF(p²) expressed as GF(p) operation counts, and the
//! per-degree cost triples from the SIDH paper of De Feo, Jao and
//! Plût ("DJP"). Kinds: `m` multiplication, `a` addition, `mod`
//! modular reduction, `i` inversion.
//!
//! These are data fed into the search, not computed by it; plugging in
//! a different formula set means building the same shapes from your
//! own [`CostVector`]s (typically via [`crate::formula::total_cost`]).

use std::collections::BTreeMap;

use super::Party;
use crate::cost::CostVector;

/// One GF(p²) addition
pub fn fp2_add() -> CostVector {
    CostVector::of("a", 2).and("mod", 2)
}

/// One GF(p²) multiplication (Karatsuba-style, 3 base multiplications)
pub fn fp2_mul() -> CostVector {
    CostVector::of("m", 3).and("a", 4).and("mod", 2)
}

/// One GF(p²) squaring
pub fn fp2_square() -> CostVector {
    CostVector::of("m", 2).and("a", 3).and("mod", 2)
}

/// One GF(p²) inversion
pub fn fp2_invert() -> CostVector {
    CostVector::of("i", 1).and("m", 4).and("a", 1).and("mod", 2)
}

/// The DJP per-degree cost table
///
/// Keyed by isogeny degree; each entry is the (mul-step, isogeny-step,
/// next-curve) triple in GF(p²) operations.
pub fn djp() -> BTreeMap<u32, Party> {
    BTreeMap::from([
        (
            2,
            Party::new(
                fp2_mul() * 3 + fp2_square() * 2,
                fp2_mul() * 2 + fp2_square(),
                CostVector::new(),
            ),
        ),
        (
            3,
            Party::new(
                fp2_mul() * 7 + fp2_square() * 4,
                fp2_mul() * 4 + fp2_square() * 2,
                CostVector::new(),
            ),
        ),
        (
            4,
            Party::new(
                fp2_mul() * 6 + fp2_square() * 4,
                fp2_mul() * 6 + fp2_square(),
                CostVector::new(),
            ),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fp2_vectors() {
        assert_eq!(fp2_mul().to_string(), "3m + 4a + 2mod");
        assert_eq!(fp2_invert().count("i"), 1);
    }

    #[test]
    fn test_djp_degree_three() {
        let table = djp();
        let party = &table[&3];

        // 7M + 4S and 4M + 2S expanded to base operations.
        assert_eq!(
            party.mul,
            CostVector::of("m", 29).and("a", 40).and("mod", 22)
        );
        assert_eq!(
            party.isogeny,
            CostVector::of("m", 16).and("a", 22).and("mod", 12)
        );
        assert!(party.next_curve.is_zero());
    }

    #[test]
    fn test_djp_covers_small_degrees() {
        let table = djp();
        assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }
}
