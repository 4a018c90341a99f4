//! Per-operator unit-cost configuration
//!
//! Maps each [`OpKind`] to the [`CostVector`] one node of that kind
//! contributes during counting. The standard table uses abstract kinds
//! ("add", "mul", "square", "inv"); callers studying a concrete field
//! representation override entries with their own vectors.

use super::OpKind;
use crate::cost::CostVector;

/// Unit cost per operator kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpCostTable {
    add: CostVector,
    sub: CostVector,
    neg: CostVector,
    mul: CostVector,
    square: CostVector,
    div: CostVector,
}

impl OpCostTable {
    /// The standard table
    ///
    /// addition → {add:1}, subtraction → {add:1}, negation → free,
    /// multiplication → {mul:1}, squaring → {square:1},
    /// division → {mul:1, inv:1}.
    pub fn standard() -> Self {
        Self {
            add: CostVector::of("add", 1),
            sub: CostVector::of("add", 1),
            neg: CostVector::new(),
            mul: CostVector::of("mul", 1),
            square: CostVector::of("square", 1),
            div: CostVector::of("mul", 1).and("inv", 1),
        }
    }

    /// Replace the unit cost for one operator kind
    pub fn with(mut self, kind: OpKind, cost: CostVector) -> Self {
        match kind {
            OpKind::Add => self.add = cost,
            OpKind::Sub => self.sub = cost,
            OpKind::Neg => self.neg = cost,
            OpKind::Mul => self.mul = cost,
            OpKind::Square => self.square = cost,
            OpKind::Div => self.div = cost,
        }
        self
    }

    /// Unit cost one node of `kind` contributes
    pub fn unit_cost(&self, kind: OpKind) -> &CostVector {
        match kind {
            OpKind::Add => &self.add,
            OpKind::Sub => &self.sub,
            OpKind::Neg => &self.neg,
            OpKind::Mul => &self.mul,
            OpKind::Square => &self.square,
            OpKind::Div => &self.div,
        }
    }
}

impl Default for OpCostTable {
    fn default() -> Self {
        Self::standard()
    }
}
