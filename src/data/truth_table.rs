use serde::{Serialize, Deserialize};
use std::fmt;

/// Boolean function the network is trained to reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruthTable {
    Or,
    And,
    Xor,
    /// `(a0 XOR a1) AND a2`
    XorAnd,
}

impl TruthTable {
    /// Number of inputs the pattern is defined over.
    pub fn width(&self) -> usize {
        match self {
            TruthTable::Or | TruthTable::And | TruthTable::Xor => 2,
            TruthTable::XorAnd => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TruthTable::Or => "OR",
            TruthTable::And => "AND",
            TruthTable::Xor => "XOR",
            TruthTable::XorAnd => "XOR_AND",
        }
    }

    /// Target for one row of 0/1 inputs.
    ///
    /// # Panics
    /// Panics if `bits.len()` is not [`TruthTable::width`].
    pub fn target(&self, bits: &[bool]) -> f64 {
        assert_eq!(bits.len(), self.width(), "{} takes {} inputs", self.name(), self.width());
        let on = match self {
            TruthTable::Or => bits[0] || bits[1],
            TruthTable::And => bits[0] && bits[1],
            TruthTable::Xor => bits[0] ^ bits[1],
            TruthTable::XorAnd => (bits[0] ^ bits[1]) && bits[2],
        };
        if on { 1.0 } else { 0.0 }
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
