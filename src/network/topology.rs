use serde::{Serialize, Deserialize};
use std::fmt;

/// Shape of an A-B-1 network: `inputs` (A) and `hidden` (B) units feeding one
/// output unit.
///
/// Both counts are positive; `Topology::new` is the checked constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub inputs: usize,
    pub hidden: usize,
}

impl Topology {
    /// # Panics
    /// Panics if either count is zero.
    pub fn new(inputs: usize, hidden: usize) -> Topology {
        assert!(inputs >= 1, "an A-B-1 network needs at least one input unit");
        assert!(hidden >= 1, "an A-B-1 network needs at least one hidden unit");
        Topology { inputs, hidden }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-1", self.inputs, self.hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_a_b_1() {
        assert_eq!(Topology::new(3, 5).to_string(), "3-5-1");
    }

    #[test]
    #[should_panic(expected = "hidden unit")]
    fn zero_hidden_units_is_rejected() {
        Topology::new(2, 0);
    }
}
