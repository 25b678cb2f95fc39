use crate::{data::case_set::CaseSet, network::network::Network};

/// Runs a network over every case and keeps one output per case.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    results: Vec<f64>,
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator::default()
    }

    /// Evaluates `cases` in order; `results()[i]` is the output for case `i`.
    ///
    /// Weights are only read. The result buffer is replaced wholesale.
    ///
    /// # Panics
    /// Panics if the case width differs from the network's input count.
    pub fn run(&mut self, network: &mut Network, cases: &CaseSet) -> &[f64] {
        self.results.clear();
        self.results.extend(cases.inputs().iter().map(|input| network.evaluate(input)));
        &self.results
    }

    pub fn results(&self) -> &[f64] {
        &self.results
    }
}
