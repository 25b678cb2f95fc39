use serde::{Serialize, Deserialize};

/// Average error reported when no iteration has run yet.
pub const INITIAL_ERROR: f64 = 1.0;

/// Where a training run ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingOutcome {
    /// Number of full-batch iterations actually executed.
    pub iterations: usize,
    /// Average error of the last completed iteration, or [`INITIAL_ERROR`]
    /// if none ran.
    pub error: f64,
}
