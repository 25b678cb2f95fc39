use serde::{Serialize, Deserialize};

/// Hyperparameters for a [`Trainer::run`](crate::train::Trainer::run).
///
/// # Fields
/// - `max_iterations`  — cap on full-batch iterations; `0` trains nothing
/// - `error_threshold` — training stops once the average error drops below this
/// - `learning_rate`   — `lambda`, the scale applied to every weight delta
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub max_iterations: usize,
    pub error_threshold: f64,
    pub learning_rate: f64,
}

impl TrainConfig {
    pub fn new(max_iterations: usize, error_threshold: f64, learning_rate: f64) -> Self {
        TrainConfig {
            max_iterations,
            error_threshold,
            learning_rate,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(100_000, 2e-4, 0.3)
    }
}
