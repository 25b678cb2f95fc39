use serde::{Serialize, Deserialize};
use std::fmt;

use crate::train::{outcome::TrainingOutcome, train_config::TrainConfig};

/// Why a training run stopped. More than one can hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    MaxIterationsReached,
    ErrorThresholdReached,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::MaxIterationsReached => f.write_str("Max iterations reached."),
            StopReason::ErrorThresholdReached => f.write_str("Error threshold reached."),
        }
    }
}

/// Summary of a finished training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub reasons: Vec<StopReason>,
    pub iterations: usize,
    pub max_iterations: usize,
    pub error: f64,
    pub error_threshold: f64,
}

impl TrainingReport {
    pub fn new(outcome: &TrainingOutcome, config: &TrainConfig) -> TrainingReport {
        let mut reasons = Vec::new();
        if outcome.iterations >= config.max_iterations {
            reasons.push(StopReason::MaxIterationsReached);
        }
        if outcome.error < config.error_threshold {
            reasons.push(StopReason::ErrorThresholdReached);
        }

        TrainingReport {
            reasons,
            iterations: outcome.iterations,
            max_iterations: config.max_iterations,
            error: outcome.error,
            error_threshold: config.error_threshold,
        }
    }

    pub fn converged(&self) -> bool {
        self.reasons.contains(&StopReason::ErrorThresholdReached)
    }

    pub fn exhausted(&self) -> bool {
        self.reasons.contains(&StopReason::MaxIterationsReached)
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training Exit Information:")?;
        for reason in &self.reasons {
            writeln!(f, "Reason: {reason}")?;
        }
        writeln!(f, "Iterations reached: {}", self.iterations)?;
        write!(f, "Average Error reached: {}", self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(iterations: usize, error: f64) -> TrainingReport {
        TrainingReport::new(
            &TrainingOutcome { iterations, error },
            &TrainConfig::new(100, 0.01, 0.3),
        )
    }

    #[test]
    fn converged_run() {
        let r = report(42, 0.005);
        assert_eq!(r.reasons, vec![StopReason::ErrorThresholdReached]);
        assert!(r.converged());
        assert!(!r.exhausted());
    }

    #[test]
    fn exhausted_run() {
        let r = report(100, 0.2);
        assert_eq!(r.reasons, vec![StopReason::MaxIterationsReached]);
        assert!(!r.converged());
    }

    #[test]
    fn both_reasons_when_last_iteration_converges() {
        let r = report(100, 0.001);
        assert_eq!(
            r.reasons,
            vec![StopReason::MaxIterationsReached, StopReason::ErrorThresholdReached]
        );
    }

    #[test]
    fn zero_budget_counts_as_exhausted() {
        let r = TrainingReport::new(
            &TrainingOutcome { iterations: 0, error: 1.0 },
            &TrainConfig::new(0, 2e-4, 0.3),
        );
        assert_eq!(r.reasons, vec![StopReason::MaxIterationsReached]);
    }

    #[test]
    fn renders_exit_information() {
        let text = report(100, 0.001).to_string();
        assert_eq!(
            text,
            "Training Exit Information:\n\
             Reason: Max iterations reached.\n\
             Reason: Error threshold reached.\n\
             Iterations reached: 100\n\
             Average Error reached: 0.001"
        );
    }
}
