pub mod math;
pub mod activation;
pub mod network;
pub mod data;
pub mod train;
pub mod eval;
pub mod config;
pub mod error;
pub mod session;
pub mod report;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use network::{Network, Topology, WeightInit, Weights};
pub use data::{CaseSet, TruthTable};
pub use train::{StopReason, TrainConfig, Trainer, TrainingOutcome, TrainingReport};
pub use eval::Evaluator;
pub use config::{InitPolicy, Mode, RunConfig};
pub use error::{Ab1Error, Result};
pub use session::{execute, RunSummary};
