pub mod outcome;
pub mod report;
pub mod train_config;
pub mod trainer;

pub use outcome::TrainingOutcome;
pub use report::{StopReason, TrainingReport};
pub use train_config::TrainConfig;
pub use trainer::Trainer;
