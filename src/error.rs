//! Crate error type.
//!
//! Only the configuration boundary returns errors. Shape violations inside the
//! numeric core are programming errors and panic.

use thiserror::Error;

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, Ab1Error>;

#[derive(Debug, Error)]
pub enum Ab1Error {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("truth table {table} needs {expected} inputs, network has {actual}")]
    TruthTableWidth {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("fixed weights are only defined for a 2-2-1 network, got {inputs}-{hidden}-1")]
    FixedWeightsTopology { inputs: usize, hidden: usize },

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
