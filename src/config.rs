use serde::{Serialize, Deserialize};

use crate::{
    data::truth_table::TruthTable,
    error::{Ab1Error, Result},
    network::{topology::Topology, weights::WeightInit},
    train::train_config::TrainConfig,
};

/// Largest input count whose `2^A` binary cases are enumerated.
pub const MAX_INPUTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Train on the truth table, then run every case.
    Train,
    /// Run every case with the initial weights; no targets.
    Run,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitPolicy {
    Random,
    Fixed,
}

/// Everything a run needs, loadable from JSON. Absent fields fall back to
/// [`RunConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub inputs: usize,
    pub hidden: usize,
    /// Lower bound of the random weight range.
    pub low: f64,
    /// Upper bound of the random weight range.
    pub high: f64,
    pub max_iterations: usize,
    pub error_threshold: f64,
    /// Scale applied to every weight delta (`lambda`).
    pub learning_rate: f64,
    pub weight_init: InitPolicy,
    /// Seed for the random draw; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub mode: Mode,
    pub truth_table: TruthTable,
    pub show_input_table: bool,
    pub show_truth_table: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            inputs: 2,
            hidden: 2,
            low: -1.5,
            high: 1.5,
            max_iterations: 100_000,
            error_threshold: 2e-4,
            learning_rate: 0.3,
            weight_init: InitPolicy::Random,
            seed: None,
            mode: Mode::Train,
            truth_table: TruthTable::Xor,
            show_input_table: true,
            show_truth_table: true,
        }
    }
}

impl RunConfig {
    /// Parses a JSON document and validates it.
    pub fn from_json(json: &str) -> Result<RunConfig> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load_json(path: &str) -> Result<RunConfig> {
        let text = std::fs::read_to_string(path).map_err(|source| Ab1Error::ConfigIo {
            path: path.to_string(),
            source,
        })?;
        RunConfig::from_json(&text)
    }

    /// Rejects every combination the numeric core cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.inputs == 0 || self.hidden == 0 {
            return Err(Ab1Error::InvalidConfig(format!(
                "inputs and hidden must be positive, got {}-{}-1",
                self.inputs, self.hidden
            )));
        }
        if self.inputs > MAX_INPUTS {
            return Err(Ab1Error::InvalidConfig(format!(
                "at most {MAX_INPUTS} inputs can be enumerated, got {}",
                self.inputs
            )));
        }
        if !self.low.is_finite() || !self.high.is_finite() || self.low > self.high {
            return Err(Ab1Error::InvalidConfig(format!(
                "weight range must be finite with low <= high, got [{}, {}]",
                self.low, self.high
            )));
        }
        if !self.learning_rate.is_finite() {
            return Err(Ab1Error::InvalidConfig(format!(
                "learning rate must be finite, got {}",
                self.learning_rate
            )));
        }
        if !self.error_threshold.is_finite() || self.error_threshold < 0.0 {
            return Err(Ab1Error::InvalidConfig(format!(
                "error threshold must be finite and non-negative, got {}",
                self.error_threshold
            )));
        }
        if self.mode == Mode::Train && self.truth_table.width() != self.inputs {
            return Err(Ab1Error::TruthTableWidth {
                table: self.truth_table.name(),
                expected: self.truth_table.width(),
                actual: self.inputs,
            });
        }
        if self.weight_init == InitPolicy::Fixed && (self.inputs, self.hidden) != (2, 2) {
            return Err(Ab1Error::FixedWeightsTopology {
                inputs: self.inputs,
                hidden: self.hidden,
            });
        }
        Ok(())
    }

    /// Number of cases: every binary combination of the inputs.
    pub fn num_cases(&self) -> usize {
        1 << self.inputs
    }

    /// # Panics
    /// Panics if the config has not passed [`RunConfig::validate`].
    pub fn topology(&self) -> Topology {
        Topology::new(self.inputs, self.hidden)
    }

    pub fn weight_init(&self) -> WeightInit {
        match self.weight_init {
            InitPolicy::Random => WeightInit::Random {
                low: self.low,
                high: self.high,
                seed: self.seed,
            },
            InitPolicy::Fixed => WeightInit::Fixed,
        }
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.max_iterations, self.error_threshold, self.learning_rate)
    }
}
