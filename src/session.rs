//! End-to-end control flow: configuration, allocation, initialization,
//! optional training, then evaluation of every case.

use crate::{
    activation::activation::ActivationFunction,
    config::{Mode, RunConfig},
    data::case_set::CaseSet,
    error::Result,
    eval::evaluator::Evaluator,
    network::{network::Network, weights::Weights},
    train::{report::TrainingReport, trainer::Trainer},
};

/// Everything a finished run exposes to the presentation layer.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub config: RunConfig,
    pub cases: CaseSet,
    pub network: Network,
    /// Present only in training mode.
    pub report: Option<TrainingReport>,
    /// One output per case, in case order.
    pub results: Vec<f64>,
}

/// Validates `config` and carries out the run it describes.
pub fn execute(config: &RunConfig) -> Result<RunSummary> {
    config.validate()?;
    let topology = config.topology();

    let cases = match config.mode {
        Mode::Train => CaseSet::from_truth_table(config.truth_table),
        Mode::Run => CaseSet::binary(config.inputs),
    };
    log::info!("allocated {topology} network for {} cases", cases.len());

    let init = config.weight_init();
    log::info!("initializing weights: {init:?}");
    let mut network = Network::new(Weights::initialize(topology, init), ActivationFunction::Sigmoid);

    let report = match config.mode {
        Mode::Train => {
            let train_config = config.train_config();
            let outcome = Trainer::new(topology).run(&mut network, &cases, &train_config);
            Some(TrainingReport::new(&outcome, &train_config))
        }
        Mode::Run => {
            log::info!("inference only, skipping training");
            None
        }
    };

    let mut evaluator = Evaluator::new();
    let results = evaluator.run(&mut network, &cases).to_vec();

    Ok(RunSummary {
        config: config.clone(),
        cases,
        network,
        report,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::InitPolicy, data::truth_table::TruthTable};

    #[test]
    fn run_mode_skips_training() {
        let config = RunConfig {
            mode: Mode::Run,
            weight_init: InitPolicy::Fixed,
            ..RunConfig::default()
        };
        let summary = execute(&config).unwrap();
        assert!(summary.report.is_none());
        assert!(summary.cases.targets().is_none());
        assert_eq!(summary.results.len(), 4);
        assert_eq!(summary.network.weights(), &Weights::fixed_2_2());
    }

    #[test]
    fn train_mode_reports_and_evaluates() {
        let config = RunConfig {
            weight_init: InitPolicy::Fixed,
            truth_table: TruthTable::Or,
            max_iterations: 50,
            ..RunConfig::default()
        };
        let summary = execute(&config).unwrap();
        let report = summary.report.unwrap();
        assert_eq!(report.iterations, 50);
        assert!(report.exhausted());
        assert_eq!(summary.results.len(), 4);
        assert_ne!(summary.network.weights(), &Weights::fixed_2_2());
    }

    #[test]
    fn seeded_runs_repeat_exactly() {
        let config = RunConfig {
            inputs: 3,
            hidden: 4,
            truth_table: TruthTable::XorAnd,
            seed: Some(2024),
            max_iterations: 200,
            ..RunConfig::default()
        };
        let a = execute(&config).unwrap();
        let b = execute(&config).unwrap();
        assert_eq!(a.results, b.results);
        assert_eq!(a.results.len(), 8);
    }

    #[test]
    fn invalid_config_stops_before_numeric_work() {
        let config = RunConfig { inputs: 0, ..RunConfig::default() };
        assert!(execute(&config).is_err());
    }
}
