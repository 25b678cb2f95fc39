//! End-to-end training runs on the two-input truth tables.

use ab1_net::{
    execute, ActivationFunction, CaseSet, Evaluator, InitPolicy, Mode, Network, RunConfig,
    StopReason, TrainConfig, Trainer, TrainingReport, TruthTable, Weights,
};

const MAX_ITERATIONS: usize = 100_000;
const ERROR_THRESHOLD: f64 = 2e-4;
const LAMBDA: f64 = 0.3;

/// An asymmetric 2-4-1 starting point. The units carry no bias, so a start
/// whose hidden units mirror each other can never separate XOR or AND.
fn asymmetric_2_4_1() -> Network {
    let weights = Weights::from_parts(
        vec![
            vec![-0.18, -1.45, -0.51, 0.37],
            vec![0.04, -1.31, 1.46, 0.87],
        ],
        vec![1.42, -1.19, -0.7, -1.38],
    );
    Network::new(weights, ActivationFunction::Sigmoid)
}

fn train_and_evaluate(mut network: Network, table: TruthTable) -> (TrainingReport, Vec<f64>) {
    let cases = CaseSet::from_truth_table(table);
    let config = TrainConfig::new(MAX_ITERATIONS, ERROR_THRESHOLD, LAMBDA);
    let outcome = Trainer::new(network.topology()).run(&mut network, &cases, &config);
    let results = Evaluator::new().run(&mut network, &cases).to_vec();
    (TrainingReport::new(&outcome, &config), results)
}

#[test]
fn xor_converges_before_budget() {
    let (report, out) = train_and_evaluate(asymmetric_2_4_1(), TruthTable::Xor);

    assert_eq!(report.reasons, vec![StopReason::ErrorThresholdReached]);
    assert!(report.iterations < MAX_ITERATIONS);
    assert!(report.error < ERROR_THRESHOLD);

    assert!(out[0] < 0.1, "(0,0) -> {}", out[0]);
    assert!(out[1] > 0.9, "(0,1) -> {}", out[1]);
    assert!(out[2] > 0.9, "(1,0) -> {}", out[2]);
    assert!(out[3] < 0.1, "(1,1) -> {}", out[3]);
}

#[test]
fn and_converges_before_budget() {
    let (report, out) = train_and_evaluate(asymmetric_2_4_1(), TruthTable::And);

    assert!(report.converged());
    assert!(!report.exhausted());
    assert!(out[3] > 0.9, "(1,1) -> {}", out[3]);
    for (i, &y) in out[..3].iter().enumerate() {
        assert!(y < 0.1, "case {i} -> {y}");
    }
}

#[test]
fn symmetric_fixed_start_cannot_learn_xor() {
    let network = Network::new(Weights::fixed_2_2(), ActivationFunction::Sigmoid);
    let (report, out) = train_and_evaluate(network, TruthTable::Xor);

    assert_eq!(report.iterations, MAX_ITERATIONS);
    assert_eq!(report.reasons, vec![StopReason::MaxIterationsReached]);
    assert!(report.error > ERROR_THRESHOLD);
    // Mirrored inputs stay mirrored: the hidden units never diverge enough.
    assert!((out[1] - out[2]).abs() < 1e-9);
}

#[test]
fn fixed_start_learns_some_of_or() {
    let config = RunConfig {
        weight_init: InitPolicy::Fixed,
        truth_table: TruthTable::Or,
        max_iterations: 2_000,
        ..RunConfig::default()
    };
    let first = execute(&RunConfig { max_iterations: 1, ..config.clone() }).unwrap();
    let later = execute(&config).unwrap();

    let first_error = first.report.unwrap().error;
    let later_error = later.report.unwrap().error;
    assert!(later_error < first_error, "{later_error} !< {first_error}");
}

#[test]
fn zero_budget_leaves_network_untouched() {
    let config = RunConfig {
        weight_init: InitPolicy::Fixed,
        max_iterations: 0,
        ..RunConfig::default()
    };
    let summary = execute(&config).unwrap();
    let report = summary.report.unwrap();

    assert_eq!(report.iterations, 0);
    assert_eq!(report.error, 1.0);
    assert_eq!(summary.network.weights(), &Weights::fixed_2_2());
}

#[test]
fn one_iteration_budget_is_honoured_for_any_threshold() {
    for threshold in [0.0, 2e-4, 0.9] {
        let config = RunConfig {
            max_iterations: 1,
            error_threshold: threshold,
            seed: Some(5),
            ..RunConfig::default()
        };
        let report = execute(&config).unwrap().report.unwrap();
        assert_eq!(report.iterations, 1, "threshold {threshold}");
    }
}

#[test]
fn inference_reuses_initial_weights() {
    let config = RunConfig {
        mode: Mode::Run,
        weight_init: InitPolicy::Fixed,
        ..RunConfig::default()
    };
    let summary = execute(&config).unwrap();

    let mut reference = Network::new(Weights::fixed_2_2(), ActivationFunction::Sigmoid);
    for (input, &y) in summary.cases.inputs().iter().zip(&summary.results) {
        assert_eq!(reference.evaluate(input).to_bits(), y.to_bits());
    }
}
