use ab1_net::{ActivationFunction, CaseSet, Evaluator, Network, TrainConfig, Trainer, TrainingReport, TruthTable, Weights};

fn main() {
    // Bias-free units need an asymmetric start to separate XOR.
    let weights = Weights::from_parts(
        vec![
            vec![-0.18, -1.45, -0.51, 0.37],
            vec![0.04, -1.31, 1.46, 0.87],
        ],
        vec![1.42, -1.19, -0.7, -1.38],
    );
    let mut network = Network::new(weights, ActivationFunction::Sigmoid);
    let cases = CaseSet::from_truth_table(TruthTable::Xor);

    let config = TrainConfig::new(100_000, 2e-4, 0.3);
    let outcome = Trainer::new(network.topology()).run(&mut network, &cases, &config);
    println!("{}", TrainingReport::new(&outcome, &config));

    let mut evaluator = Evaluator::new();
    let outputs = evaluator.run(&mut network, &cases);
    for (input, output) in cases.inputs().iter().zip(outputs) {
        println!("Input: {:?} -> Output: {:.4}", input, output);
    }
}
