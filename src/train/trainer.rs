use crate::{
    data::case_set::CaseSet,
    math::matrix::Matrix,
    network::{network::Network, topology::Topology},
    train::{
        outcome::{TrainingOutcome, INITIAL_ERROR},
        train_config::TrainConfig,
    },
};

const PROGRESS_EVERY: usize = 10_000;

/// Full-batch backpropagation for an A-B-1 network.
///
/// Owns the per-iteration gradient accumulators (`deltaWKJ`, `deltaWJ0`) and
/// the hidden-layer error signals, sized once for a topology and reused on
/// every iteration.
#[derive(Debug, Clone)]
pub struct Trainer {
    topology: Topology,
    delta_w_kj: Matrix,
    delta_w_j0: Vec<f64>,
    omega_j: Vec<f64>,
    psi_j: Vec<f64>,
}

impl Trainer {
    pub fn new(topology: Topology) -> Trainer {
        Trainer {
            topology,
            delta_w_kj: Matrix::zeros(topology.inputs, topology.hidden),
            delta_w_j0: vec![0.0; topology.hidden],
            omega_j: vec![0.0; topology.hidden],
            psi_j: vec![0.0; topology.hidden],
        }
    }

    /// Trains until the iteration budget is spent or the average error falls
    /// below the threshold, whichever comes first.
    ///
    /// Both conditions are checked before each iteration, so a zero budget
    /// leaves the weights untouched and reports [`INITIAL_ERROR`].
    /// Running out of iterations is a normal outcome, not an error.
    ///
    /// # Panics
    /// Panics if `cases` has no targets or its shapes disagree with the network.
    pub fn run(&mut self, network: &mut Network, cases: &CaseSet, config: &TrainConfig) -> TrainingOutcome {
        log::info!(
            "training {} on {} cases: max_iterations={} error_threshold={} lambda={}",
            network.topology(),
            cases.len(),
            config.max_iterations,
            config.error_threshold,
            config.learning_rate
        );

        let mut iteration = 0;
        let mut error = INITIAL_ERROR;

        while iteration < config.max_iterations && error >= config.error_threshold {
            error = self.iterate(network, cases, config.learning_rate);
            iteration += 1;

            if iteration % PROGRESS_EVERY == 0 {
                log::debug!("iteration {iteration}: average error {error:e}");
            }
        }

        log::info!("training stopped after {iteration} iterations, average error {error:e}");
        TrainingOutcome { iterations: iteration, error }
    }

    /// One full-batch iteration: clears the accumulators, backpropagates every
    /// case in order, then applies the summed deltas once.
    ///
    /// Returns the average of `0.5 * (target - output)^2` over the cases,
    /// measured with the weights as they were before this iteration's update.
    pub fn iterate(&mut self, network: &mut Network, cases: &CaseSet, learning_rate: f64) -> f64 {
        self.check_shapes(network, cases);
        self.reset();

        let mut total_error = 0.0;
        for (input, target) in cases.training_pairs() {
            total_error += self.accumulate_case(network, input, target, learning_rate);
        }
        self.apply(network);

        total_error / cases.len() as f64
    }

    /// Zeroes the gradient accumulators.
    pub fn reset(&mut self) {
        self.delta_w_kj.fill(0.0);
        self.delta_w_j0.iter_mut().for_each(|d| *d = 0.0);
    }

    /// Runs one case forward and adds its weight deltas to the accumulators.
    /// The network's weights are not modified.
    ///
    /// Returns the case's error `0.5 * omega0^2`.
    pub fn accumulate_case(&mut self, network: &mut Network, input: &[f64], target: f64, learning_rate: f64) -> f64 {
        let output = network.evaluate(input);
        let f = network.activation();

        let omega_0 = target - output;
        let case_error = 0.5 * omega_0 * omega_0;
        let psi_0 = omega_0 * f.derivative(network.output_sum());

        let a = network.inputs();
        let h = network.hidden();
        let theta_j = network.hidden_sums();
        let w_j0 = &network.weights().w_j0;

        for j in 0..self.topology.hidden {
            self.delta_w_j0[j] += learning_rate * psi_0 * h[j];

            self.omega_j[j] = psi_0 * w_j0[j];
            self.psi_j[j] = self.omega_j[j] * f.derivative(theta_j[j]);

            for k in 0..self.topology.inputs {
                self.delta_w_kj[(k, j)] += learning_rate * a[k] * self.psi_j[j];
            }
        }

        case_error
    }

    /// Adds the accumulated deltas into the network's weights.
    pub fn apply(&self, network: &mut Network) {
        assert_eq!(network.topology(), self.topology, "trainer and network shapes differ");
        let weights = network.weights_mut();

        for j in 0..self.topology.hidden {
            weights.w_j0[j] += self.delta_w_j0[j];
        }
        weights.w_kj += &self.delta_w_kj;
    }

    /// Accumulated hidden-to-output deltas of the current iteration.
    pub fn delta_w_j0(&self) -> &[f64] {
        &self.delta_w_j0
    }

    /// Accumulated input-to-hidden deltas of the current iteration.
    pub fn delta_w_kj(&self) -> &Matrix {
        &self.delta_w_kj
    }

    fn check_shapes(&self, network: &Network, cases: &CaseSet) {
        assert_eq!(network.topology(), self.topology, "trainer and network shapes differ");
        assert_eq!(
            cases.width(),
            self.topology.inputs,
            "case width must equal the number of input units"
        );
    }
}
