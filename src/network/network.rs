use crate::activation::activation::ActivationFunction;
use crate::network::topology::Topology;
use crate::network::weights::Weights;

/// An A-B-1 network: its weights plus the activation buffers of the most
/// recent forward pass.
///
/// The buffers are allocated once and overwritten by every call to
/// [`Network::evaluate`]. The trainer reads them back during
/// backpropagation, which is why evaluation takes `&mut self`.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    activation: ActivationFunction,
    weights: Weights,
    a: Vec<f64>,
    theta_j: Vec<f64>,
    h: Vec<f64>,
    theta_0: f64,
    f_0: f64,
}

impl Network {
    pub fn new(weights: Weights, activation: ActivationFunction) -> Network {
        let topology = weights.topology();
        Network {
            topology,
            activation,
            weights,
            a: vec![0.0; topology.inputs],
            theta_j: vec![0.0; topology.hidden],
            h: vec![0.0; topology.hidden],
            theta_0: 0.0,
            f_0: 0.0,
        }
    }

    /// Forward pass for one input vector; returns the output activation `F0`.
    ///
    /// Both weighted sums start from `0.0` and add terms in ascending index
    /// order (`k` for hidden units, `j` for the output), so results are
    /// bit-for-bit repeatable.
    ///
    /// # Panics
    /// Panics if `input.len()` differs from the number of input units.
    pub fn evaluate(&mut self, input: &[f64]) -> f64 {
        assert_eq!(
            input.len(),
            self.topology.inputs,
            "input vector length must equal the number of input units"
        );
        self.a.copy_from_slice(input);

        let w_kj = &self.weights.w_kj;
        for j in 0..self.topology.hidden {
            let mut theta = 0.0;
            for k in 0..self.topology.inputs {
                theta += self.a[k] * w_kj[(k, j)];
            }
            self.theta_j[j] = theta;
            self.h[j] = self.activation.function(theta);
        }

        let mut theta_0 = 0.0;
        for j in 0..self.topology.hidden {
            theta_0 += self.h[j] * self.weights.w_j0[j];
        }
        self.theta_0 = theta_0;
        self.f_0 = self.activation.function(theta_0);
        self.f_0
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub(crate) fn weights_mut(&mut self) -> &mut Weights {
        &mut self.weights
    }

    /// Input activations `a` loaded by the last forward pass.
    pub fn inputs(&self) -> &[f64] {
        &self.a
    }

    /// Hidden pre-activations `thetaJ` of the last forward pass.
    pub fn hidden_sums(&self) -> &[f64] {
        &self.theta_j
    }

    /// Hidden activations `h` of the last forward pass.
    pub fn hidden(&self) -> &[f64] {
        &self.h
    }

    /// Output pre-activation `theta0` of the last forward pass.
    pub fn output_sum(&self) -> f64 {
        self.theta_0
    }

    /// Output activation `F0` of the last forward pass.
    pub fn output(&self) -> f64 {
        self.f_0
    }
}
