use serde::{Serialize, Deserialize};

/// Scalar activation applied by every hidden and output unit.
///
/// Only the logistic sigmoid is wired in. A linear (`f(x) = x`, `f'(x) = 1`)
/// variant is the natural next member of this enum should a network ever
/// need an unsquashed output unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    #[default]
    Sigmoid,
}

impl ActivationFunction {
    /// `f(x)`; for `Sigmoid` this is `1 / (1 + e^-x)`.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// `f'(x)` evaluated from the pre-activation `x`.
    ///
    /// The sigmoid uses the closed form `f(x) * (1 - f(x))`; training
    /// convergence is tuned against exactly this expression.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
        }
    }
}
