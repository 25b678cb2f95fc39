use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::math::matrix::{uniform_sample, Matrix};
use crate::network::topology::Topology;

/// Connection weights of an A-B-1 network.
///
/// - `w_kj` — input `k` to hidden `j`, shape A×B
/// - `w_j0` — hidden `j` to the output unit, length B
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub w_kj: Matrix,
    pub w_j0: Vec<f64>,
}

/// How the initial weights are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WeightInit {
    /// Every weight drawn from `low + u * (high - low)`, `u` uniform on [0, 1).
    /// A `seed` makes the draw reproducible.
    Random { low: f64, high: f64, seed: Option<u64> },
    /// The hand-tuned 2-2-1 set, see [`Weights::fixed_2_2`].
    Fixed,
}

impl Weights {
    /// Builds weights from explicit values.
    ///
    /// # Panics
    /// Panics if `w_j0` does not have one entry per column of `w_kj`.
    pub fn from_parts(w_kj: Vec<Vec<f64>>, w_j0: Vec<f64>) -> Weights {
        let w_kj = Matrix::from_data(w_kj);
        assert_eq!(
            w_kj.cols,
            w_j0.len(),
            "w_j0 needs one weight per hidden unit"
        );
        Weights { w_kj, w_j0 }
    }

    /// Draws every weight uniformly from `[low, high)`, input layer first.
    pub fn random<R: Rng + ?Sized>(topology: Topology, low: f64, high: f64, rng: &mut R) -> Weights {
        let w_kj = Matrix::uniform(topology.inputs, topology.hidden, low, high, rng);
        let w_j0 = (0..topology.hidden)
            .map(|_| uniform_sample(rng, low, high))
            .collect();
        Weights { w_kj, w_j0 }
    }

    /// The documented 2-2-1 test set:
    /// `w_kj = [[0.76, 0.9], [0.9, 0.76]]`, `w_j0 = [0.2, 0.2]`.
    pub fn fixed_2_2() -> Weights {
        Weights::from_parts(vec![vec![0.76, 0.9], vec![0.9, 0.76]], vec![0.2, 0.2])
    }

    /// Applies an initialization policy to `topology`.
    ///
    /// # Panics
    /// Panics for `WeightInit::Fixed` on any topology other than 2-2-1;
    /// configuration validation rejects that combination first.
    pub fn initialize(topology: Topology, init: WeightInit) -> Weights {
        match init {
            WeightInit::Random { low, high, seed: Some(seed) } => {
                Weights::random(topology, low, high, &mut StdRng::seed_from_u64(seed))
            }
            WeightInit::Random { low, high, seed: None } => {
                Weights::random(topology, low, high, &mut rand::thread_rng())
            }
            WeightInit::Fixed => {
                assert!(
                    topology.inputs == 2 && topology.hidden == 2,
                    "fixed weights exist only for 2-2-1, got {topology}"
                );
                Weights::fixed_2_2()
            }
        }
    }

    pub fn topology(&self) -> Topology {
        Topology::new(self.w_kj.rows, self.w_kj.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_set_matches_documented_values() {
        let w = Weights::initialize(Topology::new(2, 2), WeightInit::Fixed);
        assert_eq!(w.w_kj.data, vec![vec![0.76, 0.9], vec![0.9, 0.76]]);
        assert_eq!(w.w_j0, vec![0.2, 0.2]);
    }

    #[test]
    #[should_panic(expected = "2-2-1")]
    fn fixed_set_rejects_other_topologies() {
        Weights::initialize(Topology::new(3, 2), WeightInit::Fixed);
    }

    #[test]
    fn seeded_random_init_is_reproducible_and_in_range() {
        let init = WeightInit::Random { low: -1.5, high: 1.5, seed: Some(9) };
        let a = Weights::initialize(Topology::new(3, 4), init);
        let b = Weights::initialize(Topology::new(3, 4), init);
        assert_eq!(a, b);
        assert_eq!(a.topology(), Topology::new(3, 4));
        assert!(a.w_kj.data.iter().flatten().chain(a.w_j0.iter())
            .all(|&x| (-1.5..=1.5).contains(&x)));
    }

    #[test]
    fn different_seeds_differ() {
        let t = Topology::new(2, 3);
        let a = Weights::initialize(t, WeightInit::Random { low: -1.0, high: 1.0, seed: Some(1) });
        let b = Weights::initialize(t, WeightInit::Random { low: -1.0, high: 1.0, seed: Some(2) });
        assert_ne!(a, b);
    }
}
