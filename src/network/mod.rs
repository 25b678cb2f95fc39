pub mod network;
pub mod topology;
pub mod weights;

pub use network::Network;
pub use topology::Topology;
pub use weights::{WeightInit, Weights};
