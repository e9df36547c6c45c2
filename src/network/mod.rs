pub mod activations;
pub mod network;
pub mod spec;

pub use activations::Activations;
pub use network::Network;
pub use spec::{parse_hidden_layers, NetworkSpec};
