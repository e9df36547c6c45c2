pub mod activation;
pub mod error;
pub mod graph;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod report;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_derivative};
pub use error::{ConfigError, NetworkError, Result};
pub use graph::{Edge, Node, NodeId};
pub use network::{parse_hidden_layers, Activations, Network, NetworkSpec};
pub use optim::sgd::Sgd;
pub use train::{train_loop, EpochStats, TrainConfig};
pub use data::{Dataset, Example, Task};
pub use report::format_report;
