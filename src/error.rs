use thiserror::Error;

/// Validation failures raised by the network core.
///
/// Every variant is detected before any weight is touched, so a failed call
/// leaves the network exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("invalid weight range: min {min} must be below max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("input size mismatch: network expects {expected} inputs, got {got}")]
    InputSizeMismatch { expected: usize, got: usize },

    #[error("activations cover {got} nodes but the network has {expected}")]
    ActivationsMismatch { expected: usize, got: usize },

    #[error("target size mismatch: network produces {expected} outputs, got {got} targets")]
    TargetSizeMismatch { expected: usize, got: usize },
}

/// Errors from the outer surfaces: spec/dataset files and layer-list parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid hidden layer count: {0:?}")]
    InvalidLayerCount(String),

    #[error("invalid neuron count: {0:?}")]
    InvalidNeuronCount(String),

    #[error("hidden layer count {count} does not match {given} neuron counts")]
    LayerCountMismatch { count: usize, given: usize },

    #[error("inconsistent dataset: {0}")]
    InconsistentDataset(String),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
