use crate::activation::sigmoid_derivative;
use crate::error::{NetworkError, Result};
use crate::graph::NodeIndex;
use crate::network::activations::Activations;
use crate::network::network::Network;

/// Error signal per node for one backward pass. Input neurons and the bias
/// unit never receive one.
#[derive(Debug, Clone, PartialEq)]
pub struct Deltas {
    values: Vec<Option<f64>>,
}

impl Deltas {
    fn new(node_count: usize) -> Deltas {
        Deltas { values: vec![None; node_count] }
    }

    fn set(&mut self, node: NodeIndex, delta: f64) {
        self.values[node] = Some(delta);
    }

    pub fn get(&self, node: NodeIndex) -> Option<f64> {
        self.values[node]
    }
}

/// Computes the delta of every non-input neuron from the outputs of a
/// forward pass, reading the weights as they were before this pass.
///
/// Output layer: `(target - output) * output * (1 - output)`.
/// Hidden layers, last to first: the weighted sum of the downstream deltas
/// times `output * (1 - output)`.
pub fn compute_deltas(
    network: &Network,
    activations: &Activations,
    targets: &[f64],
) -> Result<Deltas> {
    if targets.len() != network.output_size() {
        return Err(NetworkError::TargetSizeMismatch {
            expected: network.output_size(),
            got: targets.len(),
        });
    }
    if activations.all().len() != network.node_count() {
        return Err(NetworkError::ActivationsMismatch {
            expected: network.node_count(),
            got: activations.all().len(),
        });
    }

    let mut deltas = Deltas::new(network.node_count());
    let last = network.layer_count() - 1;

    for (node, &target) in network.layer(last).zip(targets) {
        let output = activations.output(node);
        deltas.set(node, (target - output) * sigmoid_derivative(output));
    }

    // Empty when there are no hidden layers.
    for layer in (1..last).rev() {
        for node in network.layer(layer) {
            let downstream: f64 = network
                .outgoing(node)
                .iter()
                .filter_map(|&e| {
                    let edge = &network.edges()[e];
                    deltas.get(edge.to).map(|delta| edge.weight * delta)
                })
                .sum();
            deltas.set(node, downstream * sigmoid_derivative(activations.output(node)));
        }
    }

    Ok(deltas)
}
