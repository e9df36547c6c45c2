use std::ops::Range;
use crate::graph::NodeIndex;

/// Node outputs produced by one forward pass, indexed by node arena position.
///
/// The bias slot is set to 1.0 on creation and never written afterwards.
/// Backpropagation consumes this value, so it can only run against outputs
/// that a forward pass actually produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Activations {
    outputs: Vec<f64>,
    output_layer: Range<usize>,
}

impl Activations {
    pub(crate) fn new(node_count: usize, bias: NodeIndex, output_layer: Range<usize>) -> Activations {
        let mut outputs = vec![0.0; node_count];
        outputs[bias] = 1.0;
        Activations { outputs, output_layer }
    }

    pub(crate) fn set(&mut self, node: NodeIndex, value: f64) {
        self.outputs[node] = value;
    }

    /// Output of a single node.
    pub fn output(&self, node: NodeIndex) -> f64 {
        self.outputs[node]
    }

    /// Outputs of every node, in arena order.
    pub fn all(&self) -> &[f64] {
        &self.outputs
    }

    /// Outputs of the final layer, in position order.
    pub fn final_layer(&self) -> &[f64] {
        &self.outputs[self.output_layer.clone()]
    }
}
