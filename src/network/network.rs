use std::ops::Range;

use log::debug;
use rand::Rng;

use crate::activation::sigmoid;
use crate::data::Example;
use crate::error::{NetworkError, Result};
use crate::graph::{Edge, EdgeIndex, Node, NodeIndex};
use crate::network::activations::Activations;
use crate::network::spec::NetworkSpec;
use crate::optim::sgd::Sgd;
use crate::train::backprop::compute_deltas;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// A fully-connected, layered sigmoid network.
///
/// Nodes live in a single arena laid out layer by layer, with the bias unit
/// in the last slot. Edges refer to nodes by arena index, and every node keeps
/// the indices of its incoming and outgoing edges so that neither pass has to
/// scan the whole edge list.
#[derive(Debug, Clone)]
pub struct Network {
    layer_sizes: Vec<usize>,
    nodes: Vec<Node>,
    layers: Vec<Range<usize>>,
    bias: NodeIndex,
    edges: Vec<Edge>,
    incoming: Vec<Vec<EdgeIndex>>,
    outgoing: Vec<Vec<EdgeIndex>>,
    optimizer: Sgd,
}

impl Network {
    /// Builds a network with weights drawn from the thread-local generator.
    pub fn new(spec: &NetworkSpec) -> Result<Network> {
        Network::with_rng(spec, &mut rand::thread_rng())
    }

    /// Builds a network, drawing every initial weight from `rng`.
    ///
    /// For each pair of consecutive layers and each destination node, the
    /// bias edge is created first, followed by one edge per source node in
    /// position order.
    pub fn with_rng<R: Rng + ?Sized>(spec: &NetworkSpec, rng: &mut R) -> Result<Network> {
        spec.validate()?;

        let mut nodes = Vec::with_capacity(spec.layer_sizes.iter().sum::<usize>() + 1);
        let mut layers = Vec::with_capacity(spec.layer_sizes.len());
        for (layer, &size) in spec.layer_sizes.iter().enumerate() {
            let start = nodes.len();
            nodes.extend((0..size).map(|position| Node::neuron(layer, position)));
            layers.push(start..nodes.len());
        }
        let bias = nodes.len();
        nodes.push(Node::bias());

        let mut edges = Vec::new();
        let mut incoming = vec![Vec::new(); nodes.len()];
        let mut outgoing = vec![Vec::new(); nodes.len()];
        for pair in layers.windows(2) {
            let (sources, destinations) = (&pair[0], &pair[1]);
            for to in destinations.clone() {
                for from in std::iter::once(bias).chain(sources.clone()) {
                    let weight = draw_weight(rng, spec.weight_min, spec.weight_max);
                    let index = edges.len();
                    edges.push(Edge::new(from, to, weight));
                    incoming[to].push(index);
                    outgoing[from].push(index);
                }
            }
        }

        debug!(
            "built network {:?}: {} nodes, {} edges, learning rate {}",
            spec.layer_sizes,
            nodes.len(),
            edges.len(),
            spec.learning_rate
        );

        Ok(Network {
            layer_sizes: spec.layer_sizes.clone(),
            nodes,
            layers,
            bias,
            edges,
            incoming,
            outgoing,
            optimizer: Sgd::new(spec.learning_rate),
        })
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate
    }

    pub fn input_size(&self) -> usize {
        self.layer_sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.layer_sizes[self.layer_sizes.len() - 1]
    }

    /// Every node, bias included, in arena order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Current weight of every edge, in creation order.
    pub fn weights(&self) -> Vec<f64> {
        self.edges.iter().map(|edge| edge.weight).collect()
    }

    /// Arena index of the bias unit.
    pub fn bias(&self) -> NodeIndex {
        self.bias
    }

    /// Arena indices of the nodes in `layer`, in position order.
    ///
    /// # Panics
    /// Panics if `layer >= self.layer_count()`.
    pub fn layer(&self, layer: usize) -> Range<usize> {
        self.layers[layer].clone()
    }

    /// Arena index of the neuron at (`layer`, `position`), if it exists.
    pub fn node_index(&self, layer: usize, position: usize) -> Option<NodeIndex> {
        let range = self.layers.get(layer)?;
        let index = range.start + position;
        range.contains(&index).then_some(index)
    }

    /// Edges ending at `node`; the bias edge comes first.
    pub fn incoming(&self, node: NodeIndex) -> &[EdgeIndex] {
        &self.incoming[node]
    }

    /// Edges leaving `node`.
    pub fn outgoing(&self, node: NodeIndex) -> &[EdgeIndex] {
        &self.outgoing[node]
    }

    /// Runs one forward pass and returns every node's output.
    pub fn forward(&self, inputs: &[f64]) -> Result<Activations> {
        if inputs.len() != self.input_size() {
            return Err(NetworkError::InputSizeMismatch {
                expected: self.input_size(),
                got: inputs.len(),
            });
        }

        let output_layer = self.layer(self.layer_count() - 1);
        let mut activations = Activations::new(self.nodes.len(), self.bias, output_layer);

        for (node, &value) in self.layer(0).zip(inputs) {
            activations.set(node, value);
        }

        // Layer-major arena order guarantees every source is already computed.
        for layer in &self.layers[1..] {
            for node in layer.clone() {
                let sum: f64 = self.incoming[node]
                    .iter()
                    .map(|&e| {
                        let edge = &self.edges[e];
                        activations.output(edge.from) * edge.weight
                    })
                    .sum();
                activations.set(node, sigmoid(sum));
            }
        }

        Ok(activations)
    }

    /// Backpropagates `targets` against the outputs of a forward pass over the
    /// matching input, then applies one SGD update to every trainable edge.
    ///
    /// All deltas are computed from the pre-update weights before any weight
    /// changes. `activations` must come from this network's own `forward`;
    /// anything else is rejected with `ActivationsMismatch`.
    pub fn backward(&mut self, activations: &Activations, targets: &[f64]) -> Result<()> {
        let deltas = compute_deltas(self, activations, targets)?;
        self.optimizer.step(&mut self.edges, activations, &deltas);
        Ok(())
    }

    /// Online training: for each epoch, forward and backward over every
    /// example in order. Performs exactly `epochs * data.len()` updates.
    ///
    /// The whole dataset is checked against the network's input and output
    /// widths before the first update.
    pub fn train(&mut self, data: &[Example], epochs: usize) -> Result<()> {
        train_loop(self, data, &TrainConfig::new(epochs)).map(|_| ())
    }

    /// Outputs of the final layer for `inputs`, in position order.
    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        Ok(self.forward(inputs)?.final_layer().to_vec())
    }
}

/// Uniform draw in `[min, max)`.
fn draw_weight<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}
