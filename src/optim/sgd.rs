use crate::{graph::Edge, network::activations::Activations, train::backprop::Deltas};

#[derive(Debug, Clone)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD weight update to every edge whose destination carries
    /// a delta: `weight += lr * from.output * delta[to]`.
    pub fn step(&self, edges: &mut [Edge], activations: &Activations, deltas: &Deltas) {
        for edge in edges.iter_mut() {
            if let Some(delta) = deltas.get(edge.to) {
                edge.weight += self.learning_rate * activations.output(edge.from) * delta;
            }
        }
    }
}
