use crate::graph::node::NodeIndex;

/// Position of an edge inside the network's edge list.
pub type EdgeIndex = usize;

/// A directed, weighted connection between two nodes of the arena.
///
/// `from` and `to` are fixed at construction; only `weight` changes, and only
/// during backpropagation.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: NodeIndex, to: NodeIndex, weight: f64) -> Edge {
        Edge { from, to, weight }
    }
}
