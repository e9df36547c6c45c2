use std::fmt;

/// Position of a node inside the network's node arena.
pub type NodeIndex = usize;

/// Identity of a node: a (layer, position) coordinate for ordinary neurons,
/// or the reserved bias identity that lives outside every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Neuron { layer: usize, position: usize },
    Bias,
}

impl NodeId {
    /// Layer index, or `None` for the bias unit.
    pub fn layer(&self) -> Option<usize> {
        match self {
            NodeId::Neuron { layer, .. } => Some(*layer),
            NodeId::Bias => None,
        }
    }

    pub fn is_bias(&self) -> bool {
        matches!(self, NodeId::Bias)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Neuron { layer, position } => write!(f, "({layer}, {position})"),
            NodeId::Bias => write!(f, "bias"),
        }
    }
}

/// A neuron or the shared bias unit. Its output is not stored here; each
/// forward pass produces a fresh `Activations` value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
}

impl Node {
    pub fn neuron(layer: usize, position: usize) -> Node {
        Node { id: NodeId::Neuron { layer, position } }
    }

    pub fn bias() -> Node {
        Node { id: NodeId::Bias }
    }
}
