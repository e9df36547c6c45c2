pub mod node;
pub mod edge;

pub use node::{Node, NodeId, NodeIndex};
pub use edge::{Edge, EdgeIndex};
