mod mcts;
mod node;
mod tree;

pub use mcts::search;
pub use node::{Node, NodeId};
pub use tree::Tree;
