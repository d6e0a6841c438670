#[cfg(test)]
mod counting_game;
mod edge;
pub mod mcts;
mod node;
pub mod node_details;
pub mod options;
pub mod puct;
pub mod store;
pub mod temp;

pub use edge::*;
pub use mcts::*;
pub use node::*;
pub use node_details::*;
pub use options::*;
pub use puct::*;
pub use store::*;
pub use temp::*;
