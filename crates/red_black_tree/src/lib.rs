mod error;
mod list_repr;
mod node;
mod traits;
mod tree;

pub use error::InvariantViolation;
pub use traits::{BalancedTree, SearchTree};
pub use tree::{Iter, RedBlackTree};
