use thiserror::Error;

/// The first red-black or search-tree invariant found broken by
/// [`RedBlackTree::check_invariants`](crate::RedBlackTree::check_invariants).
///
/// `depth` counts real nodes from the root, which sits at depth 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root node is red")]
    RedRoot,
    #[error("red node at depth {depth} has a red child")]
    RedViolation { depth: usize },
    #[error("black heights differ below depth {depth}: left {left}, right {right}")]
    BlackHeightMismatch {
        depth: usize,
        left: usize,
        right: usize,
    },
    #[error("in-order value at position {index} is not greater than its predecessor")]
    OutOfOrder { index: usize },
    #[error("child at depth {depth} does not point back to its parent")]
    BrokenParentLink { depth: usize },
    #[error("tree reports {expected} values but {found} are reachable from the root")]
    LengthMismatch { expected: usize, found: usize },
}
