/// Ordered set of unique values stored in a binary search tree.
///
/// - Values are unique; inserting a present value is a no-op.
/// - `inorder_successor` returns the smallest stored value strictly greater than the query.
pub trait SearchTree {
    type Value: Ord;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn search(&self, value: &Self::Value) -> bool;

    /// Returns `false` without touching the tree if `value` is already stored.
    fn insert(&mut self, value: Self::Value) -> bool;

    /// Returns `false` if `value` is not stored.
    fn delete(&mut self, value: &Self::Value) -> bool;

    fn inorder_successor(&self, value: &Self::Value) -> Option<&Self::Value>;
}

pub trait BalancedTree: SearchTree {
    fn is_balanced(&self) -> bool;
}
