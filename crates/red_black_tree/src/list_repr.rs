//! Breadth-first list representation of a binary tree.
//!
//! Slot `k` of the list holds heap position `k + 1`; heap position `i` has its
//! children at `2i` and `2i + 1`. `None` marks a missing node and trailing
//! `None`s are dropped, so an empty tree is the empty list.

use crate::node::{Id, Side};
use crate::tree::RedBlackTree;

impl<T: Ord> RedBlackTree<T> {
    /// Inserts every present value of `list_repr` in list order.
    ///
    /// The resulting shape follows from the insertion order and the fix-ups,
    /// not from the positions in the list.
    pub fn from_list_repr<I>(list_repr: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        list_repr.into_iter().flatten().collect()
    }
}

impl<T: Clone> RedBlackTree<T> {
    pub fn list_repr(&self) -> Vec<Option<T>> {
        let mut out = Vec::new();
        let mut level = vec![self.root_id()];
        while level.iter().any(|x| !x.is_nil()) {
            let mut next = Vec::with_capacity(level.len() * 2);
            for &x in &level {
                if x.is_nil() {
                    out.push(None);
                    next.extend([Id::NIL, Id::NIL]);
                } else {
                    let node = self.node(x);
                    out.push(Some(node.value.clone()));
                    next.extend([node.child(Side::Left), node.child(Side::Right)]);
                }
            }
            level = next;
        }
        while matches!(out.last(), Some(None)) {
            out.pop();
        }
        out
    }
}
