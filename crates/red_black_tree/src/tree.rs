use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::InvariantViolation;
use crate::node::{Id, Node, Side, id};
use crate::traits::{BalancedTree, SearchTree};

/// Red-black tree over an arena of nodes.
///
/// Children are owned through handles into `nodes`; the parent handle is a plain back link.
/// Sentinel leaves are the `NIL` handle and count as black.
#[derive(Clone)]
pub struct RedBlackTree<T> {
    nodes: Vec<Node<T>>,
    root: Id,
}

/// Outcome of removing a matched node below the tree level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Removal {
    Deleted,
    /// The match was a childless root; only the owner can empty the tree.
    RootMustBeCleared,
}

impl<T> RedBlackTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: Id::NIL,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = Id::NIL;
    }

    /// Number of real nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    pub fn min(&self) -> Option<&T> {
        if self.root.is_nil() {
            return None;
        }
        Some(&self.node(self.extreme(self.root, Side::Left)).value)
    }

    pub fn max(&self) -> Option<&T> {
        if self.root.is_nil() {
            return None;
        }
        Some(&self.node(self.extreme(self.root, Side::Right)).value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
            remaining: self.nodes.len(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    pub fn in_order_traverse_recursive(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.collect_in_order(self.root, &mut out);
        out
    }

    /// In-order traversal driven by an explicit stack of pending nodes and values.
    pub fn in_order_traverse_iterative(&self) -> Vec<&T> {
        enum Frame {
            Visit(Id),
            Emit(Id),
        }

        let mut out = Vec::with_capacity(self.nodes.len());
        if self.root.is_nil() {
            return out;
        }
        let mut stack = vec![Frame::Visit(self.root)];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Visit(x) => {
                    let node = self.node(x);
                    let (left, right) = (node.child(Side::Left), node.child(Side::Right));
                    if !right.is_nil() {
                        stack.push(Frame::Visit(right));
                    }
                    stack.push(Frame::Emit(x));
                    if !left.is_nil() {
                        stack.push(Frame::Visit(left));
                    }
                }
                Frame::Emit(x) => out.push(&self.node(x).value),
            }
        }
        out
    }

    /// Black height of the root counting the sentinel level, or `None` when
    /// invariants 1-3 do not hold.
    pub fn black_height(&self) -> Option<usize> {
        self.check_balance().ok()
    }

    /// Red-black invariants only: root color, red-red edges and black heights.
    fn check_balance(&self) -> Result<usize, InvariantViolation> {
        if self.is_red(self.root) {
            return Err(InvariantViolation::RedRoot);
        }
        self.check_subtree(self.root, 0)
    }

    fn check_subtree(&self, x: Id, depth: usize) -> Result<usize, InvariantViolation> {
        if x.is_nil() {
            return Ok(1);
        }
        let node = self.node(x);
        if node.red && node.ch.iter().any(|&c| self.is_red(c)) {
            return Err(InvariantViolation::RedViolation { depth });
        }
        if node.children().any(|c| self.parent(c) != x) {
            return Err(InvariantViolation::BrokenParentLink { depth: depth + 1 });
        }
        let left = self.check_subtree(node.child(Side::Left), depth + 1)?;
        let right = self.check_subtree(node.child(Side::Right), depth + 1)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { depth, left, right });
        }
        Ok(left + usize::from(!node.red))
    }

    #[inline(always)]
    pub(crate) fn root_id(&self) -> Id {
        self.root
    }

    #[inline(always)]
    pub(crate) fn node(&self, x: Id) -> &Node<T> {
        debug_assert!(!x.is_nil());
        debug_assert!(x.idx() < self.nodes.len());
        &self.nodes[x.idx()]
    }

    #[inline(always)]
    fn node_mut(&mut self, x: Id) -> &mut Node<T> {
        debug_assert!(!x.is_nil());
        debug_assert!(x.idx() < self.nodes.len());
        &mut self.nodes[x.idx()]
    }

    #[inline(always)]
    fn child(&self, x: Id, side: Side) -> Id {
        self.node(x).child(side)
    }

    #[inline(always)]
    fn parent(&self, x: Id) -> Id {
        self.node(x).p
    }

    #[inline(always)]
    fn is_red(&self, x: Id) -> bool {
        !x.is_nil() && self.node(x).red
    }

    #[inline(always)]
    fn set_red(&mut self, x: Id, red: bool) {
        self.node_mut(x).red = red;
    }

    /// Which child of `parent` the real node `x` is.
    fn side_of(&self, x: Id, parent: Id) -> Side {
        debug_assert!(!x.is_nil());
        if self.child(parent, Side::Left) == x {
            Side::Left
        } else {
            debug_assert_eq!(self.child(parent, Side::Right), x);
            Side::Right
        }
    }

    /// Points `parent`'s link that held `old` (or the root) at `new`.
    fn replace_child(&mut self, parent: Id, old: Id, new: Id) {
        if parent.is_nil() {
            self.root = new;
        } else {
            let side = self.side_of(old, parent);
            self.node_mut(parent).ch[side.idx()] = new;
        }
    }

    /// Walks to the last real node along `side` starting at `x`.
    fn extreme(&self, mut x: Id, side: Side) -> Id {
        loop {
            let next = self.child(x, side);
            if next.is_nil() {
                return x;
            }
            x = next;
        }
    }

    fn alloc(&mut self, value: T, parent: Id, red: bool) -> Id {
        let x = id(self.nodes.len());
        self.nodes.push(Node::new(value, parent, red));
        x
    }

    /// Drops `x` from the arena; the last slot moves into the hole and its
    /// neighbours are relinked. `x` must already be unreachable.
    fn release(&mut self, x: Id) -> Node<T> {
        let last = id(self.nodes.len() - 1);
        let removed = self.nodes.swap_remove(x.idx());
        if x != last {
            let (parent, ch) = {
                let moved = self.node(x);
                (moved.p, moved.ch)
            };
            if parent.is_nil() {
                self.root = x;
            } else {
                for link in self.node_mut(parent).ch.iter_mut() {
                    if *link == last {
                        *link = x;
                    }
                }
            }
            for c in ch {
                if !c.is_nil() {
                    self.node_mut(c).p = x;
                }
            }
            trace!("relocated arena slot {} to {}", last.idx(), x.idx());
        }
        removed
    }

    /// Rotates `x` down to `side`: the child on the other side takes `x`'s
    /// position and its `side` grandchild moves under `x`.
    fn rotate_down(&mut self, x: Id, side: Side) {
        let other = side.opposite();
        let up = self.child(x, other);
        debug_assert!(!up.is_nil(), "rotation needs a child to promote");
        let inner = self.child(up, side);
        let parent = self.parent(x);

        self.node_mut(x).ch[other.idx()] = inner;
        if !inner.is_nil() {
            self.node_mut(inner).p = x;
        }

        self.replace_child(parent, x, up);
        self.node_mut(up).p = parent;

        self.node_mut(up).ch[side.idx()] = x;
        self.node_mut(x).p = up;
        trace!("rotate {:?} down at slot {}", side, x.idx());
    }

    fn fix_after_insert(&mut self, mut x: Id) {
        loop {
            let parent = self.parent(x);
            if parent.is_nil() {
                trace!("insert fix-up: reached root");
                self.set_red(x, false);
                return;
            }
            if !self.is_red(parent) {
                trace!("insert fix-up: black parent");
                return;
            }

            let grandparent = self.parent(parent);
            debug_assert!(!grandparent.is_nil(), "red parent cannot be the root");
            let parent_side = self.side_of(parent, grandparent);
            let uncle = self.child(grandparent, parent_side.opposite());

            if self.is_red(uncle) {
                trace!("insert fix-up: red uncle, recolor and climb");
                self.set_red(parent, false);
                self.set_red(uncle, false);
                self.set_red(grandparent, true);
                x = grandparent;
                continue;
            }

            if self.side_of(x, parent) != parent_side {
                trace!("insert fix-up: inner grandchild, rotate parent");
                self.rotate_down(parent, parent_side);
                x = parent;
                continue;
            }

            trace!("insert fix-up: outer grandchild, rotate grandparent");
            self.set_red(parent, false);
            self.set_red(grandparent, true);
            self.rotate_down(grandparent, parent_side.opposite());
            return;
        }
    }

    /// Restores the black height after a black node was excised. The `side`
    /// child of `parent`, possibly a sentinel, is one black node short.
    fn fix_after_delete(&mut self, mut parent: Id, mut side: Side) {
        loop {
            if parent.is_nil() {
                trace!("delete fix-up: reached root");
                return;
            }

            let mut sibling = self.child(parent, side.opposite());
            debug_assert!(!sibling.is_nil(), "double black node needs a real sibling");

            if self.is_red(sibling) {
                trace!("delete fix-up: red sibling, rotate parent");
                self.set_red(sibling, false);
                self.set_red(parent, true);
                self.rotate_down(parent, side);
                sibling = self.child(parent, side.opposite());
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());

            if !self.is_red(near) && !self.is_red(far) {
                self.set_red(sibling, true);
                if self.is_red(parent) {
                    trace!("delete fix-up: black nephews, red parent");
                    self.set_red(parent, false);
                    return;
                }
                trace!("delete fix-up: black nephews, black parent, climb");
                let x = parent;
                parent = self.parent(x);
                if !parent.is_nil() {
                    side = self.side_of(x, parent);
                }
                continue;
            }

            if !self.is_red(far) {
                trace!("delete fix-up: red near nephew, rotate sibling");
                self.set_red(sibling, true);
                self.set_red(near, false);
                self.rotate_down(sibling, side.opposite());
                sibling = self.child(parent, side.opposite());
            }

            trace!("delete fix-up: red far nephew, rotate parent");
            let far = self.child(sibling, side.opposite());
            let parent_red = self.is_red(parent);
            self.set_red(sibling, parent_red);
            self.set_red(parent, false);
            self.set_red(far, false);
            self.rotate_down(parent, side);
            return;
        }
    }

    /// Unlinks `y`, which has at most one real child, and rebalances.
    fn excise(&mut self, y: Id) {
        let (left, right, parent, red) = {
            let node = self.node(y);
            (node.child(Side::Left), node.child(Side::Right), node.p, node.red)
        };
        debug_assert!(left.is_nil() || right.is_nil());
        let x = if left.is_nil() { right } else { left };
        let side = if parent.is_nil() {
            Side::Left
        } else {
            self.side_of(y, parent)
        };

        self.replace_child(parent, y, x);
        if !x.is_nil() {
            self.node_mut(x).p = parent;
        }
        {
            let node = self.node_mut(y);
            node.ch = [Id::NIL, Id::NIL];
            node.p = Id::NIL;
        }

        if red {
            return;
        }
        if self.is_red(x) {
            self.set_red(x, false);
            return;
        }
        self.fix_after_delete(parent, side);
    }

    /// Removes the value held by `z`. A node with a right subtree takes its
    /// successor's value, otherwise one with a left subtree takes its
    /// predecessor's; the donor node is the one excised.
    fn remove_node(&mut self, z: Id) -> Removal {
        let right = self.child(z, Side::Right);
        let left = self.child(z, Side::Left);
        let y = if !right.is_nil() {
            self.extreme(right, Side::Left)
        } else if !left.is_nil() {
            self.extreme(left, Side::Right)
        } else if self.parent(z).is_nil() {
            return Removal::RootMustBeCleared;
        } else {
            z
        };

        self.excise(y);

        let last = id(self.nodes.len() - 1);
        let removed = self.release(y);
        if y != z {
            let z = if z == last { y } else { z };
            self.node_mut(z).value = removed.value;
        }
        Removal::Deleted
    }

    fn subtree_height(&self, x: Id) -> usize {
        if x.is_nil() {
            return 0;
        }
        let node = self.node(x);
        1 + self
            .subtree_height(node.child(Side::Left))
            .max(self.subtree_height(node.child(Side::Right)))
    }

    fn collect_in_order<'a>(&'a self, x: Id, out: &mut Vec<&'a T>) {
        if x.is_nil() {
            return;
        }
        let node = self.node(x);
        self.collect_in_order(node.child(Side::Left), out);
        out.push(&node.value);
        self.collect_in_order(node.child(Side::Right), out);
    }
}

impl<T: Ord> RedBlackTree<T> {
    fn find(&self, value: &T) -> Id {
        let mut cur = self.root;
        while !cur.is_nil() {
            let node = self.node(cur);
            match value.cmp(&node.value) {
                Ordering::Less => cur = node.child(Side::Left),
                Ordering::Greater => cur = node.child(Side::Right),
                Ordering::Equal => return cur,
            }
        }
        Id::NIL
    }

    /// Full structural check: red-black invariants, parent links, strict
    /// in-order ordering and the node count. Returns the black height.
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        if !self.root.is_nil() && !self.parent(self.root).is_nil() {
            return Err(InvariantViolation::BrokenParentLink { depth: 0 });
        }
        let black_height = self.check_balance()?;

        let mut found = 0;
        let mut prev: Option<&T> = None;
        for value in self.in_order_traverse_recursive() {
            if prev.is_some_and(|p| p >= value) {
                return Err(InvariantViolation::OutOfOrder { index: found });
            }
            prev = Some(value);
            found += 1;
        }
        if found != self.nodes.len() {
            return Err(InvariantViolation::LengthMismatch {
                expected: self.nodes.len(),
                found,
            });
        }
        Ok(black_height)
    }
}

impl<T: Ord> SearchTree for RedBlackTree<T> {
    type Value = T;

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn search(&self, value: &T) -> bool {
        !self.find(value).is_nil()
    }

    fn insert(&mut self, value: T) -> bool {
        if self.root.is_nil() {
            self.root = self.alloc(value, Id::NIL, false);
            return true;
        }

        let mut cur = self.root;
        let (parent, side) = loop {
            let side = match value.cmp(&self.node(cur).value) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return false,
            };
            let next = self.child(cur, side);
            if next.is_nil() {
                break (cur, side);
            }
            cur = next;
        };

        let x = self.alloc(value, parent, true);
        self.node_mut(parent).ch[side.idx()] = x;
        self.fix_after_insert(x);
        true
    }

    fn delete(&mut self, value: &T) -> bool {
        let z = self.find(value);
        if z.is_nil() {
            return false;
        }
        match self.remove_node(z) {
            Removal::Deleted => {}
            Removal::RootMustBeCleared => {
                debug!("deleted the last value, clearing the tree");
                self.clear();
            }
        }
        true
    }

    fn inorder_successor(&self, value: &T) -> Option<&T> {
        let mut cur = self.root;
        let mut best = Id::NIL;
        while !cur.is_nil() {
            let node = self.node(cur);
            if *value < node.value {
                best = cur;
                cur = node.child(Side::Left);
            } else {
                cur = node.child(Side::Right);
            }
        }
        (!best.is_nil()).then(|| &self.node(best).value)
    }
}

impl<T: Ord> BalancedTree for RedBlackTree<T> {
    /// An empty tree is balanced.
    fn is_balanced(&self) -> bool {
        self.check_balance().is_ok()
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> Extend<T> for RedBlackTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            SearchTree::insert(self, value);
        }
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing in-order iterator.
pub struct Iter<'a, T> {
    tree: &'a RedBlackTree<T>,
    stack: Vec<Id>,
    remaining: usize,
}

impl<T> Iter<'_, T> {
    fn push_left_spine(&mut self, mut x: Id) {
        while !x.is_nil() {
            self.stack.push(x);
            x = self.tree.child(x, Side::Left);
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        let tree = self.tree;
        self.push_left_spine(tree.child(x, Side::Right));
        self.remaining -= 1;
        Some(&tree.node(x).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::RedBlackTree;
    use crate::error::InvariantViolation;
    use crate::node::Side;
    use crate::traits::{BalancedTree, SearchTree};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;

    fn values<T: Copy>(tree: &RedBlackTree<T>) -> Vec<T> {
        tree.iter().copied().collect()
    }

    fn sample_tree() -> RedBlackTree<i32> {
        [10, 5, 20, 3, 7, 15, 30].into_iter().collect()
    }

    #[test]
    fn empty_tree_operations_are_no_ops() {
        let mut tree = RedBlackTree::<i32>::new();
        assert!(tree.is_empty());
        assert!(tree.is_balanced());
        assert!(!tree.search(&1));
        assert!(!tree.delete(&1));
        assert_eq!(tree.inorder_successor(&1), None);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.black_height(), Some(1));
        assert!(tree.in_order_traverse_iterative().is_empty());
    }

    #[test]
    fn insert_delete_scenario() {
        let mut tree = sample_tree();
        assert!(tree.is_balanced());
        assert_eq!(values(&tree), vec![3, 5, 7, 10, 15, 20, 30]);
        assert_eq!(tree.inorder_successor(&7), Some(&10));

        assert!(tree.delete(&10));
        assert!(tree.is_balanced());
        assert_eq!(values(&tree), vec![3, 5, 7, 15, 20, 30]);
        assert_eq!(tree.node(tree.root_id()).value, 15);
        assert!(!tree.search(&10));
        assert_eq!(tree.inorder_successor(&7), Some(&15));
        assert_eq!(tree.check_invariants(), Ok(3));
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut tree = sample_tree();
        let before = values(&tree);
        assert!(!tree.insert(7));
        assert_eq!(tree.len(), 7);
        assert_eq!(values(&tree), before);
    }

    #[test]
    fn deleting_absent_value_keeps_tree() {
        let mut tree = sample_tree();
        assert!(!tree.delete(&8));
        assert!(!tree.delete(&100));
        assert_eq!(tree.len(), 7);
        assert!(tree.is_balanced());
    }

    #[test]
    fn deleting_lone_root_empties_tree() {
        let mut tree = RedBlackTree::new();
        assert!(tree.insert(42));
        assert!(tree.delete(&42));
        assert!(tree.is_empty());
        assert!(!tree.search(&42));
        assert!(tree.insert(1));
        assert_eq!(values(&tree), vec![1]);
    }

    #[test]
    fn root_with_left_child_promotes_predecessor() {
        let mut tree: RedBlackTree<i32> = [2, 1].into_iter().collect();
        assert!(tree.delete(&2));
        assert_eq!(values(&tree), vec![1]);
        assert_eq!(tree.check_invariants(), Ok(2));
    }

    #[test]
    fn increasing_inserts_stay_shallow() {
        let mut tree = RedBlackTree::new();
        let bound = (2.0 * 101_f64.log2()).floor() as usize;
        for v in 1..=100 {
            assert!(tree.insert(v));
            assert!(tree.is_balanced(), "unbalanced after inserting {v}");
            assert!(tree.height() <= bound, "height {} after {v}", tree.height());
        }
        assert_eq!(values(&tree), (1..=100).collect::<Vec<_>>());
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&100));
    }

    #[test]
    fn decreasing_deletes_stay_balanced() {
        let mut tree: RedBlackTree<i32> = (0..200).collect();
        for v in (0..200).rev() {
            assert!(tree.delete(&v));
            assert_eq!(tree.check_invariants().map(|_| ()), Ok(()), "after deleting {v}");
            assert_eq!(tree.len(), v as usize);
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn shuffled_deletes_stay_balanced() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let mut keys = (0..300).collect::<Vec<i32>>();
        keys.shuffle(&mut rng);
        let mut tree: RedBlackTree<i32> = keys.iter().copied().collect();
        keys.shuffle(&mut rng);
        for (i, v) in keys.iter().enumerate() {
            assert!(tree.delete(v));
            assert!(!tree.search(v));
            assert!(tree.check_invariants().is_ok(), "after deleting {v}");
            assert_eq!(tree.len(), keys.len() - i - 1);
        }
    }

    #[test]
    fn traversals_agree() {
        let mut rng = StdRng::seed_from_u64(0xBADC0FFE);
        let tree: RedBlackTree<i64> = (0..500).map(|_| rng.random_range(-1000..1000)).collect();
        let recursive = tree.in_order_traverse_recursive();
        let iterative = tree.in_order_traverse_iterative();
        let iter = tree.iter().collect::<Vec<_>>();
        assert_eq!(recursive, iterative);
        assert_eq!(recursive, iter);
        assert_eq!(tree.iter().len(), tree.len());
    }

    #[test]
    fn successor_edges() {
        let tree = sample_tree();
        assert_eq!(tree.inorder_successor(&i32::MIN), Some(&3));
        assert_eq!(tree.inorder_successor(&3), Some(&5));
        assert_eq!(tree.inorder_successor(&16), Some(&20));
        assert_eq!(tree.inorder_successor(&30), None);
        assert_eq!(tree.inorder_successor(&31), None);
    }

    #[test]
    fn random_operations_match_btreeset() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let mut tree = RedBlackTree::new();
        let mut oracle = BTreeSet::new();

        for it in 0..20_000 {
            let value = rng.random_range(0..512_u32);
            match rng.random_range(0..4) {
                0 | 1 => assert_eq!(tree.insert(value), oracle.insert(value), "it={it}"),
                2 => assert_eq!(tree.delete(&value), oracle.remove(&value), "it={it}"),
                _ => {
                    assert_eq!(tree.search(&value), oracle.contains(&value));
                    let expected = oracle.range(value + 1..).next();
                    assert_eq!(tree.inorder_successor(&value), expected, "it={it}");
                }
            }
            assert_eq!(tree.len(), oracle.len());
            if it % 64 == 0 {
                assert!(tree.check_invariants().is_ok(), "it={it}");
                assert!(tree.iter().eq(oracle.iter()));
            }
        }
    }

    #[test]
    fn clone_is_independent() {
        let mut tree = sample_tree();
        let copy = tree.clone();
        assert!(tree.delete(&5));
        assert!(copy.search(&5));
        assert_eq!(copy.len(), 7);
        assert_eq!(format!("{copy:?}"), "{3, 5, 7, 10, 15, 20, 30}");
    }

    #[test]
    fn check_invariants_reports_red_root() {
        let mut tree = sample_tree();
        let root = tree.root_id();
        tree.set_red(root, true);
        assert!(!tree.is_balanced());
        assert_eq!(tree.check_invariants(), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn check_invariants_reports_red_red_edge() {
        let mut tree = sample_tree();
        let left = tree.child(tree.root_id(), Side::Left);
        let grandchild = tree.child(left, Side::Left);
        tree.set_red(left, true);
        tree.set_red(grandchild, true);
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::RedViolation { depth: 1 })
        );
    }

    #[test]
    fn check_invariants_reports_black_height_mismatch() {
        let mut tree = sample_tree();
        let left = tree.child(tree.root_id(), Side::Left);
        let grandchild = tree.child(left, Side::Left);
        tree.set_red(grandchild, false);
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::BlackHeightMismatch {
                depth: 1,
                left: 2,
                right: 1
            })
        );
        assert_eq!(tree.black_height(), None);
    }

    #[test]
    fn check_invariants_reports_out_of_order() {
        let mut tree = sample_tree();
        let root = tree.root_id();
        tree.node_mut(root).value = 1;
        assert!(tree.is_balanced());
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::OutOfOrder { index: 3 })
        );
    }
}
