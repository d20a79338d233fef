use crate::node::{self, Node};
use std::iter::FromIterator;

/**
 * An unbalanced binary search tree over `i64` keys. The tree is built by
 * folding `insert` over a key sequence and is never rebalanced: its shape
 * is purely a function of insertion order, which is what makes the
 * balance audit in [`crate::balance`] worth running. Every key in a
 * node's left sub-tree is strictly smaller than the node's key, and every
 * key in its right sub-tree is strictly larger.
 *
 * All queries are read-only; nothing mutates a tree after construction
 * except `insert` linking a new leaf.
 */
pub struct Tree {
    pub(crate) root: Option<Box<Node>>,
}

// ============================================================================
impl Tree {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.len())
    }

    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height())
    }

    pub fn contains(&self, key: i64) -> bool {
        self.root.as_ref().map_or(false, |root| root.contains(key))
    }

    /**
     * Insert the given key. Inserting a key that is already present is a
     * no-op, so insertion is idempotent and the node count only grows on
     * distinct keys. Recursion depth equals the tree height.
     */
    pub fn insert(&mut self, key: i64) {
        Node::insert(&mut self.root, key)
    }

    /**
     * Return the smallest key, or `None` for an empty tree.
     */
    pub fn minimum(&self) -> Option<i64> {
        self.root.as_ref().map(|root| root.min_key())
    }

    /**
     * Return the largest key, or `None` for an empty tree.
     */
    pub fn maximum(&self) -> Option<i64> {
        self.root.as_ref().map(|root| root.max_key())
    }

    /**
     * Return the sum of all keys and the node count in a single
     * traversal. An empty tree yields `(0, 0)`.
     */
    pub fn sum_and_count(&self) -> (i64, usize) {
        self.root.as_ref().map_or((0, 0), |root| root.sum_and_count())
    }

    /**
     * Return the mean key value, defined as 0 for an empty tree.
     */
    pub fn average(&self) -> f64 {
        let (sum, count) = self.sum_and_count();

        if count == 0 {
            0.0
        } else {
            sum as f64 / count as f64
        }
    }

    /**
     * Visit every key in ascending order, by reference to the tree.
     */
    pub fn iter(&self) -> node::Iter {
        node::Iter::new(&self.root)
    }

    /**
     * Tear the tree down and return the number of nodes released. Each
     * node is released exactly once, with its children detached first.
     * The walk uses an explicit stack, so releasing a degenerate chain
     * cannot exhaust the call stack.
     */
    pub fn release(mut self) -> usize {
        teardown(&mut self.root)
    }
}

/**
 * Detach and free every node reachable from `root`, children before
 * parent, counting the nodes released. Shared by `release` and `Drop` so
 * teardown happens exactly once per tree either way.
 */
fn teardown(root: &mut Option<Box<Node>>) -> usize {
    let mut released = 0;
    let mut nodes = Vec::new();

    nodes.extend(root.take());

    while let Some(mut n) = nodes.pop() {
        nodes.extend(n.l.take());
        nodes.extend(n.r.take());
        released += 1;
    }
    released
}

// ============================================================================
impl Drop for Tree {
    fn drop(&mut self) {
        teardown(&mut self.root);
    }
}

// ============================================================================
impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
impl FromIterator<i64> for Tree {
    /**
     * Fold `insert` over the keys in sequence order. Duplicates are
     * dropped; the resulting shape depends on the order of the sequence.
     */
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Tree::new();
        for key in iter {
            tree.insert(key)
        }
        tree
    }
}

// ============================================================================
impl<'a> IntoIterator for &'a Tree {
    type Item = i64;
    type IntoIter = node::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        node::Iter::new(&self.root)
    }
}
