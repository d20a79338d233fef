use std::cmp::Ordering::{Equal, Greater, Less};

/**
 * A node in an unbalanced binary search tree of integer keys. Each child
 * link exclusively owns its subtree; there are no parent links. Keys are
 * unique within a tree.
 */
pub struct Node {
    pub(crate) key: i64,
    pub(crate) l: Option<Box<Node>>,
    pub(crate) r: Option<Box<Node>>,
}

// ============================================================================
impl Node {
    /**
     * Create a leaf node with the given key.
     */
    pub(crate) fn new(key: i64) -> Self {
        Self {
            key,
            l: None,
            r: None,
        }
    }

    /**
     * Insert a node with the given key into this sub-tree. Inserting a key
     * that is already present changes nothing. No rebalancing is done, so
     * the shape of the tree is purely a function of insertion order.
     * Recursion depth equals the height of the sub-tree.
     */
    pub(crate) fn insert(node: &mut Option<Box<Self>>, key: i64) {
        if let Some(n) = node {
            match key.cmp(&n.key) {
                Less => Self::insert(&mut n.l, key),
                Greater => Self::insert(&mut n.r, key),
                Equal => {}
            }
        } else {
            *node = Some(Box::new(Self::new(key)))
        }
    }

    /**
     * Return the number of nodes contained in this sub-tree (including
     * self).
     */
    pub(crate) fn len(&self) -> usize {
        self.l.as_ref().map_or(0, |l| l.len()) + self.r.as_ref().map_or(0, |r| r.len()) + 1
    }

    /**
     * Return the height of this sub-tree. A leaf has height 1.
     */
    pub(crate) fn height(&self) -> usize {
        self.l
            .as_ref()
            .map_or(0, |l| l.height())
            .max(self.r.as_ref().map_or(0, |r| r.height()))
            + 1
    }

    /**
     * Return the balance factor of this node: the height of the right
     * sub-tree minus the height of the left sub-tree. The heights are
     * recomputed from scratch on every call.
     */
    pub(crate) fn balance_factor(&self) -> i64 {
        self.r.as_ref().map_or(0, |r| r.height() as i64)
            - self.l.as_ref().map_or(0, |l| l.height() as i64)
    }

    /**
     * Return true if the given key exists in this sub-tree.
     */
    pub(crate) fn contains(&self, key: i64) -> bool {
        match key.cmp(&self.key) {
            Less => self.l.as_ref().map_or(false, |l| l.contains(key)),
            Greater => self.r.as_ref().map_or(false, |r| r.contains(key)),
            Equal => true,
        }
    }

    /**
     * Return the smallest key in this sub-tree, found on the left spine.
     */
    pub(crate) fn min_key(&self) -> i64 {
        self.l.as_ref().map_or(self.key, |l| l.min_key())
    }

    /**
     * Return the largest key in this sub-tree, found on the right spine.
     */
    pub(crate) fn max_key(&self) -> i64 {
        self.r.as_ref().map_or(self.key, |r| r.max_key())
    }

    /**
     * Return the sum of all keys in this sub-tree, together with the
     * number of nodes contributing to it, in a single traversal.
     */
    pub(crate) fn sum_and_count(&self) -> (i64, usize) {
        let (ls, lc) = self.l.as_ref().map_or((0, 0), |l| l.sum_and_count());
        let (rs, rc) = self.r.as_ref().map_or((0, 0), |r| r.sum_and_count());
        (self.key + ls + rs, 1 + lc + rc)
    }

    /**
     * Return a list of node references forming a path from this node to
     * its leftmost node. This function facilitates non-consuming in-order
     * traversal.
     */
    pub(crate) fn lmost_path(&self) -> Vec<&Self> {
        let mut path = vec![self];

        while let Some(l) = path.last().and_then(|n| n.l.as_ref()) {
            path.push(l)
        }
        path
    }

    /**
     * Panic unless a node and its direct children are properly ordered,
     * recursively. This function is for testing purposes.
     */
    #[allow(unused)]
    pub(crate) fn validate_order(&self) {
        if !match (&self.l, &self.r) {
            (None, None) => true,
            (Some(l), None) => l.key < self.key,
            (None, Some(r)) => r.key > self.key,
            (Some(l), Some(r)) => l.key < self.key && r.key > self.key,
        } {
            panic!("unordered node")
        }
        if let Some(l) = &self.l {
            l.validate_order()
        }
        if let Some(r) = &self.r {
            r.validate_order()
        }
    }
}

/**
 * By-reference iterator visiting every key of a tree in ascending order.
 * Uses an explicit node stack, so iterating a degenerate chain cannot
 * exhaust the call stack.
 */
pub struct Iter<'a> {
    nodes: Vec<&'a Node>,
}

// ============================================================================
impl<'a> Iter<'a> {
    pub(crate) fn new(node: &'a Option<Box<Node>>) -> Self {
        Self {
            nodes: node.as_ref().map_or(Vec::new(), |n| n.lmost_path()),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        /*
         * Pop the last node on the stack (A). If A has a right child (B),
         * push B onto the stack followed by the path to B's minimum node.
         * Yield the key of A.
         */
        let a = self.nodes.pop()?;

        if let Some(r) = &a.r {
            self.nodes.extend(r.lmost_path())
        }
        Some(a.key)
    }
}
