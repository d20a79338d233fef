use crate::bst::Tree;
use crate::node::Node;

/**
 * True when the two trees agree node-for-node in both shape and keys.
 * Two empty trees are identical.
 */
pub fn identical(a: &Tree, b: &Tree) -> bool {
    same(&a.root, &b.root)
}

/**
 * True when `candidate` occurs as a complete sub-tree somewhere inside
 * `main`: at some node of the main tree, the candidate matches key for
 * key and shape for shape, all the way down. A candidate that is only a
 * pruned prefix of the matching region does not count. An empty
 * candidate embeds in anything, including an empty main tree; a
 * non-empty candidate never embeds in an empty main tree. Worst case is
 * O(n * m) for main size n and candidate size m.
 */
pub fn is_subtree(main: &Tree, candidate: &Tree) -> bool {
    embeds(&main.root, &candidate.root)
}

fn same(a: &Option<Box<Node>>, b: &Option<Box<Node>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.key == b.key && same(&a.l, &b.l) && same(&a.r, &b.r),
        _ => false,
    }
}

fn embeds(main: &Option<Box<Node>>, candidate: &Option<Box<Node>>) -> bool {
    if candidate.is_none() {
        return true;
    }
    match main {
        None => false,
        Some(n) => same(main, candidate) || embeds(&n.l, candidate) || embeds(&n.r, candidate),
    }
}
