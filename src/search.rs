use crate::bst::Tree;
use crate::node::Node;
use std::cmp::Ordering::{Equal, Greater, Less};

/**
 * Maximum number of keys recorded on a descent path. Descents deeper than
 * this still run to completion; only the reported path is cut short, and
 * the outcome says so explicitly.
 */
pub const MAX_RECORDED_DEPTH: usize = 100;

/**
 * The result of one path search: whether the target key was found, the
 * keys visited on the way down (including the matching node), and whether
 * the recorded path was truncated at [`MAX_RECORDED_DEPTH`]. The path
 * carries its own length, so a key of 0 is representable at any position.
 */
#[derive(Debug)]
pub struct SearchOutcome {
    pub found: bool,
    pub path: Vec<i64>,
    pub truncated: bool,
}

/**
 * Descend from the root toward `target`, exploiting the ordering
 * invariant: smaller targets go left, larger go right, equal stops.
 * Every visited node's key is appended to the path. An empty tree yields
 * an immediate not-found with an empty path; a failed descent yields
 * not-found with the keys it visited. Recursion depth equals the tree
 * height.
 */
pub fn find_path(tree: &Tree, target: i64) -> SearchOutcome {
    let mut outcome = SearchOutcome {
        found: false,
        path: Vec::new(),
        truncated: false,
    };

    if let Some(root) = &tree.root {
        descend(root, target, &mut outcome)
    }
    outcome
}

fn descend(node: &Node, target: i64, outcome: &mut SearchOutcome) {
    if outcome.path.len() < MAX_RECORDED_DEPTH {
        outcome.path.push(node.key)
    } else {
        outcome.truncated = true
    }

    match target.cmp(&node.key) {
        Less => {
            if let Some(l) = &node.l {
                descend(l, target, outcome)
            }
        }
        Greater => {
            if let Some(r) = &node.r {
                descend(r, target, outcome)
            }
        }
        Equal => outcome.found = true,
    }
}

// ============================================================================
#[cfg(test)]
mod test {
    use crate::bst::Tree;
    use crate::search::{find_path, MAX_RECORDED_DEPTH};

    #[test]
    fn found_key_reports_the_descent_path() {
        let tree: Tree = [5, 3, 8, 1, 4].iter().cloned().collect();
        let outcome = find_path(&tree, 4);

        assert!(outcome.found);
        assert_eq!(outcome.path, vec![5, 3, 4]);
        assert!(!outcome.truncated);
    }

    #[test]
    fn root_key_has_a_single_entry_path() {
        let tree: Tree = [5, 3, 8].iter().cloned().collect();
        let outcome = find_path(&tree, 5);
        assert!(outcome.found);
        assert_eq!(outcome.path, vec![5]);
    }

    #[test]
    fn missing_key_reports_where_the_search_went() {
        let tree: Tree = [5, 3, 8].iter().cloned().collect();
        let outcome = find_path(&tree, 9);

        assert!(!outcome.found);
        assert_eq!(outcome.path, vec![5, 8]);
    }

    #[test]
    fn empty_tree_is_an_immediate_not_found() {
        let outcome = find_path(&Tree::new(), 7);
        assert!(!outcome.found);
        assert!(outcome.path.is_empty());
        assert!(!outcome.truncated);
    }

    #[test]
    fn key_zero_is_an_ordinary_path_entry() {
        let tree: Tree = [0, -5, 5].iter().cloned().collect();
        let outcome = find_path(&tree, -5);

        assert!(outcome.found);
        assert_eq!(outcome.path, vec![0, -5]);
    }

    #[test]
    fn deep_descent_truncates_the_path_but_still_finds_the_key() {
        // A sorted chain deeper than the recording capacity.
        let tree: Tree = (0..150).collect();
        let outcome = find_path(&tree, 149);

        assert!(outcome.found);
        assert!(outcome.truncated);
        assert_eq!(outcome.path.len(), MAX_RECORDED_DEPTH);
        assert_eq!(outcome.path, (0..100).collect::<Vec<i64>>());
    }

    #[test]
    fn shallow_descent_is_never_marked_truncated() {
        let tree: Tree = (0..150).collect();
        let outcome = find_path(&tree, 10);
        assert!(outcome.found);
        assert!(!outcome.truncated);
        assert_eq!(outcome.path.len(), 11);
    }
}
