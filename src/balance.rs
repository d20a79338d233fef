use crate::bst::Tree;
use crate::node::Node;

/**
 * One audited node: its key and its balance factor, defined as the height
 * of the right sub-tree minus the height of the left sub-tree.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalanceEntry {
    pub key: i64,
    pub factor: i64,
}

// ============================================================================
impl BalanceEntry {
    /**
     * A node violates the AVL rule when its balance factor falls outside
     * [-1, 1].
     */
    pub fn is_violation(&self) -> bool {
        self.factor < -1 || self.factor > 1
    }
}

/**
 * The outcome of auditing every node of a tree. The tree is classified as
 * a valid AVL tree when no node violates the AVL rule. The audit is
 * diagnostic only; nothing is ever restructured.
 */
pub struct BalanceReport {
    entries: Vec<BalanceEntry>,
    violations: usize,
}

// ============================================================================
impl BalanceReport {
    /**
     * Per-node entries in visit order: right sub-tree, left sub-tree,
     * then the node itself (a reverse in-order walk).
     */
    pub fn entries(&self) -> &[BalanceEntry] {
        &self.entries
    }

    pub fn violations(&self) -> usize {
        self.violations
    }

    pub fn is_avl(&self) -> bool {
        self.violations == 0
    }
}

/**
 * Audit the balance factor of every node in the tree. Heights are
 * recomputed from scratch at each node, which makes the audit quadratic
 * in the worst case; that trade-off is accepted for a pure, read-only
 * pass. An empty tree audits clean: no entries, zero violations.
 */
pub fn audit_balance(tree: &Tree) -> BalanceReport {
    let mut entries = Vec::with_capacity(tree.len());

    if let Some(root) = &tree.root {
        walk(root, &mut entries)
    }
    let violations = entries.iter().filter(|e| e.is_violation()).count();

    BalanceReport {
        entries,
        violations,
    }
}

fn walk(node: &Node, entries: &mut Vec<BalanceEntry>) {
    if let Some(r) = &node.r {
        walk(r, entries)
    }
    if let Some(l) = &node.l {
        walk(l, entries)
    }
    entries.push(BalanceEntry {
        key: node.key,
        factor: node.balance_factor(),
    })
}

// ============================================================================
#[cfg(test)]
mod test {
    use crate::balance::audit_balance;
    use crate::bst::Tree;

    #[test]
    fn empty_tree_audits_clean() {
        let report = audit_balance(&Tree::new());
        assert!(report.is_avl());
        assert_eq!(report.violations(), 0);
        assert!(report.entries().is_empty());
    }

    #[test]
    fn sorted_input_is_not_avl() {
        let tree: Tree = [1, 2, 3, 4, 5].iter().cloned().collect();
        let report = audit_balance(&tree);

        assert!(!report.is_avl());
        assert!(report.entries().iter().any(|e| e.factor.abs() > 1));
        // The chain root leans right by its full height minus one.
        assert_eq!(report.entries().last().unwrap().key, 1);
        assert_eq!(report.entries().last().unwrap().factor, 4);
    }

    #[test]
    fn hand_balanced_input_is_avl() {
        let tree: Tree = [2, 1, 3].iter().cloned().collect();
        let report = audit_balance(&tree);

        assert!(report.is_avl());
        assert!(report.entries().iter().all(|e| e.factor == 0));
    }

    #[test]
    fn entries_come_in_reverse_in_order() {
        let tree: Tree = [5, 3, 8, 1, 4, 7, 9].iter().cloned().collect();
        let keys: Vec<_> = audit_balance(&tree).entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![9, 7, 8, 4, 1, 3, 5]);
    }

    #[test]
    fn violation_count_matches_flagged_entries() {
        let tree: Tree = (1..=6).collect();
        let report = audit_balance(&tree);
        let flagged = report.entries().iter().filter(|e| e.is_violation()).count();
        assert_eq!(report.violations(), flagged);
        assert!(report.violations() > 0);
    }

    #[test]
    fn audit_leaves_the_tree_untouched() {
        let tree: Tree = [4, 2, 6, 1, 3, 5, 7].iter().cloned().collect();
        let before: Vec<_> = tree.iter().collect();
        let _ = audit_balance(&tree);
        let after: Vec<_> = tree.iter().collect();
        assert_eq!(before, after);
        assert_eq!(tree.height(), 3);
    }
}
