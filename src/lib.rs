//! Keytree builds unbalanced binary search trees from integer key
//! sequences and runs three read-only analyses on them: a per-node
//! AVL-balance audit, a root-to-key path search with the descent path
//! reported, and an exact structural subtree-embedding test. Trees are
//! deliberately left unbalanced: the shape is purely a function of
//! insertion order, so building from sorted input produces the degenerate
//! chains the balance audit exists to flag. Nothing here rebalances,
//! deletes, or persists a tree; all failure conditions are values
//! returned to the caller.

pub mod balance;
pub mod bst;
pub mod ingest;
pub mod node;
pub mod search;
pub mod subtree;
