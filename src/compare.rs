//! Structural and value equality between two trees.

use crate::tree::{Node, Tree};

/// Whether the trees rooted at `a` and `b` have the same shape and the same
/// value at every position.
///
/// Two absent roots are equal. One absent root is a shape mismatch.
pub fn compare(a: Option<&Node>, b: Option<&Node>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.data == b.data && compare(a.left(), b.left()) && compare(a.right(), b.right())
        }
        _ => false,
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        compare(Some(self), Some(other))
    }
}

impl Eq for Node {}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        compare(self.root(), other.root())
    }
}

impl Eq for Tree {}
