//! Looking for a value: a level-order scan that works on any tree and an
//! ordered descent that relies on the tree having been built by
//! [`insert`](crate::insert::insert).

use std::collections::VecDeque;

use tracing::{instrument, trace};

use crate::tree::Node;

/// Breadth-first search for `needle` starting at `root`.
///
/// Nodes are visited level by level from a FIFO frontier. Children are queued
/// whether or not they exist; absent entries are skipped when dequeued. Makes
/// no assumption about ordering.
#[instrument(level = "debug", skip(root))]
pub fn bfs(root: Option<&Node>, needle: i64) -> bool {
    let mut frontier = VecDeque::new();
    frontier.push_back(root);

    while let Some(curr) = frontier.pop_front() {
        let Some(curr) = curr else {
            continue;
        };

        trace!(data = curr.data, "visit");
        if curr.data == needle {
            return true;
        }

        frontier.push_back(curr.left());
        frontier.push_back(curr.right());
    }

    false
}

/// Ordered search for `needle` in the subtree rooted at `node`, descending
/// into exactly one child per level.
///
/// The subtree must satisfy the BST ordering (left `<=` node `<` right). This
/// isn't checked: on an unordered subtree present values may not be found.
pub fn search(node: Option<&Node>, needle: i64) -> bool {
    let Some(node) = node else {
        return false;
    };

    trace!(data = node.data, "visit");
    if node.data == needle {
        return true;
    }

    if node.data < needle {
        search(node.right(), needle)
    } else {
        search(node.left(), needle)
    }
}

/// Depth-first search for `needle` from `root`. See [`search`] for the
/// ordering precondition.
#[instrument(level = "debug", skip(root))]
pub fn dfs(root: Option<&Node>, needle: i64) -> bool {
    search(root, needle)
}
