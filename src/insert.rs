//! Unbalanced insertion that keeps a tree in BST order.

use tracing::{debug, instrument};

use crate::tree::Node;

/// Attaches `node` somewhere below `curr`, returning whether it was attached.
///
/// Starting at `curr`, the walk goes right while the current value is less
/// than `node`'s and left otherwise, until it reaches a missing child. `node`
/// (and whatever children it already has) is placed there. Values equal to an
/// existing one therefore end up on its left.
///
/// Without a `curr` there is no parent to attach to and nothing happens. This
/// never creates a root.
#[instrument(level = "debug", skip(curr, node), fields(data = node.data))]
pub fn insert(curr: Option<&mut Node>, node: Node) -> bool {
    let Some(curr) = curr else {
        debug!("no subtree to insert into");
        return false;
    };

    attach(curr, node);
    true
}

/// Walks down from `parent` to the empty child slot that `node` belongs in.
fn attach(parent: &mut Node, node: Node) {
    let parent_data = parent.data;
    let goes_right = parent_data < node.data;
    let slot = if goes_right {
        &mut parent.right
    } else {
        &mut parent.left
    };

    if let Some(child) = slot {
        attach(child, node);
    } else {
        let side = if goes_right { "right" } else { "left" };
        debug!(parent = parent_data, side, "attached");
        *slot = Some(Box::new(node));
    }
}
