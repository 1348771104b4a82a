//! Depth-first rendering of a tree in pre-, in- or post-order.

use std::fmt;
use std::iter;
use std::str::FromStr;

use tracing::instrument;

use crate::error::{Error, Result};
use crate::tree::{Node, Tree};

/// Separator written after every rendered value.
const SEPARATOR: &str = "->";

/// When a node's own value is emitted relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

impl Order {
    /// Every order, in declaration order.
    pub const ALL: [Order; 3] = [Order::PreOrder, Order::InOrder, Order::PostOrder];

    /// The textual name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Order::PreOrder => "pre-order",
            Order::InOrder => "in-order",
            Order::PostOrder => "post-order",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Order::ALL
            .into_iter()
            .find(|order| order.name() == s)
            .ok_or_else(|| Error::InvalidOrder(s.to_string()))
    }
}

/// Collects the values of the subtree rooted at `node` in the given order.
/// An absent node yields nothing.
///
/// Each call builds its own sequence from its children's sequences, so the
/// recursion shares no state.
pub fn walk(node: Option<&Node>, order: Order) -> Vec<i64> {
    let Some(node) = node else {
        return Vec::new();
    };

    let left = walk(node.left(), order);
    let right = walk(node.right(), order);
    let data = iter::once(node.data());

    match order {
        Order::PreOrder => data.chain(left).chain(right).collect(),
        Order::InOrder => left.into_iter().chain(data).chain(right).collect(),
        Order::PostOrder => left.into_iter().chain(right).chain(data).collect(),
    }
}

/// Renders every value of `tree` in the given order, each followed by `->`.
/// An empty tree renders as the empty string.
#[instrument(level = "debug", skip(tree))]
pub fn traverse(tree: &Tree, order: Order) -> String {
    walk(tree.root(), order)
        .into_iter()
        .map(|data| format!("{data}{SEPARATOR}"))
        .collect()
}

/// Parses `order` and traverses `tree` with it. Fails with
/// [`Error::InvalidOrder`] without producing any output when the name is
/// unknown.
pub fn traverse_named(tree: &Tree, order: &str) -> Result<String> {
    let order = order.parse()?;
    Ok(traverse(tree, order))
}
