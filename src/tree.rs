//! The owned node structure every operation in this crate works on.
//!
//! # Examples
//!
//! ```
//! use bintree::{Node, Order, Tree};
//!
//! let tree = Tree::with_root(
//!     Node::leaf(10)
//!         .with_left(Node::leaf(5).with_left(Node::leaf(4)))
//!         .with_right(Node::leaf(15)),
//! );
//!
//! assert_eq!(tree.traverse(Order::PreOrder), "10->5->4->15->");
//! assert!(tree.bfs(4));
//! assert!(!tree.dfs(42));
//! ```

use crate::error::Result;
use crate::traversal::{self, Order};
use crate::{insert, search};

/// A single element of a binary tree. Each `Node` exclusively owns its
/// children so a tree is always a strict hierarchy.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) data: i64,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    /// Construct a `Node` with the given value and children.
    pub fn new(data: i64, left: Option<Node>, right: Option<Node>) -> Self {
        Self {
            data,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Construct a `Node` with no children.
    pub fn leaf(data: i64) -> Self {
        Self::new(data, None, None)
    }

    /// Replaces the left subtree, returning the updated node.
    pub fn with_left(mut self, left: Node) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Replaces the right subtree, returning the updated node.
    pub fn with_right(mut self, right: Node) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// The value stored in this node.
    pub fn data(&self) -> i64 {
        self.data
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }
}

/// A binary tree. Owns an optional root [`Node`]; a `Tree` without a root is
/// empty.
///
/// Equality (`==`) compares shape and values, see [`compare`](crate::compare::compare).
#[derive(Clone, Debug, Default)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl From<Node> for Tree {
    fn from(root: Node) -> Self {
        Self::with_root(root)
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generates a `Tree` owning the given node as its root.
    pub fn with_root(root: Node) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Whether this tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Renders the tree's values in the given order, each followed by `->`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Node, Order, Tree};
    ///
    /// let tree = Tree::with_root(Node::new(2, Some(Node::leaf(1)), Some(Node::leaf(3))));
    ///
    /// assert_eq!(tree.traverse(Order::InOrder), "1->2->3->");
    /// assert_eq!(Tree::new().traverse(Order::InOrder), "");
    /// ```
    pub fn traverse(&self, order: Order) -> String {
        traversal::traverse(self, order)
    }

    /// Like [`traverse`](Self::traverse) but the order is given by name, e.g.
    /// `"post-order"`. Unknown names are an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Node, Tree};
    ///
    /// let tree = Tree::with_root(Node::leaf(1).with_left(Node::leaf(0)));
    ///
    /// assert_eq!(tree.traverse_named("post-order").unwrap(), "0->1->");
    /// assert!(tree.traverse_named("sideways").is_err());
    /// ```
    pub fn traverse_named(&self, order: &str) -> Result<String> {
        traversal::traverse_named(self, order)
    }

    /// Level-order search for `needle`. Works on any tree shape.
    pub fn bfs(&self, needle: i64) -> bool {
        search::bfs(self.root(), needle)
    }

    /// Ordered search for `needle`. Only reliable when the tree was built
    /// with [`insert`](Self::insert) (or otherwise respects the ordering).
    pub fn dfs(&self, needle: i64) -> bool {
        search::dfs(self.root(), needle)
    }

    /// Attaches `node` below the root at the position dictated by its value.
    /// Returns whether it was attached.
    ///
    /// An empty tree has nowhere to attach to, so nothing happens: the first
    /// root has to be supplied with [`with_root`](Self::with_root).
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Node, Order, Tree};
    ///
    /// let mut tree = Tree::with_root(Node::leaf(10));
    /// assert!(tree.insert(Node::leaf(7)));
    /// assert!(tree.insert(Node::leaf(15)));
    /// assert_eq!(tree.traverse(Order::InOrder), "7->10->15->");
    ///
    /// let mut empty = Tree::new();
    /// assert!(!empty.insert(Node::leaf(7)));
    /// assert!(empty.is_empty());
    /// ```
    pub fn insert(&mut self, node: Node) -> bool {
        insert::insert(self.root.as_deref_mut(), node)
    }

    /// Shorthand for inserting a leaf holding `data`.
    pub fn insert_value(&mut self, data: i64) -> bool {
        self.insert(Node::leaf(data))
    }
}
