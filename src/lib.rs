//! This crate exposes the textbook operations on a binary tree of integers,
//! mostly for educational purposes.
//!
//! ## Binary Tree
//!
//! A binary tree is defined recursively using the notion of a [`Node`]. A
//! `Node` stores a value and owns up to two child `Node`s, its left and right
//! subtrees. A [`Tree`] owns an optional root `Node`; an absent root is the
//! empty tree.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The plain types don't require any ordering between a node and its children.
//! Two operations do, though:
//!
//! - [`insert`](insert::insert) places new nodes so that, for every `Node`,
//!   everything in its left subtree is less than or equal to its value and
//!   everything in its right subtree is greater. Ties go left.
//! - [`dfs`](search::dfs) relies on that ordering to search in `O(height)`. On
//!   a tree that isn't ordered it can miss values that are present.
//!
//! The remaining operations work on any shape: [`traverse`](traversal::traverse)
//! renders values in pre-, in- or post-order, [`bfs`](search::bfs) scans level
//! by level and [`compare`](compare::compare) checks two trees for identical
//! shape and values.
//!
//! No balancing happens, so inserting sorted values degrades the tree into a
//! list.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod error;
pub mod insert;
pub mod search;
pub mod traversal;
pub mod tree;

pub use compare::compare;
pub use error::{Error, Result};
pub use insert::insert;
pub use search::{bfs, dfs, search};
pub use traversal::{traverse, traverse_named, walk, Order};
pub use tree::{Node, Tree};
