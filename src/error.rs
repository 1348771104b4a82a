//! Errors surfaced by this crate.

use thiserror::Error;

/// Everything that can go wrong. Absent nodes are never an error; they are
/// the empty subtree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A traversal order name that isn't one of `pre-order`, `in-order` or
    /// `post-order`.
    #[error("invalid traversal order: {0:?}")]
    InvalidOrder(String),
}

/// Result type for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
