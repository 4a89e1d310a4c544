//! Error kinds for skip list operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by skip list operations.
///
/// Every variant except [`Error::KeyNotFound`] signals a broken link
/// invariant inside the structure; once the links are inconsistent there is
/// no recovery path. The carried number is the arena index of the node
/// where the inconsistency was observed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A node that must have a right neighbor (any real element, and every
    /// node short of the right sentinel) has none.
    #[error("node {0} has no right neighbor")]
    MissingRightLink(u32),

    /// A node that must have a left neighbor has none.
    #[error("node {0} has no left neighbor")]
    MissingLeftLink(u32),

    /// A descent reached a node with no down link above the base row.
    #[error("node {0} has no down neighbor")]
    MissingDownLink(u32),

    /// The skip count of a left sentinel is permanently zero; a mutation
    /// attempt means an engine walk went somewhere it never should.
    #[error("attempted to change the skip count of left sentinel {0}")]
    InvalidSentinelMutation(u32),

    /// A node expected to be a base-row entry turned out to be something
    /// else, so the key index and the rows disagree.
    #[error("node {0} is not a base-row entry")]
    NotAnEntry(u32),

    /// `remove` was called with a key that is not present.
    #[error("key not present in the skip list")]
    KeyNotFound,
}
