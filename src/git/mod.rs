//! Git history abstraction layer
//!
//! The [History] trait defines the commit-history lookups the resolver
//! needs, with two implementations:
//!
//! - [repository::GitHistory]: a real implementation using the `git2` crate
//! - [mock::MockHistory]: an in-memory implementation for testing
//!
//! Code that consumes history should depend on the trait rather than a
//! concrete implementation.

pub mod mock;
pub mod repository;

pub use mock::MockHistory;
pub use repository::GitHistory;

use crate::error::Result;

/// Commit information handed to the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// The commit hash
    pub hash: String,
    /// First line of the commit message
    pub subject: String,
    /// The commit author
    pub author: String,
}

/// Commit-history lookups backing version resolution
///
/// Implementations must hand back commits in chronological order (oldest
/// first) so the resolver's fold sees them in the order they landed.
pub trait History {
    /// Find the most recent tag reachable from HEAD.
    ///
    /// Walks the history backwards from HEAD and returns the first tag
    /// encountered, handling both lightweight and annotated tags. Returns
    /// `Ok(None)` when the repository has no tag on the current history.
    fn latest_tag(&self) -> Result<Option<String>>;

    /// Collect commit subjects between a tag and HEAD.
    ///
    /// Returns the commits after `tag` (exclusive) up to HEAD (inclusive),
    /// oldest first. When `tag` is `None` only the single most recent
    /// commit is returned, so a repository without tags still yields a
    /// usable one-commit sequence.
    fn subjects_since(&self, tag: Option<&str>) -> Result<Vec<CommitInfo>>;
}
