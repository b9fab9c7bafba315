use crate::error::Result;
use crate::git::{CommitInfo, History};

/// Mock history for testing without actual git operations
pub struct MockHistory {
    latest_tag: Option<String>,
    commits: Vec<CommitInfo>,
}

impl MockHistory {
    /// Create a new empty mock history
    pub fn new() -> Self {
        MockHistory {
            latest_tag: None,
            commits: Vec::new(),
        }
    }

    /// Set the tag returned by `latest_tag`
    pub fn set_latest_tag(&mut self, tag: impl Into<String>) {
        self.latest_tag = Some(tag.into());
    }

    /// Append a commit; commits are kept in insertion (chronological) order
    pub fn add_commit(&mut self, hash: impl Into<String>, subject: impl Into<String>) {
        self.commits.push(CommitInfo {
            hash: hash.into(),
            subject: subject.into(),
            author: "Test Author".to_string(),
        });
    }
}

impl Default for MockHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MockHistory {
    fn latest_tag(&self) -> Result<Option<String>> {
        Ok(self.latest_tag.clone())
    }

    fn subjects_since(&self, tag: Option<&str>) -> Result<Vec<CommitInfo>> {
        if tag.is_none() {
            // Mirror the real provider: without a tag only the newest commit
            return Ok(self.commits.last().cloned().into_iter().collect());
        }
        Ok(self.commits.clone())
    }
}
