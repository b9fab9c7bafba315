use crate::error::{AutoverError, Result};
use crate::git::{CommitInfo, History};
use git2::{Oid, Repository};
use std::collections::HashMap;
use std::path::Path;

/// Git-backed history using the `git2` crate
pub struct GitHistory {
    repo: Repository,
}

impl GitHistory {
    /// Open or discover a git repository at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| AutoverError::config(format!("Not in a git repository: {}", e)))?;
        Ok(GitHistory { repo })
    }

    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?;
        head.target()
            .ok_or_else(|| AutoverError::config("HEAD is detached or invalid".to_string()))
    }

    /// Map every tag to the OID it points at, peeling annotated tags
    fn tag_oids(&self) -> Result<HashMap<Oid, String>> {
        let mut oids = HashMap::new();
        let tags = self.repo.tag_names(None)?;

        for tag_name in tags.iter().flatten() {
            if let Ok(tag_ref) = self.repo.find_reference(&format!("refs/tags/{}", tag_name)) {
                if let Ok(tag_obj) = tag_ref.peel(git2::ObjectType::Any) {
                    oids.insert(tag_obj.id(), tag_name.to_string());
                }
            }
        }

        Ok(oids)
    }

    fn commit_info(&self, oid: Oid) -> Result<CommitInfo> {
        let commit = self.repo.find_commit(oid)?;
        let subject = commit.summary().unwrap_or("").to_string();
        let author = commit.author().name().unwrap_or("unknown").to_string();
        Ok(CommitInfo {
            hash: oid.to_string(),
            subject,
            author,
        })
    }
}

impl History for GitHistory {
    fn latest_tag(&self) -> Result<Option<String>> {
        let head = self.head_oid()?;
        let tag_oids = self.tag_oids()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head)?;

        for oid in revwalk {
            match oid {
                Ok(oid) => {
                    if let Some(tag_name) = tag_oids.get(&oid) {
                        return Ok(Some(tag_name.clone()));
                    }
                }
                Err(_) => continue,
            }
        }

        Ok(None)
    }

    fn subjects_since(&self, tag: Option<&str>) -> Result<Vec<CommitInfo>> {
        let head = self.head_oid()?;

        let tag_name = match tag {
            Some(name) => name,
            None => {
                // No tag boundary: only the most recent commit is relevant
                return Ok(vec![self.commit_info(head)?]);
            }
        };

        let tag_oid = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag_name))
            .ok()
            .and_then(|r| r.peel(git2::ObjectType::Any).ok())
            .map(|obj| obj.id());

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;

            // Stop once we reach the tagged commit
            if Some(oid) == tag_oid {
                break;
            }

            commits.push(self.commit_info(oid)?);
        }

        // Revwalk runs newest first; the resolver wants oldest first
        commits.reverse();
        Ok(commits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_outside_repository_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        // TempDir under /tmp is not inside a git work tree
        let result = GitHistory::open(temp.path());
        assert!(result.is_err());
    }
}
