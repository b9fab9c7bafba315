use crate::error::{AutoverError, Result};
use git2::{Oid, Repository};
use std::path::Path;

/// Performs the release side effects once a new version is resolved:
/// committing the updated version file, tagging the release commit, and
/// pushing branch and tag to the remote.
pub struct Publisher {
    repo: Repository,
}

impl Publisher {
    /// Open or discover a git repository at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| AutoverError::config(format!("Not in a git repository: {}", e)))?;
        Ok(Publisher { repo })
    }

    /// Stage `version_file` and commit it with `message` on HEAD
    pub fn commit_release(&self, version_file: &Path, message: &str) -> Result<Oid> {
        let relative = self.workdir_relative(version_file)?;

        let mut index = self.repo.index()?;
        index.add_path(&relative)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let signature = self.repo.signature()?;
        let head = self.repo.head()?.peel_to_commit()?;

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&head],
        )?;
        Ok(oid)
    }

    /// Create a lightweight tag on the current HEAD commit
    pub fn create_tag(&self, tag_name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo
            .tag_lightweight(tag_name, head.as_object(), false)?;
        Ok(())
    }

    /// Push the release branch and tag to a remote.
    ///
    /// Authenticates via SSH keys from ~/.ssh (ed25519, rsa, ecdsa in that
    /// order), falling back to the SSH agent and then default credentials.
    pub fn push(&self, remote_name: &str, branch: &str, tag_name: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|_| AutoverError::remote(format!("No remote named '{}' found", remote_name)))?;

        let mut push_options = git2::PushOptions::new();

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                let key_paths = vec![
                    format!("{}/.ssh/id_ed25519", home),
                    format!("{}/.ssh/id_rsa", home),
                    format!("{}/.ssh/id_ecdsa", home),
                ];

                for key_path in key_paths {
                    let path = std::path::Path::new(&key_path);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(
                            username_from_url.unwrap_or("git"),
                            None,
                            path,
                            None,
                        ) {
                            return Ok(cred);
                        }
                    }
                }

                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });

        // Surface per-reference rejections during the push
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                eprintln!(
                    "Warning: Could not update reference {}: {}",
                    refname, status
                );
                Err(git2::Error::from_str(&format!(
                    "Push failed for {}",
                    refname
                )))
            } else {
                Ok(())
            }
        });

        push_options.remote_callbacks(callbacks);

        let branch_refspec = format!("refs/heads/{}", branch);
        let tag_refspec = format!("refs/tags/{}", tag_name);

        match remote.push(
            &[branch_refspec.as_str(), tag_refspec.as_str()],
            Some(&mut push_options),
        ) {
            Ok(_) => Ok(()),
            Err(e) => {
                if e.class() == git2::ErrorClass::Net {
                    Err(AutoverError::remote(format!(
                        "Network error during push: {}",
                        e
                    )))
                } else if e.class() == git2::ErrorClass::Reference {
                    Err(AutoverError::remote(format!(
                        "Reference error during push: {}",
                        e
                    )))
                } else {
                    Err(AutoverError::remote(format!(
                        "Failed to push '{}': {}",
                        tag_name, e
                    )))
                }
            }
        }
    }

    /// Resolve a path relative to the repository work tree for staging
    fn workdir_relative(&self, path: &Path) -> Result<std::path::PathBuf> {
        if path.is_relative() {
            return Ok(path.to_path_buf());
        }

        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| AutoverError::config("Repository has no work tree".to_string()))?;

        path.strip_prefix(workdir)
            .map(|p| p.to_path_buf())
            .map_err(|_| {
                AutoverError::config(format!(
                    "'{}' is outside the repository work tree",
                    path.display()
                ))
            })
    }
}
