use crate::error::{ResolveError, Result};
use git2::{Cred, CredentialType, FetchOptions, RemoteCallbacks, Repository as Git2Repo};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            ResolveError::tag_query(format!(
                "Not in a git repository ({}): {}",
                path.display(),
                e.message()
            ))
        })?;

        debug!(path = %repo.path().display(), "opened repository");
        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

/// SSH keys tried in order before falling back to the agent.
fn ssh_key_candidates() -> Vec<PathBuf> {
    let Some(home) = dirs::home_dir() else {
        return Vec::new();
    };

    ["id_ed25519", "id_rsa", "id_ecdsa"]
        .iter()
        .map(|name| home.join(".ssh").join(name))
        .collect()
}

fn credentials_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(CredentialType::SSH_KEY) {
            for key_path in ssh_key_candidates() {
                if key_path.exists() {
                    if let Ok(cred) = Cred::ssh_key(username, None, &key_path, None) {
                        return Ok(cred);
                    }
                }
            }

            if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
        }

        Cred::default()
    });
    callbacks
}

impl super::TagStore for Git2Repository {
    fn fetch_tags(&self, remote: &str) -> Result<()> {
        let mut remote_handle = self.repo.find_remote(remote).map_err(|e| {
            ResolveError::tag_query(format!("Remote '{}' not found: {}", remote, e.message()))
        })?;

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(credentials_callbacks());

        debug!(remote, "fetching tags");
        remote_handle
            .fetch(&["+refs/tags/*:refs/tags/*"], Some(&mut fetch_options), None)
            .map_err(|e| {
                ResolveError::tag_query(format!(
                    "Failed to fetch tags from remote '{}': {}",
                    remote,
                    e.message()
                ))
            })?;

        Ok(())
    }

    fn list_tags(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(pattern).map_err(|e| {
            ResolveError::tag_query(format!("Failed to list tags: {}", e.message()))
        })?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}
