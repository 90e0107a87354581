//! Tag store abstraction layer
//!
//! The resolver only ever reads tags, so the trait here is deliberately
//! narrow: refresh tags from a remote, then enumerate them.
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust
//! # use resolve_version::git::{MockRepository, TagStore};
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = MockRepository::with_tags(["v1.0.0", "v1.1.0"]);
//! repo.fetch_tags("origin")?;
//! let tags = repo.list_tags(Some("v[0-9]*.[0-9]*.[0-9]*"))?;
//! assert_eq!(tags.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only access to the tags of a version-control repository.
///
/// All implementors must be `Send`. Every failure of the underlying
/// store is reported as [crate::error::ResolveError::TagQuery].
pub trait TagStore: Send {
    /// Refresh local tags from a remote
    ///
    /// Tags are fetched with the refspec `+refs/tags/*:refs/tags/*`, so tags
    /// moved on the remote overwrite their local counterpart.
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    ///
    /// # Returns
    /// * `Ok(())` - Tags are up to date
    /// * `Err` - If the remote doesn't exist or the fetch fails
    fn fetch_tags(&self, remote: &str) -> Result<()>;

    /// List tag names
    ///
    /// # Arguments
    /// * `pattern` - Optional fnmatch-style glob (e.g. `v[0-9]*.[0-9]*.[0-9]*`)
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Matching tag names, in no particular order
    /// * `Err` - If the tags cannot be read
    fn list_tags(&self, pattern: Option<&str>) -> Result<Vec<String>>;
}
