use thiserror::Error;

/// Unified error type for version resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Invalid version type: {0}")]
    InvalidBumpKind(String),

    #[error("No valid tags found")]
    NoTagsFound,

    #[error("Failed to query tags: {0}")]
    TagQuery(String),

    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Version already tagged: {0}")]
    DuplicateVersion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in resolve-version
pub type Result<T> = std::result::Result<T, ResolveError>;

impl From<git2::Error> for ResolveError {
    fn from(err: git2::Error) -> Self {
        ResolveError::TagQuery(err.message().to_string())
    }
}

impl ResolveError {
    /// Create a tag query error with context
    pub fn tag_query(msg: impl Into<String>) -> Self {
        ResolveError::TagQuery(msg.into())
    }

    /// Create a version format error for the offending input
    pub fn invalid_format(input: impl Into<String>) -> Self {
        ResolveError::InvalidVersionFormat(input.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ResolveError::Config(msg.into())
    }
}
