use std::fmt;

/// Non-fatal issues noticed while resolving a version.
/// These are reported to the user but never change the outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag looks version-like but is not a plain `vX.Y.Z` tag
    IgnoredTag { tag: String },
    /// Remote refresh was turned off, so local tags may be stale
    FetchSkipped { remote: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::IgnoredTag { tag } => {
                write!(f, "Ignoring tag '{}': not of the form vMAJOR.MINOR.PATCH", tag)
            }
            BoundaryWarning::FetchSkipped { remote } => {
                write!(
                    f,
                    "Skipped fetching tags from remote '{}'; using local tags only",
                    remote
                )
            }
        }
    }
}
