//! Version resolution: classify the input, look up the latest tag when
//! bumping, then validate the candidate against the existing tags.

use tracing::{debug, info};

use crate::boundary::BoundaryWarning;
use crate::domain::{BumpKind, TagSet, Version, VERSION_TAG_GLOB};
use crate::error::{ResolveError, Result};
use crate::git::TagStore;

/// Runtime options for a single resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Remote whose tags are fetched before reading local tags
    pub remote: String,

    /// Refresh tags from `remote` first
    pub fetch: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            remote: "origin".to_string(),
            fetch: true,
        }
    }
}

/// How the input was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Literal,
    Bump(BumpKind),
}

/// Result of a successful resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Tag to publish, exactly as it should be printed
    pub tag: String,
    /// Computed version; `None` for literal input, which is never parsed
    pub version: Option<Version>,
    /// Latest existing version the bump started from
    pub previous: Option<Version>,
    pub source: VersionSource,
    pub warnings: Vec<BoundaryWarning>,
}

/// Resolves version input against the tags of a [`TagStore`].
pub struct Resolver<'a, S: TagStore + ?Sized> {
    store: &'a S,
    options: ResolveOptions,
}

impl<'a, S: TagStore + ?Sized> Resolver<'a, S> {
    pub fn new(store: &'a S, options: ResolveOptions) -> Self {
        Resolver { store, options }
    }

    /// Resolve `input` to the next release tag.
    ///
    /// `input` is either a literal `vX.Y.Z` tag, used as is, or one of the
    /// keywords `major`, `minor`, `patch`, applied to the highest existing
    /// version tag. Either way the result must be well-formed and not yet
    /// tagged.
    pub fn resolve(&self, input: &str) -> Result<Resolution> {
        let source = classify(input)?;
        debug!(input, ?source, "classified input");

        let mut warnings = Vec::new();
        let tags = self.read_tags(&mut warnings)?;
        debug!(count = tags.len(), "read version tags");

        let (tag, version, previous) = match source {
            VersionSource::Literal => (input.to_string(), None, None),
            VersionSource::Bump(kind) => {
                warnings.extend(tags.ignored().map(|tag| BoundaryWarning::IgnoredTag {
                    tag: tag.to_string(),
                }));

                let (latest_tag, latest) = tags.latest()?.ok_or(ResolveError::NoTagsFound)?;
                debug!(latest = latest_tag, "found latest version tag");

                let next = latest.bump(kind)?;
                (next.to_string(), Some(next), Some(latest))
            }
        };

        validate(&tag, &tags)?;
        info!(tag = %tag, "resolved version");

        Ok(Resolution {
            tag,
            version,
            previous,
            source,
            warnings,
        })
    }

    fn read_tags(&self, warnings: &mut Vec<BoundaryWarning>) -> Result<TagSet> {
        if self.options.fetch {
            self.store.fetch_tags(&self.options.remote)?;
        } else {
            warnings.push(BoundaryWarning::FetchSkipped {
                remote: self.options.remote.clone(),
            });
        }

        let names = self.store.list_tags(Some(VERSION_TAG_GLOB))?;
        Ok(TagSet::new(names))
    }
}

/// Resolve with default options and return only the tag.
pub fn resolve<S: TagStore + ?Sized>(store: &S, input: &str) -> Result<String> {
    Resolver::new(store, ResolveOptions::default())
        .resolve(input)
        .map(|resolution| resolution.tag)
}

/// Decide whether `input` is a literal tag or a bump keyword.
///
/// Input that looks like a version attempt but is not a strict literal is a
/// format error rather than an unknown keyword: a leading digit (after an
/// optional `v`), or a leading `v` with a `.` somewhere after it.
pub fn classify(input: &str) -> Result<VersionSource> {
    if Version::is_literal(input) {
        return Ok(VersionSource::Literal);
    }

    if looks_like_version(input) {
        return Err(ResolveError::invalid_format(input));
    }

    input.parse::<BumpKind>().map(VersionSource::Bump)
}

fn looks_like_version(input: &str) -> bool {
    match input.strip_prefix('v') {
        Some(rest) => rest.starts_with(|c: char| c.is_ascii_digit()) || rest.contains('.'),
        None => input.starts_with(|c: char| c.is_ascii_digit()),
    }
}

/// Check that `candidate` is a well-formed tag that does not exist yet.
pub fn validate(candidate: &str, tags: &TagSet) -> Result<()> {
    if !Version::is_literal(candidate) {
        return Err(ResolveError::invalid_format(candidate));
    }

    if tags.contains(candidate) {
        return Err(ResolveError::DuplicateVersion(candidate.to_string()));
    }

    Ok(())
}
