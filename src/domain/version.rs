use crate::domain::BumpKind;
use crate::error::{ResolveError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Full-string shape every published tag must have.
const STRICT_PATTERN: &str = r"^v[0-9]+\.[0-9]+\.[0-9]+$";

/// Prefix shape accepted when reading a version back out of a tag.
const LENIENT_PATTERN: &str = r"^v?(\d+)\.(\d+)\.(\d+)";

fn strict_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(STRICT_PATTERN).expect("strict version pattern is valid"))
}

fn lenient_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LENIENT_PATTERN).expect("lenient version pattern is valid"))
}

/// Semantic version triple, rendered as `v<major>.<minor>.<patch>`.
///
/// Field order matters: the derived `Ord` compares major, then minor, then
/// patch, numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Returns true if `input` is exactly a literal tag such as `v1.2.3`.
    pub fn is_literal(input: &str) -> bool {
        strict_regex().is_match(input)
    }

    /// Parse version from a tag string (e.g., "v1.2.3" -> Version(1,2,3))
    ///
    /// The leading `v` is optional and anything after the patch component is
    /// ignored; callers that need the exact shape check [`Version::is_literal`].
    pub fn parse(tag: &str) -> Result<Self> {
        let caps = lenient_regex()
            .captures(tag)
            .ok_or_else(|| ResolveError::invalid_format(tag))?;

        let component = |idx: usize| -> Result<u32> {
            caps[idx]
                .parse::<u32>()
                .map_err(|_| ResolveError::invalid_format(tag))
        };

        Ok(Version {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// Bump version according to bump kind
    ///
    /// Fails only when the incremented component would overflow.
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let overflow = || ResolveError::invalid_format(format!("{} bumped by {}", self, kind));

        let bumped = match kind {
            BumpKind::Major => Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            BumpKind::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            BumpKind::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
        };

        Ok(bumped)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}
