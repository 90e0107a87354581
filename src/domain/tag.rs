use crate::domain::Version;
use crate::error::Result;

/// Glob handed to the tag store when listing version-like tags.
///
/// Looser than [`Version::is_literal`]: it also admits names such as
/// `v1.2.3-rc.1`, which [`TagSet`] filters out again.
pub const VERSION_TAG_GLOB: &str = "v[0-9]*.[0-9]*.[0-9]*";

/// Read-only snapshot of tag names taken from a tag store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    names: Vec<String>,
}

impl TagSet {
    pub fn new(names: Vec<String>) -> Self {
        TagSet { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact name lookup; no normalisation is applied.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Tags with the exact `vX.Y.Z` shape, highest version first.
    ///
    /// A tag of that shape whose components do not fit a [`Version`] is an
    /// error, never skipped.
    pub fn versions_descending(&self) -> Result<Vec<(&str, Version)>> {
        let mut versions = self
            .names
            .iter()
            .filter(|name| Version::is_literal(name))
            .map(|name| Version::parse(name).map(|v| (name.as_str(), v)))
            .collect::<Result<Vec<_>>>()?;

        versions.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(versions)
    }

    /// Highest strictly-shaped version tag, if any.
    pub fn latest(&self) -> Result<Option<(&str, Version)>> {
        Ok(self.versions_descending()?.into_iter().next())
    }

    /// Names that are present but not of the `vX.Y.Z` shape.
    pub fn ignored(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| !Version::is_literal(name))
    }
}

impl FromIterator<String> for TagSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        TagSet::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;

    fn tags(names: &[&str]) -> TagSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_latest_picks_numeric_maximum() {
        let set = tags(&["v1.2.3", "v1.3.0", "v1.2.9"]);
        assert_eq!(set.latest().unwrap(), Some(("v1.3.0", Version::new(1, 3, 0))));
    }

    #[test]
    fn test_latest_is_not_lexicographic() {
        let set = tags(&["v1.9.0", "v1.10.0", "v1.2.0"]);
        assert_eq!(set.latest().unwrap().unwrap().1, Version::new(1, 10, 0));
    }

    #[test]
    fn test_latest_skips_non_strict_tags() {
        let set = tags(&["v1.0.0", "v2.0.0-rc.1", "release-3.0.0", "v9.9"]);
        assert_eq!(set.latest().unwrap().unwrap().0, "v1.0.0");

        let ignored: Vec<&str> = set.ignored().collect();
        assert_eq!(ignored, vec!["v2.0.0-rc.1", "release-3.0.0", "v9.9"]);
    }

    #[test]
    fn test_latest_empty() {
        assert_eq!(TagSet::default().latest().unwrap(), None);
        assert_eq!(tags(&["nightly"]).latest().unwrap(), None);
    }

    #[test]
    fn test_latest_rejects_oversized_tag() {
        let set = tags(&["v1.0.0", "v4294967296.0.0"]);
        let err = set.latest().unwrap_err();
        assert!(
            matches!(err, ResolveError::InvalidVersionFormat(ref tag) if tag == "v4294967296.0.0"),
            "got: {:?}",
            err
        );
        assert_eq!(set.ignored().count(), 0);
    }

    #[test]
    fn test_contains_is_exact() {
        let set = tags(&["v2.0.0"]);
        assert!(set.contains("v2.0.0"));
        assert!(!set.contains("2.0.0"));
        assert!(!set.contains("v2.0"));
    }

    #[test]
    fn test_versions_descending_order() {
        let set = tags(&["v0.1.0", "v1.0.0", "v0.10.0"]);
        let order: Vec<&str> = set
            .versions_descending()
            .unwrap()
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(order, vec!["v1.0.0", "v0.10.0", "v0.1.0"]);
    }
}
