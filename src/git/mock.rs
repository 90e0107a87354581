use crate::error::{ResolveError, Result};
use crate::git::TagStore;
use regex::Regex;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
#[derive(Default)]
pub struct MockRepository {
    tags: Vec<String>,
    fetch_error: Option<String>,
    list_error: Option<String>,
    fetched: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock repository holding the given tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockRepository {
            tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Make every subsequent fetch fail with `message`
    pub fn fail_fetch(mut self, message: impl Into<String>) -> Self {
        self.fetch_error = Some(message.into());
        self
    }

    /// Make every subsequent listing fail with `message`
    pub fn fail_list(mut self, message: impl Into<String>) -> Self {
        self.list_error = Some(message.into());
        self
    }

    /// Remotes passed to `fetch_tags`, in call order
    pub fn fetched_remotes(&self) -> Vec<String> {
        self.fetched
            .lock()
            .map(|remotes| remotes.clone())
            .unwrap_or_default()
    }
}

/// Translate an fnmatch-style glob into an anchored regex.
///
/// Supports `*`, `?` and bracket classes, which covers the globs the
/// resolver passes.
fn glob_to_regex(glob: &str) -> Result<Regex> {
    let mut pattern = String::from("^");
    let mut in_class = false;

    for ch in glob.chars() {
        match ch {
            '[' if !in_class => {
                in_class = true;
                pattern.push('[');
            }
            ']' if in_class => {
                in_class = false;
                pattern.push(']');
            }
            _ if in_class => pattern.push(ch),
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            other => pattern.push_str(&regex::escape(&other.to_string())),
        }
    }
    pattern.push('$');

    Regex::new(&pattern)
        .map_err(|e| ResolveError::tag_query(format!("Invalid glob '{}': {}", glob, e)))
}

impl TagStore for MockRepository {
    fn fetch_tags(&self, remote: &str) -> Result<()> {
        if let Ok(mut fetched) = self.fetched.lock() {
            fetched.push(remote.to_string());
        }

        match &self.fetch_error {
            Some(message) => Err(ResolveError::tag_query(message.clone())),
            None => Ok(()),
        }
    }

    fn list_tags(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        if let Some(message) = &self.list_error {
            return Err(ResolveError::tag_query(message.clone()));
        }

        match pattern {
            Some(glob) => {
                let re = glob_to_regex(glob)?;
                Ok(self
                    .tags
                    .iter()
                    .filter(|tag| re.is_match(tag))
                    .cloned()
                    .collect())
            }
            None => Ok(self.tags.clone()),
        }
    }
}
