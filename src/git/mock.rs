use crate::error::{Result, SemverError};
use crate::git::Repository;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    commits: HashMap<String, String>,
    latest_tag: Option<String>,
    fail_tag_lookup: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the message returned for `reference`
    pub fn with_commit(mut self, reference: impl Into<String>, message: impl Into<String>) -> Self {
        self.commits.insert(reference.into(), message.into());
        self
    }

    /// Set the tag reported as the latest one
    pub fn with_latest_tag(mut self, tag: impl Into<String>) -> Self {
        self.latest_tag = Some(tag.into());
        self
    }

    /// Make `latest_tag_name` fail, simulating an unreachable host
    pub fn with_failing_tag_lookup(mut self) -> Self {
        self.fail_tag_lookup = true;
        self
    }
}

impl Repository for MockRepository {
    fn latest_tag_name(&self, _reference: &str) -> Result<Option<String>> {
        if self.fail_tag_lookup {
            return Err(SemverError::lookup("error getting tags: connection refused"));
        }
        Ok(self.latest_tag.clone())
    }

    fn commit_message(&self, reference: &str) -> Result<String> {
        self.commits
            .get(reference)
            .cloned()
            .ok_or_else(|| SemverError::lookup(format!("Commit not found: {}", reference)))
    }
}
