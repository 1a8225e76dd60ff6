use crate::error::{Result, SemverError};
use regex::Regex;
use std::fmt;

/// Commit type that always signals an incompatible change
pub const BREAKING_CHANGE_TYPE: &str = "breaking change";

/// Classified conventional commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub raw: String,
    pub r#type: String,
    pub scope: Option<String>,
    pub message: String,
    pub is_breaking: bool,
}

impl Commit {
    /// Parse a commit message of the shape `type[!][(scope)][!]: description`.
    ///
    /// Only the first line of the trimmed message is classified. A
    /// `BREAKING CHANGE:` footer further down is not detected; use the
    /// `breaking change` type or the `!` marker instead.
    pub fn parse(message: &str) -> Result<Self> {
        let re = Regex::new(r"^([a-zA-Z ]+)(!)?(?:\(([^)]*)\))?(!)?:(.*)")
            .map_err(|e| SemverError::parse(format!("Invalid commit pattern: {}", e)))?;

        let trimmed = message.trim();
        let captures = re.captures(trimmed).ok_or_else(|| {
            SemverError::parse(format!("Invalid commit message: '{}'", first_line(trimmed)))
        })?;

        let r#type = captures
            .get(1)
            .map(|m| m.as_str().trim().to_lowercase())
            .unwrap_or_default();
        let scope = captures.get(3).map(|m| m.as_str().to_string());
        let has_marker = captures.get(2).is_some() || captures.get(4).is_some();
        let description = captures
            .get(5)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        let is_breaking = has_marker || r#type == BREAKING_CHANGE_TYPE;

        Ok(Commit {
            raw: message.to_string(),
            r#type,
            scope,
            message: description,
            is_breaking,
        })
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(first_line(self.raw.trim()))
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
