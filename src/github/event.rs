use crate::error::{Result, SemverError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The parts of a push event payload we care about
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    pub head_commit: HeadCommit,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeadCommit {
    pub message: String,
}

impl Event {
    /// Parse an event payload from its JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SemverError::lookup(format!("Invalid event payload: {}", e)))
    }
}

/// Read the head commit message from the event file GitHub writes for the run
/// (the path in `GITHUB_EVENT_PATH`).
pub fn read_head_commit_message(path: &Path) -> Result<String> {
    let json = fs::read_to_string(path).map_err(|e| {
        SemverError::lookup(format!(
            "Cannot read event file '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(Event::from_json(&json)?.head_commit.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_event_from_json_ignores_unknown_fields() {
        let json = r#"{
            "ref": "refs/heads/main",
            "head_commit": {"id": "abc123", "message": "feat: add x"},
            "repository": {"full_name": "octo/repo"}
        }"#;
        let event = Event::from_json(json).unwrap();
        assert_eq!(event.head_commit.message, "feat: add x");
    }

    #[test]
    fn test_event_without_head_commit_is_lookup_error() {
        let err = Event::from_json(r#"{"ref": "refs/heads/main"}"#).unwrap_err();
        assert!(matches!(err, SemverError::Lookup(_)));
    }

    #[test]
    fn test_read_head_commit_message() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"head_commit": {"message": "fix: patch bug\n"}}"#)
            .unwrap();
        file.flush().unwrap();

        let message = read_head_commit_message(file.path()).unwrap();
        assert_eq!(message, "fix: patch bug\n");
    }

    #[test]
    fn test_read_missing_event_file() {
        let err = read_head_commit_message(Path::new("/nonexistent/event.json")).unwrap_err();
        assert!(err.to_string().contains("Cannot read event file"));
    }
}
