use crate::domain::{Commit, Version, VersionBump};
use crate::error::Result;

/// Outcome of one bump decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    /// Version read from the latest tag
    pub current: Version,
    /// Version after applying the bump (equal to `current` when nothing releases)
    pub next: Version,
    /// Whether `next` differs from `current`
    pub is_new_release: bool,
}

impl Release {
    /// Decide the next version for `commit` and record whether it changed
    pub fn compute(commit: &Commit, current: Version) -> Result<Self> {
        let next = decide(commit, current)?;
        Ok(Release {
            current,
            next,
            is_new_release: next != current,
        })
    }
}

/// Choose the bump for a commit, first match wins:
/// breaking -> major, `feat` -> minor, `fix` -> patch, anything else -> none.
pub fn determine_bump(commit: &Commit) -> Option<VersionBump> {
    if commit.is_breaking {
        return Some(VersionBump::Major);
    }

    match commit.r#type.as_str() {
        "feat" => Some(VersionBump::Minor),
        "fix" => Some(VersionBump::Patch),
        _ => None,
    }
}

/// Apply at most one increment to `current`
pub fn decide(commit: &Commit, current: Version) -> Result<Version> {
    determine_bump(commit).map_or(Ok(current), |bump| current.bump(&bump))
}
