use std::fmt;

/// Non-fatal situations worth telling the user about.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The repository has no tags; the default version is assumed
    NoTagFound { default_version: String },
    /// The commit type does not trigger a release
    NoRelease {
        commit_type: String,
        current_version: String,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoTagFound { default_version } => {
                write!(f, "No tags found, assuming '{}'", default_version)
            }
            BoundaryWarning::NoRelease {
                commit_type,
                current_version,
            } => {
                write!(
                    f,
                    "Commit type '{}' does not trigger a release, staying at '{}'",
                    commit_type, current_version
                )
            }
        }
    }
}
