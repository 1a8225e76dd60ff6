use thiserror::Error;

/// Unified error type for semver-bump operations
#[derive(Error, Debug)]
pub enum SemverError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-bump
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create a parse error for a malformed version or commit message
    pub fn parse(msg: impl Into<String>) -> Self {
        SemverError::Parse(msg.into())
    }

    /// Create a lookup error with context
    pub fn lookup(msg: impl Into<String>) -> Self {
        SemverError::Lookup(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverError::Config(msg.into())
    }

    /// Prefix the message with `context`, keeping the error kind
    pub fn context(self, context: &str) -> Self {
        match self {
            SemverError::Parse(msg) => SemverError::Parse(format!("{}: {}", context, msg)),
            SemverError::Lookup(msg) => SemverError::Lookup(format!("{}: {}", context, msg)),
            SemverError::Config(msg) => SemverError::Config(format!("{}: {}", context, msg)),
            SemverError::Io(err) => {
                SemverError::Io(std::io::Error::new(err.kind(), format!("{}: {}", context, err)))
            }
        }
    }

    /// Whether this error came from malformed input rather than a collaborator
    pub fn is_parse(&self) -> bool {
        matches!(self, SemverError::Parse(_))
    }
}

impl From<git2::Error> for SemverError {
    fn from(err: git2::Error) -> Self {
        SemverError::Lookup(format!("git: {}", err.message()))
    }
}
