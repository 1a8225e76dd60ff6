use crate::error::{Result, SemverError};
use regex::Regex;
use std::fmt;

/// Tag used when the repository has no tags yet
pub const DEFAULT_VERSION: &str = "v0.0.0";

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
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

    /// Parse the first `vX.Y.Z` triple found anywhere in `input`.
    ///
    /// The match is not anchored, so `"v2.0.0-rc1"` and `"refs/tags/v1.2.3"`
    /// both yield a version. Suffixes after the triple are ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let re = Regex::new(r"v?([0-9]+)\.([0-9]+)\.([0-9]+)")
            .map_err(|e| SemverError::parse(format!("Invalid version pattern: {}", e)))?;

        let captures = re.captures(input).ok_or_else(|| {
            SemverError::parse(format!(
                "Invalid version string: '{}' - expected vX.Y.Z",
                input
            ))
        })?;

        let component = |index: usize, name: &str| -> Result<u32> {
            let raw = captures.get(index).map(|m| m.as_str()).unwrap_or_default();
            raw.parse::<u32>().map_err(|_| {
                SemverError::parse(format!("Could not parse {} version: '{}'", name, raw))
            })
        };

        Ok(Version {
            major: component(1, "major")?,
            minor: component(2, "minor")?,
            patch: component(3, "patch")?,
        })
    }

    /// Parse a tag name, falling back to `v0.0.0` when there is no tag
    pub fn from_tag(tag: Option<&str>) -> Result<Self> {
        match tag.map(str::trim).filter(|t| !t.is_empty()) {
            Some(tag) => Version::parse(tag),
            None => Version::parse(DEFAULT_VERSION),
        }
    }

    /// major += 1, minor and patch reset to 0
    pub fn increment_major(&mut self) -> Result<()> {
        self.major = increment(self.major, "major")?;
        self.minor = 0;
        self.patch = 0;
        Ok(())
    }

    /// minor += 1, patch reset to 0
    pub fn increment_minor(&mut self) -> Result<()> {
        self.minor = increment(self.minor, "minor")?;
        self.patch = 0;
        Ok(())
    }

    pub fn increment_patch(&mut self) -> Result<()> {
        self.patch = increment(self.patch, "patch")?;
        Ok(())
    }

    /// Bump version according to bump type, leaving `self` untouched
    pub fn bump(&self, bump_type: &VersionBump) -> Result<Self> {
        let mut next = *self;
        match bump_type {
            VersionBump::Major => next.increment_major()?,
            VersionBump::Minor => next.increment_minor()?,
            VersionBump::Patch => next.increment_patch()?,
        }
        Ok(next)
    }
}

/// Add one to a component; a component already at `u32::MAX` cannot be bumped
fn increment(value: u32, name: &str) -> Result<u32> {
    value.checked_add(1).ok_or_else(|| {
        SemverError::parse(format!(
            "Cannot increment {} version: {} overflows",
            name, value
        ))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}
