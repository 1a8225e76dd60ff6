//! Repository lookup abstraction
//!
//! The bump decision needs two facts from the outside world: the message of
//! the commit being released and the name of the most recent tag. The
//! [Repository] trait hides where those come from.
//!
//! - [repository::Git2Repository]: a local checkout read through `git2`
//! - [mock::MockRepository]: canned answers for tests
//!
//! ```rust
//! # use semver_bump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> semver_bump::Result<()> {
//! let message = repo.commit_message("HEAD")?;
//! let tag = repo.latest_tag_name("HEAD")?.unwrap_or_else(|| "v0.0.0".to_string());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Source of commit messages and tags
///
/// Implementations map their own failures to
/// [crate::error::SemverError::Lookup] with enough context to tell which
/// lookup failed.
pub trait Repository {
    /// Name of the most recent tag in the history of `reference`, or `None`
    /// if no tag is reachable from it
    ///
    /// Takes the same revision as [Repository::commit_message] so the tag
    /// and the commit come from one line of history. No semver ranking is
    /// applied across tags.
    fn latest_tag_name(&self, reference: &str) -> Result<Option<String>>;

    /// Full message of the commit that `reference` resolves to
    ///
    /// # Arguments
    /// * `reference` - A revision such as `HEAD`, a branch name or a commit SHA
    fn commit_message(&self, reference: &str) -> Result<String>;
}
