use crate::error::{Result, SemverError};
use git2::{Commit, Oid, Repository as Git2Repo};
use std::collections::HashMap;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            SemverError::lookup(format!(
                "Not in a git repository ({}): {}",
                path.display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn resolve_commit(&self, reference: &str) -> Result<Commit<'_>> {
        self.repo
            .revparse_single(reference)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| {
                SemverError::lookup(format!(
                    "Cannot find commit '{}': {}",
                    reference,
                    e.message()
                ))
            })
    }

    /// Map each tagged commit to its tag name.
    ///
    /// Annotated tags are peeled to their commit. When several tags point at
    /// the same commit the lexically greatest name is kept.
    fn tagged_commits(&self) -> Result<HashMap<Oid, String>> {
        let mut tagged = HashMap::new();
        let names = self.repo.tag_names(None)?;

        for name in names.iter().flatten() {
            let Ok(reference) = self.repo.find_reference(&format!("refs/tags/{}", name)) else {
                continue;
            };
            let Ok(commit) = reference.peel_to_commit() else {
                continue;
            };

            tagged
                .entry(commit.id())
                .and_modify(|existing: &mut String| {
                    if name > existing.as_str() {
                        *existing = name.to_string();
                    }
                })
                .or_insert_with(|| name.to_string());
        }

        Ok(tagged)
    }
}

impl super::Repository for Git2Repository {
    /// Walk history back from `reference` and return the first tag met
    fn latest_tag_name(&self, reference: &str) -> Result<Option<String>> {
        let tagged = self.tagged_commits()?;
        if tagged.is_empty() {
            return Ok(None);
        }

        let start = self.resolve_commit(reference)?.id();
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(start)?;

        for oid in revwalk {
            let oid = oid?;
            if let Some(name) = tagged.get(&oid) {
                return Ok(Some(name.clone()));
            }
        }

        Ok(None)
    }

    fn commit_message(&self, reference: &str) -> Result<String> {
        let commit = self.resolve_commit(reference)?;

        let message = commit.message().ok_or_else(|| {
            SemverError::lookup(format!("Commit '{}' message is not valid UTF-8", reference))
        })?;

        Ok(message.to_string())
    }
}
