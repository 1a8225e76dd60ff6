//! Main workflow orchestration logic
//!
//! Wires the lookups, the bump decision and the output sink together. Kept
//! apart from `main.rs` so it can be driven with a mock repository.

use crate::analyzer::Release;
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{Commit, Version, DEFAULT_VERSION};
use crate::error::Result;
use crate::git::Repository;
use crate::github;
use crate::output;
use crate::ui;

/// Result of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The classified commit that decided the bump
    pub commit: Commit,

    /// Tag the current version was read from, `None` when defaulted
    pub latest_tag: Option<String>,

    pub release: Release,

    /// Whether outputs were written (false in dry-run mode)
    pub outputs_written: bool,
}

/// Run one bump decision
///
/// 1. Read the commit message (event payload if configured, else `repo`)
/// 2. Read the latest tag reachable from the same reference, defaulting to `v0.0.0`
/// 3. Decide the next version
/// 4. Append the outputs unless `dry_run`
///
/// Nothing is written when any step fails.
pub fn run_workflow<R: Repository>(
    repo: &R,
    config: &Config,
    dry_run: bool,
) -> Result<WorkflowResult> {
    let commit = read_commit(repo, config)
        .map_err(|e| e.context("could not parse latest commit"))?;

    let latest_tag = repo
        .latest_tag_name(&config.repository.reference)
        .map_err(|e| e.context("could not get latest version"))?;
    if latest_tag.is_none() {
        ui::display_boundary_warning(&BoundaryWarning::NoTagFound {
            default_version: DEFAULT_VERSION.to_string(),
        });
    }
    let current = Version::from_tag(latest_tag.as_deref())
        .map_err(|e| e.context("could not get latest version"))?;

    ui::display_current_version(&current);
    ui::display_commit(&commit);

    let release = Release::compute(&commit, current)
        .map_err(|e| e.context("could not compute new version"))?;
    if !release.is_new_release {
        ui::display_boundary_warning(&BoundaryWarning::NoRelease {
            commit_type: commit.r#type.clone(),
            current_version: current.to_string(),
        });
    }
    ui::display_new_version(&release.next, release.is_new_release);

    if dry_run {
        ui::display_status("Dry run: outputs not written");
        print!("{}", output::format_outputs(&release, &config.output));
    } else {
        output::write_outputs(&release, &config.output)
            .map_err(|e| e.context("could not write outputs"))?;
    }

    Ok(WorkflowResult {
        commit,
        latest_tag,
        release,
        outputs_written: !dry_run,
    })
}

fn read_commit<R: Repository>(repo: &R, config: &Config) -> Result<Commit> {
    let message = match &config.github.event_path {
        Some(path) => github::read_head_commit_message(path)?,
        None => repo.commit_message(&config.repository.reference)?,
    };

    Commit::parse(&message)
}
