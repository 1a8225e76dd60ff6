//! Step outputs for the CI runner.
//!
//! Results are written as `key=value` lines, appended to the file named by
//! the output configuration (the runner's `GITHUB_OUTPUT`), or printed to
//! stdout when no file is configured.

use crate::analyzer::Release;
use crate::config::OutputConfig;
use crate::error::Result;
use std::fs::OpenOptions;
use std::io::{self, Write};

/// Format the two output lines for a release
pub fn format_outputs(release: &Release, config: &OutputConfig) -> String {
    format!(
        "{}={}\n{}={}\n",
        config.new_release_key, release.is_new_release, config.version_key, release.next
    )
}

/// Write the output lines to `writer`
pub fn write_outputs_to<W: Write>(
    writer: &mut W,
    release: &Release,
    config: &OutputConfig,
) -> Result<()> {
    writer.write_all(format_outputs(release, config).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Append the output lines to the configured file, or print them to stdout
pub fn write_outputs(release: &Release, config: &OutputConfig) -> Result<()> {
    match &config.path {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            write_outputs_to(&mut file, release, config)
        }
        None => write_outputs_to(&mut io::stdout().lock(), release, config),
    }
}
