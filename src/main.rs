use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use semver_bump::cli::run_workflow;
use semver_bump::config::{self, Config};
use semver_bump::git::Git2Repository;
use semver_bump::ui;

#[derive(clap::Parser)]
#[command(
    name = "semver-bump",
    about = "Compute the next semantic version from the latest conventional commit"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Path inside the git repository to inspect")]
    repo: Option<PathBuf>,

    #[arg(
        long = "ref",
        value_name = "REF",
        help = "Revision whose commit message decides the bump (defaults to $GITHUB_SHA or HEAD)"
    )]
    reference: Option<String>,

    #[arg(
        short,
        long,
        help = "File to append key=value outputs to (defaults to $GITHUB_OUTPUT, else stdout)"
    )]
    output: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "GitHub event payload to read the head commit from (defaults to $GITHUB_EVENT_PATH)"
    )]
    event: Option<PathBuf>,

    #[arg(long, help = "Compute the new version without writing outputs")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

impl Args {
    /// Flags win over the environment and the config file
    fn apply_to(&self, config: &mut Config) {
        if let Some(repo) = &self.repo {
            config.repository.path = repo.clone();
        }
        if let Some(reference) = &self.reference {
            config.repository.reference = reference.clone();
        }
        if let Some(output) = &self.output {
            config.output.path = Some(output.clone());
        }
        if let Some(event) = &self.event {
            config.github.event_path = Some(event.clone());
        }
    }
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("semver-bump {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config =
        config::load_config(args.config.as_deref()).context("Error loading config")?;
    config.apply_env();
    args.apply_to(&mut config);

    let repo = Git2Repository::open(&config.repository.path)?;
    run_workflow(&repo, &config, args.dry_run)?;

    Ok(())
}
