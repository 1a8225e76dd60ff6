// tests/integration_test.rs
use git2::{Oid, Repository, Signature};
use semver_bump::cli::run_workflow;
use semver_bump::config::Config;
use semver_bump::domain::Version;
use semver_bump::git::Git2Repository;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn commit(repo: &Repository, message: &str) -> Oid {
    let sig = Signature::now("Test Author", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parents = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => vec![],
    };
    let parent_refs: Vec<_> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

fn tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).unwrap();
    repo.tag_lightweight(name, &object, false).unwrap();
}

/// Run the binary against `repo_dir` with an empty config and a clean environment
fn run_binary(work_dir: &Path, repo_dir: &Path, extra: &[&str]) -> Output {
    let config = work_dir.join("empty.toml");
    fs::write(&config, "").unwrap();

    Command::new(env!("CARGO_BIN_EXE_semver-bump"))
        .current_dir(work_dir)
        .env_remove("GITHUB_SHA")
        .env_remove("GITHUB_OUTPUT")
        .env_remove("GITHUB_EVENT_PATH")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config)
        .arg("--repo")
        .arg(repo_dir)
        .args(extra)
        .output()
        .expect("Failed to execute semver-bump")
}

#[test]
fn test_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_semver-bump"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("semver-bump"));
    assert!(stdout.contains("conventional commit"));
}

#[test]
fn test_version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_semver-bump"))
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("semver-bump "));
}

#[test]
fn test_workflow_against_real_repository() {
    let dir = TempDir::new().unwrap();
    let raw = Repository::init(dir.path()).unwrap();
    let first = commit(&raw, "feat: initial release");
    tag(&raw, "v1.2.3", first);
    commit(&raw, "feat(parser): support scopes\n\nLonger body.");

    let repo = Git2Repository::from_git2(raw);
    let mut config = Config::default();
    config.output.path = Some(dir.path().join("out"));

    let result = run_workflow(&repo, &config, false).unwrap();
    assert_eq!(result.latest_tag, Some("v1.2.3".to_string()));
    assert_eq!(result.release.next, Version::new(1, 3, 0));
}

#[test]
fn test_workflow_reads_tag_from_configured_reference() {
    let dir = TempDir::new().unwrap();
    let raw = Repository::init(dir.path()).unwrap();
    let first = commit(&raw, "fix: first fix");
    tag(&raw, "v1.0.0", first);
    let second = commit(&raw, "feat: newer feature");
    tag(&raw, "v1.1.0", second);
    commit(&raw, "fix: on top");

    let repo = Git2Repository::from_git2(raw);
    let mut config = Config::default();
    config.output.path = Some(dir.path().join("out"));
    config.repository.reference = first.to_string();

    let result = run_workflow(&repo, &config, false).unwrap();
    assert_eq!(result.latest_tag, Some("v1.0.0".to_string()));
    assert_eq!(result.release.next, Version::new(1, 0, 1));
}

#[test]
fn test_workflow_overflowing_tag_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let raw = Repository::init(dir.path()).unwrap();
    let first = commit(&raw, "feat: initial");
    tag(&raw, "v4294967295.0.0", first);
    commit(&raw, "feat!: drop old api");

    let repo = Git2Repository::from_git2(raw);
    let mut config = Config::default();
    let out = dir.path().join("out");
    config.output.path = Some(out.clone());

    let err = run_workflow(&repo, &config, false).unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().contains("major"));
    assert!(!out.exists());
}

#[test]
fn test_binary_appends_outputs() {
    let work = TempDir::new().unwrap();
    let repo_dir = work.path().join("repo");
    let raw = Repository::init(&repo_dir).unwrap();
    let first = commit(&raw, "feat: initial release");
    tag(&raw, "v0.3.9", first);
    commit(&raw, "fix: off by one");

    let out = work.path().join("github_output");
    fs::write(&out, "previous=step\n").unwrap();

    let output = run_binary(work.path(), &repo_dir, &["--output", out.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Read current version: v0.3.9"));
    assert!(stderr.contains("New version: v0.3.10"));
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "previous=step\nnew-release=true\nnew-release-version=v0.3.10\n"
    );
}

#[test]
fn test_binary_prints_outputs_without_output_file() {
    let work = TempDir::new().unwrap();
    let repo_dir = work.path().join("repo");
    let raw = Repository::init(&repo_dir).unwrap();
    commit(&raw, "docs: readme");

    let output = run_binary(work.path(), &repo_dir, &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "new-release=false\nnew-release-version=v0.0.0\n");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Read current version: v0.0.0"));
}

#[test]
fn test_binary_fails_on_non_conventional_commit() {
    let work = TempDir::new().unwrap();
    let repo_dir = work.path().join("repo");
    let raw = Repository::init(&repo_dir).unwrap();
    commit(&raw, "Update things");

    let out = work.path().join("github_output");
    let output = run_binary(work.path(), &repo_dir, &["--output", out.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERROR:"));
    assert!(stderr.contains("Invalid commit message"));
    assert!(!out.exists());
}
