//! Changed-file discovery for the index updater.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static DOCKER_RUN_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^commands/[^/]+/docker-run\.md$").unwrap());

/// Whether a repository-relative path names a submission file.
pub fn is_docker_run_path(rel: &str) -> bool {
    DOCKER_RUN_PATH_REGEX.is_match(rel)
}

/// Files to process, in priority order:
/// 1. an explicit space-separated list from the CI workflow,
/// 2. the `HEAD~1..HEAD` git diff filtered to submission files,
/// 3. a full scan of the commands tree.
pub fn files_to_process(changed: Option<&str>, root: &Path) -> Vec<String> {
    if let Some(changed) = changed {
        let files: Vec<String> = changed.split_whitespace().map(String::from).collect();
        if !files.is_empty() {
            println!("Processing changed files from workflow input...");
            return files;
        }
    }

    println!("No changed files provided, falling back to git diff...");
    match diff_against_parent(root) {
        Ok(files) if !files.is_empty() => return files,
        Ok(_) => {}
        Err(err) => tracing::warn!("git diff fallback failed: {err:#}"),
    }

    println!("Checking for any files in the commands directory...");
    scan_commands_tree(root)
}

/// Submission files touched between `HEAD~1` and `HEAD`.
fn diff_against_parent(root: &Path) -> Result<Vec<String>> {
    let repo = git2::Repository::open(root).context("Failed to open git repository")?;
    let head = repo.head()?.peel_to_commit()?;
    let parent = head.parent(0).context("HEAD has no parent commit")?;
    let diff = repo.diff_tree_to_tree(Some(&parent.tree()?), Some(&head.tree()?), None)?;

    let mut files = Vec::new();
    for delta in diff.deltas() {
        if let Some(path) = delta.new_file().path() {
            let rel = path.to_string_lossy().replace('\\', "/");
            if is_docker_run_path(&rel) {
                files.push(rel);
            }
        }
    }
    Ok(files)
}

/// Every submission file under `commands/`, relative to the root.
fn scan_commands_tree(root: &Path) -> Vec<String> {
    let commands_dir = root.join("commands");
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(&commands_dir)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() && entry.file_name() == "docker-run.md" {
            if let Ok(rel) = entry.path().strip_prefix(root) {
                files.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    files.sort();
    files
}
