//! Submission validation — `deckhand validate`.
//!
//! Runs the structural check first and short-circuits on failure;
//! otherwise every content-level validator runs and all findings are
//! reported together, so a contributor sees every problem in one pass.

use anyhow::{Context, Result};
use std::path::Path;

use deckhand::errors::GitHubError;
use deckhand::github::GitHubClient;
use deckhand::index::{REPO_INDEX_PATH, RepoIndex};
use deckhand::report::{RESULTS_PATH, ValidationReport};
use deckhand::ui::icons::{CHECK, CROSS, PARTY, UPDATE};
use deckhand::validators;

pub async fn cmd_validate(
    root: &Path,
    files: &[String],
    offline: bool,
    results_path: Option<&Path>,
) -> Result<bool> {
    let index_path = root.join(REPO_INDEX_PATH);
    let index = RepoIndex::load_if_exists(&index_path)
        .with_context(|| format!("Failed to load repo index at {}", index_path.display()))?;

    let client = if offline {
        None
    } else {
        Some(GitHubClient::new())
    };

    let mut report = ValidationReport::new();
    let mut has_commands_changes = false;

    for file in files {
        // Only submission candidates; everything else in the change set
        // is none of our business.
        if !file.starts_with("commands/") || file.ends_with('/') {
            continue;
        }
        has_commands_changes = true;

        println!("Validating {file}...");
        let outcome = validate_file(root, file, index.as_ref(), client.as_ref()).await;

        if outcome.errors.is_empty() {
            println!("{}{file} is valid", CHECK);
            if outcome.is_update {
                println!("{}{file} is an update to an existing command", UPDATE);
                report.record_update(file);
            }
        } else {
            eprintln!("\n{}Errors in {file}:", CROSS);
            for error in &outcome.errors {
                eprintln!("  - {error}");
            }
            report.record_errors(file, outcome.errors);
        }
    }

    if !has_commands_changes {
        println!("No changes in commands directory. Skipping validation.");
        return Ok(true);
    }

    let artifact_path = results_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(RESULTS_PATH));
    report.write(&artifact_path).with_context(|| {
        format!(
            "Failed to write validation results to {}",
            artifact_path.display()
        )
    })?;

    if report.valid {
        println!("\n{}All validations passed!", PARTY);
    } else {
        eprintln!("\n{}Validation failed. See errors above.", CROSS);
    }
    Ok(report.valid)
}

struct FileOutcome {
    errors: Vec<String>,
    is_update: bool,
}

async fn validate_file(
    root: &Path,
    rel_path: &str,
    index: Option<&RepoIndex>,
    client: Option<&GitHubClient>,
) -> FileOutcome {
    let mut outcome = FileOutcome {
        errors: Vec::new(),
        is_update: false,
    };

    // A structural failure is terminal for the file.
    if let Some(error) = validators::file_structure::validate(rel_path) {
        outcome.errors.push(error);
        return outcome;
    }

    let content = match std::fs::read_to_string(root.join(rel_path)) {
        Ok(content) => content,
        Err(err) => {
            outcome
                .errors
                .push(format!("Error reading or processing {rel_path}: {err}"));
            return outcome;
        }
    };

    if let Some(error) = validators::front_matter::validate(&content, rel_path) {
        outcome.errors.push(error);
    } else if let Some(client) = client {
        // Schema checks passed; verify the repository actually exists.
        if let Some(repo_url) = validators::front_matter::checked_repo_url(&content) {
            if let Err(err) = client.repo_exists(&repo_url).await {
                outcome.errors.push(match err {
                    GitHubError::NotFound { .. } => format!(
                        "GitHub repository {repo_url} does not exist or is not accessible"
                    ),
                    other => format!("Error checking GitHub repository: {other}"),
                });
            }
        }
    }

    if let Some(error) = validators::content::validate(&content, rel_path) {
        outcome.errors.push(error);
    }
    if let Some(error) = validators::docker_command::validate(&content, rel_path) {
        outcome.errors.push(error);
    }
    if let Some(error) = validators::image_tag::validate(&content, rel_path) {
        outcome.errors.push(error);
    }

    let duplicate = validators::duplicate::validate(&content, rel_path, index);
    if let Some(error) = duplicate.error {
        outcome.errors.push(error);
    }
    outcome.is_update = duplicate.is_update;

    if let Some(error) = validators::category::validate(&content, rel_path) {
        outcome.errors.push(error);
    }

    outcome
}
