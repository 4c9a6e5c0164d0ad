//! Repository-index maintenance — `deckhand update-index`.

use anyhow::{Context, Result};
use std::path::Path;

use deckhand::changes;
use deckhand::ci;
use deckhand::errors::GitHubError;
use deckhand::github::GitHubClient;
use deckhand::index::{IndexEntry, REPO_INDEX_PATH, RepoIndex};
use deckhand::submission;

pub async fn cmd_update_index(root: &Path, changed: Option<&str>) -> Result<()> {
    let files = changes::files_to_process(changed, root);
    if files.is_empty() {
        println!("Files to process: none");
    } else {
        println!("Files to process: {}", files.join(", "));
    }

    let index_path = root.join(REPO_INDEX_PATH);
    let mut repo_index = match RepoIndex::load_if_exists(&index_path) {
        Ok(existing) => existing.unwrap_or_default(),
        Err(err) => {
            tracing::warn!("starting from an empty index: {err}");
            RepoIndex::default()
        }
    };

    let client = GitHubClient::new();
    let mut changes_made = false;

    for file in &files {
        if !changes::is_docker_run_path(file) {
            continue;
        }
        println!("Processing {file}");

        let content = match std::fs::read_to_string(root.join(file)) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("skipping {file}: {err}");
                continue;
            }
        };
        let Some(front_matter) = submission::parse_front_matter(&content) else {
            tracing::warn!("skipping {file}: no parsable front matter");
            continue;
        };
        let Some(repo_url) = front_matter.repo else {
            tracing::warn!("skipping {file}: front matter has no repo URL");
            continue;
        };
        let category = match front_matter.category {
            Some(serde_yaml::Value::String(category)) => Some(category),
            _ => None,
        };

        let command_dir = file.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");

        if let Some(existing) = repo_index.get(&repo_url) {
            if existing.path() != command_dir {
                println!(
                    "Warning: Repository URL {repo_url} already exists in {}, will be updated to {command_dir}",
                    existing.path()
                );
            }
        }

        println!("Fetching information for {repo_url} from GitHub API...");
        let metadata = match client.fetch_metadata(&repo_url).await {
            Ok(metadata) => metadata,
            Err(GitHubError::InvalidUrl(url)) => {
                tracing::warn!("skipping {file}: invalid GitHub URL format: {url}");
                continue;
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to fetch repository metadata for {repo_url}"));
            }
        };

        let entry = IndexEntry {
            path: command_dir.to_string(),
            category: category.clone(),
            name: metadata.name.clone(),
            description: metadata.description,
        };
        if repo_index.upsert(&repo_url, entry) {
            println!(
                "Added/Updated {repo_url} -> {command_dir} ({}, Category: {})",
                metadata.name,
                category.as_deref().unwrap_or("none")
            );
            changes_made = true;
        }
    }

    if changes_made {
        repo_index
            .save(&index_path)
            .context("Failed to persist the repository index")?;
        println!("Updated {}", index_path.display());
    } else {
        println!("No changes to the index file");
    }

    ci::set_output("changes_made", changes_made).context("Failed to write CI output")?;
    Ok(())
}
