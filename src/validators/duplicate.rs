//! Duplicate-repository check against the persisted index.
//!
//! A repo URL already indexed under the same directory is an update to
//! an existing submission (informational, not an error). The same URL
//! under a different directory is a conflict.

use crate::index::RepoIndex;
use crate::submission;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DuplicateResult {
    pub error: Option<String>,
    pub is_update: bool,
}

pub fn validate(content: &str, rel_path: &str, index: Option<&RepoIndex>) -> DuplicateResult {
    // Missing or malformed front matter is another validator's finding.
    let Some(front_matter) = submission::parse_front_matter(content) else {
        return DuplicateResult::default();
    };
    let Some(repo_url) = front_matter.repo else {
        return DuplicateResult::default();
    };

    let Some(index) = index else {
        tracing::warn!("repo index not found, skipping duplicate check");
        return DuplicateResult::default();
    };

    let Some(existing) = index.get(&repo_url) else {
        return DuplicateResult::default();
    };

    let current_dir = rel_path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
    if existing.path() == current_dir {
        DuplicateResult {
            error: None,
            is_update: true,
        }
    } else {
        DuplicateResult {
            error: Some(format!(
                "Repository URL \"{repo_url}\" is already used in {}. Each repository can only be added once.",
                existing.path()
            )),
            is_update: false,
        }
    }
}
