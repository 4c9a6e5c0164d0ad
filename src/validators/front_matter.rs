//! Front-matter schema check.
//!
//! Pure checks only: the block exists and parses, `repo` is present and
//! shaped like a GitHub repository URL, and `logo` (when present) is an
//! http(s) URL. Whether the repository actually exists is an explicit
//! separate step owned by the validation driver.

use crate::submission::{self, FrontMatter};
use regex::Regex;
use std::sync::LazyLock;

static REPO_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://github\.com/[^/]+/[^/]+$").unwrap());

static LOGO_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+\..+$").unwrap());

pub fn validate(content: &str, rel_path: &str) -> Option<String> {
    let Some((yaml, _)) = submission::split_front_matter(content) else {
        return Some(format!("No front matter found in {rel_path}"));
    };

    let front_matter = match FrontMatter::parse(yaml) {
        Ok(front_matter) => front_matter,
        Err(err) => return Some(format!("Error parsing front matter in {rel_path}: {err}")),
    };

    let Some(repo) = front_matter.repo.as_deref() else {
        return Some(format!("Missing required field 'repo' in {rel_path}"));
    };

    if !REPO_URL_REGEX.is_match(repo) {
        return Some(format!(
            "Invalid repository URL format in {rel_path}. Should be in format https://github.com/username/repo-name"
        ));
    }

    if let Some(logo) = front_matter.logo.as_deref() {
        if !LOGO_URL_REGEX.is_match(logo) {
            return Some(format!("Invalid logo URL format in {rel_path}"));
        }
    }

    None
}

/// The repository URL, when the front matter passes the pure checks.
/// Used by the driver to decide whether to run the existence check.
pub fn checked_repo_url(content: &str) -> Option<String> {
    let front_matter = submission::parse_front_matter(content)?;
    let repo = front_matter.repo?;
    REPO_URL_REGEX.is_match(&repo).then_some(repo)
}
