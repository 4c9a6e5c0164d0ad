//! Markdown body structure check: an H1 title and a "Docker Run
//! Command" section. A free-text description is optional.

use crate::submission;
use regex::Regex;
use std::sync::LazyLock;

static H1_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());

pub fn validate(content: &str, rel_path: &str) -> Option<String> {
    if content.trim().is_empty() {
        return Some(format!("File {rel_path} is empty"));
    }

    let body = submission::body_of(content).trim();
    if body.is_empty() {
        return Some(format!("File {rel_path} is empty"));
    }

    if !H1_REGEX.is_match(body) {
        return Some(format!(
            "Missing application name (H1 heading) in {rel_path}"
        ));
    }

    // The substring also matches the H2 form "## Docker Run Command".
    if !body.contains("# Docker Run Command") {
        return Some(format!(
            "Missing \"Docker Run Command\" section in {rel_path}"
        ));
    }

    None
}
