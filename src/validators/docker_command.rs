//! Docker run command check: a fenced bash block whose command starts
//! with `docker run` and publishes at least one port.

use regex::Regex;
use std::sync::LazyLock;

static DOCKER_RUN_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```bash\s+(docker\s+run\s.+?)```").unwrap());

static PORT_MAPPING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-p\s+\d+:\d+|--publish\s+\d+:\d+").unwrap());

/// The first `docker run` command found in a fenced bash block, trimmed.
/// Shared with the image-tag validator.
pub fn extract_docker_run(content: &str) -> Option<String> {
    DOCKER_RUN_BLOCK_REGEX
        .captures(content)
        .map(|captures| captures[1].trim().to_string())
}

pub fn validate(content: &str, rel_path: &str) -> Option<String> {
    let Some(command) = extract_docker_run(content) else {
        return Some(format!(
            "No Docker run command found in a bash code block in {rel_path}"
        ));
    };

    if !command.starts_with("docker run") {
        return Some(format!("Invalid Docker run command in {rel_path}"));
    }

    if !PORT_MAPPING_REGEX.is_match(&command) {
        return Some(format!(
            "Docker run command must include a port mapping using -p or --publish in {rel_path}"
        ));
    }

    None
}
