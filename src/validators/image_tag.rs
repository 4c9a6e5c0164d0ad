//! Image-tag check: the image reference in the run command must carry
//! an explicit tag.

use super::docker_command::extract_docker_run;
use crate::shellwords;

pub fn validate(content: &str, rel_path: &str) -> Option<String> {
    // Absence of a run command is the docker-command validator's finding.
    let command = extract_docker_run(content)?;

    let words = shellwords::split(&command);
    let Some(image) = find_image(&words) else {
        return Some(format!(
            "No Docker image found in the run command in {rel_path}"
        ));
    };

    if has_explicit_tag(image) {
        None
    } else {
        Some(format!(
            "Docker image \"{image}\" in {rel_path} does not specify a tag. Please use a specific tag (e.g., {image}:latest)"
        ))
    }
}

/// First positional argument after `docker run`. A flag without `=`
/// consumes the following word as its value unless that word is itself
/// a flag.
fn find_image(words: &[String]) -> Option<&String> {
    let mut i = 2;
    while i < words.len() {
        let word = &words[i];
        if word.starts_with('-') {
            if !word.contains('=') && i + 1 < words.len() && !words[i + 1].starts_with('-') {
                i += 1;
            }
            i += 1;
            continue;
        }
        return Some(word);
    }
    None
}

/// Whether an image reference carries a tag. The last colon only counts
/// when nothing after it contains a slash; a colon followed by a path
/// segment is a registry port (`registry:5000/app`).
fn has_explicit_tag(image: &str) -> bool {
    match image.rfind(':') {
        None => false,
        Some(idx) => idx + 1 < image.len() && !image[idx + 1..].contains('/'),
    }
}
