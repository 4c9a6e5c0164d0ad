//! Path-shape check: submissions live at `commands/<app>/docker-run.md`.

/// Validate the repository-relative path of a submission. This is the
/// one structural check: when it fails, the remaining validators are
/// not run for the file.
pub fn validate(rel_path: &str) -> Option<String> {
    if !rel_path.starts_with("commands/") {
        return Some(format!("File {rel_path} is not in the commands directory"));
    }

    let parts: Vec<&str> = rel_path.split('/').collect();
    if parts.len() != 3 {
        return Some(format!(
            "Invalid path structure: {rel_path}. Expected format: commands/app-name/docker-run.md"
        ));
    }

    let filename = parts[2];
    if filename != "docker-run.md" {
        return Some(format!(
            "Invalid filename: {filename}. Expected 'docker-run.md'"
        ));
    }

    None
}
