//! CI environment plumbing: auth token and step outputs.

use std::io::Write;

/// The GitHub token from the environment, if one is configured.
/// Empty values count as unset.
pub fn github_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty())
}

/// Publish a step output for the surrounding workflow.
///
/// Appends `key=value` to the file named by `$GITHUB_OUTPUT`. Outside of
/// Actions the pair is echoed in the legacy `::set-output` form so local
/// runs still show what would have been set.
pub fn set_output(key: &str, value: impl std::fmt::Display) -> std::io::Result<()> {
    match std::env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => {
            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            writeln!(file, "{key}={value}")
        }
        _ => {
            println!("::set-output name={key}::{value}");
            Ok(())
        }
    }
}
