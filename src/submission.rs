//! Parsing of `docker-run.md` submission files.
//!
//! A submission is a YAML front matter block between `---` delimiters
//! followed by a Markdown body. The front matter carries the repository
//! URL, the category, and an optional logo URL.

use serde::Deserialize;

/// Parsed front matter fields.
///
/// `category` stays a raw YAML value so the category validator can tell
/// "missing" from "not a string" from "empty" and report each precisely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    pub repo: Option<String>,
    pub category: Option<serde_yaml::Value>,
    pub logo: Option<String>,
}

impl FrontMatter {
    /// Parse a raw YAML block.
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

/// Split a document into its front matter block and body.
///
/// The front matter must open the file with `---` on the first line and
/// close with a `---` line. Returns `None` when no block is present.
/// The body is everything after the closing delimiter, untrimmed.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---\n")?;
    let end = rest.find("\n---")?;
    let yaml = &rest[..end];
    let body = &rest[end + "\n---".len()..];
    Some((yaml, body))
}

/// The Markdown body with any front matter stripped.
pub fn body_of(content: &str) -> &str {
    match split_front_matter(content) {
        Some((_, body)) => body,
        None => content,
    }
}

/// Convenience: extract parsed front matter, if a block exists and parses.
pub fn parse_front_matter(content: &str) -> Option<FrontMatter> {
    let (yaml, _) = split_front_matter(content)?;
    FrontMatter::parse(yaml).ok()
}
