//! README generation: the categorized application list and its table of
//! contents, spliced between literal marker comments.
//!
//! Everything here is a pure function over strings; the command layer
//! owns file I/O and change detection.

use crate::errors::ReadmeError;
use crate::index::RepoIndex;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const README_PATH: &str = "README.md";

pub const APP_START_MARKER: &str = "<!-- APPLICATIONS_START -->";
pub const APP_END_MARKER: &str = "<!-- APPLICATIONS_END -->";
pub const TOC_START_MARKER: &str = "<!-- TOC_START -->";
pub const TOC_END_MARKER: &str = "<!-- TOC_END -->";

// TOC entries surrounding the generated category list.
const STATIC_TOC_HEAD: &[&str] = &[
    "- [What is this?](#what-is-this)",
    "- [How it works](#how-it-works)",
    "- [How to contribute](#how-to-contribute)",
    "- [Community](#community)",
    "- [Applications](#applications)",
];
const STATIC_TOC_TAIL: &str = "- [License](#license)";

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NON_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_-]+").unwrap());

/// One application as rendered in the README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub name: String,
    pub path: String,
    pub description: String,
}

fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Group index entries by category, sorted case-insensitively, apps
/// within each category likewise. Entries without a category (including
/// legacy bare-path values) are skipped with a warning, never rendered
/// uncategorized.
pub fn group_by_category(index: &RepoIndex) -> Vec<(String, Vec<App>)> {
    let mut by_category: BTreeMap<String, Vec<App>> = BTreeMap::new();

    for (repo_url, value) in index.iter() {
        let Some(entry) = value.as_entry() else {
            tracing::warn!(%repo_url, "skipping legacy index entry without metadata");
            continue;
        };
        match entry.category.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => {
                by_category
                    .entry(category.to_string())
                    .or_default()
                    .push(App {
                        name: entry.name.clone(),
                        path: entry.path.clone(),
                        description: entry.description.clone(),
                    });
            }
            _ => {
                tracing::warn!(
                    name = %entry.name,
                    "skipping app due to missing category in the repo index"
                );
            }
        }
    }

    let mut groups: Vec<(String, Vec<App>)> = by_category.into_iter().collect();
    groups.sort_by(|a, b| compare_ci(&a.0, &b.0));
    for (_, apps) in &mut groups {
        apps.sort_by(|a, b| compare_ci(&a.name, &b.name));
    }
    groups
}

/// Render the categorized application list.
pub fn render_app_list(groups: &[(String, Vec<App>)]) -> String {
    let mut out = String::new();
    for (category, apps) in groups {
        out.push_str("### ");
        out.push_str(category);
        out.push_str("\n\n");
        let lines: Vec<String> = apps
            .iter()
            .map(|app| {
                if app.description.is_empty() {
                    format!("- [{}]({}/)", app.name, app.path)
                } else {
                    format!("- [{}]({}/) - {}", app.name, app.path, app.description)
                }
            })
            .collect();
        out.push_str(&lines.join("\n"));
        out.push_str("\n\n");
    }
    out.trim().to_string()
}

/// GitHub heading anchor: lowercase, whitespace to hyphens, everything
/// outside `[A-Za-z0-9_-]` stripped.
pub fn anchor_slug(name: &str) -> String {
    let lower = name.to_lowercase();
    let hyphenated = WHITESPACE_REGEX.replace_all(&lower, "-");
    NON_WORD_REGEX.replace_all(&hyphenated, "").into_owned()
}

/// Render the full table of contents: static entries with one indented
/// entry per category, in the given order.
pub fn render_toc(categories: &[String]) -> String {
    let mut items: Vec<String> = STATIC_TOC_HEAD.iter().map(|s| s.to_string()).collect();
    items.extend(
        categories
            .iter()
            .map(|category| format!("  - [{}](#{})", category, anchor_slug(category))),
    );
    items.push(STATIC_TOC_TAIL.to_string());
    items.join("\n")
}

/// Replace the region between a marker pair with `inner`, leaving
/// everything outside the markers untouched. `inner` carries its own
/// surrounding newlines so callers control the padding.
pub fn splice(
    doc: &str,
    start: &'static str,
    end: &'static str,
    inner: &str,
) -> Result<String, ReadmeError> {
    let start_idx = doc
        .find(start)
        .ok_or(ReadmeError::MarkerMissing { marker: start })?;
    let end_idx = doc
        .find(end)
        .ok_or(ReadmeError::MarkerMissing { marker: end })?;
    if start_idx >= end_idx {
        return Err(ReadmeError::MarkerOrder { start, end });
    }
    let prefix = &doc[..start_idx + start.len()];
    let suffix = &doc[end_idx..];
    Ok(format!("{prefix}{inner}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexEntry;

    fn index_with(entries: &[(&str, &str, Option<&str>, &str, &str)]) -> RepoIndex {
        let mut index = RepoIndex::default();
        for (url, path, category, name, description) in entries {
            index.upsert(
                url,
                IndexEntry {
                    path: path.to_string(),
                    category: category.map(String::from),
                    name: name.to_string(),
                    description: description.to_string(),
                },
            );
        }
        index
    }

    // ── anchor_slug ──────────────────────────────────────────────────

    #[test]
    fn test_anchor_slug_lowercases_and_hyphenates() {
        assert_eq!(anchor_slug("Web Server"), "web-server");
    }

    #[test]
    fn test_anchor_slug_strips_punctuation() {
        assert_eq!(anchor_slug("CI/CD & Automation"), "cicd-automation");
    }

    #[test]
    fn test_anchor_slug_preserves_underscores_and_digits() {
        assert_eq!(anchor_slug("Web_3 Tools"), "web_3-tools");
    }

    // ── group_by_category ────────────────────────────────────────────

    #[test]
    fn test_grouping_sorts_categories_and_apps_case_insensitively() {
        let index = index_with(&[
            ("https://github.com/a/zulu", "commands/zulu", Some("tools"), "Zulu", ""),
            ("https://github.com/a/alpha", "commands/alpha", Some("Tools"), "alpha", ""),
            ("https://github.com/a/web", "commands/web", Some("Apps"), "web", ""),
        ]);
        let groups = group_by_category(&index);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Apps");
        // "tools" and "Tools" are distinct categories but sort adjacently
        assert_eq!(groups[1].1.len(), 1);
        let tools_apps: Vec<&str> = groups
            .iter()
            .filter(|(c, _)| c.eq_ignore_ascii_case("tools"))
            .flat_map(|(_, apps)| apps.iter().map(|a| a.name.as_str()))
            .collect();
        assert_eq!(tools_apps, vec!["alpha", "Zulu"]);
    }

    #[test]
    fn test_grouping_skips_entries_without_category() {
        let index = index_with(&[
            ("https://github.com/a/b", "commands/b", None, "b", ""),
            ("https://github.com/c/d", "commands/d", Some("Tools"), "d", ""),
        ]);
        let groups = group_by_category(&index);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1.len(), 1);
        assert_eq!(groups[0].1[0].name, "d");
    }

    #[test]
    fn test_grouping_skips_legacy_values() {
        let json = r#"{"https://github.com/a/b": "commands/b"}"#;
        let index: RepoIndex = serde_json::from_str(json).unwrap();
        assert!(group_by_category(&index).is_empty());
    }

    // ── render_app_list ──────────────────────────────────────────────

    #[test]
    fn test_render_app_list_with_descriptions() {
        let index = index_with(&[(
            "https://github.com/nginx/nginx",
            "commands/nginx",
            Some("Web Server"),
            "nginx",
            "An HTTP server",
        )]);
        let rendered = render_app_list(&group_by_category(&index));
        assert_eq!(
            rendered,
            "### Web Server\n\n- [nginx](commands/nginx/) - An HTTP server"
        );
    }

    #[test]
    fn test_render_app_list_omits_empty_description() {
        let index = index_with(&[(
            "https://github.com/a/b",
            "commands/b",
            Some("Tools"),
            "b",
            "",
        )]);
        let rendered = render_app_list(&group_by_category(&index));
        assert_eq!(rendered, "### Tools\n\n- [b](commands/b/)");
    }

    // ── render_toc ───────────────────────────────────────────────────

    #[test]
    fn test_render_toc_static_and_dynamic_entries() {
        let toc = render_toc(&["Web Server".to_string()]);
        let lines: Vec<&str> = toc.lines().collect();
        assert_eq!(lines.first(), Some(&"- [What is this?](#what-is-this)"));
        assert!(lines.contains(&"  - [Web Server](#web-server)"));
        assert_eq!(lines.last(), Some(&"- [License](#license)"));
    }

    // ── splice ───────────────────────────────────────────────────────

    const DOC: &str = "intro\n<!-- APPLICATIONS_START -->\nold\n<!-- APPLICATIONS_END -->\noutro\n";

    #[test]
    fn test_splice_replaces_region_only() {
        let result = splice(DOC, APP_START_MARKER, APP_END_MARKER, "\n\nnew\n\n").unwrap();
        assert_eq!(
            result,
            "intro\n<!-- APPLICATIONS_START -->\n\nnew\n\n<!-- APPLICATIONS_END -->\noutro\n"
        );
    }

    #[test]
    fn test_splice_is_idempotent() {
        let once = splice(DOC, APP_START_MARKER, APP_END_MARKER, "\n\nnew\n\n").unwrap();
        let twice = splice(&once, APP_START_MARKER, APP_END_MARKER, "\n\nnew\n\n").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_splice_missing_start_marker() {
        let err = splice("no markers here", APP_START_MARKER, APP_END_MARKER, "x").unwrap_err();
        assert!(matches!(
            err,
            ReadmeError::MarkerMissing { marker } if marker == APP_START_MARKER
        ));
    }

    #[test]
    fn test_splice_markers_out_of_order() {
        let doc = "<!-- APPLICATIONS_END -->\n<!-- APPLICATIONS_START -->";
        let err = splice(doc, APP_START_MARKER, APP_END_MARKER, "x").unwrap_err();
        assert!(matches!(err, ReadmeError::MarkerOrder { .. }));
    }
}
