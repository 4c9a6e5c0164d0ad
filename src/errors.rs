//! Typed error hierarchy for the deckhand CI toolkit.
//!
//! Three top-level enums cover the three failure domains:
//! - `GitHubError` — repository lookups against the GitHub REST API
//! - `IndexError` — persistence of the repository index file
//! - `ReadmeError` — marker-region splicing in the generated README

use thiserror::Error;

/// Errors from GitHub repository lookups.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Invalid GitHub repository URL: {0}")]
    InvalidUrl(String),

    #[error("Repository {slug} not found")]
    NotFound { slug: String },

    #[error("GitHub API returned status code {status} for {slug}")]
    UnexpectedStatus { slug: String, status: u16 },

    #[error("Failed to reach the GitHub API: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors from reading or writing the repository index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Failed to read index at {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse index at {path}: {source}")]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write index at {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from splicing generated content into a marker region.
#[derive(Debug, Error)]
pub enum ReadmeError {
    #[error("Marker '{marker}' not found")]
    MarkerMissing { marker: &'static str },

    #[error("Markers '{start}' and '{end}' are in the wrong order")]
    MarkerOrder {
        start: &'static str,
        end: &'static str,
    },
}
