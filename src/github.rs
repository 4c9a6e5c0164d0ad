//! GitHub REST client for repository existence checks and metadata.
//!
//! One endpoint matters: `GET /repos/{owner}/{repo}`. Calls are strictly
//! sequential; the only suspension is the fixed 60-second backoff when
//! GitHub answers 403 (rate limited), after which the same request is
//! retried.

use crate::errors::GitHubError;
use serde::Deserialize;
use std::time::Duration;

/// Production API base. Tests point the client at a local server instead.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Fixed wait before retrying a rate-limited request.
pub const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(60);

const USER_AGENT: &str = "deckhand-indexer";

/// The `owner/repo` pair parsed from a repository URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    pub fn as_path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Parse the `owner/repo` slug from an `https://github.com/owner/repo`
/// URL. A trailing `.git` is tolerated; anything else (extra segments,
/// other hosts, SSH remotes) is rejected.
pub fn parse_repo_slug(url: &str) -> Option<RepoSlug> {
    let rest = url.strip_prefix("https://github.com/")?;
    let rest = rest.strip_suffix(".git").unwrap_or(rest);
    let parts: Vec<&str> = rest.split('/').collect();
    if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
        Some(RepoSlug {
            owner: parts[0].to_string(),
            repo: parts[1].to_string(),
        })
    } else {
        None
    }
}

/// Subset of the repository payload we care about.
#[derive(Debug, Deserialize)]
struct RepoResponse {
    name: Option<String>,
    description: Option<String>,
}

/// Canonical name and description for an index entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoMetadata {
    pub name: String,
    pub description: String,
}

impl RepoMetadata {
    /// Generated defaults for repositories GitHub does not know about.
    fn fallback(slug: &RepoSlug) -> Self {
        Self {
            name: slug.repo.clone(),
            description: format!("Repository for {}", slug.repo),
        }
    }
}

/// Thin client over the repos endpoint.
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Client against the real API, authenticated via `GITHUB_TOKEN`
    /// when set.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE, crate::ci::github_token())
    }

    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Issue the repos request, waiting out 403 responses indefinitely.
    async fn get_repo(&self, slug: &RepoSlug) -> Result<reqwest::Response, GitHubError> {
        let url = format!("{}/repos/{}/{}", self.base_url, slug.owner, slug.repo);
        loop {
            let mut request = self.http.get(&url).header("User-Agent", USER_AGENT);
            if let Some(token) = &self.token {
                request = request.header("Authorization", format!("token {token}"));
            }
            let response = request.send().await?;

            if response.status() == reqwest::StatusCode::FORBIDDEN {
                tracing::warn!(
                    slug = %slug.as_path(),
                    "GitHub API rate limit reached, waiting {} seconds before retry",
                    RATE_LIMIT_BACKOFF.as_secs()
                );
                tokio::time::sleep(RATE_LIMIT_BACKOFF).await;
                continue;
            }
            return Ok(response);
        }
    }

    /// Check that the repository behind a submission URL exists.
    pub async fn repo_exists(&self, repo_url: &str) -> Result<(), GitHubError> {
        let slug = parse_repo_slug(repo_url)
            .ok_or_else(|| GitHubError::InvalidUrl(repo_url.to_string()))?;
        let response = self.get_repo(&slug).await?;
        match response.status().as_u16() {
            200 => Ok(()),
            404 => Err(GitHubError::NotFound {
                slug: slug.as_path(),
            }),
            status => Err(GitHubError::UnexpectedStatus {
                slug: slug.as_path(),
                status,
            }),
        }
    }

    /// Fetch canonical name and description for an index entry.
    ///
    /// A 404 yields generated defaults rather than an error. Any other
    /// non-200 status is surfaced to the caller.
    pub async fn fetch_metadata(&self, repo_url: &str) -> Result<RepoMetadata, GitHubError> {
        let slug = parse_repo_slug(repo_url)
            .ok_or_else(|| GitHubError::InvalidUrl(repo_url.to_string()))?;
        let response = self.get_repo(&slug).await?;
        match response.status().as_u16() {
            200 => {
                let body: RepoResponse = response.json().await?;
                Ok(RepoMetadata {
                    name: body.name.unwrap_or_else(|| slug.repo.clone()),
                    description: body
                        .description
                        .unwrap_or_else(|| format!("Repository for {}", slug.repo)),
                })
            }
            404 => {
                tracing::warn!(slug = %slug.as_path(), "repository not found, using generated metadata");
                Ok(RepoMetadata::fallback(&slug))
            }
            status => Err(GitHubError::UnexpectedStatus {
                slug: slug.as_path(),
                status,
            }),
        }
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}
