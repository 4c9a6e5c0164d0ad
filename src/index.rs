//! The persisted repository index.
//!
//! A JSON object keyed by GitHub repository URL, mapping each to the
//! submission that claims it. The index is loaded fully into memory,
//! transformed, and rewritten whole — there is no partial update. All
//! operations take and return explicit values; nothing here is ambient.

use crate::errors::IndexError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Repository-relative location of the index file.
pub const REPO_INDEX_PATH: &str = ".github/repo-index.json";

/// Metadata recorded for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Containing directory of the submission, e.g. `commands/nginx`.
    pub path: String,
    pub category: Option<String>,
    pub name: String,
    pub description: String,
}

/// One value in the index.
///
/// Early versions of the index stored a bare path string per URL; those
/// still deserialize and keep their path queryable until the updater
/// rewrites them as full entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexValue {
    Entry(IndexEntry),
    LegacyPath(String),
}

impl IndexValue {
    pub fn path(&self) -> &str {
        match self {
            IndexValue::Entry(entry) => &entry.path,
            IndexValue::LegacyPath(path) => path,
        }
    }

    pub fn as_entry(&self) -> Option<&IndexEntry> {
        match self {
            IndexValue::Entry(entry) => Some(entry),
            IndexValue::LegacyPath(_) => None,
        }
    }
}

/// The full index: repository URL → recorded submission.
///
/// Backed by a `BTreeMap` so the serialized JSON is byte-stable across
/// runs regardless of processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoIndex {
    entries: BTreeMap<String, IndexValue>,
}

impl RepoIndex {
    /// Load the index from disk. A missing file is an error; use
    /// [`RepoIndex::load_if_exists`] where absence is expected.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let content = std::fs::read_to_string(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| IndexError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the index, treating a missing file as `None`.
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>, IndexError> {
        if path.exists() {
            Ok(Some(Self::load(path)?))
        } else {
            Ok(None)
        }
    }

    /// Persist the whole index as pretty-printed JSON, creating the
    /// parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), IndexError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| IndexError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self).expect("index serialization is infallible");
        std::fs::write(path, json).map_err(|source| IndexError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get(&self, repo_url: &str) -> Option<&IndexValue> {
        self.entries.get(repo_url)
    }

    /// Insert or overwrite the entry for a URL. Returns true when the
    /// stored value actually changed.
    pub fn upsert(&mut self, repo_url: &str, entry: IndexEntry) -> bool {
        let new_value = IndexValue::Entry(entry);
        if self.entries.get(repo_url) == Some(&new_value) {
            return false;
        }
        self.entries.insert(repo_url.to_string(), new_value);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &IndexValue)> {
        self.entries.iter()
    }
}
