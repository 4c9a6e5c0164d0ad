//! The validation results artifact consumed by downstream CI steps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Repository-relative location of the results artifact.
pub const RESULTS_PATH: &str = ".github/validation-results.json";

/// Aggregated outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// False as soon as any file has at least one error.
    pub valid: bool,
    /// Per-file error lists, keyed by submitted path.
    pub errors: BTreeMap<String, Vec<String>>,
    /// Files that update an already-indexed submission.
    pub updates: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: BTreeMap::new(),
            updates: Vec::new(),
        }
    }

    /// Record the errors for one file. An empty list is ignored.
    pub fn record_errors(&mut self, path: &str, errors: Vec<String>) {
        if errors.is_empty() {
            return;
        }
        self.valid = false;
        self.errors.insert(path.to_string(), errors);
    }

    pub fn record_update(&mut self, path: &str) {
        self.updates.push(path.to_string());
    }

    /// Write the artifact as pretty-printed JSON, creating the parent
    /// directory if needed.
    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).expect("report serialization is infallible");
        std::fs::write(path, json)
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
