//! Summary of a site build.

use serde::Serialize;
use std::path::PathBuf;

/// What a build produced and what it had to skip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Where the stylesheet was copied to.
    pub stylesheet: PathBuf,
    /// Generated HTML pages, in file name order.
    pub pages: Vec<PathBuf>,
    /// Non-document files copied through unchanged.
    pub copied: Vec<PathBuf>,
    /// Files whose output could not be produced.
    pub skipped: Vec<Skipped>,
    /// Index page, if it was written.
    pub index: Option<PathBuf>,
    /// File names listed in the index page.
    pub index_entries: Vec<String>,
}

/// A file the build gave up on, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    /// The input (or output) file concerned.
    pub path: PathBuf,
    /// Human-readable error message.
    pub reason: String,
}

impl BuildReport {
    /// Returns true if every file was produced.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.index.is_some()
    }

    /// Returns the report as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
