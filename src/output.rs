//! Output structures for human and JSON modes
//!
//! Operation results are plain serializable structs so the CLI can render
//! them either as readable text or as machine-parseable JSON.

use serde::Serialize;

use crate::branch::Branch;
use crate::status::FileStatus;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Success record returned by user-visible verbs
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    /// Short headline, e.g. "Committed"
    pub title: String,
    /// Supporting detail, usually git's own output
    pub message: String,
}

impl Outcome {
    /// Build an outcome from a title and message
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Decoded working-tree status for one repository
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Repository root the status was taken in
    pub root: String,
    /// Per-file statuses
    pub files: Vec<FileStatus>,
}

/// Branch listing for one repository
#[derive(Debug, Serialize)]
pub struct BranchReport {
    /// Unified local/remote branch records
    pub branches: Vec<Branch>,
}

/// Aggregate result of a fetch across several repository roots
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct FetchSummary {
    /// Roots fetched successfully
    pub succeeded: usize,
    /// Roots whose fetch failed
    pub failed: usize,
}
