//! Error types for corpus splitting.
//!
//! Every variant is fatal: the run stops at the first one and files already
//! written stay on disk.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The corpus document does not exist.
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// A selector points at a heading occurrence the corpus lacks.
    #[error("Missing heading occurrence: {title} ({occurrence}), found {found}")]
    UnresolvedSelector {
        /// Heading title that was requested.
        title: String,
        /// Requested 1-based occurrence.
        occurrence: usize,
        /// How many times the title actually occurs.
        found: usize,
    },

    /// Assembling one output file failed.
    #[error("Failed to assemble {file_name}: {source}")]
    Topic {
        /// Output file whose table entry failed.
        file_name: String,
        /// What went wrong.
        #[source]
        source: Box<SplitError>,
    },

    /// Topic table file could not be parsed.
    #[error("Invalid topic table {}: {source}", .path.display())]
    TopicTable {
        /// Path of the offending table.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitError>;
