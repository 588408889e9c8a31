//! Error types for the harvest-report crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can stop an ingest.
///
/// Row-level problems (bad numbers, unknown section titles, unreadable
/// records) never surface here; they are recovered inside the extractor.
#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Failed to open harvest report {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read harvest report: {0}")]
    SourceRead(#[from] csv::Error),
}

/// Result type for harvest report operations.
pub type Result<T> = std::result::Result<T, HarvestError>;
