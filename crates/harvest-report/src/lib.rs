//! Wildlife harvest report parsing library.
//!
//! Turns a human-authored harvest statistics CSV report into structured,
//! per-unit harvest records.
//!
//! # Architecture
//!
//! The report has no declared schema. It is a run of loosely delimited
//! tables separated by section titles such as
//! `2017 Elk Harvest, Hunters and Percent Success for Archery`.
//! Parsing is split into:
//!
//! - [`season`]: recognizes section titles and maps them to a [`Season`]
//! - [`extractor`]: the row-stream state machine that finds tables and
//!   turns their rows into [`UnitHarvest`] records
//! - [`ingest`]: drives a CSV reader into the extractor and returns the
//!   finished [`HarvestCollection`]

pub mod error;
pub mod extractor;
pub mod ingest;
pub mod metadata;
pub mod model;
pub mod numeric;
pub mod season;

// Re-exports
pub use error::{HarvestError, Result};
pub use extractor::HarvestExtractor;
pub use ingest::{ingest_path, ingest_reader, IngestOptions, IngestSummary};
pub use metadata::report_year_from_path;
pub use model::{DauHarvest, HarvestCollection, UnitHarvest, UnitId};
pub use season::{classify, Season, SeasonCursor, SEASON_PRIORITY};
