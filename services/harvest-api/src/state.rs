//! Application state for the harvest API.

use std::path::PathBuf;

use harvest_report::{ingest_path, HarvestCollection, IngestSummary};
use tracing::info;

use crate::config::ReportSource;

/// Shared application state.
///
/// Built once before the listener is bound and never mutated afterwards,
/// so handlers read it without locking.
pub struct AppState {
    /// Ingested harvest records.
    pub collection: HarvestCollection,

    /// Counters from the ingest run.
    pub summary: IngestSummary,

    /// Report file the collection was read from.
    pub source: PathBuf,
}

impl AppState {
    pub fn new(collection: HarvestCollection, summary: IngestSummary, source: PathBuf) -> Self {
        Self {
            collection,
            summary,
            source,
        }
    }

    /// Ingest the configured report synchronously.
    pub fn load(report: &ReportSource) -> harvest_report::Result<Self> {
        info!(
            path = %report.path.display(),
            animal = %report.options.animal,
            year = report.options.year,
            "Loading harvest report"
        );

        let (collection, summary) = ingest_path(&report.path, &report.options)?;
        Ok(Self::new(collection, summary, report.path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvest_report::{HarvestError, IngestOptions};
    use test_utils::{sample, write_temp_report, SAMPLE_REPORT};

    #[test]
    fn test_load_sample_report() {
        let file = write_temp_report(SAMPLE_REPORT);
        let report = ReportSource {
            path: file.path().to_path_buf(),
            options: IngestOptions::new("elk", 2017),
        };

        let state = AppState::load(&report).unwrap();
        assert_eq!(state.collection.unit_count(), sample::UNITS);
        assert_eq!(state.summary.records_ingested, sample::RECORDS);
        assert_eq!(state.source, file.path());
    }

    #[test]
    fn test_load_missing_report_fails() {
        let dir = test_utils::temp_test_dir();
        let report = ReportSource {
            path: dir.path().join("missing.csv"),
            options: IngestOptions::new("elk", 2017),
        };

        assert!(matches!(
            AppState::load(&report),
            Err(HarvestError::SourceOpen { .. })
        ));
    }
}
