//! One-shot ingest of a harvest report into a [`HarvestCollection`].

use metrics::{counter, gauge};
use serde::Serialize;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{HarvestError, Result};
use crate::extractor::HarvestExtractor;
use crate::model::HarvestCollection;

/// Which report a document is. Section titles are recognized by
/// `"{year} {animal} harvest"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    pub animal: String,
    pub year: i32,
}

impl IngestOptions {
    pub fn new(animal: impl Into<String>, year: i32) -> Self {
        Self {
            animal: animal.into(),
            year,
        }
    }
}

/// Counters gathered while ingesting one report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    /// Rows handed to the extractor.
    pub rows_read: u64,
    /// Unit records stored.
    pub records_ingested: u64,
    /// Unit table headers seen in valid sections.
    pub tables_opened: u64,
    /// Tables ended by a blank or `Total` row.
    pub tables_closed: u64,
    /// Section titles that matched a known season.
    pub sections_entered: u64,
    /// Section titles that matched no known season.
    pub sections_skipped: u64,
    /// Rows dropped because they sat in a skipped section.
    pub rows_dropped: u64,
    /// Cells that did not parse and were stored as zero.
    pub fields_defaulted: u64,
    /// Rows with bytes that are not UTF-8, kept with those bytes replaced.
    pub lossy_rows: u64,
    /// Records the CSV reader could not split into fields.
    pub unreadable_rows: u64,
}

impl IngestSummary {
    /// Publish the summary through the `metrics` facade.
    pub fn record_metrics(&self, collection: &HarvestCollection) {
        counter!("harvest_rows_read_total").increment(self.rows_read);
        counter!("harvest_records_ingested_total").increment(self.records_ingested);
        counter!("harvest_sections_skipped_total").increment(self.sections_skipped);
        counter!("harvest_rows_dropped_total").increment(self.rows_dropped);
        counter!("harvest_fields_defaulted_total").increment(self.fields_defaulted);
        counter!("harvest_lossy_rows_total").increment(self.lossy_rows);
        counter!("harvest_unreadable_rows_total").increment(self.unreadable_rows);
        gauge!("harvest_units").set(collection.unit_count() as f64);
    }
}

/// Ingest a report from any byte stream.
///
/// Rows have no fixed arity and the first row is not a header. Cells are
/// read as bytes and decoded lossily, so a stray Windows-1252 byte never
/// costs a title or data row. Only an I/O failure of the underlying stream
/// ends the ingest with an error.
pub fn ingest_reader<R: Read>(
    reader: R,
    options: &IngestOptions,
) -> Result<(HarvestCollection, IngestSummary)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut extractor = HarvestExtractor::new(options.animal.as_str(), options.year);
    let mut record = csv::ByteRecord::new();

    loop {
        match csv_reader.read_byte_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let row: Vec<Cow<'_, str>> = record.iter().map(String::from_utf8_lossy).collect();
                if row.iter().any(|cell| matches!(cell, Cow::Owned(_))) {
                    debug!(
                        row = extractor.summary().rows_read + 1,
                        "Report row is not valid UTF-8, decoding lossily"
                    );
                    extractor.record_lossy_row();
                }
                extractor.push_row(&row);
            }
            Err(e) if e.is_io_error() => return Err(HarvestError::SourceRead(e)),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable report row");
                extractor.record_unreadable_row();
            }
        }
    }

    let (collection, summary) = extractor.finish();
    summary.record_metrics(&collection);

    info!(
        animal = %options.animal,
        year = options.year,
        rows = summary.rows_read,
        records = summary.records_ingested,
        units = collection.unit_count(),
        sections_skipped = summary.sections_skipped,
        fields_defaulted = summary.fields_defaulted,
        "Harvest report ingested"
    );

    if summary.sections_skipped > 0 {
        warn!(
            sections = summary.sections_skipped,
            rows = summary.rows_dropped,
            "Report sections with unrecognized season titles were dropped"
        );
    }

    Ok((collection, summary))
}

/// Ingest a report file.
pub fn ingest_path<P: AsRef<Path>>(
    path: P,
    options: &IngestOptions,
) -> Result<(HarvestCollection, IngestSummary)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| HarvestError::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "Reading harvest report");
    ingest_reader(BufReader::new(file), options)
}
