//! Row-stream state machine that pulls unit harvest tables out of a report.
//!
//! The extractor alternates between two states:
//!
//! - seeking a table: rows are inspected for section titles and for the
//!   `Unit, Bulls, Cows, ...` header that opens a unit table
//! - in a table: every row is a unit record until a row with a blank
//!   first cell or a `Total` row closes the table
//!
//! Each row is evaluated in a fixed order: table end, season
//! reclassification, header detection, data consumption.

use tracing::{debug, warn};

use crate::ingest::IngestSummary;
use crate::model::{HarvestCollection, UnitHarvest, UnitId};
use crate::numeric::{parse_count, parse_plain};
use crate::season::{classify, is_section_title, SeasonCursor};

/// What the extractor did with a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// Row belongs to a section with an unrecognized title and was dropped.
    SkippedInvalidSection,
    /// Row is a unit table header; the following rows are data.
    TableHeader,
    /// Row was stored as a record for this unit.
    Record(UnitId),
    /// Row carried nothing to store (titles, notes, table terminators).
    Ignored,
}

/// Incremental harvest table extractor.
pub struct HarvestExtractor {
    animal: String,
    year: i32,
    season: SeasonCursor,
    on_data_entries: bool,
    collection: HarvestCollection,
    summary: IngestSummary,
}

impl HarvestExtractor {
    /// Create an extractor for reports about `animal` in `year`.
    pub fn new(animal: impl Into<String>, year: i32) -> Self {
        Self {
            animal: animal.into(),
            year,
            season: SeasonCursor::Unset,
            on_data_entries: false,
            collection: HarvestCollection::new(),
            summary: IngestSummary::default(),
        }
    }

    /// Season context in effect after the last row.
    pub fn current_season(&self) -> SeasonCursor {
        self.season
    }

    /// Whether the next row would be read as table data.
    pub fn on_data_entries(&self) -> bool {
        self.on_data_entries
    }

    pub fn collection(&self) -> &HarvestCollection {
        &self.collection
    }

    pub fn summary(&self) -> &IngestSummary {
        &self.summary
    }

    /// Feed one report row.
    pub fn push_row<S: AsRef<str>>(&mut self, row: &[S]) -> RowOutcome {
        self.summary.rows_read += 1;

        let first = cell(row, 0);
        if first.is_empty() || first.eq_ignore_ascii_case("total") {
            if self.on_data_entries {
                self.summary.tables_closed += 1;
            }
            self.on_data_entries = false;
        }

        let is_title = is_section_title(row, &self.animal, self.year);
        self.season = classify(row, self.season, &self.animal, self.year);

        if self.season.is_invalid() {
            if is_title {
                self.summary.sections_skipped += 1;
                warn!(
                    title = %first,
                    column_2 = %cell(row, 2),
                    "Section title matches no known season, skipping section"
                );
            } else {
                self.summary.rows_dropped += 1;
            }
            return RowOutcome::SkippedInvalidSection;
        }

        if is_title {
            self.summary.sections_entered += 1;
            debug!(season = %self.season, title = %first, "Entered season section");
        }

        if is_table_header(row) {
            self.summary.tables_opened += 1;
            self.on_data_entries = true;
            return RowOutcome::TableHeader;
        }

        if !self.on_data_entries {
            return RowOutcome::Ignored;
        }

        let unit = self.lenient(row, 0, parse_plain);
        let record = UnitHarvest {
            season: self.season.label().to_string(),
            bulls: self.lenient(row, 1, parse_count),
            cows: self.lenient(row, 2, parse_count),
            calves: self.lenient(row, 3, parse_count),
            harvest: self.lenient(row, 4, parse_count),
            hunters: self.lenient(row, 5, parse_count),
            success: self.lenient(row, 6, parse_plain),
            rec_days: self.lenient(row, 7, parse_plain),
        };

        self.collection.push_unit(unit, record);
        self.summary.records_ingested += 1;
        RowOutcome::Record(unit)
    }

    /// Note a row the CSV reader could not split into fields.
    pub fn record_unreadable_row(&mut self) {
        self.summary.unreadable_rows += 1;
    }

    /// Note a row that needed lossy UTF-8 decoding before it was pushed.
    pub fn record_lossy_row(&mut self) {
        self.summary.lossy_rows += 1;
    }

    /// Stop extracting and hand back the collection.
    ///
    /// The stream may end mid-table; that is not an error.
    pub fn finish(self) -> (HarvestCollection, IngestSummary) {
        (self.collection, self.summary)
    }

    /// Parse cell `index`, counting it as zero when it does not parse.
    fn lenient<S: AsRef<str>>(
        &mut self,
        row: &[S],
        index: usize,
        parse: fn(&str) -> Option<i64>,
    ) -> i64 {
        let text = cell(row, index);
        match parse(text) {
            Some(value) => value,
            None => {
                self.summary.fields_defaulted += 1;
                debug!(
                    row = self.summary.rows_read,
                    column = index,
                    value = %text,
                    "Unparseable cell, using 0"
                );
                0
            }
        }
    }
}

/// Cell `index` of `row`, or `""` for a short row.
fn cell<S: AsRef<str>>(row: &[S], index: usize) -> &str {
    row.get(index).map(AsRef::as_ref).unwrap_or("")
}

/// `Unit, Bulls, Cows` in the first three cells, case-insensitive.
fn is_table_header<S: AsRef<str>>(row: &[S]) -> bool {
    cell(row, 0).eq_ignore_ascii_case("unit")
        && cell(row, 1).eq_ignore_ascii_case("bulls")
        && cell(row, 2).eq_ignore_ascii_case("cows")
}
