//! Builders for synthetic harvest report documents.
//!
//! Real reports are wide, irregular spreadsheets exported to CSV. The
//! [`ReportBuilder`] produces the same layout (section title rows, unit
//! table headers, data rows, `Total` rows and blank spacer rows) so tests
//! can describe a report row by row.

use crate::fixtures::UNIT_HEADER;

/// Number of columns an exported report row is padded to.
pub const REPORT_WIDTH: usize = 8;

/// Builds a CSV report document.
///
/// # Example
///
/// ```
/// use test_utils::ReportBuilder;
///
/// let csv = ReportBuilder::new("Elk", 2017)
///     .season_title("Archery Seasons")
///     .unit_header()
///     .unit_row(&["12", "1,034", "502", "88", "1,624", "3,200", "51", "4"])
///     .total_row()
///     .build();
///
/// assert!(csv.starts_with("\"2017 Elk Harvest, Hunters"));
/// assert!(csv.contains("\"1,034\""));
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    animal: String,
    year: i32,
    lines: Vec<String>,
}

impl ReportBuilder {
    pub fn new(animal: &str, year: i32) -> Self {
        Self {
            animal: animal.to_string(),
            year,
            lines: Vec::new(),
        }
    }

    /// A section title in the usual agency wording, e.g.
    /// `2017 Elk Harvest, Hunters and Percent Success for Archery Seasons`.
    pub fn season_title(self, season_text: &str) -> Self {
        let title = format!(
            "{} {} Harvest, Hunters and Percent Success for {}",
            self.year, self.animal, season_text
        );
        self.raw_row(&[title.as_str()])
    }

    /// A section title whose season name sits in the third column.
    pub fn split_title(self, first: &str, third: &str) -> Self {
        self.raw_row(&[first, "", third])
    }

    /// The `Unit, Bulls, Cows, ...` table header.
    pub fn unit_header(self) -> Self {
        self.raw_row(&UNIT_HEADER)
    }

    /// A data row; cells are written as given.
    pub fn unit_row(self, cells: &[&str]) -> Self {
        self.raw_row(cells)
    }

    /// A `Total` row with placeholder sums.
    pub fn total_row(self) -> Self {
        self.raw_row(&["Total", "0", "0", "0", "0", "0", "0", "0"])
    }

    /// A spacer row of empty cells.
    pub fn blank_row(self) -> Self {
        self.raw_row(&[])
    }

    /// A free-text note row (footnotes, agency banners).
    pub fn note(self, text: &str) -> Self {
        self.raw_row(&[text])
    }

    /// Any row, padded with empty cells to [`REPORT_WIDTH`].
    pub fn raw_row(mut self, cells: &[&str]) -> Self {
        let mut fields: Vec<String> = cells.iter().map(|c| quote_cell(c)).collect();
        while fields.len() < REPORT_WIDTH {
            fields.push(String::new());
        }
        self.lines.push(fields.join(","));
        self
    }

    /// Number of rows added so far.
    pub fn row_count(&self) -> usize {
        self.lines.len()
    }

    /// The CSV document, one row per line.
    pub fn build(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Quote a cell if it contains a delimiter, quote or line break.
pub fn quote_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
