//! Metadata extraction from report file names.

use std::path::Path;

/// Extract the report year from a file name.
///
/// State agencies publish one report per year with the year in the file
/// name (e.g. `CO2017.csv`, `elk_harvest_2019_final.csv`). Returns the
/// first run of exactly four digits in the file stem that falls in
/// 1900..=2199.
pub fn report_year_from_path<P: AsRef<Path>>(path: P) -> Option<i32> {
    let stem = path.as_ref().file_stem().and_then(|s| s.to_str())?;

    stem.split(|c: char| !c.is_ascii_digit())
        .filter(|run| run.len() == 4)
        .filter_map(|run| run.parse::<i32>().ok())
        .find(|year| (1900..=2199).contains(year))
}
