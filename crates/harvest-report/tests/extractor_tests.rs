//! Tests for the harvest table state machine.
//!
//! Rows are fed one at a time so each transition can be checked directly.

use harvest_report::extractor::RowOutcome;
use harvest_report::{HarvestExtractor, Season, SeasonCursor, UnitHarvest};
use test_utils::UNIT_HEADER;

fn extractor() -> HarvestExtractor {
    HarvestExtractor::new("elk", 2017)
}

fn enter_archery_table(extractor: &mut HarvestExtractor) {
    extractor.push_row(&["2017 Elk Harvest for Archery Seasons", "", ""]);
    extractor.push_row(&UNIT_HEADER);
}

// ============================================================================
// Record extraction
// ============================================================================

#[test]
fn test_archery_record_is_extracted() {
    let mut extractor = extractor();
    enter_archery_table(&mut extractor);

    let outcome = extractor.push_row(&["12", "1,034", "502", "88", "1,624", "3,200", "51", "4"]);
    assert_eq!(outcome, RowOutcome::Record(12));

    let records = extractor.collection().unit(12);
    assert_eq!(
        records,
        &[UnitHarvest {
            season: "archery".to_string(),
            bulls: 1034,
            cows: 502,
            calves: 88,
            harvest: 1624,
            hunters: 3200,
            success: 51,
            rec_days: 4,
        }]
    );
}

#[test]
fn test_non_numeric_bulls_reads_as_zero() {
    let mut extractor = extractor();
    enter_archery_table(&mut extractor);

    extractor.push_row(&["12", "N/A", "502", "88", "1,624", "3,200", "51", "4"]);

    let record = &extractor.collection().unit(12)[0];
    assert_eq!(record.bulls, 0);
    assert_eq!(record.cows, 502);
    assert_eq!(record.hunters, 3200);
    assert_eq!(record.rec_days, 4);
    assert_eq!(extractor.summary().fields_defaulted, 1);
}

#[test]
fn test_success_and_recdays_are_not_comma_stripped() {
    let mut extractor = extractor();
    enter_archery_table(&mut extractor);

    extractor.push_row(&["12", "1", "1", "1", "1", "1", "1,0", "2,500"]);

    let record = &extractor.collection().unit(12)[0];
    assert_eq!(record.success, 0);
    assert_eq!(record.rec_days, 0);
}

#[test]
fn test_unit_is_not_comma_stripped() {
    let mut extractor = extractor();
    enter_archery_table(&mut extractor);

    assert_eq!(
        extractor.push_row(&["1,2", "5", "5", "5", "10", "20", "50", "40"]),
        RowOutcome::Record(0)
    );
}

#[test]
fn test_same_unit_accumulates_across_seasons_in_row_order() {
    let mut extractor = extractor();
    extractor.push_row(&["2017 Elk Harvest for Muzzleloader", "", ""]);
    extractor.push_row(&UNIT_HEADER);
    extractor.push_row(&["201", "1", "0", "0", "1", "9", "11", "30"]);
    extractor.push_row(&["Total", "1", "0", "0", "1", "9", "11", "30"]);
    extractor.push_row(&["2017 Elk Harvest for Archery", "", ""]);
    extractor.push_row(&UNIT_HEADER);
    extractor.push_row(&["201", "2", "0", "0", "2", "9", "22", "30"]);

    let seasons: Vec<&str> = extractor
        .collection()
        .unit(201)
        .iter()
        .map(|r| r.season.as_str())
        .collect();
    assert_eq!(seasons, vec!["muzzleloader", "archery"]);
}

// ============================================================================
// Table boundaries
// ============================================================================

#[test]
fn test_total_row_closes_table() {
    let mut extractor = extractor();
    enter_archery_table(&mut extractor);
    assert!(extractor.on_data_entries());

    assert_eq!(
        extractor.push_row(&["TOTAL", "41", "19", "4", "64", "470", "14", "2790"]),
        RowOutcome::Ignored
    );
    assert!(!extractor.on_data_entries());

    // A unit-looking row after the total is not data
    assert_eq!(
        extractor.push_row(&["15", "1", "1", "1", "2", "3", "4", "5"]),
        RowOutcome::Ignored
    );
    assert!(extractor.collection().unit(15).is_empty());
}

#[test]
fn test_total_row_is_never_a_record_even_mid_table() {
    let mut extractor = extractor();
    enter_archery_table(&mut extractor);
    extractor.push_row(&["total"]);
    assert_eq!(extractor.collection().record_count(), 0);
    assert_eq!(extractor.summary().tables_closed, 1);
}

#[test]
fn test_blank_first_cell_closes_table() {
    let mut extractor = extractor();
    enter_archery_table(&mut extractor);
    extractor.push_row(&["", "note: estimates", ""]);
    assert!(!extractor.on_data_entries());
}

#[test]
fn test_header_case_is_ignored() {
    let mut extractor = extractor();
    assert_eq!(
        extractor.push_row(&["UNIT", "bulls", "Cows", "Calves"]),
        RowOutcome::TableHeader
    );
}

#[test]
fn test_dau_table_header_does_not_open_table() {
    let mut extractor = extractor();
    extractor.push_row(&["2017 Elk Harvest by DAU", "", "Archery"]);
    extractor.push_row(&["DAU", "Bulls", "Cows", "Calves", "Harvest"]);
    assert!(!extractor.on_data_entries());
    extractor.push_row(&["E-1", "5", "5", "0", "10"]);
    assert_eq!(extractor.collection().record_count(), 0);
}

#[test]
fn test_stream_may_end_mid_table() {
    let mut extractor = extractor();
    enter_archery_table(&mut extractor);
    extractor.push_row(&["3", "1", "1", "1", "3", "10", "30", "12"]);

    let (collection, summary) = extractor.finish();
    assert_eq!(collection.record_count(), 1);
    assert_eq!(summary.tables_opened, 1);
    assert_eq!(summary.tables_closed, 0);
}

// ============================================================================
// Invalid sections
// ============================================================================

#[test]
fn test_invalid_section_drops_its_table() {
    let mut extractor = extractor();
    assert_eq!(
        extractor.push_row(&["2017 Elk Harvest for Youth Seasons", "", ""]),
        RowOutcome::SkippedInvalidSection
    );
    assert_eq!(
        extractor.push_row(&UNIT_HEADER),
        RowOutcome::SkippedInvalidSection
    );
    assert_eq!(
        extractor.push_row(&["12", "1", "1", "1", "3", "10", "30", "12"]),
        RowOutcome::SkippedInvalidSection
    );

    assert!(extractor.collection().is_empty());
    assert_eq!(extractor.current_season(), SeasonCursor::Invalid);
    assert_eq!(extractor.summary().sections_skipped, 1);
    assert_eq!(extractor.summary().rows_dropped, 2);
}

#[test]
fn test_invalid_title_inside_open_table_keeps_table_flag() {
    let mut extractor = extractor();
    enter_archery_table(&mut extractor);
    extractor.push_row(&["2017 Elk Harvest for Youth Seasons", "", ""]);

    // The skipped title does not close the table, but the section's rows
    // are still dropped while the season stays invalid.
    assert!(extractor.on_data_entries());
    assert_eq!(
        extractor.push_row(&["12", "1", "1", "1", "3", "10", "30", "12"]),
        RowOutcome::SkippedInvalidSection
    );
    assert_eq!(extractor.collection().record_count(), 0);
}

#[test]
fn test_valid_title_after_invalid_section_resumes() {
    let mut extractor = extractor();
    extractor.push_row(&["2017 Elk Harvest for Youth Seasons", "", ""]);
    extractor.push_row(&["", "", ""]);
    extractor.push_row(&["2017 Elk Harvest for Late Seasons", "", ""]);
    extractor.push_row(&UNIT_HEADER);
    extractor.push_row(&["44", "1", "1", "1", "3", "10", "30", "12"]);

    assert_eq!(
        extractor.current_season(),
        SeasonCursor::Known(Season::LateSeasons)
    );
    assert_eq!(extractor.collection().unit(44)[0].season, "late");
}

#[test]
fn test_table_before_any_title_has_empty_season() {
    let mut extractor = extractor();
    extractor.push_row(&UNIT_HEADER);
    extractor.push_row(&["9", "1", "1", "1", "3", "10", "30", "12"]);
    assert_eq!(extractor.collection().unit(9)[0].season, "");
}
