//! Common test fixtures for harvest report tests.
//!
//! This module provides a small report laid out like a real state agency
//! harvest report, along with the values the parser must extract from it.

/// Report header cells of a unit table.
pub const UNIT_HEADER: [&str; 8] = [
    "Unit", "Bulls", "Cows", "Calves", "Harvest", "Hunters", "Success", "RecDays",
];

/// A 2017 elk report with four sections:
///
/// 1. All manners of take (units 1 and 2), closed by a `Total` row
/// 2. Archery (units 2 and 12), with an `N/A` bulls cell
/// 3. Youth seasons, whose title matches no known season
/// 4. First rifle, named in the third column, ending at end of file
///    without a `Total` row
pub const SAMPLE_REPORT: &str = r#"Colorado Parks and Wildlife,,,,,,,
"2017 Elk Harvest, Hunters and Percent Success for All Manners of Take",,,,,,,
Unit,Bulls,Cows,Calves,Harvest,Hunters,Success,RecDays
1,12,4,0,16,95,17,512
2,"1,034",502,88,"1,624","3,200",51,"14,820"
Total,"1,046",506,88,"1,640","3,295",50,"15,332"
,,,,,,,
"2017 Elk Harvest, Hunters and Percent Success for Archery Seasons",,,,,,,
Unit,Bulls,Cows,Calves,Harvest,Hunters,Success,RecDays
2,41,12,3,56,410,14,"2,388"
12,N/A,7,1,8,60,13,402
Total,41,19,4,64,470,14,"2,790"
,,,,,,,
"2017 Elk Harvest, Hunters and Percent Success for Youth Seasons",,,,,,,
Unit,Bulls,Cows,Calves,Harvest,Hunters,Success,RecDays
2,3,9,1,13,40,33,120
,,,,,,,
2017 Elk Harvest by DAU,,First Rifle Season,,,,,
Unit,Bulls,Cows,Calves,Harvest,Hunters,Success,RecDays
12,30,0,0,30,210,14,841
"#;

/// Expected extraction results for [`SAMPLE_REPORT`].
pub mod sample {
    /// Number of CSV rows in the report.
    pub const ROWS: u64 = 20;

    /// Distinct units with records.
    pub const UNITS: usize = 3;

    /// Unit records across all units.
    pub const RECORDS: u64 = 5;

    /// The youth section header, data row and trailing blank row.
    pub const ROWS_DROPPED: u64 = 3;

    /// `"14,820"` and `"2,388"` recreation days plus the `N/A` bulls cell.
    pub const FIELDS_DEFAULTED: u64 = 3;

    /// Unit 2 under all manners of take:
    /// `(bulls, cows, calves, harvest, hunters, success, recdays)`.
    ///
    /// Recreation days are not comma-stripped, so `"14,820"` reads as 0.
    pub const UNIT_2_ALL_MANNERS: (i64, i64, i64, i64, i64, i64, i64) =
        (1034, 502, 88, 1624, 3200, 51, 0);

    /// Unit 12 under archery; the `N/A` bulls cell reads as 0.
    pub const UNIT_12_ARCHERY: (i64, i64, i64, i64, i64, i64, i64) = (0, 7, 1, 8, 60, 13, 402);
}

/// Common identification values for testing.
pub mod report {
    pub const ANIMAL: &str = "elk";
    pub const YEAR: i32 = 2017;
    pub const FILE_NAME: &str = "CO2017.csv";
}
