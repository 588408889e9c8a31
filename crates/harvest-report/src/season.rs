//! Season section recognition.
//!
//! A harvest report announces each table with a title row such as
//! `2017 Elk Harvest, Hunters and Percent Success for All Muzzleloader Seasons`.
//! The season is recovered by substring matching against a fixed,
//! ordered taxonomy.

use std::fmt;

/// Canonical hunting season / method tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    AllMannersOfTake,
    AllRifleSeasons,
    AllRanchingForWildlife,
    EarlyHighCountry,
    LateSeasons,
    PrivateLandOnly,
    FirstRifle,
    SecondRifle,
    ThirdRifle,
    FourthRifle,
    AllArchery,
    Muzzleloader,
}

/// Match order for section titles. First match wins.
///
/// Several recognition strings overlap ("late" occurs in unrelated
/// titles, "archery" appears inside combined-season titles), so this
/// order is part of the parsing contract.
pub const SEASON_PRIORITY: [Season; 12] = [
    Season::AllMannersOfTake,
    Season::AllRifleSeasons,
    Season::AllRanchingForWildlife,
    Season::EarlyHighCountry,
    Season::LateSeasons,
    Season::PrivateLandOnly,
    Season::FirstRifle,
    Season::SecondRifle,
    Season::ThirdRifle,
    Season::FourthRifle,
    Season::AllArchery,
    Season::Muzzleloader,
];

impl Season {
    /// Canonical label, which is also the lower-case text recognized in titles.
    pub fn label(self) -> &'static str {
        match self {
            Season::AllMannersOfTake => "all manners of take",
            Season::AllRifleSeasons => "all rifle",
            Season::AllRanchingForWildlife => "all ranching for wildlife",
            Season::EarlyHighCountry => "early high country",
            Season::LateSeasons => "late",
            Season::PrivateLandOnly => "private land only",
            Season::FirstRifle => "first rifle",
            Season::SecondRifle => "second rifle",
            Season::ThirdRifle => "third rifle",
            Season::FourthRifle => "fourth rifle",
            Season::AllArchery => "archery",
            Season::Muzzleloader => "muzzleloader",
        }
    }

    /// Find the first season (in priority order) whose label occurs in `text`.
    ///
    /// `text` must already be lower-cased.
    pub fn find_in(text: &str) -> Option<Season> {
        SEASON_PRIORITY
            .iter()
            .copied()
            .find(|season| text.contains(season.label()))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The season context carried from row to row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonCursor {
    /// No section title seen yet.
    #[default]
    Unset,
    /// Inside a recognized season section.
    Known(Season),
    /// Inside a section whose title matched no known season.
    /// Rows are dropped until the next section title.
    Invalid,
}

impl SeasonCursor {
    pub fn label(&self) -> &'static str {
        match self {
            SeasonCursor::Unset => "",
            SeasonCursor::Known(season) => season.label(),
            SeasonCursor::Invalid => "invalid",
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, SeasonCursor::Invalid)
    }
}

impl fmt::Display for SeasonCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Columns of a title row that may carry the season name.
const SEASON_COLUMNS: [usize; 2] = [0, 2];

/// Whether `row` is a section title for `year` and `animal`: at least three
/// fields, the first starting with `"{year} {animal} harvest"`
/// (case-insensitive).
pub fn is_section_title<S: AsRef<str>>(row: &[S], animal: &str, year: i32) -> bool {
    if row.len() < 3 {
        return false;
    }

    let title_prefix = format!("{} {} harvest", year, animal.to_lowercase());
    row[0].as_ref().to_lowercase().starts_with(&title_prefix)
}

/// Classify a row against the current season context.
///
/// Returns `current` unchanged unless the row is a section title (see
/// [`is_section_title`]). For a title row, columns 0 and then 2 are
/// searched in [`SEASON_PRIORITY`] order; a title naming no known season
/// yields [`SeasonCursor::Invalid`].
pub fn classify<S: AsRef<str>>(
    row: &[S],
    current: SeasonCursor,
    animal: &str,
    year: i32,
) -> SeasonCursor {
    if !is_section_title(row, animal, year) {
        return current;
    }

    SEASON_COLUMNS
        .iter()
        .find_map(|&column| Season::find_in(&row[column].as_ref().to_lowercase()))
        .map(SeasonCursor::Known)
        .unwrap_or(SeasonCursor::Invalid)
}
