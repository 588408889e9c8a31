//! Harvest record types and the in-memory collection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Game management unit number.
pub type UnitId = i64;

/// Harvest statistics for one unit in one season table.
///
/// The unit number is the collection key and is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitHarvest {
    /// Canonical season label (see [`crate::Season::label`]).
    pub season: String,
    pub bulls: i64,
    pub cows: i64,
    pub calves: i64,
    pub harvest: i64,
    pub hunters: i64,
    /// Hunter success, in percent.
    pub success: i64,
    /// Recreation days.
    #[serde(rename = "recdays")]
    pub rec_days: i64,
}

/// Season-level totals for a Data Analysis Unit.
///
/// Reserved for the DAU summary tables of the report; no parsing path
/// fills it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DauHarvest {
    pub season: String,
    #[serde(rename = "DAU")]
    pub dau: String,
    pub total_hunter_estimate: i64,
    pub total_harvest_estimate: i64,
    pub total_recreation_days_estimate: i64,
}

/// All records extracted from one report.
///
/// Records of a unit keep report row order, so a unit that appears in
/// several season tables lists them in the order the tables occur.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestCollection {
    #[serde(rename = "HarvestsByDAU")]
    pub harvests_by_dau: BTreeMap<String, Vec<DauHarvest>>,

    #[serde(rename = "HarvestsByUnit")]
    pub harvests_by_unit: BTreeMap<UnitId, Vec<UnitHarvest>>,
}

impl HarvestCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to a unit, creating the unit's list on first sight.
    pub fn push_unit(&mut self, unit: UnitId, record: UnitHarvest) {
        self.harvests_by_unit.entry(unit).or_default().push(record);
    }

    /// Records for a unit; empty if the unit never appeared.
    pub fn unit(&self, unit: UnitId) -> &[UnitHarvest] {
        self.harvests_by_unit
            .get(&unit)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct units.
    pub fn unit_count(&self) -> usize {
        self.harvests_by_unit.len()
    }

    /// Total number of unit records across all units.
    pub fn record_count(&self) -> usize {
        self.harvests_by_unit.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.harvests_by_unit.is_empty() && self.harvests_by_dau.is_empty()
    }
}
