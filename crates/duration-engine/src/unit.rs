//! Locale-independent duration units.
//!
//! Surface strings ("hrs", "days", "yr") are mapped to a [`DurationUnit`] by
//! the locale's unit map; the unit in turn maps to a scale value used only to
//! compare magnitudes while merging.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// A calendar or clock granularity, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DurationUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
    Century,
}

impl DurationUnit {
    /// Every unit, smallest first.
    pub const ALL: [DurationUnit; 9] = [
        DurationUnit::Second,
        DurationUnit::Minute,
        DurationUnit::Hour,
        DurationUnit::Day,
        DurationUnit::Week,
        DurationUnit::Month,
        DurationUnit::Year,
        DurationUnit::Decade,
        DurationUnit::Century,
    ];

    /// Sub-day units are time units; day and above are date units.
    pub fn is_time_unit(self) -> bool {
        matches!(
            self,
            DurationUnit::Second | DurationUnit::Minute | DurationUnit::Hour
        )
    }

    /// Nominal length in seconds (30-day month, 365-day year).
    ///
    /// Only the ordering matters to the merger, so the calendar-exact
    /// length of a month or year is irrelevant here.
    pub fn nominal_seconds(self) -> u64 {
        match self {
            DurationUnit::Second => 1,
            DurationUnit::Minute => 60,
            DurationUnit::Hour => 3_600,
            DurationUnit::Day => 86_400,
            DurationUnit::Week => 604_800,
            DurationUnit::Month => 2_592_000,
            DurationUnit::Year => 31_536_000,
            DurationUnit::Decade => 315_360_000,
            DurationUnit::Century => 3_153_600_000,
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DurationUnit::Second => "second",
            DurationUnit::Minute => "minute",
            DurationUnit::Hour => "hour",
            DurationUnit::Day => "day",
            DurationUnit::Week => "week",
            DurationUnit::Month => "month",
            DurationUnit::Year => "year",
            DurationUnit::Decade => "decade",
            DurationUnit::Century => "century",
        };
        f.write_str(name)
    }
}

/// Build the identifier → scale table from [`DurationUnit::nominal_seconds`].
pub fn default_unit_values() -> HashMap<DurationUnit, u64> {
    DurationUnit::ALL
        .iter()
        .map(|&unit| (unit, unit.nominal_seconds()))
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
