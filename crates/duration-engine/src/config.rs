//! Locale capability configuration.
//!
//! Pattern matchers, unit tables, the inner number+unit extractor and the
//! ambiguity dictionary are all reached through
//! [`DurationExtractorConfiguration`]. The pipeline stages only ever see this
//! trait, so a new locale is a new implementation, selected when the
//! extractor is built.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ambiguity::AmbiguityRule;
use crate::error::{EngineError, Result};
use crate::span::Span;
use crate::unit::DurationUnit;

// ── Options ─────────────────────────────────────────────────────────────────

/// Switches that shape a single extractor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorOptions {
    /// Recognize "during the week"-style calendar phrases.
    pub calendar_mode: bool,
    /// Fuse connector-joined durations and run the ambiguity filter.
    pub merge_durations: bool,
    /// Attach "more than" / "less than" bounds to results.
    pub tag_inequality: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        ExtractorOptions {
            calendar_mode: false,
            merge_durations: true,
            tag_inequality: true,
        }
    }
}

impl ExtractorOptions {
    /// Enables the calendar-only "during" matcher.
    pub const CALENDAR_MODE: u32 = 1;
    /// Disables multi-duration merging and ambiguity filtering.
    pub const SKIP_MERGE: u32 = 1 << 1;
    /// Disables inequality tagging.
    pub const SKIP_INEQUALITY: u32 = 1 << 2;

    const KNOWN_BITS: u32 = Self::CALENDAR_MODE | Self::SKIP_MERGE | Self::SKIP_INEQUALITY;

    /// Decode a caller-supplied option bitset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidOptions`] if any unknown bit is set.
    pub fn from_bits(bits: u32) -> Result<Self> {
        let unknown = bits & !Self::KNOWN_BITS;
        if unknown != 0 {
            return Err(EngineError::InvalidOptions(format!(
                "unknown option bits 0x{unknown:x}"
            )));
        }
        Ok(ExtractorOptions {
            calendar_mode: bits & Self::CALENDAR_MODE != 0,
            merge_durations: bits & Self::SKIP_MERGE == 0,
            tag_inequality: bits & Self::SKIP_INEQUALITY == 0,
        })
    }

    /// Encode back to the bitset form accepted by [`ExtractorOptions::from_bits`].
    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.calendar_mode {
            bits |= Self::CALENDAR_MODE;
        }
        if !self.merge_durations {
            bits |= Self::SKIP_MERGE;
        }
        if !self.tag_inequality {
            bits |= Self::SKIP_INEQUALITY;
        }
        bits
    }
}

// ── Capabilities ────────────────────────────────────────────────────────────

/// The inner number+unit extractor ("3 days", "an hour", "2.5hrs").
pub trait UnitExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<Span>;
}

/// Read-only capabilities a locale supplies to the duration pipeline.
///
/// Implementations build all patterns and tables once, at construction.
pub trait DurationExtractorConfiguration: Send + Sync {
    fn unit_extractor(&self) -> &dyn UnitExtractor;

    /// Matches raw spans that are really year expressions ("2019 year").
    fn year_regex(&self) -> &Regex;

    /// Finds a duration unit inside a span. Must have a named capture `unit`.
    fn duration_unit_regex(&self) -> &Regex;

    /// Matches the text between two spans that may be merged.
    fn duration_connector_regex(&self) -> &Regex;

    /// "all day", "whole week".
    fn all_regex(&self) -> &Regex;

    /// "half a year", "half an hour".
    fn half_regex(&self) -> &Regex;

    /// "the next few days", "the past weeks".
    fn relative_duration_unit_regex(&self) -> &Regex;

    /// "more days", "fewer hours".
    fn more_or_less_regex(&self) -> &Regex;

    /// "some days", "a few minutes".
    fn some_regex(&self) -> &Regex;

    /// "during the week". Only consulted in calendar mode.
    fn during_regex(&self) -> &Regex;

    /// Surface unit string (lowercase) → unit identifier.
    fn unit_map(&self) -> &HashMap<String, DurationUnit>;

    /// Unit identifier → scale value. Strictly increasing with unit size.
    fn unit_value_map(&self) -> &HashMap<DurationUnit, u64>;

    fn ambiguity_filters(&self) -> &[AmbiguityRule];

    fn options(&self) -> ExtractorOptions;

    /// "more than", "at least" immediately before a span.
    fn more_than_regex(&self) -> Option<&Regex> {
        None
    }

    /// "less than", "within" immediately before a span.
    fn less_than_regex(&self) -> Option<&Regex> {
        None
    }

    /// "or more" / "or less" immediately after a span, with named captures
    /// `more` and `less`.
    fn inequality_suffix_regex(&self) -> Option<&Regex> {
        None
    }

    /// Resolve a surface unit string through [`unit_map`](Self::unit_map).
    fn lookup_unit(&self, surface: &str) -> Option<DurationUnit> {
        let map = self.unit_map();
        map.get(surface)
            .or_else(|| map.get(&surface.to_lowercase()))
            .copied()
    }

    /// Find the unit named inside `text`, if it is a known unit.
    fn unit_in(&self, text: &str) -> Option<DurationUnit> {
        let caps = self.duration_unit_regex().captures(text)?;
        let surface = caps.name("unit")?.as_str();
        self.lookup_unit(surface)
    }

    /// Scale value of `unit`, if the locale defines one.
    fn scale_of(&self, unit: DurationUnit) -> Option<u64> {
        self.unit_value_map().get(&unit).copied()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ExtractorOptions::default();
        assert!(!options.calendar_mode);
        assert!(options.merge_durations);
        assert!(options.tag_inequality);
        assert_eq!(options.bits(), 0);
    }

    #[test]
    fn test_from_bits() {
        let options = ExtractorOptions::from_bits(
            ExtractorOptions::CALENDAR_MODE | ExtractorOptions::SKIP_MERGE,
        )
        .unwrap();
        assert!(options.calendar_mode);
        assert!(!options.merge_durations);
        assert!(options.tag_inequality);
    }

    #[test]
    fn test_bits_roundtrip_all_known_combinations() {
        for bits in 0..8 {
            let options = ExtractorOptions::from_bits(bits).unwrap();
            assert_eq!(options.bits(), bits);
        }
    }

    #[test]
    fn test_from_bits_rejects_unknown() {
        let err = ExtractorOptions::from_bits(1 << 5).unwrap_err().to_string();
        assert!(err.contains("Invalid options"), "got: {err}");
    }

    #[test]
    fn test_deserialize_partial_options() {
        let options: ExtractorOptions =
            serde_json::from_str(r#"{ "calendar_mode": true }"#).unwrap();
        assert!(options.calendar_mode);
        assert!(options.merge_durations, "missing fields use defaults");
    }
}
