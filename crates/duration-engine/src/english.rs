//! English duration locale.
//!
//! Provides [`EnglishDurationConfiguration`], the reference implementation of
//! [`DurationExtractorConfiguration`], and [`EnglishUnitExtractor`], the inner
//! number+unit extractor it wraps.
//!
//! # Recognized forms
//!
//! **Number + unit**: `"3 days"`, `"2.5 hours"`, `"1,000 years"`, `"an hour"`,
//! `"twenty-five minutes"`, `"two and a half weeks"`, `"an hour and a half"`,
//! `"45min"`, `"3h"`
//!
//! **All**: `"all day"`, `"the whole week"`, `"full-year"`
//!
//! **Half**: `"half a year"`, `"half an hour"`, `"a half day"`
//!
//! **Relative**: `"the next few days"`, `"the past weeks"`, `"coming months"`
//!
//! **More or less**: `"more days"`, `"fewer hours"`, `"a few more weeks"`
//!
//! **Some**: `"some days"`, `"several weeks"`, `"a few minutes"`
//!
//! **During** (calendar mode only): `"during the week"`, `"for the year"`

use std::collections::HashMap;

use regex::Regex;

use crate::ambiguity::AmbiguityRule;
use crate::config::{DurationExtractorConfiguration, ExtractorOptions, UnitExtractor};
use crate::error::{EngineError, Result};
use crate::span::{Span, SpanKind};
use crate::unit::{default_unit_values, DurationUnit};

/// Surface unit strings and the unit each one names.
pub const ENGLISH_UNITS: &[(&str, DurationUnit)] = &[
    ("second", DurationUnit::Second),
    ("seconds", DurationUnit::Second),
    ("sec", DurationUnit::Second),
    ("secs", DurationUnit::Second),
    ("minute", DurationUnit::Minute),
    ("minutes", DurationUnit::Minute),
    ("min", DurationUnit::Minute),
    ("mins", DurationUnit::Minute),
    ("hour", DurationUnit::Hour),
    ("hours", DurationUnit::Hour),
    ("hr", DurationUnit::Hour),
    ("hrs", DurationUnit::Hour),
    ("h", DurationUnit::Hour),
    ("day", DurationUnit::Day),
    ("days", DurationUnit::Day),
    ("night", DurationUnit::Day),
    ("nights", DurationUnit::Day),
    ("week", DurationUnit::Week),
    ("weeks", DurationUnit::Week),
    ("wk", DurationUnit::Week),
    ("wks", DurationUnit::Week),
    ("month", DurationUnit::Month),
    ("months", DurationUnit::Month),
    ("year", DurationUnit::Year),
    ("years", DurationUnit::Year),
    ("yr", DurationUnit::Year),
    ("yrs", DurationUnit::Year),
    ("decade", DurationUnit::Decade),
    ("decades", DurationUnit::Decade),
    ("century", DurationUnit::Century),
    ("centuries", DurationUnit::Century),
];

const DIGIT_NUMBER: &str = r"\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?";

const WORD_NUMBER: &str = concat!(
    r"(?:twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety)",
    r"(?:[-\s](?:one|two|three|four|five|six|seven|eight|nine))?",
    r"|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen",
    r"|one|two|three|four|five|six|seven|eight|nine|ten|a|an",
);

const PLURAL_UNITS: &str = "seconds|minutes|hours|days|weeks|months|years|decades";

/// Alternation over unit surfaces, longest first so "hours" wins over "h".
fn unit_alternation<'a>(units: impl IntoIterator<Item = &'a str>) -> String {
    let mut units: Vec<&str> = units.into_iter().collect();
    units.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    units.dedup();
    units
        .iter()
        .map(|u| regex::escape(u))
        .collect::<Vec<_>>()
        .join("|")
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| EngineError::pattern(name, e))
}

// ── EnglishUnitExtractor ────────────────────────────────────────────────────

/// Finds `<quantity> <unit>` pairs in English text.
#[derive(Debug, Clone)]
pub struct EnglishUnitExtractor {
    pattern: Regex,
}

impl EnglishUnitExtractor {
    /// Build an extractor recognizing the given unit surfaces.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPattern`] if the assembled pattern does
    /// not compile.
    pub fn new<'a>(units: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let pattern = format!(
            r"(?i)\b(?:(?:{DIGIT_NUMBER})\s*-?\s*|(?:{WORD_NUMBER})(?:\s+|-))(?:and\s+a\s+half\s+)?(?:{})\b(?:\s+and\s+a\s+half\b)?",
            unit_alternation(units)
        );
        Ok(EnglishUnitExtractor {
            pattern: compile("number with unit", &pattern)?,
        })
    }
}

impl UnitExtractor for EnglishUnitExtractor {
    fn extract(&self, text: &str) -> Vec<Span> {
        self.pattern
            .find_iter(text)
            .filter_map(|m| Span::from_source(text, m.range(), SpanKind::Duration))
            .collect()
    }
}

// ── EnglishDurationConfiguration ────────────────────────────────────────────

/// English patterns, unit tables and ambiguity rules.
#[derive(Debug, Clone)]
pub struct EnglishDurationConfiguration {
    options: ExtractorOptions,
    unit_extractor: EnglishUnitExtractor,
    year: Regex,
    duration_unit: Regex,
    connector: Regex,
    all: Regex,
    half: Regex,
    relative_unit: Regex,
    more_or_less: Regex,
    some: Regex,
    during: Regex,
    more_than: Regex,
    less_than: Regex,
    inequality_suffix: Regex,
    unit_map: HashMap<String, DurationUnit>,
    unit_values: HashMap<DurationUnit, u64>,
    ambiguity: Vec<AmbiguityRule>,
}

impl EnglishDurationConfiguration {
    /// Compile every English pattern.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPattern`] if a pattern fails to compile.
    pub fn new(options: ExtractorOptions) -> Result<Self> {
        let unit_map: HashMap<String, DurationUnit> = ENGLISH_UNITS
            .iter()
            .map(|&(surface, unit)| (surface.to_string(), unit))
            .collect();
        let units = unit_alternation(ENGLISH_UNITS.iter().map(|&(surface, _)| surface));

        let ambiguity = vec![
            AmbiguityRule::new(r"(?i)\bsecond\b", ["a second", "A second"])?,
            AmbiguityRule::new(r"(?i)\bday\b", ["during the day", "During the day"])?,
        ];

        Ok(EnglishDurationConfiguration {
            options,
            unit_extractor: EnglishUnitExtractor::new(
                ENGLISH_UNITS.iter().map(|&(surface, _)| surface),
            )?,
            year: compile("year", r"(?i)^(?:1\d|20)\d{2}\s*-?\s*(?:year|yr)$")?,
            duration_unit: compile(
                "duration unit",
                &format!(r"(?i)(?:^|[^\p{{L}}])(?P<unit>{units})\b"),
            )?,
            connector: compile("duration connector", r"(?i)^\s*(?:,\s*)?(?:and|or)?\s*$")?,
            all: compile(
                "all",
                r"(?i)\b(?:all|whole|full|entire)(?:\s+the)?(?:\s+|-)(?P<unit>days?|nights?|weeks?|months?|years?|hours?)\b",
            )?,
            half: compile(
                "half",
                r"(?i)\b(?:(?:an?|one)\s+)?half(?:\s+|-)(?:an?\s+)?(?P<unit>second|minute|hour|day|week|month|year|decade|century)\b",
            )?,
            relative_unit: compile(
                "relative duration unit",
                &format!(
                    r"(?i)\b(?:the\s+)?(?:next|last|past|previous|coming|following|upcoming|recent)\s+(?:(?:few|couple(?:\s+of)?|several|many)\s+)?(?P<unit>{PLURAL_UNITS})\b"
                ),
            )?,
            more_or_less: compile(
                "more or less",
                &format!(
                    r"(?i)\b(?:(?:a\s+)?few\s+)?(?:more|less|fewer|extra|additional)\s+(?P<unit>{PLURAL_UNITS})\b"
                ),
            )?,
            some: compile(
                "some",
                &format!(
                    r"(?i)\b(?:some|several|a\s+few|few|(?:a\s+)?couple\s+of|many|numerous)\s+(?P<unit>{PLURAL_UNITS})\b"
                ),
            )?,
            during: compile(
                "during",
                r"(?i)\b(?:during|for|throughout)\s+the\s+(?P<unit>day|night|week|month|year)\b",
            )?,
            more_than: compile(
                "more than",
                r"(?i)\b(?:more\s+than|longer\s+than|over|at\s+least|upwards\s+of|in\s+excess\s+of|not\s+less\s+than|no\s+less\s+than)\s+$",
            )?,
            less_than: compile(
                "less than",
                r"(?i)\b(?:less\s+than|fewer\s+than|shorter\s+than|under|at\s+most|within|up\s+to|not\s+more\s+than|no\s+more\s+than)\s+$",
            )?,
            inequality_suffix: compile(
                "inequality suffix",
                r"(?i)^\s+or\s+(?:(?P<more>more|longer|above)|(?P<less>less|fewer|shorter|under))\b",
            )?,
            unit_map,
            unit_values: default_unit_values(),
            ambiguity,
        })
    }

    /// Add a locale-specific ambiguity rule.
    pub fn with_ambiguity_rule(mut self, rule: AmbiguityRule) -> Self {
        self.ambiguity.push(rule);
        self
    }
}

impl DurationExtractorConfiguration for EnglishDurationConfiguration {
    fn unit_extractor(&self) -> &dyn UnitExtractor {
        &self.unit_extractor
    }

    fn year_regex(&self) -> &Regex {
        &self.year
    }

    fn duration_unit_regex(&self) -> &Regex {
        &self.duration_unit
    }

    fn duration_connector_regex(&self) -> &Regex {
        &self.connector
    }

    fn all_regex(&self) -> &Regex {
        &self.all
    }

    fn half_regex(&self) -> &Regex {
        &self.half
    }

    fn relative_duration_unit_regex(&self) -> &Regex {
        &self.relative_unit
    }

    fn more_or_less_regex(&self) -> &Regex {
        &self.more_or_less
    }

    fn some_regex(&self) -> &Regex {
        &self.some
    }

    fn during_regex(&self) -> &Regex {
        &self.during
    }

    fn unit_map(&self) -> &HashMap<String, DurationUnit> {
        &self.unit_map
    }

    fn unit_value_map(&self) -> &HashMap<DurationUnit, u64> {
        &self.unit_values
    }

    fn ambiguity_filters(&self) -> &[AmbiguityRule] {
        &self.ambiguity
    }

    fn options(&self) -> ExtractorOptions {
        self.options
    }

    fn more_than_regex(&self) -> Option<&Regex> {
        Some(&self.more_than)
    }

    fn less_than_regex(&self) -> Option<&Regex> {
        Some(&self.less_than)
    }

    fn inequality_suffix_regex(&self) -> Option<&Regex> {
        Some(&self.inequality_suffix)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EnglishDurationConfiguration {
        EnglishDurationConfiguration::new(ExtractorOptions::default()).unwrap()
    }

    fn raw_texts(text: &str) -> Vec<String> {
        config()
            .unit_extractor()
            .extract(text)
            .iter()
            .map(|s| s.text().to_string())
            .collect()
    }

    // ── unit extractor ──────────────────────────────────────────────────

    #[test]
    fn test_extract_digit_number_with_unit() {
        assert_eq!(raw_texts("it took 3 days to finish"), vec!["3 days"]);
    }

    #[test]
    fn test_extract_decimal_and_grouped_numbers() {
        assert_eq!(
            raw_texts("about 2.5 hours, or 1,000 years"),
            vec!["2.5 hours", "1,000 years"]
        );
    }

    #[test]
    fn test_extract_article_and_word_numbers() {
        assert_eq!(
            raw_texts("an hour and twenty-five minutes"),
            vec!["an hour", "twenty-five minutes"]
        );
    }

    #[test]
    fn test_extract_and_a_half() {
        assert_eq!(raw_texts("two and a half weeks"), vec!["two and a half weeks"]);
    }

    #[test]
    fn test_extract_trailing_and_a_half() {
        let text = "an hour and a half later";
        let spans = config().unit_extractor().extract(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(), "an hour and a half");
        assert_eq!(spans[0].length(), "an hour and a half".len());
        assert_eq!(raw_texts("3 days and a halfway point"), vec!["3 days"]);
    }

    #[test]
    fn test_extract_compact_forms() {
        assert_eq!(raw_texts("ran 3h then 45min"), vec!["3h", "45min"]);
    }

    #[test]
    fn test_extract_ignores_unit_inside_word() {
        assert!(raw_texts("3 dayshift workers").is_empty());
    }

    #[test]
    fn test_extracted_offsets_are_exact() {
        let text = "wait 10 minutes";
        let spans = config().unit_extractor().extract(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].range()], "10 minutes");
        assert_eq!(spans[0].start(), 5);
    }

    // ── patterns ────────────────────────────────────────────────────────

    #[test]
    fn test_year_regex() {
        let c = config();
        assert!(c.year_regex().is_match("2019 year"));
        assert!(c.year_regex().is_match("1999-year"));
        assert!(!c.year_regex().is_match("2000 years"));
        assert!(!c.year_regex().is_match("3 years"));
    }

    #[test]
    fn test_unit_lookup_through_regex() {
        let c = config();
        assert_eq!(c.unit_in("3 hours"), Some(DurationUnit::Hour));
        assert_eq!(c.unit_in("45min"), Some(DurationUnit::Minute));
        assert_eq!(c.unit_in("all day"), Some(DurationUnit::Day));
        assert_eq!(c.unit_in("half a year"), Some(DurationUnit::Year));
        assert_eq!(c.unit_in("Three Weeks"), Some(DurationUnit::Week));
        assert_eq!(c.unit_in("some time"), None);
    }

    #[test]
    fn test_connector_regex() {
        let c = config();
        let connector = c.duration_connector_regex();
        assert!(connector.is_match(" and "));
        assert!(connector.is_match(" or "));
        assert!(connector.is_match(", "));
        assert!(connector.is_match(", and "));
        assert!(connector.is_match(" "));
        assert!(!connector.is_match(" then "));
        assert!(!connector.is_match(" or more and "));
    }

    #[test]
    fn test_implicit_patterns() {
        let c = config();
        assert!(c.all_regex().is_match("all day"));
        assert!(c.all_regex().is_match("the whole week"));
        assert!(c.half_regex().is_match("half a year"));
        assert!(c.half_regex().is_match("half an hour"));
        assert!(c.relative_duration_unit_regex().is_match("the next few days"));
        assert!(!c.relative_duration_unit_regex().is_match("next week"));
        assert!(c.more_or_less_regex().is_match("more days"));
        assert!(c.some_regex().is_match("a few minutes"));
        assert!(c.during_regex().is_match("during the week"));
    }

    #[test]
    fn test_unit_table_is_consistent() {
        let c = config();
        for (surface, unit) in ENGLISH_UNITS {
            assert_eq!(c.lookup_unit(surface), Some(*unit), "surface {surface}");
            assert!(c.scale_of(*unit).is_some());
        }
    }

    #[test]
    fn test_with_ambiguity_rule_appends() {
        let extra = AmbiguityRule::new(r"\bnight\b", ["all night"]).unwrap();
        let c = config().with_ambiguity_rule(extra);
        assert_eq!(c.ambiguity_filters().len(), 3);
    }
}
