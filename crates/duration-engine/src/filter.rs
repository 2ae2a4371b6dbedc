//! Raw number+unit extraction with year expressions removed.

use crate::config::DurationExtractorConfiguration;
use crate::span::Span;

/// Run the locale's unit extractor and drop spans that are year expressions.
///
/// "2019 year" names a calendar year, not a 2019-year duration. Surviving
/// spans are returned verbatim, in whatever order the extractor produced.
pub fn extract_raw(text: &str, config: &dyn DurationExtractorConfiguration) -> Vec<Span> {
    let year = config.year_regex();
    config
        .unit_extractor()
        .extract(text)
        .into_iter()
        .filter(|span| !year.is_match(span.text()))
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
