//! Implicit durations: phrases that denote a duration without an explicit
//! quantity ("all day", "half a year", "more days").

use regex::Regex;

use crate::config::DurationExtractorConfiguration;
use crate::span::{Span, SpanKind};

/// Emit one modified [`SpanKind::Duration`] span per phrase-pattern match.
///
/// Each matcher runs independently over the whole text, so two matchers may
/// report overlapping spans; consolidation resolves that later. The "during"
/// matcher only runs in calendar mode.
pub fn detect_implicit(text: &str, config: &dyn DurationExtractorConfiguration) -> Vec<Span> {
    let mut matchers: Vec<&Regex> = vec![
        config.all_regex(),
        config.half_regex(),
        config.relative_duration_unit_regex(),
        config.more_or_less_regex(),
        config.some_regex(),
    ];
    if config.options().calendar_mode {
        matchers.push(config.during_regex());
    }

    matchers
        .into_iter()
        .flat_map(|regex| regex.find_iter(text))
        .filter_map(|m| Span::from_source(text, m.range(), SpanKind::Duration))
        .map(|span| span.with_modified(true))
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractorOptions;
    use crate::english::EnglishDurationConfiguration;

    fn detect(text: &str, calendar_mode: bool) -> Vec<Span> {
        let config = EnglishDurationConfiguration::new(ExtractorOptions {
            calendar_mode,
            ..Default::default()
        })
        .unwrap();
        detect_implicit(text, &config)
    }

    #[test]
    fn test_each_form_yields_modified_span() {
        for phrase in [
            "all day",
            "half a year",
            "the coming weeks",
            "more days",
            "some weeks",
        ] {
            let text = format!("we spent {phrase} there");
            let spans = detect(&text, false);
            assert_eq!(spans.len(), 1, "phrase {phrase:?} gave {spans:?}");
            assert_eq!(spans[0].text(), phrase);
            assert!(spans[0].is_modified());
            assert_eq!(spans[0].kind(), SpanKind::Duration);
            assert_eq!(&text[spans[0].range()], phrase);
        }
    }

    #[test]
    fn test_during_requires_calendar_mode() {
        let text = "closed during the week";
        assert!(detect(text, false).is_empty());
        let spans = detect(text, true);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(), "during the week");
    }

    #[test]
    fn test_overlapping_matchers_all_emitted() {
        // relative ("the past few days") and some ("few days") both fire.
        let spans = detect("over the past few days", false);
        let texts: Vec<&str> = spans.iter().map(Span::text).collect();
        assert!(texts.contains(&"the past few days"), "got {texts:?}");
        assert!(texts.contains(&"few days"), "got {texts:?}");
    }

    #[test]
    fn test_multiple_matches_of_one_pattern() {
        let spans = detect("all day today and all night tomorrow", false);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text(), "all day");
        assert_eq!(spans[1].text(), "all night");
    }

    #[test]
    fn test_plain_number_unit_not_implicit() {
        assert!(detect("it took 3 days", false).is_empty());
    }
}
