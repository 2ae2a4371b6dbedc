//! Inequality tagging: "more than 3 days", "4 days or more", "within 2 hours".
//!
//! A bound phrase directly before or after a span is absorbed into it and
//! recorded as an [`Inequality`]. The phrase search is confined to the gap
//! between neighbouring spans, so a tagged span never grows into another one.
//! A prefix phrase directly after another span ("5 hours over 2 days") relates
//! the two spans and is not taken as a bound.

use std::ops::Range;

use regex::Regex;

use crate::config::DurationExtractorConfiguration;
use crate::span::{Inequality, Span};

struct BoundPatterns<'a> {
    more_than: Option<&'a Regex>,
    less_than: Option<&'a Regex>,
    suffix: Option<&'a Regex>,
}

/// Absorb bound phrases adjacent to `spans` and tag the results.
///
/// `spans` must be sorted and non-overlapping. Modified (implicit) spans and
/// spans that already carry an inequality are returned unchanged. A locale
/// without bound patterns leaves the list untouched.
pub fn tag_inequality(
    spans: Vec<Span>,
    source: &str,
    config: &dyn DurationExtractorConfiguration,
) -> Vec<Span> {
    let patterns = BoundPatterns {
        more_than: config.more_than_regex(),
        less_than: config.less_than_regex(),
        suffix: config.inequality_suffix_regex(),
    };
    if patterns.more_than.is_none() && patterns.less_than.is_none() && patterns.suffix.is_none() {
        return spans;
    }

    let mut tagged = Vec::with_capacity(spans.len());
    let mut prev_end: Option<usize> = None;
    for (idx, span) in spans.iter().enumerate() {
        let next_start = spans.get(idx + 1).map_or(source.len(), Span::start);
        let result = if span.is_modified() || span.inequality().is_some() {
            None
        } else {
            let gap_before = Gap {
                range: prev_end.map_or(0, |end| end.min(span.start()))..span.start(),
                after_span: prev_end.is_some(),
            };
            let gap_after = span.end()..next_start.max(span.end());
            tag_span(span, source, gap_before, gap_after, &patterns)
        };
        let result = result.unwrap_or_else(|| span.clone());
        prev_end = Some(result.end());
        tagged.push(result);
    }
    tagged
}

/// Text between the previous emitted span (or the start of the source) and
/// the span being tagged.
struct Gap {
    range: Range<usize>,
    after_span: bool,
}

fn tag_span(
    span: &Span,
    source: &str,
    gap_before: Gap,
    gap_after: Range<usize>,
    patterns: &BoundPatterns<'_>,
) -> Option<Span> {
    if let Some(before) = source.get(gap_before.range.clone()) {
        // The earliest-starting phrase wins, so "no more than" beats "more than".
        let prefix = [
            (patterns.less_than, Inequality::LessThan),
            (patterns.more_than, Inequality::MoreThan),
        ]
        .into_iter()
        .filter_map(|(regex, inequality)| Some((regex?.find(before)?, inequality)))
        .min_by_key(|(m, _)| m.start())
        .filter(|(m, _)| {
            !gap_before.after_span
                || before
                    .get(..m.start())
                    .is_some_and(|lead| !lead.trim().is_empty())
        });

        if let Some((m, inequality)) = prefix {
            let start = gap_before.range.start + m.start();
            return span
                .rebased(source, start..span.end())
                .map(|s| s.with_inequality(inequality));
        }
    }

    let after = source.get(gap_after)?;
    let caps = patterns.suffix?.captures(after)?;
    let whole = caps.get(0)?;
    let inequality = if caps.name("more").is_some() {
        Inequality::MoreThan
    } else if caps.name("less").is_some() {
        Inequality::LessThan
    } else {
        return None;
    };
    span.rebased(source, span.start()..span.end() + whole.end())
        .map(|s| s.with_inequality(inequality))
}

// ── Tests ───────────────────────────────────────────────────────────────────
