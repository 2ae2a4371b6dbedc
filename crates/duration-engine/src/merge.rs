//! Multi-duration merging.
//!
//! Fuses runs like "2 hours and 30 minutes" or "1 year, 2 months and 3 days"
//! into one composite span and labels it by granularity.
//!
//! # Algorithm
//!
//! A single left-to-right scan over the consolidated spans. The span at `i`
//! anchors a run if it names a known unit. The run then extends over `j` while:
//!
//! - the text between `span[j-1]` and `span[j]` is a connector,
//! - `span[j-1]` is not a modified span (unless it is the anchor itself),
//! - `span[j]` names a known unit whose scale differs from the run's
//!   reference unit.
//!
//! The reference unit is the smallest-scale unit seen so far in the run.
//! A run of more than one span becomes a composite covering
//! `span[i].start .. span[j-1].end`; a run of one is passed through untouched.
//!
//! If two neighbouring spans are out of order or overlap, the input was not
//! consolidated. The whole pass is abandoned and the input returned as-is.

use crate::config::DurationExtractorConfiguration;
use crate::span::{MultiDurationKind, Span};
use crate::unit::DurationUnit;

enum MergeOutcome {
    Merged(Vec<Span>),
    /// `span[index - 1]` ends after `span[index]` starts.
    Aborted { index: usize },
}

/// Fuse connector-joined runs of unit-bearing spans.
///
/// `spans` must be sorted and non-overlapping (the output of
/// [`consolidate`](crate::consolidate::consolidate)). If they are not, the
/// list is returned unchanged.
pub fn merge_multiple_durations(
    spans: Vec<Span>,
    source: &str,
    config: &dyn DurationExtractorConfiguration,
) -> Vec<Span> {
    match scan(&spans, source, config) {
        MergeOutcome::Merged(merged) => merged,
        MergeOutcome::Aborted { index } => {
            tracing::warn!(
                index,
                prev_end = spans[index - 1].end(),
                next_start = spans[index].start(),
                "inverted span offsets, skipping multi-duration merge"
            );
            spans
        }
    }
}

/// The unit named in `span` and its scale, if the locale knows both.
fn known_unit(
    span: &Span,
    config: &dyn DurationExtractorConfiguration,
) -> Option<(DurationUnit, u64)> {
    let unit = config.unit_in(span.text())?;
    Some((unit, config.scale_of(unit)?))
}

fn classify(time_unit_count: usize, total_unit_count: usize) -> MultiDurationKind {
    if time_unit_count == total_unit_count {
        MultiDurationKind::Time
    } else if time_unit_count == 0 {
        MultiDurationKind::Date
    } else {
        MultiDurationKind::DateTime
    }
}

fn scan(
    spans: &[Span],
    source: &str,
    config: &dyn DurationExtractorConfiguration,
) -> MergeOutcome {
    let connector = config.duration_connector_regex();
    let mut merged = Vec::with_capacity(spans.len());

    let mut i = 0;
    while i < spans.len() {
        let Some((anchor_unit, anchor_scale)) = known_unit(&spans[i], config) else {
            merged.push(spans[i].clone());
            i += 1;
            continue;
        };

        let mut current_unit = anchor_unit;
        let mut current_scale = anchor_scale;
        let mut total_unit_count = 1;
        let mut time_unit_count = usize::from(anchor_unit.is_time_unit());

        let mut j = i + 1;
        while j < spans.len() {
            let prev = &spans[j - 1];
            let next = &spans[j];
            if prev.end() > next.start() {
                return MergeOutcome::Aborted { index: j };
            }

            let Some(between) = source.get(prev.end()..next.start()) else {
                break;
            };
            if !connector.is_match(between) {
                break;
            }

            // A modified span ends the run unless it is the anchor.
            if j > i + 1 && prev.is_modified() {
                break;
            }

            let mut valid = false;
            if let Some((unit, scale)) = known_unit(next, config) {
                if scale != current_scale {
                    valid = true;
                    if scale < current_scale {
                        current_unit = unit;
                        current_scale = scale;
                    }
                }
                total_unit_count += 1;
                if unit.is_time_unit() {
                    time_unit_count += 1;
                }
            }
            if !valid {
                break;
            }
            j += 1;
        }

        let last = j - 1;
        if last > i {
            let payload = classify(time_unit_count, total_unit_count);
            let range = spans[i].start()..spans[last].end();
            match Span::from_source(source, range, spans[i].kind()) {
                Some(composite) => {
                    tracing::trace!(
                        text = composite.text(),
                        reference_unit = %current_unit,
                        %payload,
                        "merged duration run"
                    );
                    merged.push(composite.with_payload(payload));
                }
                None => merged.extend_from_slice(&spans[i..j]),
            }
        } else {
            merged.push(spans[i].clone());
        }
        i = j;
    }

    MergeOutcome::Merged(merged)
}

// ── Tests ───────────────────────────────────────────────────────────────────
