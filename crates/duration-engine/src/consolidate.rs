//! Span consolidation: sort and fuse overlapping spans.

use crate::span::Span;

/// Merge `spans` into a sorted list with no overlapping members.
///
/// Overlapping spans become one span covering their union, rebuilt from
/// `source`. The earliest-starting contributor (longest on ties) supplies the
/// kind, payload and inequality; the result is modified if any contributor
/// was. Spans that only touch are left separate.
///
/// Running this on its own output returns the same list.
pub fn consolidate(mut spans: Vec<Span>, source: &str) -> Vec<Span> {
    spans.sort_by(|a, b| {
        a.start()
            .cmp(&b.start())
            .then_with(|| b.length().cmp(&a.length()))
    });

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        let overlaps_last = merged
            .last()
            .is_some_and(|last| span.start() < last.end());
        if !overlaps_last {
            merged.push(span);
            continue;
        }
        let Some(last) = merged.last_mut() else {
            continue;
        };

        let end = last.end().max(span.end());
        let modified = last.is_modified() || span.is_modified();
        let mut union = match last.rebased(source, last.start()..end) {
            Some(union) => union.with_modified(modified),
            None => continue,
        };
        if union.inequality().is_none() {
            if let Some(inequality) = span.inequality() {
                union = union.with_inequality(inequality);
            }
        }
        *last = union;
    }
    merged
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::{MultiDurationKind, SpanKind};

    fn span(source: &str, start: usize, end: usize) -> Span {
        Span::from_source(source, start..end, SpanKind::Duration).unwrap()
    }

    #[test]
    fn test_sorts_by_start() {
        let source = "3 days and 4 hours";
        let spans = vec![span(source, 11, 18), span(source, 0, 6)];
        let out = consolidate(spans, source);
        assert_eq!(out[0].text(), "3 days");
        assert_eq!(out[1].text(), "4 hours");
    }

    #[test]
    fn test_overlap_becomes_union() {
        let source = "over the past few days";
        let relative = span(source, 5, 22).with_modified(true); // "the past few days"
        let some = span(source, 14, 22).with_modified(true); // "few days"
        let out = consolidate(vec![some, relative], source);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text(), "the past few days");
        assert!(out[0].is_modified());
    }

    #[test]
    fn test_partial_overlap_extends_end() {
        let source = "two and a half hours";
        let a = span(source, 0, 14); // "two and a half"
        let b = span(source, 8, 20).with_modified(true); // "a half hours"
        let out = consolidate(vec![a, b], source);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text(), source);
        assert!(out[0].is_modified(), "modifier flag is carried by the union");
    }

    #[test]
    fn test_earliest_span_keeps_payload() {
        let source = "2 hours and 30 minutes";
        let composite = span(source, 0, 22).with_payload(MultiDurationKind::Time);
        let inner = span(source, 12, 22);
        let out = consolidate(vec![inner, composite], source);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].payload(), Some(MultiDurationKind::Time));
    }

    #[test]
    fn test_contained_modified_span_marks_union() {
        let source = "4 days or more";
        let outer = span(source, 0, 14);
        let inner = span(source, 2, 14).with_modified(true);
        let out = consolidate(vec![outer, inner], source);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text(), source);
        assert!(out[0].is_modified());
    }

    #[test]
    fn test_touching_spans_stay_separate() {
        let source = "abcdef";
        let out = consolidate(vec![span(source, 0, 3), span(source, 3, 6)], source);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let source = "over the past few days and 3 hours, all day";
        let spans = vec![
            span(source, 14, 22),
            span(source, 5, 22),
            span(source, 27, 34),
            span(source, 36, 43),
            span(source, 27, 28),
        ];
        let once = consolidate(spans, source);
        let twice = consolidate(once.clone(), source);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(consolidate(Vec::new(), "").is_empty());
    }
}
