//! Extraction results.
//!
//! A [`Span`] is an offset-addressed region of the source text. Spans are only
//! ever built from the source string itself, so `text` always equals
//! `source[start..start + length]`. Later stages never edit a span; they build
//! a new one.
//!
//! Offsets are byte offsets into the UTF-8 source and always fall on char
//! boundaries. Use [`Span::char_range`] when character offsets are needed.

use std::fmt;
use std::ops::Range;

use serde::{Serialize, Serializer};

/// Which extractor produced a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum SpanKind {
    Duration,
}

/// Granularity of a composite span built by the multi-duration merger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiDurationKind {
    /// Every merged unit was day-sized or larger.
    Date,
    /// Every merged unit was sub-day.
    Time,
    /// Mixed granularity.
    DateTime,
}

impl MultiDurationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MultiDurationKind::Date => "MultipleDuration-Date",
            MultiDurationKind::Time => "MultipleDuration-Time",
            MultiDurationKind::DateTime => "MultipleDuration-DateTime",
        }
    }
}

impl fmt::Display for MultiDurationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MultiDurationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A lower or upper bound attached to a duration ("more than 3 days").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Inequality {
    MoreThan,
    LessThan,
}

/// A recognized region of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    start: usize,
    length: usize,
    text: String,
    kind: SpanKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<MultiDurationKind>,
    modified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    inequality: Option<Inequality>,
}

impl Span {
    /// Build a span covering `source[range]`.
    ///
    /// Returns `None` if the range is reversed, out of bounds, or splits a
    /// UTF-8 character.
    pub fn from_source(source: &str, range: Range<usize>, kind: SpanKind) -> Option<Span> {
        let text = source.get(range.clone())?;
        Some(Span {
            start: range.start,
            length: range.end - range.start,
            text: text.to_string(),
            kind,
            payload: None,
            modified: false,
            inequality: None,
        })
    }

    /// Same span with the composite granularity set.
    pub fn with_payload(self, payload: MultiDurationKind) -> Span {
        Span {
            payload: Some(payload),
            ..self
        }
    }

    /// Same span with the modifier flag set to `modified`.
    pub fn with_modified(self, modified: bool) -> Span {
        Span { modified, ..self }
    }

    /// Same span with an inequality bound.
    pub fn with_inequality(self, inequality: Inequality) -> Span {
        Span {
            inequality: Some(inequality),
            ..self
        }
    }

    /// Rebuild this span over a different range of the same source, keeping
    /// every tag.
    pub(crate) fn rebased(&self, source: &str, range: Range<usize>) -> Option<Span> {
        let text = source.get(range.clone())?;
        Some(Span {
            start: range.start,
            length: range.end - range.start,
            text: text.to_string(),
            ..self.clone()
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn payload(&self) -> Option<MultiDurationKind> {
        self.payload
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn inequality(&self) -> Option<Inequality> {
        self.inequality
    }

    /// Whether the half-open ranges of `self` and `other` intersect.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Character offsets of this span within `source`.
    ///
    /// `source` must be the text the span was extracted from.
    pub fn char_range(&self, source: &str) -> Range<usize> {
        let start = source[..self.start].chars().count();
        start..start + self.text.chars().count()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
