//! The duration extraction pipeline.
//!
//! [`DurationExtractor`] wires the stages together:
//!
//! ```text
//! text ─┬─ extract_raw ───────┐
//!       └─ detect_implicit ───┴─ consolidate ─ [merge] ─ [inequality] ─ [ambiguity] ─ spans
//! ```
//!
//! The bracketed stages follow the configuration's [`ExtractorOptions`].
//! Ambiguity filtering runs whenever merging does.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::ambiguity::filter_ambiguity;
use crate::config::{DurationExtractorConfiguration, ExtractorOptions};
use crate::consolidate::consolidate;
use crate::english::EnglishDurationConfiguration;
use crate::error::Result;
use crate::filter::extract_raw;
use crate::implicit::detect_implicit;
use crate::inequality::tag_inequality;
use crate::merge::merge_multiple_durations;
use crate::span::Span;

/// Extracts duration spans from text using a locale configuration.
///
/// Cheap to clone and safe to share across threads; every call to
/// [`extract`](Self::extract) is independent.
#[derive(Clone)]
pub struct DurationExtractor {
    config: Arc<dyn DurationExtractorConfiguration>,
}

impl std::fmt::Debug for DurationExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DurationExtractor")
            .field("options", &self.config.options())
            .finish_non_exhaustive()
    }
}

impl DurationExtractor {
    pub fn new(config: Arc<dyn DurationExtractorConfiguration>) -> Self {
        DurationExtractor { config }
    }

    /// An extractor over the built-in English configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPattern`](crate::EngineError::InvalidPattern)
    /// if an English pattern fails to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use duration_engine::{DurationExtractor, ExtractorOptions, MultiDurationKind};
    ///
    /// let extractor = DurationExtractor::english(ExtractorOptions::default()).unwrap();
    /// let spans = extractor.extract("the call lasted 2 hours and 30 minutes");
    /// assert_eq!(spans.len(), 1);
    /// assert_eq!(spans[0].text(), "2 hours and 30 minutes");
    /// assert_eq!(spans[0].payload(), Some(MultiDurationKind::Time));
    /// ```
    pub fn english(options: ExtractorOptions) -> Result<Self> {
        let config = EnglishDurationConfiguration::new(options)?;
        Ok(DurationExtractor::new(Arc::new(config)))
    }

    pub fn config(&self) -> &dyn DurationExtractorConfiguration {
        self.config.as_ref()
    }

    pub fn options(&self) -> ExtractorOptions {
        self.config.options()
    }

    /// Extract duration spans from `text`, using the current time as reference.
    pub fn extract(&self, text: &str) -> Vec<Span> {
        self.extract_with_reference(text, Utc::now())
    }

    /// Extract duration spans from `text`.
    ///
    /// `reference` is accepted for symmetry with date and time extractors.
    /// Durations do not depend on it, so the result is the same for any
    /// reference time.
    ///
    /// The returned spans are sorted by start offset and never overlap.
    pub fn extract_with_reference(&self, text: &str, _reference: DateTime<Utc>) -> Vec<Span> {
        let config = self.config.as_ref();
        let options = config.options();

        let mut spans = extract_raw(text, config);
        let raw_count = spans.len();
        spans.extend(detect_implicit(text, config));
        let implicit_count = spans.len() - raw_count;

        let mut spans = consolidate(spans, text);
        let consolidated_count = spans.len();

        let mut merged_count = consolidated_count;
        if options.merge_durations {
            spans = merge_multiple_durations(spans, text, config);
            merged_count = spans.len();
        }
        // Bounds are absorbed first so "more than a second" is not judged
        // as the bare "a second".
        if options.tag_inequality {
            spans = tag_inequality(spans, text, config);
        }
        if options.merge_durations {
            spans = filter_ambiguity(spans, config.ambiguity_filters());
        }
        spans.sort_by_key(Span::start);

        tracing::debug!(
            raw = raw_count,
            implicit = implicit_count,
            consolidated = consolidated_count,
            merged = merged_count,
            output = spans.len(),
            "extracted durations"
        );
        spans
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
