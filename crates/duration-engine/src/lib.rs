//! # duration-engine
//!
//! Deterministic extraction of duration expressions from natural-language text.
//!
//! The engine finds spans like "3 days", "all day", "half a year" or "more
//! hours", fuses connected runs ("2 hours and 30 minutes") into a single
//! composite span labelled by granularity, and drops known false positives.
//! Every span carries exact byte offsets into the input, so results can be
//! mapped back onto the source text without re-searching.
//!
//! Turning a span into a structured value (quantity and unit, or an absolute
//! time range) is left to downstream parsers.
//!
//! ## Modules
//!
//! - [`extractor`]: [`DurationExtractor`], the pipeline entry point
//! - [`config`]: Locale capability trait and [`ExtractorOptions`]
//! - [`english`]: Built-in English patterns and number+unit extractor
//! - [`filter`]: Raw number+unit extraction minus year expressions
//! - [`implicit`]: Durations without an explicit quantity
//! - [`consolidate`]: Sort and fuse overlapping spans
//! - [`merge`]: Multi-duration merging and granularity labels
//! - [`ambiguity`]: Locale ambiguity rules
//! - [`inequality`]: "more than" / "or less" bounds
//! - [`span`]: The [`Span`] result type
//! - [`unit`]: [`DurationUnit`] and scale values
//! - [`error`]: Error types

pub mod ambiguity;
pub mod config;
pub mod consolidate;
pub mod english;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod implicit;
pub mod inequality;
pub mod merge;
pub mod span;
pub mod unit;

pub use ambiguity::{filter_ambiguity, AmbiguityRule};
pub use config::{DurationExtractorConfiguration, ExtractorOptions, UnitExtractor};
pub use consolidate::consolidate;
pub use english::{EnglishDurationConfiguration, EnglishUnitExtractor};
pub use error::EngineError;
pub use extractor::DurationExtractor;
pub use filter::extract_raw;
pub use implicit::detect_implicit;
pub use inequality::tag_inequality;
pub use merge::merge_multiple_durations;
pub use span::{Inequality, MultiDurationKind, Span, SpanKind};
pub use unit::DurationUnit;
