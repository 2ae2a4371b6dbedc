//! Ambiguity filtering.
//!
//! Some surface forms look like durations but usually are not ("a second
//! opinion", "during the day" as time-of-day). Each [`AmbiguityRule`] pairs a
//! trigger pattern with the exact span texts to drop when it fires.

use std::collections::HashSet;

use regex::Regex;

use crate::error::{EngineError, Result};
use crate::span::Span;

/// A trigger pattern and the span texts it forbids.
#[derive(Debug, Clone)]
pub struct AmbiguityRule {
    trigger: Regex,
    forbidden: HashSet<String>,
}

impl AmbiguityRule {
    /// Compile `trigger` and collect the forbidden surface strings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPattern`] if `trigger` does not compile.
    pub fn new<I, S>(trigger: &str, forbidden: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let trigger =
            Regex::new(trigger).map_err(|e| EngineError::pattern("ambiguity trigger", e))?;
        Ok(AmbiguityRule {
            trigger,
            forbidden: forbidden.into_iter().map(Into::into).collect(),
        })
    }

    pub fn trigger(&self) -> &Regex {
        &self.trigger
    }

    /// Whether this rule rejects `text`.
    pub fn rejects(&self, text: &str) -> bool {
        self.trigger.is_match(text) && self.forbidden.contains(text)
    }
}

/// Drop every span whose text is forbidden by a matching rule.
///
/// Spans are removed whole; the survivors keep their offsets and order.
pub fn filter_ambiguity(spans: Vec<Span>, rules: &[AmbiguityRule]) -> Vec<Span> {
    if rules.is_empty() {
        return spans;
    }
    spans
        .into_iter()
        .filter(|span| {
            let rejected = rules.iter().any(|rule| rule.rejects(span.text()));
            if rejected {
                tracing::debug!(
                    text = span.text(),
                    start = span.start(),
                    "dropping ambiguous span"
                );
            }
            !rejected
        })
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
