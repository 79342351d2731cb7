//! Review records and summary results shared across the pipeline.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Returned instead of a summary when no review qualified for a group.
pub const NO_DATA_SENTINEL: &str = "No data to summarize.";

/// Returned instead of a summary when the generative service failed.
pub const UNAVAILABLE_SENTINEL: &str = "Summary unavailable.";

/// Storefront-issued numeric identifier of a game (e.g. `"730"`).
///
/// Always non-empty and made of ASCII digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Validates `raw` as an app id. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One collected user review. Never mutated after collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Review body, truncated to the collector's character limit.
    pub text: String,
    /// Compound sentiment score in `[-1.0, 1.0]`.
    pub sentiment: f32,
    /// "Helpful" votes the review received.
    pub helpfulness_votes: u32,
    /// Whether the author recommended the game.
    pub recommended: bool,
    pub created_at: DateTime<Utc>,
}

/// Positive and negative summaries for one game.
///
/// Each field holds either bullet text or one of [`NO_DATA_SENTINEL`] /
/// [`UNAVAILABLE_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub positive_summary: String,
    pub negative_summary: String,
}

impl SummaryResult {
    /// Applies `f` to both summaries.
    #[must_use]
    pub fn map(self, f: impl Fn(&str) -> String) -> Self {
        Self {
            positive_summary: f(&self.positive_summary),
            negative_summary: f(&self.negative_summary),
        }
    }
}

/// Truncates `text` to at most `max_chars` characters, never splitting a
/// multi-byte character.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
