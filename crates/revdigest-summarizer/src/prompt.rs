//! Review cleaning and the bullet-point instruction template.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use revdigest_core::truncate_chars;

/// Texts shorter than this (after pronoun stripping and trimming) are dropped.
pub const MIN_REVIEW_CHARS: usize = 20;

/// Each surviving text is cut to this many characters before prompting.
pub const PROMPT_REVIEW_CHARS: usize = 200;

static PRONOUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:i|my|me|we|our)\b").expect("valid pronoun regex"));

/// Which pole a review group represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTone {
    Positive,
    Negative,
}

impl ReviewTone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for ReviewTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strips first-person pronouns, drops short texts and truncates the rest.
#[must_use]
pub fn clean_review_texts(texts: &[&str]) -> Vec<String> {
    texts
        .iter()
        .filter_map(|text| {
            let stripped = PRONOUN_RE.replace_all(text, "");
            let trimmed = stripped.trim();
            if trimmed.chars().count() < MIN_REVIEW_CHARS {
                return None;
            }
            Some(truncate_chars(trimmed, PROMPT_REVIEW_CHARS).to_owned())
        })
        .collect()
}

/// Renders the instruction prompt for one review group.
///
/// The reviews are embedded as a JSON string array so quoting inside review
/// text cannot break the template.
#[must_use]
pub fn build_prompt(reviews: &[String], tone: ReviewTone) -> String {
    let listing = serde_json::to_string(reviews).unwrap_or_else(|_| "[]".to_owned());
    format!(
        "Analyze the following game reviews and summarize the consistent {tone} points:\n\n\
         {listing}\n\n\
         Rules:\n\
         - List 2-3 consistent {tone} points only\n\
         - Each point must apply to at least 2 of the reviews\n\
         - Maximum 10 words per point\n\
         - No neutral or mixed feedback\n\
         - Do not write \"this review\" or \"one review\"\n\
         - Do not use the word \"subjectively\"\n\
         - Format the answer as bullet points\n\
         - No introductory phrases"
    )
}
