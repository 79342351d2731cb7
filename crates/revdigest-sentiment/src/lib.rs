//! Sentiment scoring and review selection for revdigest.
//!
//! Scores review text with a gaming-domain lexicon into a compound score in
//! `[-1.0, 1.0]`, and picks the most helpful strongly-positive and
//! strongly-negative reviews for summarization.

mod lexicon;
pub mod scorer;
pub mod select;

pub use scorer::{polarity_scores, LexiconScorer, PolarityScores};
pub use select::{select_representative, Selection, DEFAULT_TOP_N};
