//! Picks the most helpful strongly-positive and strongly-negative reviews.

use revdigest_core::Review;

pub const DEFAULT_TOP_N: usize = 3;

/// Reviews must score strictly above this to count as positive.
pub const POSITIVE_THRESHOLD: f32 = 0.5;

/// Reviews must score strictly below this to count as negative.
pub const NEGATIVE_THRESHOLD: f32 = -0.5;

/// The reviews chosen for summarization, most helpful first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection<'a> {
    pub positive: Vec<&'a Review>,
    pub negative: Vec<&'a Review>,
}

impl Selection<'_> {
    #[must_use]
    pub fn positive_texts(&self) -> Vec<&str> {
        self.positive.iter().map(|r| r.text.as_str()).collect()
    }

    #[must_use]
    pub fn negative_texts(&self) -> Vec<&str> {
        self.negative.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Ranks `reviews` by helpfulness votes and takes up to `top_n` from each pole.
///
/// Sorting is stable, so reviews with equal votes keep collection order. Both
/// subsets are filtered independently from the same ranking; reviews scoring
/// within `[-0.5, 0.5]` appear in neither.
#[must_use]
pub fn select_representative(reviews: &[Review], top_n: usize) -> Selection<'_> {
    let mut ranked: Vec<&Review> = reviews.iter().collect();
    ranked.sort_by(|a, b| b.helpfulness_votes.cmp(&a.helpfulness_votes));

    let positive: Vec<&Review> = ranked
        .iter()
        .copied()
        .filter(|r| r.sentiment > POSITIVE_THRESHOLD)
        .take(top_n)
        .collect();
    let negative: Vec<&Review> = ranked
        .iter()
        .copied()
        .filter(|r| r.sentiment < NEGATIVE_THRESHOLD)
        .take(top_n)
        .collect();

    tracing::debug!(
        total = reviews.len(),
        positive = positive.len(),
        negative = negative.len(),
        "selected representative reviews"
    );

    Selection { positive, negative }
}
