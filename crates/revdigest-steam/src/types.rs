//! Response types for the public `appreviews/{id}?json=1` endpoint.
//!
//! ## Observed shape
//!
//! ```json
//! {
//!   "success": 1,
//!   "query_summary": { "num_reviews": 100, ... },
//!   "reviews": [ { "review": "...", "votes_up": 3, "voted_up": true,
//!                  "timestamp_created": 1700000000, ... } ],
//!   "cursor": "AoJwvN..."
//! }
//! ```
//!
//! `reviews` is absent (not empty) on some error responses, e.g. unknown app
//! ids return `{"success": 2}`. At the end of a stream the endpoint keeps
//! returning the cursor it was given together with an empty `reviews` array.
//! Cursors contain `+`, `/` and `=` and must be percent-encoded when sent back.

use serde::Deserialize;

/// One page from `GET /appreviews/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SteamReviewsResponse {
    #[serde(default)]
    pub success: Option<i64>,

    #[serde(default)]
    pub reviews: Vec<SteamReview>,

    /// Continuation token for the next page; `None` at end of stream.
    #[serde(default)]
    pub cursor: Option<String>,
}

/// A single review as returned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct SteamReview {
    /// Review body, untruncated.
    pub review: String,

    /// Number of "helpful" votes.
    #[serde(default)]
    pub votes_up: u32,

    /// `true` when the author recommends the game.
    #[serde(default)]
    pub voted_up: bool,

    /// Unix seconds.
    #[serde(default)]
    pub timestamp_created: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_with_extra_fields() {
        let body = r#"{
            "success": 1,
            "query_summary": {"num_reviews": 1},
            "reviews": [{
                "recommendationid": "1",
                "author": {"steamid": "7656"},
                "review": "Great co-op",
                "votes_up": 12,
                "votes_funny": 0,
                "voted_up": true,
                "timestamp_created": 1700000000
            }],
            "cursor": "AoJ4+x/y="
        }"#;
        let page: SteamReviewsResponse = serde_json::from_str(body).expect("parse");
        assert_eq!(page.reviews.len(), 1);
        assert_eq!(page.reviews[0].votes_up, 12);
        assert!(page.reviews[0].voted_up);
        assert_eq!(page.cursor.as_deref(), Some("AoJ4+x/y="));
    }

    #[test]
    fn missing_reviews_and_cursor_default() {
        let page: SteamReviewsResponse = serde_json::from_str(r#"{"success": 2}"#).expect("parse");
        assert!(page.reviews.is_empty());
        assert!(page.cursor.is_none());
        assert_eq!(page.success, Some(2));
    }
}
