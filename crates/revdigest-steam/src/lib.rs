//! Steam storefront access for revdigest.
//!
//! Resolves free-text game names to app ids through the store search page and
//! collects scored reviews from the public `appreviews` endpoint.

pub mod client;
pub mod collect;
pub mod error;
pub mod retry;
pub mod source;
pub mod types;

pub use client::{extract_app_id, SteamClient};
pub use collect::{collect_reviews, CollectOptions, INITIAL_CURSOR, MAX_REVIEW_CHARS};
pub use error::SteamError;
pub use retry::RetryPolicy;
pub use source::{AppIdResolver, ReviewPageSource};
pub use types::{SteamReview, SteamReviewsResponse};
