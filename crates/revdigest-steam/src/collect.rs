//! Cursor-driven review collection with inline sentiment scoring.

use chrono::DateTime;
use revdigest_core::{truncate_chars, AppId, Review, SentimentScorer};

use crate::error::SteamError;
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::source::ReviewPageSource;
use crate::types::SteamReview;

/// Cursor value that requests the first page.
pub const INITIAL_CURSOR: &str = "*";

/// Stored review text is cut to this many characters.
pub const MAX_REVIEW_CHARS: usize = 300;

/// Hard stop on pages per collection. Only reachable when a high vote
/// threshold filters out nearly every review.
const MAX_PAGES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// Stop once this many reviews have been kept.
    pub target: usize,
    /// Reviews with fewer helpful votes are skipped.
    pub min_votes: u32,
    pub retry: RetryPolicy,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            target: 300,
            min_votes: 0,
            retry: RetryPolicy::default(),
        }
    }
}

/// Pages through an app's recent reviews, scoring each kept review.
///
/// Stops when `options.target` reviews are kept, a page comes back empty, the
/// store stops handing out a new cursor, or `MAX_PAGES` pages have been read.
/// Returns at most `target` reviews in collection order.
///
/// # Errors
///
/// Propagates the page source's error once the retry policy gives up
/// ([`SteamError::RetriesExhausted`] for transient failures). Reviews already
/// collected are discarded in that case.
pub async fn collect_reviews(
    source: &dyn ReviewPageSource,
    scorer: &dyn SentimentScorer,
    app_id: &AppId,
    options: &CollectOptions,
) -> Result<Vec<Review>, SteamError> {
    let mut reviews: Vec<Review> = Vec::new();
    let mut cursor = INITIAL_CURSOR.to_owned();
    let mut page_count = 0usize;

    while reviews.len() < options.target {
        page_count += 1;
        if page_count > MAX_PAGES {
            tracing::warn!(
                app_id = %app_id,
                max_pages = MAX_PAGES,
                collected = reviews.len(),
                "page limit reached before target; returning partial set"
            );
            break;
        }

        let page = retry_with_backoff(&options.retry, || {
            source.fetch_review_page(app_id, &cursor)
        })
        .await?;

        tracing::debug!(
            app_id = %app_id,
            page = page_count,
            returned = page.reviews.len(),
            kept_so_far = reviews.len(),
            "fetched review page"
        );
        if page.reviews.is_empty() {
            break;
        }

        reviews.extend(
            page.reviews
                .into_iter()
                .filter(|raw| raw.votes_up >= options.min_votes)
                .map(|raw| score_review(raw, scorer)),
        );

        match page.cursor.filter(|next| !next.is_empty()) {
            Some(next) if next != cursor => cursor = next,
            _ => break,
        }
    }

    reviews.truncate(options.target);
    tracing::info!(
        app_id = %app_id,
        pages = page_count,
        collected = reviews.len(),
        "review collection finished"
    );
    Ok(reviews)
}

/// Scores the full text, then stores the truncated text.
fn score_review(raw: SteamReview, scorer: &dyn SentimentScorer) -> Review {
    let sentiment = scorer.compound(&raw.review).clamp(-1.0, 1.0);
    Review {
        text: truncate_chars(&raw.review, MAX_REVIEW_CHARS).to_owned(),
        sentiment,
        helpfulness_votes: raw.votes_up,
        recommended: raw.voted_up,
        created_at: DateTime::from_timestamp(raw.timestamp_created, 0).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::types::SteamReviewsResponse;

    /// Scores by text length so tests can tell full and truncated text apart.
    struct LengthScorer;

    impl SentimentScorer for LengthScorer {
        #[allow(clippy::cast_precision_loss)]
        fn compound(&self, text: &str) -> f32 {
            text.chars().count() as f32 / 1000.0
        }
    }

    /// Replays scripted responses and records the cursors it was asked for.
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<SteamReviewsResponse, SteamError>>>,
        cursors: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<SteamReviewsResponse, SteamError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                cursors: Mutex::new(Vec::new()),
            }
        }

        fn cursors(&self) -> Vec<String> {
            self.cursors.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReviewPageSource for ScriptedSource {
        async fn fetch_review_page(
            &self,
            _app_id: &AppId,
            cursor: &str,
        ) -> Result<SteamReviewsResponse, SteamError> {
            self.cursors.lock().unwrap().push(cursor.to_owned());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(SteamReviewsResponse::default()))
        }
    }

    fn raw(text: &str, votes: u32) -> SteamReview {
        SteamReview {
            review: text.to_owned(),
            votes_up: votes,
            voted_up: true,
            timestamp_created: 1_700_000_000,
        }
    }

    fn page(reviews: Vec<SteamReview>, cursor: Option<&str>) -> SteamReviewsResponse {
        SteamReviewsResponse {
            success: Some(1),
            reviews,
            cursor: cursor.map(str::to_owned),
        }
    }

    fn options(target: usize, min_votes: u32) -> CollectOptions {
        CollectOptions {
            target,
            min_votes,
            retry: RetryPolicy::new(2, 0),
        }
    }

    fn app() -> AppId {
        AppId::parse("730").unwrap()
    }

    #[tokio::test]
    async fn empty_first_page_yields_empty_set() {
        let source = ScriptedSource::new(vec![Ok(page(vec![], Some("*")))]);
        let reviews = collect_reviews(&source, &LengthScorer, &app(), &options(300, 0))
            .await
            .unwrap();
        assert!(reviews.is_empty());
        assert_eq!(source.cursors(), vec!["*"]);
    }

    #[tokio::test]
    async fn follows_cursor_until_target_and_truncates() {
        let source = ScriptedSource::new(vec![
            Ok(page(vec![raw("a", 0), raw("b", 0)], Some("c1"))),
            Ok(page(vec![raw("c", 0), raw("d", 0)], Some("c2"))),
            Ok(page(vec![raw("e", 0)], Some("c3"))),
        ]);
        let reviews = collect_reviews(&source, &LengthScorer, &app(), &options(3, 0))
            .await
            .unwrap();
        let texts: Vec<&str> = reviews.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(source.cursors(), vec!["*", "c1"]);
    }

    #[tokio::test]
    async fn stops_when_cursor_missing_or_repeated() {
        let missing = ScriptedSource::new(vec![Ok(page(vec![raw("a", 0)], None))]);
        let reviews = collect_reviews(&missing, &LengthScorer, &app(), &options(10, 0))
            .await
            .unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(missing.cursors().len(), 1);

        let repeated = ScriptedSource::new(vec![
            Ok(page(vec![raw("a", 0)], Some("c1"))),
            Ok(page(vec![raw("b", 0)], Some("c1"))),
        ]);
        let reviews = collect_reviews(&repeated, &LengthScorer, &app(), &options(10, 0))
            .await
            .unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(repeated.cursors(), vec!["*", "c1"]);
    }

    #[tokio::test]
    async fn skips_reviews_below_vote_threshold() {
        let source = ScriptedSource::new(vec![Ok(page(
            vec![raw("low", 1), raw("high", 5), raw("edge", 3)],
            None,
        ))]);
        let reviews = collect_reviews(&source, &LengthScorer, &app(), &options(10, 3))
            .await
            .unwrap();
        let texts: Vec<&str> = reviews.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["high", "edge"]);
    }

    #[tokio::test]
    async fn scores_full_text_and_stores_truncated_text() {
        let long = "x".repeat(450);
        let source = ScriptedSource::new(vec![Ok(page(vec![raw(&long, 7)], None))]);
        let reviews = collect_reviews(&source, &LengthScorer, &app(), &options(10, 0))
            .await
            .unwrap();
        let review = &reviews[0];
        assert_eq!(review.text.chars().count(), MAX_REVIEW_CHARS);
        assert!((review.sentiment - 0.45).abs() < 1e-6);
        assert_eq!(review.helpfulness_votes, 7);
        assert!(review.recommended);
        assert_eq!(review.created_at.timestamp(), 1_700_000_000);
    }

    /// Never ends: every page holds one zero-vote review and a fresh cursor.
    struct EndlessSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ReviewPageSource for EndlessSource {
        async fn fetch_review_page(
            &self,
            _app_id: &AppId,
            _cursor: &str,
        ) -> Result<SteamReviewsResponse, SteamError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(page(vec![raw("meh", 0)], Some(format!("c{n}").as_str())))
        }
    }

    #[tokio::test]
    async fn page_limit_returns_partial_set() {
        let source = EndlessSource {
            calls: AtomicUsize::new(0),
        };
        let reviews = collect_reviews(&source, &LengthScorer, &app(), &options(10, 5))
            .await
            .unwrap();
        assert!(reviews.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), MAX_PAGES);
    }

    #[tokio::test]
    async fn retries_the_same_cursor_after_transient_failure() {
        let source = ScriptedSource::new(vec![
            Ok(page(vec![raw("a", 0)], Some("c1"))),
            Err(SteamError::UnexpectedStatus {
                status: 503,
                url: "http://store.test".to_owned(),
            }),
            Ok(page(vec![raw("b", 0)], None)),
        ]);
        let reviews = collect_reviews(&source, &LengthScorer, &app(), &options(10, 0))
            .await
            .unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(source.cursors(), vec!["*", "c1", "c1"]);
    }

    #[tokio::test]
    async fn surfaces_retries_exhausted() {
        let failures = (0..3)
            .map(|_| {
                Err(SteamError::RateLimited {
                    retry_after_secs: 0,
                })
            })
            .collect();
        let source = ScriptedSource::new(failures);
        let result = collect_reviews(&source, &LengthScorer, &app(), &options(10, 0)).await;
        assert!(matches!(
            result,
            Err(SteamError::RetriesExhausted { attempts: 3, .. })
        ));
    }
}
