use std::sync::Arc;

use revdigest_core::{AppConfig, SentimentScorer, SummaryResult};
use revdigest_sentiment::LexiconScorer;
use revdigest_steam::{
    collect_reviews, AppIdResolver, CollectOptions, RetryPolicy, ReviewPageSource, SteamClient,
};
use revdigest_summarizer::{GeminiClient, Summarizer};

use crate::error::PipelineError;

/// One configured digest run per game name.
///
/// Collaborators are held behind capability traits; [`ReviewPipeline::from_config`]
/// wires the production Steam and Gemini clients.
pub struct ReviewPipeline {
    resolver: Arc<dyn AppIdResolver>,
    source: Arc<dyn ReviewPageSource>,
    scorer: Arc<dyn SentimentScorer>,
    summarizer: Arc<Summarizer>,
    options: CollectOptions,
    top_n: usize,
}

impl ReviewPipeline {
    #[must_use]
    pub fn new(
        resolver: Arc<dyn AppIdResolver>,
        source: Arc<dyn ReviewPageSource>,
        scorer: Arc<dyn SentimentScorer>,
        summarizer: Arc<Summarizer>,
    ) -> Self {
        Self {
            resolver,
            source,
            scorer,
            summarizer,
            options: CollectOptions::default(),
            top_n: revdigest_sentiment::DEFAULT_TOP_N,
        }
    }

    /// Builds the production pipeline: one Steam client serving both search
    /// and review pages, the lexicon scorer, and a Gemini-backed summarizer.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::StoreClient`] or [`PipelineError::GeminiClient`]
    /// if either HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let steam = Arc::new(
            SteamClient::with_base_url(
                &config.store_base_url,
                config.request_timeout_secs,
                &config.review_language,
            )
            .map_err(PipelineError::StoreClient)?,
        );
        let gemini = Arc::new(GeminiClient::with_base_url(
            &config.gemini_api_key,
            &config.gemini_base_url,
            config.request_timeout_secs,
        )?);

        let summarizer = match &config.gemini_model {
            Some(model) => Summarizer::with_fixed_model(gemini, model.clone()),
            None => Summarizer::new(gemini.clone(), gemini),
        };

        Ok(Self::new(
            steam.clone(),
            steam,
            Arc::new(LexiconScorer),
            Arc::new(summarizer),
        )
        .with_collect_options(CollectOptions {
            target: config.review_target,
            min_votes: config.min_votes,
            retry: RetryPolicy::new(config.fetch_max_retries, config.fetch_backoff_base_ms),
        })
        .with_top_n(config.top_n))
    }

    #[must_use]
    pub fn with_collect_options(mut self, options: CollectOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    #[must_use]
    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    #[must_use]
    pub fn collect_options(&self) -> &CollectOptions {
        &self.options
    }

    /// Runs the full digest and returns the raw (unformatted) summaries.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::EmptyGameName`] for a blank name
    /// - [`PipelineError::NotFound`] when the name does not resolve
    /// - [`PipelineError::Collection`] when review pages keep failing
    pub async fn run(&self, game_name: &str) -> Result<SummaryResult, PipelineError> {
        let game_name = game_name.trim();
        if game_name.is_empty() {
            return Err(PipelineError::EmptyGameName);
        }

        let app_id = self
            .resolver
            .resolve_app_id(game_name)
            .await
            .ok_or_else(|| PipelineError::NotFound(game_name.to_owned()))?;

        let reviews = collect_reviews(
            self.source.as_ref(),
            self.scorer.as_ref(),
            &app_id,
            &self.options,
        )
        .await?;

        tracing::info!(
            game = game_name,
            app_id = %app_id,
            reviews = reviews.len(),
            "summarizing collected reviews"
        );
        Ok(self
            .summarizer
            .summarize_top_reviews(&reviews, self.top_n)
            .await)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use revdigest_core::{AppId, NO_DATA_SENTINEL, UNAVAILABLE_SENTINEL};
    use revdigest_steam::{SteamError, SteamReview, SteamReviewsResponse};
    use revdigest_summarizer::{SummarizerError, TextGenerator};

    use super::*;

    struct FixedResolver(Option<&'static str>);

    #[async_trait]
    impl AppIdResolver for FixedResolver {
        async fn resolve_app_id(&self, _game_name: &str) -> Option<AppId> {
            self.0.and_then(AppId::parse)
        }
    }

    /// Serves one page of reviews, or fails every call.
    struct OnePageSource {
        reviews: Option<Vec<(&'static str, u32)>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ReviewPageSource for OnePageSource {
        async fn fetch_review_page(
            &self,
            _app_id: &AppId,
            _cursor: &str,
        ) -> Result<SteamReviewsResponse, SteamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let Some(reviews) = &self.reviews else {
                return Err(SteamError::UnexpectedStatus {
                    status: 503,
                    url: "http://store.test/appreviews".to_owned(),
                });
            };
            Ok(SteamReviewsResponse {
                success: Some(1),
                reviews: reviews
                    .iter()
                    .map(|(text, votes)| SteamReview {
                        review: (*text).to_owned(),
                        votes_up: *votes,
                        voted_up: true,
                        timestamp_created: 1_700_000_000,
                    })
                    .collect(),
                cursor: None,
            })
        }
    }

    /// Scores by keyword so tests control which pole a review lands in.
    struct KeywordScorer;

    impl SentimentScorer for KeywordScorer {
        fn compound(&self, text: &str) -> f32 {
            if text.contains("love") {
                0.9
            } else if text.contains("hate") {
                -0.9
            } else {
                0.0
            }
        }
    }

    struct EchoGenerator {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, _model: &str, prompt: &str) -> Result<String, SummarizerError> {
            self.prompts.lock().unwrap().push(prompt.to_owned());
            if prompt.contains("positive") {
                Ok("* Players enjoy it".to_owned())
            } else {
                Err(SummarizerError::EmptyCompletion {
                    model: "m".to_owned(),
                })
            }
        }
    }

    fn pipeline(
        app: Option<&'static str>,
        reviews: Option<Vec<(&'static str, u32)>>,
    ) -> (ReviewPipeline, Arc<OnePageSource>, Arc<EchoGenerator>) {
        let source = Arc::new(OnePageSource {
            reviews,
            calls: AtomicUsize::new(0),
        });
        let generator = Arc::new(EchoGenerator {
            prompts: Mutex::new(Vec::new()),
        });
        let summarizer = Summarizer::with_fixed_model(generator.clone(), "models/test");
        let pipeline = ReviewPipeline::new(
            Arc::new(FixedResolver(app)),
            source.clone(),
            Arc::new(KeywordScorer),
            Arc::new(summarizer),
        )
        .with_collect_options(CollectOptions {
            target: 10,
            min_votes: 0,
            retry: RetryPolicy::new(1, 0),
        });
        (pipeline, source, generator)
    }

    #[tokio::test]
    async fn produces_both_summaries() {
        let (pipeline, _, generator) = pipeline(
            Some("730"),
            Some(vec![
                ("I love the gunplay and the map design here", 5),
                ("We hate the matchmaking and the cheaters", 9),
                ("Average shooter with some fun moments", 50),
            ]),
        );
        let result = pipeline.run("  Counter-Strike  ").await.unwrap();
        assert_eq!(result.positive_summary, "* Players enjoy it");
        assert_eq!(result.negative_summary, UNAVAILABLE_SENTINEL);
        assert_eq!(generator.prompts.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn no_reviews_yields_no_data_sentinels() {
        let (pipeline, _, generator) = pipeline(Some("730"), Some(vec![]));
        let result = pipeline.run("Counter-Strike").await.unwrap();
        assert_eq!(result.positive_summary, NO_DATA_SENTINEL);
        assert_eq!(result.negative_summary, NO_DATA_SENTINEL);
        assert!(generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unresolved_name_is_not_found() {
        let (pipeline, source, _) = pipeline(None, Some(vec![]));
        let err = pipeline.run("zzzz").await.unwrap_err();
        assert!(matches!(err, PipelineError::NotFound(name) if name == "zzzz"));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_lookup() {
        let (pipeline, source, _) = pipeline(Some("730"), Some(vec![]));
        assert!(matches!(
            pipeline.run("   ").await,
            Err(PipelineError::EmptyGameName)
        ));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn collection_failure_surfaces_after_retries() {
        let (pipeline, source, _) = pipeline(Some("730"), None);
        let err = pipeline.run("Counter-Strike").await.unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Collection(SteamError::RetriesExhausted { attempts: 2, .. })
        ));
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }
}
