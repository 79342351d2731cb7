//! Prompted summaries with once-per-process model selection.

use std::sync::Arc;

use revdigest_core::{Review, SummaryResult, NO_DATA_SENTINEL, UNAVAILABLE_SENTINEL};
use revdigest_sentiment::select_representative;
use tokio::sync::OnceCell;

use crate::models::{select_model, DEFAULT_MODEL};
use crate::prompt::{build_prompt, clean_review_texts, ReviewTone};
use crate::provider::{ModelCatalog, TextGenerator};

/// Turns groups of review texts into short bullet summaries.
///
/// The model is resolved lazily on first use (or eagerly via
/// [`Summarizer::warm_up`]) and cached for the lifetime of the value. Failures
/// never reach the caller: they are logged and replaced by
/// [`UNAVAILABLE_SENTINEL`].
pub struct Summarizer {
    generator: Arc<dyn TextGenerator>,
    catalog: Option<Arc<dyn ModelCatalog>>,
    model: OnceCell<String>,
}

impl Summarizer {
    /// Discovers the model from `catalog` on first use.
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, catalog: Arc<dyn ModelCatalog>) -> Self {
        Self {
            generator,
            catalog: Some(catalog),
            model: OnceCell::new(),
        }
    }

    /// Uses `model` as-is and never queries the catalog.
    #[must_use]
    pub fn with_fixed_model(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            catalog: None,
            model: OnceCell::new_with(Some(model.into())),
        }
    }

    /// The model every request uses. Resolved at most once.
    pub async fn model(&self) -> &str {
        self.model.get_or_init(|| self.discover_model()).await
    }

    /// Resolves the model ahead of the first request.
    pub async fn warm_up(&self) {
        let model = self.model().await;
        tracing::info!(model, "summarizer model ready");
    }

    async fn discover_model(&self) -> String {
        let Some(catalog) = &self.catalog else {
            return DEFAULT_MODEL.to_owned();
        };
        match catalog.list_models().await {
            Ok(models) => match select_model(&models) {
                Some(best) => {
                    tracing::info!(model = %best.name, listed = models.len(), "selected flash model");
                    best.name.clone()
                }
                None => {
                    tracing::warn!(
                        listed = models.len(),
                        fallback = DEFAULT_MODEL,
                        "no suitable flash model listed; using fallback"
                    );
                    DEFAULT_MODEL.to_owned()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, fallback = DEFAULT_MODEL, "model discovery failed; using fallback");
                DEFAULT_MODEL.to_owned()
            }
        }
    }

    /// Summarizes one group of reviews as 2-3 bullet points.
    ///
    /// Returns [`NO_DATA_SENTINEL`] without calling the service when nothing
    /// survives cleaning, and [`UNAVAILABLE_SENTINEL`] when the call fails.
    pub async fn summarize(&self, texts: &[&str], tone: ReviewTone) -> String {
        let cleaned = clean_review_texts(texts);
        if cleaned.is_empty() {
            tracing::debug!(%tone, input = texts.len(), "nothing to summarize");
            return NO_DATA_SENTINEL.to_owned();
        }

        let prompt = build_prompt(&cleaned, tone);
        let model = self.model().await;
        match self.generator.generate(model, &prompt).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_owned(),
            Ok(_) => {
                tracing::error!(%tone, model, "summary request returned no text");
                UNAVAILABLE_SENTINEL.to_owned()
            }
            Err(e) => {
                tracing::error!(%tone, model, error = %e, "summary request failed");
                UNAVAILABLE_SENTINEL.to_owned()
            }
        }
    }

    /// Selects the most helpful reviews from each pole and summarizes both,
    /// positive first.
    pub async fn summarize_top_reviews(&self, reviews: &[Review], top_n: usize) -> SummaryResult {
        let selection = select_representative(reviews, top_n);
        let positive_summary = self
            .summarize(&selection.positive_texts(), ReviewTone::Positive)
            .await;
        let negative_summary = self
            .summarize(&selection.negative_texts(), ReviewTone::Negative)
            .await;
        SummaryResult {
            positive_summary,
            negative_summary,
        }
    }
}
