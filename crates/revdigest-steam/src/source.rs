//! Narrow capability traits over the store, so the pipeline can run against
//! deterministic fakes.

use async_trait::async_trait;
use revdigest_core::AppId;

use crate::client::SteamClient;
use crate::error::SteamError;
use crate::types::SteamReviewsResponse;

/// Maps a free-text game name to a store app id.
#[async_trait]
pub trait AppIdResolver: Send + Sync {
    /// Returns `None` when nothing matched or the lookup failed.
    async fn resolve_app_id(&self, game_name: &str) -> Option<AppId>;
}

/// Serves one page of reviews for an app.
#[async_trait]
pub trait ReviewPageSource: Send + Sync {
    /// # Errors
    ///
    /// Returns [`SteamError`] when the page could not be fetched or parsed.
    async fn fetch_review_page(
        &self,
        app_id: &AppId,
        cursor: &str,
    ) -> Result<SteamReviewsResponse, SteamError>;
}

#[async_trait]
impl AppIdResolver for SteamClient {
    async fn resolve_app_id(&self, game_name: &str) -> Option<AppId> {
        match self.search_app_id(game_name).await {
            Ok(Some(app_id)) => {
                tracing::info!(game = game_name, app_id = %app_id, "resolved app id");
                Some(app_id)
            }
            Ok(None) => {
                tracing::info!(game = game_name, "no store search match");
                None
            }
            Err(e) => {
                tracing::warn!(game = game_name, error = %e, "store search failed");
                None
            }
        }
    }
}

#[async_trait]
impl ReviewPageSource for SteamClient {
    async fn fetch_review_page(
        &self,
        app_id: &AppId,
        cursor: &str,
    ) -> Result<SteamReviewsResponse, SteamError> {
        self.fetch_reviews_page(app_id, cursor).await
    }
}
