//! Single-page fetches from the `appreviews` endpoint.

use reqwest::Url;
use revdigest_core::AppId;

use crate::error::SteamError;
use crate::types::SteamReviewsResponse;

use super::{SteamClient, REVIEWS_PER_PAGE};

impl SteamClient {
    pub(super) fn reviews_url(&self, app_id: &AppId, cursor: &str) -> Result<Url, SteamError> {
        let mut url = self.endpoint(&format!("appreviews/{app_id}"))?;
        url.query_pairs_mut()
            .append_pair("json", "1")
            .append_pair("filter", "recent")
            .append_pair("num_per_page", &REVIEWS_PER_PAGE.to_string())
            .append_pair("language", &self.language)
            .append_pair("cursor", cursor);
        Ok(url)
    }

    /// Fetches one page of recent reviews starting at `cursor` (`"*"` for the
    /// first page).
    ///
    /// # Errors
    ///
    /// - [`SteamError::RateLimited`] on HTTP 429.
    /// - [`SteamError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`SteamError::Http`] on network or TLS failure.
    /// - [`SteamError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_reviews_page(
        &self,
        app_id: &AppId,
        cursor: &str,
    ) -> Result<SteamReviewsResponse, SteamError> {
        let url = self.reviews_url(app_id, cursor)?;
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(SteamError::RateLimited { retry_after_secs });
        }

        if !status.is_success() {
            return Err(SteamError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let page = serde_json::from_str::<SteamReviewsResponse>(&body).map_err(|e| {
            SteamError::Deserialize {
                context: format!("reviews page for app {app_id}"),
                source: e,
            }
        })?;

        tracing::debug!(
            app_id = %app_id,
            cursor,
            count = page.reviews.len(),
            "fetched reviews page"
        );

        Ok(page)
    }
}
