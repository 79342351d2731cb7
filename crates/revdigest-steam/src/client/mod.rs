//! HTTP client for the Steam store search page and review API.

mod reviews;
mod search;

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::SteamError;

pub use search::extract_app_id;

/// Reviews requested per page; the endpoint's maximum.
pub const REVIEWS_PER_PAGE: u32 = 100;

/// The search page serves a stripped-down result list to unknown agents.
pub(super) const BROWSER_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Client for the Steam storefront.
///
/// The origin comes from configuration, so tests point it at a mock server.
/// Requests are not retried here; the
/// collector owns the retry policy.
pub struct SteamClient {
    client: Client,
    base_url: Url,
    language: String,
}

impl SteamClient {
    /// Creates a client with a custom store origin.
    ///
    /// # Errors
    ///
    /// Returns [`SteamError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`SteamError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        language: &str,
    ) -> Result<Self, SteamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(BROWSER_UA)
            .build()?;

        // Exactly one trailing slash so `Url::join` appends instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| SteamError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
            language: language.to_owned(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, SteamError> {
        self.base_url
            .join(path)
            .map_err(|e| SteamError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join \"{path}\": {e}"),
            })
    }
}
