//! App id lookup through the store search page.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;
use revdigest_core::AppId;

use crate::error::SteamError;

use super::SteamClient;

static APP_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-ds-appid="(\d+)""#).expect("valid app id regex"));

/// Returns the first `data-ds-appid` value in a search results page.
///
/// Bundle rows carry comma-separated ids and are skipped.
#[must_use]
pub fn extract_app_id(html: &str) -> Option<AppId> {
    APP_ID_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .and_then(|m| AppId::parse(m.as_str()))
}

impl SteamClient {
    pub(super) fn search_url(&self, term: &str) -> Result<Url, SteamError> {
        let mut url = self.endpoint("search/")?;
        url.query_pairs_mut().append_pair("term", term);
        Ok(url)
    }

    /// Searches the store for `game_name` and returns the top hit's app id.
    ///
    /// `Ok(None)` means the search succeeded but matched nothing.
    ///
    /// # Errors
    ///
    /// - [`SteamError::Http`] on network failure.
    /// - [`SteamError::UnexpectedStatus`] on a non-2xx response.
    pub async fn search_app_id(&self, game_name: &str) -> Result<Option<AppId>, SteamError> {
        let url = self.search_url(game_name)?;
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "text/html,*/*;q=0.8")
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SteamError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(extract_app_id(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_app_id() {
        let html = r#"<a href="/app/730/" data-ds-appid="730" data-ds-itemkey="App_730">
                      <a href="/app/10/" data-ds-appid="10">"#;
        assert_eq!(extract_app_id(html).unwrap().as_str(), "730");
    }

    #[test]
    fn skips_bundle_rows() {
        let html = r#"<a data-ds-appid="1,2,3"></a><a data-ds-appid="322330"></a>"#;
        assert_eq!(extract_app_id(html).unwrap().as_str(), "322330");
    }

    #[test]
    fn returns_none_without_match() {
        assert!(extract_app_id("<html><body>No results</body></html>").is_none());
        assert!(extract_app_id("").is_none());
    }
}
