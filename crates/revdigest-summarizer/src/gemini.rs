//! HTTP client for the Gemini generative-language REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};

use crate::error::SummarizerError;
use crate::models::ModelInfo;
use crate::provider::{ModelCatalog, TextGenerator};

const API_KEY_HEADER: &str = "x-goog-api-key";

const MODELS_PAGE_SIZE: u32 = 1000;

/// Stop following `nextPageToken` after this many catalog pages.
const MAX_CATALOG_PAGES: usize = 20;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
    next_page_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Client for model listing and `generateContent`.
pub struct GeminiClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl GeminiClient {
    /// Creates a client for the configured API base.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`SummarizerError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self, SummarizerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("revdigest/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| SummarizerError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
            api_key: api_key.to_owned(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, SummarizerError> {
        self.base_url
            .join(path)
            .map_err(|e| SummarizerError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join \"{path}\": {e}"),
            })
    }

    /// `models/<id>:generateContent`. Bare ids get the `models/` prefix so the
    /// colon is never read as a URL scheme.
    fn generate_url(&self, model: &str) -> Result<Url, SummarizerError> {
        let resource = if model.starts_with("models/") {
            model.to_owned()
        } else {
            format!("models/{model}")
        };
        self.endpoint(&format!("{resource}:generateContent"))
    }

    /// Fetches the full model catalog, following pagination.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError`] on transport failures, non-2xx responses or
    /// an unparseable page.
    pub async fn fetch_models(&self) -> Result<Vec<ModelInfo>, SummarizerError> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        for _ in 0..MAX_CATALOG_PAGES {
            let mut url = self.endpoint("models")?;
            url.query_pairs_mut()
                .append_pair("pageSize", &MODELS_PAGE_SIZE.to_string());
            if let Some(token) = &page_token {
                url.query_pairs_mut().append_pair("pageToken", token);
            }

            let response = self
                .client
                .get(url)
                .header(API_KEY_HEADER, &self.api_key)
                .send()
                .await?;
            let body = checked_body(response).await?;
            let page: ListModelsResponse =
                serde_json::from_str(&body).map_err(|source| SummarizerError::Deserialize {
                    context: "models listing".to_owned(),
                    source,
                })?;

            models.extend(page.models);
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(next) => page_token = Some(next),
                None => return Ok(models),
            }
        }

        tracing::warn!(
            max_pages = MAX_CATALOG_PAGES,
            models = models.len(),
            "model catalog still paginating; using what was fetched"
        );
        Ok(models)
    }

    /// Sends one prompt and returns the concatenated, trimmed candidate text.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::Blocked`] when the prompt is refused,
    /// [`SummarizerError::EmptyCompletion`] when no text comes back, and
    /// transport or API errors otherwise.
    pub async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<String, SummarizerError> {
        let url = self.generate_url(model)?;
        let request = GenerateRequest {
            contents: [Content {
                parts: [TextPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;
        let body = checked_body(response).await?;
        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|source| SummarizerError::Deserialize {
                context: format!("generateContent response from {model}"),
                source,
            })?;

        if parsed.candidates.is_empty() {
            if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(SummarizerError::Blocked(reason));
            }
        }

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SummarizerError::EmptyCompletion {
                model: model.to_owned(),
            });
        }
        Ok(trimmed.to_owned())
    }
}

/// Returns the body of a 2xx response, or an [`SummarizerError::Api`] carrying
/// the service's error message.
async fn checked_body(response: Response) -> Result<String, SummarizerError> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        return Ok(body);
    }

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_owned))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_owned());
    Err(SummarizerError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ModelCatalog for GeminiClient {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, SummarizerError> {
        self.fetch_models().await
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, SummarizerError> {
        self.generate_content(model, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn client(base_url: &str) -> GeminiClient {
        GeminiClient::with_base_url("test-key", base_url, 30).expect("client")
    }

    #[test]
    fn generate_url_keeps_version_path() {
        let c = client("https://generativelanguage.googleapis.com/v1beta");
        assert_eq!(
            c.generate_url("models/gemini-2.5-flash").unwrap().as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn generate_url_prefixes_bare_model_id() {
        let c = client("http://127.0.0.1:9999/v1beta/");
        assert_eq!(
            c.generate_url("gemini-1.5-flash").unwrap().as_str(),
            "http://127.0.0.1:9999/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_shape() {
        let request = GenerateRequest {
            contents: [Content {
                parts: [TextPart { text: "hello" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = GeminiClient::with_base_url("k", "::nope::", 30);
        assert!(matches!(result, Err(SummarizerError::InvalidBaseUrl { .. })));
    }
}
