use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The prompt was refused before any candidate was produced.
    #[error("prompt blocked: {0}")]
    Blocked(String),

    #[error("empty completion from model {model}")]
    EmptyCompletion { model: String },

    #[error("invalid Gemini base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
