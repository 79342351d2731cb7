use revdigest_steam::SteamError;
use revdigest_summarizer::SummarizerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("game name is empty")]
    EmptyGameName,

    /// The store search found no app for the name, or the search failed.
    #[error("no store app found for \"{0}\"")]
    NotFound(String),

    /// Review collection failed, typically after exhausting retries.
    #[error("review collection failed: {0}")]
    Collection(#[from] SteamError),

    #[error("failed to build store client: {0}")]
    StoreClient(#[source] SteamError),

    #[error("failed to build Gemini client: {0}")]
    GeminiClient(#[from] SummarizerError),
}
