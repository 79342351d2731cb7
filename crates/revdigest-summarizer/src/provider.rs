//! Capability traits over the generative-text service.

use async_trait::async_trait;

use crate::error::SummarizerError;
use crate::models::ModelInfo;

/// Lists the models the service offers.
#[async_trait]
pub trait ModelCatalog: Send + Sync {
    /// # Errors
    ///
    /// Returns [`SummarizerError`] if the catalog cannot be fetched.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, SummarizerError>;
}

/// Single-shot prompt completion.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the model's text reply to `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError`] on transport, API or empty-reply failures.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, SummarizerError>;
}
