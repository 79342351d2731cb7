//! Review summarization through the Gemini generative-language API.
//!
//! Builds a tightly constrained bullet-point prompt per review group, picks
//! the newest suitable flash model once per process, and degrades every
//! service failure to a sentinel string instead of an error.

pub mod error;
pub mod format;
pub mod gemini;
pub mod models;
pub mod prompt;
pub mod provider;
pub mod summarizer;

pub use error::SummarizerError;
pub use format::format_bullet_points;
pub use gemini::GeminiClient;
pub use models::{select_model, ModelInfo, DEFAULT_MODEL};
pub use prompt::{build_prompt, clean_review_texts, ReviewTone};
pub use provider::{ModelCatalog, TextGenerator};
pub use summarizer::Summarizer;
