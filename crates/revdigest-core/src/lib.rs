//! Shared domain types and configuration for revdigest.

pub mod app_config;
pub mod config;
pub mod review;
pub mod scoring;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use review::{
    truncate_chars, AppId, Review, SummaryResult, NO_DATA_SENTINEL, UNAVAILABLE_SENTINEL,
};
pub use scoring::SentimentScorer;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
