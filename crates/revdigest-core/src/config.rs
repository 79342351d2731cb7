use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_STORE_BASE_URL: &str = "https://store.steampowered.com";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let gemini_api_key = require("GEMINI_API_KEY")?;

    let env = parse_environment(&or_default("REVDIGEST_ENV", "development"));
    let bind_addr: SocketAddr = parse_value(
        "REVDIGEST_BIND_ADDR",
        &or_default("REVDIGEST_BIND_ADDR", "127.0.0.1:5000"),
    )?;
    let log_level = or_default("REVDIGEST_LOG_LEVEL", "info");

    let gemini_base_url = or_default("REVDIGEST_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);
    let gemini_model = lookup("REVDIGEST_GEMINI_MODEL")
        .ok()
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    let store_base_url = or_default("REVDIGEST_STORE_BASE_URL", DEFAULT_STORE_BASE_URL);
    let review_language = or_default("REVDIGEST_REVIEW_LANGUAGE", "english");

    let review_target: usize = parse_value(
        "REVDIGEST_REVIEW_TARGET",
        &or_default("REVDIGEST_REVIEW_TARGET", "300"),
    )?;
    let min_votes: u32 = parse_value(
        "REVDIGEST_MIN_VOTES",
        &or_default("REVDIGEST_MIN_VOTES", "0"),
    )?;
    let top_n: usize = parse_value("REVDIGEST_TOP_N", &or_default("REVDIGEST_TOP_N", "3"))?;
    let request_timeout_secs: u64 = parse_value(
        "REVDIGEST_REQUEST_TIMEOUT_SECS",
        &or_default("REVDIGEST_REQUEST_TIMEOUT_SECS", "30"),
    )?;
    let fetch_max_retries: u32 = parse_value(
        "REVDIGEST_FETCH_MAX_RETRIES",
        &or_default("REVDIGEST_FETCH_MAX_RETRIES", "5"),
    )?;
    let fetch_backoff_base_ms: u64 = parse_value(
        "REVDIGEST_FETCH_BACKOFF_BASE_MS",
        &or_default("REVDIGEST_FETCH_BACKOFF_BASE_MS", "1000"),
    )?;

    if review_target == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "REVDIGEST_REVIEW_TARGET".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        gemini_api_key,
        gemini_base_url,
        gemini_model,
        store_base_url,
        review_language,
        review_target,
        min_votes,
        top_n,
        request_timeout_secs,
        fetch_max_retries,
        fetch_backoff_base_ms,
    })
}

fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
