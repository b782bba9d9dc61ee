use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_JUDGE_URL: &str = "https://ce.judge0.com";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub judge_url: String,
    pub judge_api_key: Option<String>,
    pub judge_timeout_secs: u64,
    /// Replaces the built-in problem set when present.
    pub catalog_path: Option<PathBuf>,
    /// Empty means permissive CORS.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            judge_url: optional_env("JUDGE_URL")
                .unwrap_or_else(|| DEFAULT_JUDGE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            judge_api_key: optional_env("JUDGE_API_KEY"),
            judge_timeout_secs: optional_env("JUDGE_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("JUDGE_TIMEOUT_SECS must be a whole number of seconds")?
                .unwrap_or(60),
            catalog_path: optional_env("CATALOG_PATH").map(PathBuf::from),
            cors_origins: optional_env("CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
        })
    }
}

/// Treats unset and blank variables the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
