use anyhow::{Context, Result};

const DEFAULT_REPRESENT_API_URL: &str = "https://represent.opennorth.ca";

/// Application configuration loaded from environment variables.
/// Nothing is strictly required: a missing `ANTHROPIC_API_KEY` leaves
/// enhancement unconfigured rather than failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub represent_api_url: String,
    pub anthropic_api_key: Option<String>,
    pub static_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            represent_api_url: optional_env("REPRESENT_API_URL")
                .unwrap_or_else(|| DEFAULT_REPRESENT_API_URL.to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            static_dir: optional_env("STATIC_DIR").unwrap_or_else(|| "public".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an environment variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
