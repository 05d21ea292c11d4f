use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Application configuration loaded from environment variables.
/// Every value has a default; startup fails only on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub environment: Environment,
    pub cors_origins: Vec<String>,
    pub max_upload_bytes: usize,
    /// Directory where uploaded resumes are staged while they are parsed.
    pub upload_dir: PathBuf,
    pub chatbot_reply_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let environment = match std::env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Config {
            port: parse_env("PORT", 5000u16).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            environment,
            cors_origins,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| std::env::temp_dir()),
            chatbot_reply_delay: Duration::from_millis(
                parse_env("CHATBOT_REPLY_DELAY_MS", 500u64)
                    .context("CHATBOT_REPLY_DELAY_MS must be a number of milliseconds")?,
            ),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            rust_log: "info".to_string(),
            environment: Environment::Development,
            cors_origins: vec!["http://localhost:3000".to_string()],
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            upload_dir: std::env::temp_dir(),
            chatbot_reply_delay: Duration::from_millis(500),
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_upload_limit_is_five_megabytes() {
        assert_eq!(Config::default().max_upload_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let port: u16 = parse_env("JOBTREND_TEST_UNSET_PORT", 4242).unwrap();
        assert_eq!(port, 4242);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("JOBTREND_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = parse_env("JOBTREND_TEST_BAD_PORT", 1);
        assert!(result.is_err());
    }
}
