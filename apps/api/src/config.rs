use anyhow::{bail, Context, Result};

use crate::matching::similarity::DEFAULT_MATCHED_TERMS;

const DEFAULT_MAX_CANDIDATES: usize = 500;
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Default cap on matched terms per candidate when a request does not set one.
    pub matched_terms_limit: usize,
    /// Largest candidate set accepted in one ranking or screening run.
    pub max_candidates: usize,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            matched_terms_limit: DEFAULT_MATCHED_TERMS,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            matched_terms_limit: parse_env("MATCHED_TERMS_LIMIT", defaults.matched_terms_limit)?,
            max_candidates: parse_env("MAX_CANDIDATES", defaults.max_candidates)?,
            max_body_bytes: parse_env("MAX_BODY_BYTES", defaults.max_body_bytes)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.matched_terms_limit == 0 {
            bail!("MATCHED_TERMS_LIMIT must be at least 1");
        }
        if self.max_candidates == 0 {
            bail!("MAX_CANDIDATES must be at least 1");
        }
        Ok(())
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
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
