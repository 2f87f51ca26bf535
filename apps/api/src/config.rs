use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::matching::ranker::{RankOptions, DEFAULT_LIMIT, DEFAULT_MIN_PERCENTAGE, MAX_LIMIT};

/// Application configuration loaded from environment variables.
/// Every setting has a default; a present but malformed value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Default number of recommendations returned per request.
    pub match_limit: usize,
    /// Default minimum match percentage for a recommendation.
    pub match_min_percentage: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_limit: env_or("MATCH_LIMIT", DEFAULT_LIMIT)?,
            match_min_percentage: env_or("MATCH_MIN_PERCENTAGE", DEFAULT_MIN_PERCENTAGE)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn rank_defaults(&self) -> RankOptions {
        RankOptions {
            limit: self.match_limit,
            min_percentage: self.match_min_percentage,
        }
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.match_limit <= MAX_LIMIT,
            "MATCH_LIMIT cannot exceed {MAX_LIMIT}, got {}",
            self.match_limit
        );
        ensure!(
            (0.0..=100.0).contains(&self.match_min_percentage),
            "MATCH_MIN_PERCENTAGE must be between 0 and 100, got {}",
            self.match_min_percentage
        );
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            match_limit: DEFAULT_LIMIT,
            match_min_percentage: DEFAULT_MIN_PERCENTAGE,
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_or(key, std::env::var(key).ok(), default)
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {value:?}")),
        _ => Ok(default),
    }
}
