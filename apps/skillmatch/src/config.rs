use std::path::PathBuf;

use crate::errors::AppError;
use crate::tagger::{Strategy, DEFAULT_MIN_TOKEN_CHARS};

/// Application configuration loaded from environment variables.
/// Every variable is optional; CLI flags override what is read here.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON role catalog; the built-in table is used when unset.
    pub roles_path: Option<PathBuf>,
    pub strategy: Strategy,
    pub min_token_chars: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roles_path: None,
            strategy: Strategy::default(),
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strategy = match lookup("SKILLMATCH_STRATEGY") {
            Some(raw) => raw.parse::<Strategy>().map_err(|e| {
                AppError::Config(format!("SKILLMATCH_STRATEGY is invalid: {e}"))
            })?,
            None => Strategy::default(),
        };

        let min_token_chars = match lookup("SKILLMATCH_MIN_TOKEN_CHARS") {
            Some(raw) => parse_min_chars("SKILLMATCH_MIN_TOKEN_CHARS", &raw)?,
            None => DEFAULT_MIN_TOKEN_CHARS,
        };

        Ok(Config {
            roles_path: lookup("SKILLMATCH_ROLES_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            strategy,
            min_token_chars,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Applies command-line flags on top of the environment values.
    pub fn with_overrides(
        mut self,
        roles_path: Option<PathBuf>,
        strategy: Option<Strategy>,
        min_token_chars: Option<usize>,
    ) -> Result<Self, AppError> {
        if let Some(path) = roles_path {
            self.roles_path = Some(path);
        }
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        if let Some(min) = min_token_chars {
            self.min_token_chars = check_min_chars("--min-token-chars", min)?;
        }
        Ok(self)
    }
}

fn parse_min_chars(key: &str, raw: &str) -> Result<usize, AppError> {
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| AppError::Config(format!("{key} must be a positive integer")))?;
    check_min_chars(key, value)
}

fn check_min_chars(key: &str, value: usize) -> Result<usize, AppError> {
    if value < 1 {
        return Err(AppError::Config(format!("{key} must be at least 1")));
    }
    Ok(value)
}
