//! Runtime configuration from the environment.

use std::path::PathBuf;
use thiserror::Error;
use vocab_core::DEFAULT_QUESTION_COUNT;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub question_count: usize,
    /// Fixed seed for question generation; entropy when unset.
    pub seed: Option<u64>,
    pub log_filter: String,
}

impl Config {
    /// Load from process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("VOCAB_DB_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        let question_count = match lookup("VOCAB_QUESTION_COUNT") {
            Some(raw) => parse_count(&raw)?,
            None => DEFAULT_QUESTION_COUNT,
        };

        let seed = lookup("VOCAB_SEED")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                    key: "VOCAB_SEED",
                    value: raw.clone(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            db_path,
            question_count,
            seed,
            log_filter,
        })
    }
}

fn parse_count(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key: "VOCAB_QUESTION_COUNT",
        value: raw.to_string(),
        reason,
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be at least 1".to_string())),
        Ok(count) => Ok(count),
        Err(e) => Err(invalid(e.to_string())),
    }
}

/// Database location under the user's local data directory.
pub fn default_db_path() -> PathBuf {
    // Fall back to the working directory when no data dir is known
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-flashcards")
        .join("vocab.db")
}
