//! Game configuration loaded from the environment.

use std::env;

use crate::config::db::{must_var, DbProfile};
use crate::domain::rules::{GameRules, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH};
use crate::error::AppError;

pub const ENV_WORD_LENGTH: &str = "WORDLE_WORD_LENGTH";
pub const ENV_MAX_ATTEMPTS: &str = "WORDLE_MAX_ATTEMPTS";
pub const ENV_DATABASE_URL: &str = "WORDLE_DATABASE_URL";

/// Settings for the game service.
#[derive(Debug, Clone, PartialEq)]
pub struct WordleConfig {
    pub word_length: usize,
    pub max_attempts: usize,
    pub store_url: String,
}

impl WordleConfig {
    pub fn new(word_length: usize, max_attempts: usize, store_url: impl Into<String>) -> Self {
        Self {
            word_length,
            max_attempts,
            store_url: store_url.into(),
        }
    }

    /// Read `WORDLE_WORD_LENGTH`, `WORDLE_MAX_ATTEMPTS` (both optional) and
    /// `WORDLE_DATABASE_URL` (required).
    pub fn from_env() -> Result<Self, AppError> {
        let word_length = positive_var(ENV_WORD_LENGTH, DEFAULT_WORD_LENGTH)?;
        let max_attempts = positive_var(ENV_MAX_ATTEMPTS, DEFAULT_MAX_ATTEMPTS)?;
        let store_url = must_var(ENV_DATABASE_URL)?;

        Ok(Self {
            word_length,
            max_attempts,
            store_url,
        })
    }

    pub fn rules(&self) -> GameRules {
        GameRules::new(self.word_length, self.max_attempts)
    }

    pub fn db_profile(&self) -> DbProfile {
        DbProfile::Url(self.store_url.clone())
    }
}

impl Default for WordleConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_WORD_LENGTH,
            DEFAULT_MAX_ATTEMPTS,
            crate::config::db::SQLITE_MEMORY_URL,
        )
    }
}

fn positive_var(name: &str, default: usize) -> Result<usize, AppError> {
    let raw = match env::var(name) {
        Ok(raw) => raw,
        Err(_) => return Ok(default),
    };

    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AppError::config(format!(
            "{name} must be a positive integer, got: '{raw}'"
        ))),
    }
}
