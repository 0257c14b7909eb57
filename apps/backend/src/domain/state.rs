//! Game state machine.
//!
//! ```text
//! ACTIVE --(guess == secret)------------------> WON   (terminal)
//! ACTIVE --(attempts == max, no match)--------> LOST  (terminal)
//! ACTIVE --(no match, attempts remain)--------> ACTIVE
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::compare::is_win;
use crate::domain::rules::GameRules;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, ValidationKind};

/// Lifecycle status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// One game hydrated from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret_word: String,
    status: GameStatus,
    guesses: Vec<String>,
    rules: GameRules,
}

impl GameState {
    /// A fresh game: active, no guesses.
    pub fn new(secret_word: impl Into<String>, rules: GameRules) -> Self {
        Self {
            secret_word: secret_word.into(),
            status: GameStatus::Active,
            guesses: Vec::new(),
            rules,
        }
    }

    /// Rebuild a game from persisted parts, checking the stored data still
    /// satisfies the attempt-limit invariant.
    pub fn hydrate(
        secret_word: impl Into<String>,
        status: GameStatus,
        guesses: Vec<String>,
        rules: GameRules,
    ) -> Result<Self, DomainError> {
        if guesses.len() > rules.max_attempts {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!(
                    "game has {} guesses but only {} attempts are allowed",
                    guesses.len(),
                    rules.max_attempts
                ),
            ));
        }

        Ok(Self {
            secret_word: secret_word.into(),
            status,
            guesses,
            rules,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }

    pub fn remaining_attempts(&self) -> usize {
        self.rules.remaining_attempts(self.attempts())
    }

    pub fn has_guessed(&self, word: &str) -> bool {
        self.guesses.iter().any(|g| g == word)
    }

    /// Record a counted attempt and advance the state machine.
    ///
    /// Dictionary membership is the caller's concern; by the time a word
    /// reaches here it is a valid guess.
    pub fn apply_guess(&mut self, word: &str) -> Result<GameStatus, DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::validation(
                ValidationKind::GameOver,
                "Game is already finished",
            ));
        }
        if !self.rules.has_valid_length(word) {
            return Err(DomainError::validation(
                ValidationKind::InvalidGuessLength,
                format!("Guess must be {} letters", self.rules.word_length),
            ));
        }
        if self.has_guessed(word) {
            return Err(DomainError::conflict(
                ConflictKind::DuplicateGuess,
                format!("{word} was already guessed in this game"),
            ));
        }
        if self.attempts() >= self.rules.max_attempts {
            return Err(DomainError::validation(
                ValidationKind::GameOver,
                "No attempts left",
            ));
        }

        self.guesses.push(word.to_string());

        if is_win(word, &self.secret_word) {
            self.status = GameStatus::Won;
        } else if self.attempts() == self.rules.max_attempts {
            self.status = GameStatus::Lost;
        }

        Ok(self.status)
    }

    /// Feedback history for every guess so far.
    pub fn snapshot(&self) -> GameSnapshot {
        snapshot(&self.guesses, &self.secret_word, self.rules.max_attempts)
    }
}
