//! Persistence seam for the game service.
//!
//! `GameService` only talks to a `GameStore`. `SeaGameStore` implements it on
//! top of a borrowed SeaORM connection, normally the per-request transaction
//! opened by `with_txn`, so every call of one request shares that transaction.

use async_trait::async_trait;
use sea_orm::ConnectionTrait;

use crate::errors::domain::DomainError;
use crate::repos::games::{self, GameRecord};
use crate::repos::{guesses, words};

#[async_trait]
pub trait GameStore: Send + Sync {
    /// Uniform pick from the secret word pool; `None` when the pool is empty.
    async fn pick_random_secret(&self) -> Result<Option<String>, DomainError>;

    /// Fails with `Conflict(GameIdTaken)` on id collision.
    async fn create_game(&self, id: &str, owner: &str, secret: &str)
        -> Result<GameRecord, DomainError>;

    /// Game `id` if it exists, is owned by `owner` and is ACTIVE.
    async fn find_active_game(&self, owner: &str, id: &str)
        -> Result<Option<GameRecord>, DomainError>;

    async fn list_active_games(&self, owner: &str) -> Result<Vec<String>, DomainError>;

    /// Fails with `Conflict(DuplicateGuess)` when the word was already guessed.
    async fn insert_guess(&self, game_id: &str, word: &str) -> Result<(), DomainError>;

    /// Secret word plus guessed words in submission order.
    async fn load_secret_and_guesses(
        &self,
        game_id: &str,
    ) -> Result<(String, Vec<String>), DomainError>;

    /// Mark WON (`won = true`) or LOST. Fails with `Conflict(OptimisticLock)`
    /// if the game moved past `expected_version`.
    async fn set_outcome(
        &self,
        game_id: &str,
        expected_version: i32,
        won: bool,
    ) -> Result<(), DomainError>;

    /// Version bump for a guess that leaves the game in progress.
    async fn touch_game(&self, game_id: &str, expected_version: i32) -> Result<(), DomainError>;

    async fn is_valid_guess_word(&self, word: &str) -> Result<bool, DomainError>;
}

/// SeaORM-backed store over any connection or transaction.
pub struct SeaGameStore<'c, C> {
    conn: &'c C,
}

impl<'c, C> SeaGameStore<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C> GameStore for SeaGameStore<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn pick_random_secret(&self) -> Result<Option<String>, DomainError> {
        words::pick_random_secret(self.conn).await
    }

    async fn create_game(
        &self,
        id: &str,
        owner: &str,
        secret: &str,
    ) -> Result<GameRecord, DomainError> {
        games::create_game(self.conn, id, owner, secret).await
    }

    async fn find_active_game(
        &self,
        owner: &str,
        id: &str,
    ) -> Result<Option<GameRecord>, DomainError> {
        games::find_active_game(self.conn, owner, id).await
    }

    async fn list_active_games(&self, owner: &str) -> Result<Vec<String>, DomainError> {
        games::list_active_game_ids(self.conn, owner).await
    }

    async fn insert_guess(&self, game_id: &str, word: &str) -> Result<(), DomainError> {
        guesses::insert_guess(self.conn, game_id, word).await
    }

    async fn load_secret_and_guesses(
        &self,
        game_id: &str,
    ) -> Result<(String, Vec<String>), DomainError> {
        let secret = games::require_secret_word(self.conn, game_id).await?;
        let guessed = guesses::list_words(self.conn, game_id).await?;
        Ok((secret, guessed))
    }

    async fn set_outcome(
        &self,
        game_id: &str,
        expected_version: i32,
        won: bool,
    ) -> Result<(), DomainError> {
        games::set_outcome(self.conn, game_id, expected_version, won).await?;
        Ok(())
    }

    async fn touch_game(&self, game_id: &str, expected_version: i32) -> Result<(), DomainError> {
        games::touch_game(self.conn, game_id, expected_version).await?;
        Ok(())
    }

    async fn is_valid_guess_word(&self, word: &str) -> Result<bool, DomainError> {
        words::is_valid_guess_word(self.conn, word).await
    }
}
