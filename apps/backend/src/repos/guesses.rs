//! Guess repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::guesses_sea as guesses_adapter;
use crate::errors::domain::DomainError;

/// Record a guess. A word already guessed in this game surfaces as
/// `Conflict(DuplicateGuess)` from the unique index.
pub async fn insert_guess<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    word: &str,
) -> Result<(), DomainError> {
    guesses_adapter::create_guess(conn, game_id, word).await?;
    Ok(())
}

/// Guessed words in submission order.
pub async fn list_words<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<String>, DomainError> {
    Ok(guesses_adapter::list_words_for_game(conn, game_id).await?)
}
