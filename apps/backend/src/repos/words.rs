//! Word list repository functions.

use rand::Rng;
use sea_orm::ConnectionTrait;

use crate::adapters::words_sea as words_adapter;
use crate::errors::domain::DomainError;

/// Uniformly random secret word, `None` when the pool is empty.
pub async fn pick_random_secret<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<String>, DomainError> {
    let count = words_adapter::count_secret_words(conn).await?;
    if count == 0 {
        return Ok(None);
    }

    let offset = rand::rng().random_range(0..count);
    Ok(words_adapter::secret_word_at(conn, offset).await?)
}

pub async fn is_valid_guess_word<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    word: &str,
) -> Result<bool, DomainError> {
    Ok(words_adapter::valid_word_exists(conn, word).await?)
}

/// Counts of newly stored words per list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedCounts {
    pub secrets: u64,
    pub valid: u64,
}

/// Store both word lists, skipping words already present.
///
/// Secret words are also stored as valid guesses, so every game stays
/// winnable whatever the dictionary holds.
pub async fn insert_words<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    secrets: &[String],
    valid: &[String],
) -> Result<SeedCounts, DomainError> {
    let secret_count = words_adapter::insert_secret_words(conn, secrets).await?;
    let valid_count = words_adapter::insert_valid_words(conn, secrets).await?
        + words_adapter::insert_valid_words(conn, valid).await?;
    Ok(SeedCounts {
        secrets: secret_count,
        valid: valid_count,
    })
}
