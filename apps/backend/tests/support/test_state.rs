use backend_test_support::unique::unique_owner;
use wordle_backend::config::db::DbProfile;
use wordle_backend::config::WordleConfig;
use wordle_backend::infra::state::build_state;
use wordle_backend::repos::words::{insert_words, SeedCounts};
use wordle_backend::state::app_state::AppState;
use wordle_backend::AppError;

/// Secret pool with a single word so games are deterministic.
pub const SECRET: &str = "crane";

/// Dictionary used by most tests. The secret becomes a valid guess through
/// seeding, not through this list.
pub const VALID: &[&str] = &[
    "slate", "trace", "crate", "react", "caner", "nacre", "sugar", "pious", "lemon",
];

/// SQLite in-memory state, migrated, with no words seeded.
pub async fn build_empty_state(config: WordleConfig) -> Result<AppState, AppError> {
    build_state()
        .with_db(DbProfile::InMemory)
        .with_config(config)
        .build()
        .await
}

/// SQLite in-memory state with `SECRET` as the only secret and `VALID` as
/// the dictionary. Default rules: 5 letters, 6 attempts.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_test_state_with(WordleConfig::default()).await
}

pub async fn build_test_state_with(config: WordleConfig) -> Result<AppState, AppError> {
    let state = build_empty_state(config).await?;
    seed(&state, &[SECRET], VALID).await?;
    Ok(state)
}

/// Insert word lists directly on the state's connection.
pub async fn seed(state: &AppState, secrets: &[&str], valid: &[&str]) -> Result<SeedCounts, AppError> {
    let conn = state
        .db()
        .ok_or_else(|| AppError::config("test state has no database"))?;
    let secrets: Vec<String> = secrets.iter().map(|w| w.to_string()).collect();
    let valid: Vec<String> = valid.iter().map(|w| w.to_string()).collect();
    Ok(insert_words(conn, &secrets, &valid).await?)
}

pub fn fresh_owner() -> String {
    unique_owner()
}
