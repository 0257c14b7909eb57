use wordle_backend::adapters::words_sea;
use wordle_backend::config::WordleConfig;
use wordle_backend::repos::words::{self, SeedCounts};
use wordle_backend::AppError;

use crate::support::test_state::{build_empty_state, seed};

#[tokio::test]
async fn seeding_skips_words_already_present() -> Result<(), AppError> {
    let state = build_empty_state(WordleConfig::default()).await?;

    let first = seed(&state, &["crane", "slate"], &["crane", "slate", "trace"]).await?;
    assert_eq!(first, SeedCounts { secrets: 2, valid: 3 });

    let again = seed(&state, &["crane", "pious"], &["trace", "pious"]).await?;
    assert_eq!(again, SeedCounts { secrets: 1, valid: 1 });

    let conn = state.db().expect("db");
    assert_eq!(words_sea::count_secret_words(conn).await?, 3);
    Ok(())
}

#[tokio::test]
async fn secret_words_are_always_valid_guesses() -> Result<(), AppError> {
    let state = build_empty_state(WordleConfig::default()).await?;

    let counts = seed(&state, &["crane"], &["slate"]).await?;
    assert_eq!(counts, SeedCounts { secrets: 1, valid: 2 });

    let conn = state.db().expect("db");
    assert!(words::is_valid_guess_word(conn, "crane").await?);
    assert!(words::is_valid_guess_word(conn, "slate").await?);
    Ok(())
}

#[tokio::test]
async fn dictionary_lookup_is_exact() -> Result<(), AppError> {
    let state = build_empty_state(WordleConfig::default()).await?;
    seed(&state, &[], &["crane"]).await?;
    let conn = state.db().expect("db");

    assert!(words::is_valid_guess_word(conn, "crane").await?);
    assert!(!words::is_valid_guess_word(conn, "cran").await?);
    assert!(!words::is_valid_guess_word(conn, "zzzzz").await?);
    Ok(())
}

#[tokio::test]
async fn random_secret_comes_from_the_pool() -> Result<(), AppError> {
    let state = build_empty_state(WordleConfig::default()).await?;
    let conn = state.db().expect("db");

    assert_eq!(words::pick_random_secret(conn).await?, None);

    let pool = ["crane", "slate", "pious"];
    seed(&state, &pool, &[]).await?;
    for _ in 0..20 {
        let picked = words::pick_random_secret(conn).await?.expect("non-empty pool");
        assert!(pool.contains(&picked.as_str()), "picked {picked}");
    }
    Ok(())
}

#[tokio::test]
async fn offset_lookup_follows_insertion_order() -> Result<(), AppError> {
    let state = build_empty_state(WordleConfig::default()).await?;
    seed(&state, &["crane", "slate"], &[]).await?;
    let conn = state.db().expect("db");

    assert_eq!(words_sea::secret_word_at(conn, 0).await?, Some("crane".into()));
    assert_eq!(words_sea::secret_word_at(conn, 1).await?, Some("slate".into()));
    assert_eq!(words_sea::secret_word_at(conn, 2).await?, None);
    Ok(())
}
