use wordle_backend::adapters::games_sea::{self, GameCreate};
use wordle_backend::adapters::guesses_sea;
use wordle_backend::errors::domain::{ConflictKind, DomainError};
use wordle_backend::repos::guesses;
use wordle_backend::AppError;

use crate::support::test_state::{build_test_state, fresh_owner};

#[tokio::test]
async fn words_come_back_in_submission_order() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let conn = state.db().expect("db");
    games_sea::create_game(conn, GameCreate::new("g-1", &fresh_owner(), "crane")).await?;

    for word in ["trace", "slate", "lemon"] {
        guesses_sea::create_guess(conn, "g-1", word).await?;
    }

    let words = guesses_sea::list_words_for_game(conn, "g-1").await?;
    assert_eq!(words, vec!["trace", "slate", "lemon"]);
    Ok(())
}

#[tokio::test]
async fn guesses_are_scoped_to_their_game() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let conn = state.db().expect("db");
    let owner = fresh_owner();
    games_sea::create_game(conn, GameCreate::new("g-1", &owner, "crane")).await?;
    games_sea::create_game(conn, GameCreate::new("g-2", &owner, "crane")).await?;

    guesses::insert_guess(conn, "g-1", "slate").await?;
    // Same word in another game is fine
    guesses::insert_guess(conn, "g-2", "slate").await?;

    assert_eq!(guesses::list_words(conn, "g-1").await?, vec!["slate"]);
    assert_eq!(guesses::list_words(conn, "g-2").await?, vec!["slate"]);
    Ok(())
}

#[tokio::test]
async fn unique_index_rejects_repeated_word() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let conn = state.db().expect("db");
    games_sea::create_game(conn, GameCreate::new("g-1", &fresh_owner(), "crane")).await?;

    guesses::insert_guess(conn, "g-1", "slate").await?;
    let err = guesses::insert_guess(conn, "g-1", "slate").await.unwrap_err();
    assert!(
        matches!(err, DomainError::Conflict(ConflictKind::DuplicateGuess, _)),
        "got {err:?}"
    );
    assert_eq!(guesses::list_words(conn, "g-1").await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn guess_for_unknown_game_is_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let conn = state.db().expect("db");

    let err = guesses::insert_guess(conn, "missing", "slate").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_, _)), "got {err:?}");
    Ok(())
}
