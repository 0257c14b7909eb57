use actix_web::http::StatusCode;
use wordle_backend::config::WordleConfig;
use wordle_backend::domain::outcome::GuessOutcome;
use wordle_backend::errors::ErrorCode;
use wordle_backend::repos::store::SeaGameStore;
use wordle_backend::services::games::GameService;
use wordle_backend::AppError;

use crate::support::test_state::{build_empty_state, build_test_state, fresh_owner};

#[tokio::test]
async fn soft_rejections_do_not_count() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let store = SeaGameStore::new(state.db().expect("db"));
    let service = GameService::new(state.rules());
    let owner = fresh_owner();
    let game_id = service.start_game(&store, &owner).await?;

    let short = service.submit_guess(&store, &owner, &game_id, "abc").await?;
    assert_eq!(short, GuessOutcome::InvalidLength { word_length: 5 });
    assert!(!short.counted());

    let unknown = service.submit_guess(&store, &owner, &game_id, "zzzzz").await?;
    assert_eq!(
        unknown,
        GuessOutcome::InvalidWord {
            word: "zzzzz".to_string()
        }
    );

    let snapshot = service.get_status(&store, &owner, &game_id).await?;
    assert_eq!(snapshot.num_guesses, 0);
    Ok(())
}

#[tokio::test]
async fn repeated_word_is_a_conflict() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let store = SeaGameStore::new(state.db().expect("db"));
    let service = GameService::new(state.rules());
    let owner = fresh_owner();
    let game_id = service.start_game(&store, &owner).await?;

    service.submit_guess(&store, &owner, &game_id, "slate").await?;
    let err = service
        .submit_guess(&store, &owner, &game_id, "slate")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DuplicateGuess);
    assert_eq!(err.status(), StatusCode::CONFLICT);

    let snapshot = service.get_status(&store, &owner, &game_id).await?;
    assert_eq!(snapshot.num_guesses, 1);
    Ok(())
}

#[tokio::test]
async fn other_owner_cannot_see_or_play_a_game() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let store = SeaGameStore::new(state.db().expect("db"));
    let service = GameService::new(state.rules());
    let owner = fresh_owner();
    let intruder = fresh_owner();
    let game_id = service.start_game(&store, &owner).await?;

    let err = service
        .get_status(&store, &intruder, &game_id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);

    let err = service
        .submit_guess(&store, &intruder, &game_id, "slate")
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    // The owner's game is untouched
    assert_eq!(service.get_status(&store, &owner, &game_id).await?.num_guesses, 0);
    Ok(())
}

#[tokio::test]
async fn unknown_game_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let store = SeaGameStore::new(state.db().expect("db"));
    let service = GameService::new(state.rules());

    let err = service
        .get_status(&store, &fresh_owner(), "no-such-game")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);
    Ok(())
}

#[tokio::test]
async fn start_without_secret_words_is_an_internal_error() -> Result<(), AppError> {
    let state = build_empty_state(WordleConfig::default()).await?;
    let store = SeaGameStore::new(state.db().expect("db"));
    let service = GameService::new(state.rules());

    let err = service.start_game(&store, &fresh_owner()).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
