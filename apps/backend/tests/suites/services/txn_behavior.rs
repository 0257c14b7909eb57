use wordle_backend::db::txn::with_txn;
use wordle_backend::errors::ErrorCode;
use wordle_backend::repos::store::SeaGameStore;
use wordle_backend::services::games::GameService;
use wordle_backend::state::app_state::AppState;
use wordle_backend::{AppError, WordleConfig};

use crate::support::test_state::{build_test_state, fresh_owner};

async fn active_ids(state: &AppState, owner: &str) -> Result<Vec<String>, AppError> {
    let service = GameService::new(state.rules());
    let owner = owner.to_string();
    let games = with_txn(None, state, |txn| {
        Box::pin(async move {
            service
                .list_active_games(&SeaGameStore::new(txn), &owner)
                .await
        })
    })
    .await?;
    Ok(games.ids)
}

#[tokio::test]
async fn ok_body_commits() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let service = GameService::new(state.rules());
    let owner = fresh_owner();

    let o = owner.clone();
    let game_id = with_txn(None, &state, |txn| {
        Box::pin(async move { service.start_game(&SeaGameStore::new(txn), &o).await })
    })
    .await?;

    assert_eq!(active_ids(&state, &owner).await?, vec![game_id]);
    Ok(())
}

#[tokio::test]
async fn failing_body_rolls_back_earlier_writes() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let service = GameService::new(state.rules());
    let owner = fresh_owner();

    let o = owner.clone();
    let result: Result<String, AppError> = with_txn(None, &state, |txn| {
        Box::pin(async move {
            let store = SeaGameStore::new(txn);
            let game_id = service.start_game(&store, &o).await?;
            service.submit_guess(&store, &o, &game_id, "slate").await?;
            // Second insert of the same word fails the whole request
            service.submit_guess(&store, &o, &game_id, "slate").await?;
            Ok(game_id)
        })
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::DuplicateGuess);
    assert!(active_ids(&state, &owner).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_database_is_unavailable() {
    let state = AppState::without_db(WordleConfig::default());

    let err = with_txn(None, &state, |_txn| Box::pin(async move { Ok(()) }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DbUnavailable);
}
