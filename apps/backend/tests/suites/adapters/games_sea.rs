use wordle_backend::adapters::games_sea::{self, GameCreate, GameUpdate};
use wordle_backend::entities::games::GameStatus;
use wordle_backend::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use wordle_backend::infra::db_errors::map_db_err;
use wordle_backend::repos::games;
use wordle_backend::AppError;

use crate::support::test_state::{build_test_state, fresh_owner};

#[tokio::test]
async fn create_starts_active_at_version_one() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let conn = state.db().expect("db");
    let owner = fresh_owner();

    let game = games_sea::create_game(conn, GameCreate::new("g-1", &owner, "crane")).await?;
    assert_eq!(game.id, "g-1");
    assert_eq!(game.username, owner);
    assert_eq!(game.status, GameStatus::Active);
    assert_eq!(game.lock_version, 1);

    let found = games_sea::find_active_for_owner(conn, &owner, "g-1").await?;
    assert_eq!(found.map(|g| g.secret_word), Some("crane".to_string()));
    Ok(())
}

#[tokio::test]
async fn active_lookup_filters_owner_and_status() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let conn = state.db().expect("db");
    let owner = fresh_owner();

    games_sea::create_game(conn, GameCreate::new("g-won", &owner, "crane")).await?;
    games_sea::update_game(conn, GameUpdate::new("g-won", 1).with_status(GameStatus::Won)).await?;
    games_sea::create_game(conn, GameCreate::new("g-open", &owner, "crane")).await?;

    assert!(games_sea::find_active_for_owner(conn, &owner, "g-won")
        .await?
        .is_none());
    assert!(games_sea::find_active_for_owner(conn, "someone-else", "g-open")
        .await?
        .is_none());

    let ids: Vec<String> = games_sea::list_active_for_owner(conn, &owner)
        .await?
        .into_iter()
        .map(|g| g.id)
        .collect();
    assert_eq!(ids, vec!["g-open".to_string()]);
    Ok(())
}

#[tokio::test]
async fn update_bumps_lock_version() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let conn = state.db().expect("db");

    games_sea::create_game(conn, GameCreate::new("g-1", &fresh_owner(), "crane")).await?;
    let touched = games_sea::update_game(conn, GameUpdate::new("g-1", 1)).await?;
    assert_eq!(touched.lock_version, 2);
    assert_eq!(touched.status, GameStatus::Active);

    let lost =
        games_sea::update_game(conn, GameUpdate::new("g-1", 2).with_status(GameStatus::Lost))
            .await?;
    assert_eq!(lost.lock_version, 3);
    assert_eq!(lost.status, GameStatus::Lost);
    Ok(())
}

#[tokio::test]
async fn stale_version_is_an_optimistic_lock_conflict() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let conn = state.db().expect("db");

    games_sea::create_game(conn, GameCreate::new("g-1", &fresh_owner(), "crane")).await?;
    games::touch_game(conn, "g-1", 1).await?;

    let err = games::set_outcome(conn, "g-1", 1, true).await.unwrap_err();
    match err {
        DomainError::Conflict(ConflictKind::OptimisticLock, detail) => {
            assert!(detail.contains("modified concurrently"), "detail: {detail}");
        }
        other => panic!("expected optimistic lock conflict, got {other:?}"),
    }

    // The stale writer did not change anything
    let game = games_sea::find_by_id(conn, "g-1").await?.expect("game");
    assert_eq!(game.lock_version, 2);
    assert_eq!(game.status, GameStatus::Active);
    Ok(())
}

#[tokio::test]
async fn finished_game_cannot_be_updated_again() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let conn = state.db().expect("db");

    games_sea::create_game(conn, GameCreate::new("g-1", &fresh_owner(), "crane")).await?;
    games::set_outcome(conn, "g-1", 1, true).await?;

    let err = games::touch_game(conn, "g-1", 2).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::OptimisticLock, _)
    ));
    Ok(())
}

#[tokio::test]
async fn update_of_missing_game_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let conn = state.db().expect("db");

    let err = games_sea::update_game(conn, GameUpdate::new("missing", 1))
        .await
        .unwrap_err();
    assert!(matches!(
        map_db_err(err),
        DomainError::NotFound(NotFoundKind::Other(_), _)
    ));
    Ok(())
}

#[tokio::test]
async fn duplicate_game_id_is_reported_as_taken() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let conn = state.db().expect("db");

    games::create_game(conn, "g-1", &fresh_owner(), "crane").await?;
    let err = games::create_game(conn, "g-1", &fresh_owner(), "crane")
        .await
        .unwrap_err();
    assert!(
        matches!(err, DomainError::Conflict(ConflictKind::GameIdTaken, _)),
        "got {err:?}"
    );
    Ok(())
}
