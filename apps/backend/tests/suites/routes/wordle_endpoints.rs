use actix_web::test;
use serde_json::Value;
use wordle_backend::config::WordleConfig;
use wordle_backend::AppError;

use crate::common::{assert_error, read_json};
use crate::support::app_builder::create_test_app;
use crate::support::http::{games_req, guess_req, start_game, status_req};
use crate::support::test_state::{build_test_state, build_test_state_with, fresh_owner};

#[actix_web::test]
async fn full_game_over_http() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let user = fresh_owner();

    let game_id = start_game(&app, &user).await;

    let resp = test::call_service(&app, games_req(&user)).await;
    assert_eq!(resp.status(), 200);
    let listed = read_json(resp).await;
    assert_eq!(listed, serde_json::json!([{ "gameid": game_id }]));

    let resp = test::call_service(&app, guess_req(&user, &game_id, "slate")).await;
    assert_eq!(resp.status(), 200);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Try again! You have 5 more attempts left.");
    assert_eq!(body["guesses"]["num_guesses"], 1);
    assert_eq!(body["guesses"]["max_attempts"], 6);
    assert_eq!(body["guesses"]["guesses"][0]["guess"], "slate");
    assert_eq!(
        body["guesses"]["guesses"][0]["correct_letters"],
        serde_json::json!(["a", "e"])
    );
    assert_eq!(
        body["guesses"]["guesses"][0]["correct_indices"],
        serde_json::json!([2, 4])
    );

    let resp = test::call_service(&app, status_req(&user, &game_id)).await;
    assert_eq!(resp.status(), 200);
    let status = read_json(resp).await;
    assert_eq!(status, body["guesses"]);
    assert!(status.get("secret_word").is_none());

    let resp = test::call_service(&app, guess_req(&user, &game_id, "crane")).await;
    assert_eq!(resp.status(), 200);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Correct! The answer was crane.");
    assert!(body.get("guesses").is_none());

    let resp = test::call_service(&app, status_req(&user, &game_id)).await;
    assert_error(resp, 404, "GAME_NOT_FOUND").await;

    let resp = test::call_service(&app, games_req(&user)).await;
    assert_eq!(resp.status(), 404);
    let body = read_json(resp).await;
    assert_eq!(
        body["message"],
        Value::String(format!("No active games found for user, {user}."))
    );
    Ok(())
}

#[actix_web::test]
async fn losing_game_reveals_secret() -> Result<(), AppError> {
    let state = build_test_state_with(WordleConfig::new(5, 2, "sqlite::memory:")).await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let user = fresh_owner();
    let game_id = start_game(&app, &user).await;

    let resp = test::call_service(&app, guess_req(&user, &game_id, "slate")).await;
    assert_eq!(read_json(resp).await["message"], "Try again! You have 1 more attempts left.");

    let resp = test::call_service(&app, guess_req(&user, &game_id, "trace")).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        read_json(resp).await["message"],
        "You have lost! You have made 2 incorrect attempts. The secret word was crane."
    );

    let resp = test::call_service(&app, guess_req(&user, &game_id, "crane")).await;
    assert_error(resp, 404, "GAME_NOT_FOUND").await;
    Ok(())
}

#[actix_web::test]
async fn soft_rejections_are_200_and_do_not_count() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let user = fresh_owner();
    let game_id = start_game(&app, &user).await;

    let resp = test::call_service(&app, guess_req(&user, &game_id, "toolong")).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        read_json(resp).await["message"],
        "Not a valid guess! Please only guess 5-letter words. This attempt does not count."
    );

    let resp = test::call_service(&app, guess_req(&user, &game_id, "qwxyz")).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        read_json(resp).await["message"],
        "qwxyz is not a valid word! Try again. This attempt does not count."
    );

    let resp = test::call_service(&app, status_req(&user, &game_id)).await;
    assert_eq!(read_json(resp).await["num_guesses"], 0);
    Ok(())
}

#[actix_web::test]
async fn duplicate_guess_is_409() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let user = fresh_owner();
    let game_id = start_game(&app, &user).await;

    let resp = test::call_service(&app, guess_req(&user, &game_id, "slate")).await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(&app, guess_req(&user, &game_id, "slate")).await;
    assert_error(resp, 409, "DUPLICATE_GUESS").await;

    let resp = test::call_service(&app, status_req(&user, &game_id)).await;
    assert_eq!(read_json(resp).await["num_guesses"], 1);
    Ok(())
}

#[actix_web::test]
async fn games_of_other_users_are_invisible() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let owner = fresh_owner();
    let intruder = fresh_owner();
    let game_id = start_game(&app, &owner).await;

    let resp = test::call_service(&app, status_req(&intruder, &game_id)).await;
    assert_error(resp, 404, "GAME_NOT_FOUND").await;

    let resp = test::call_service(&app, guess_req(&intruder, &game_id, "crane")).await;
    assert_error(resp, 404, "GAME_NOT_FOUND").await;

    let resp = test::call_service(&app, games_req(&intruder)).await;
    assert_eq!(resp.status(), 404);
    Ok(())
}

#[actix_web::test]
async fn unknown_game_id_is_404() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, status_req(&fresh_owner(), "not-a-game")).await;
    let body = assert_error(resp, 404, "GAME_NOT_FOUND").await;
    assert_eq!(body.error, "The resource could not be found");
    Ok(())
}
