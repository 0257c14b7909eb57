//! `/wordle` endpoints. Thin adapters: identity and body extraction, one
//! transaction per request, then a single `GameService` call.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::domain::outcome::GuessOutcome;
use crate::domain::snapshot::GameSnapshot;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::game_id::GameId;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::store::SeaGameStore;
use crate::services::games::{ActiveGames, GameService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

/// Message body shared by every gameplay response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guesses: Option<GameSnapshot>,
}

impl MessageResponse {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            guesses: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveGameEntry {
    pub gameid: String,
}

/// Player-facing message for a guess outcome.
pub fn outcome_message(outcome: GuessOutcome) -> MessageResponse {
    match outcome {
        GuessOutcome::InvalidLength { word_length } => MessageResponse::text(format!(
            "Not a valid guess! Please only guess {word_length}-letter words. This attempt does not count."
        )),
        GuessOutcome::InvalidWord { word } => MessageResponse::text(format!(
            "{word} is not a valid word! Try again. This attempt does not count."
        )),
        GuessOutcome::Correct { secret_word } => {
            MessageResponse::text(format!("Correct! The answer was {secret_word}."))
        }
        GuessOutcome::Lost {
            secret_word,
            max_attempts,
        } => MessageResponse::text(format!(
            "You have lost! You have made {max_attempts} incorrect attempts. The secret word was {secret_word}."
        )),
        GuessOutcome::InProgress {
            remaining_attempts,
            snapshot,
        } => MessageResponse {
            message: format!("Try again! You have {remaining_attempts} more attempts left."),
            guesses: Some(snapshot),
        },
    }
}

fn active_games_response(games: ActiveGames) -> HttpResponse {
    if games.is_empty() {
        return HttpResponse::NotFound().json(MessageResponse::text(format!(
            "No active games found for user, {}.",
            games.owner
        )));
    }

    let entries: Vec<ActiveGameEntry> = games
        .ids
        .into_iter()
        .map(|gameid| ActiveGameEntry { gameid })
        .collect();
    HttpResponse::Ok().json(entries)
}

async fn start_game(
    http_req: HttpRequest,
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let service = GameService::new(app_state.rules());
    let owner = user.username;

    let game_id = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { service.start_game(&SeaGameStore::new(txn), &owner).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::text(format!(
        "Game started with id: {game_id}."
    ))))
}

async fn list_games(
    http_req: HttpRequest,
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let service = GameService::new(app_state.rules());
    let owner = user.username;

    let games = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            service
                .list_active_games(&SeaGameStore::new(txn), &owner)
                .await
        })
    })
    .await?;

    Ok(active_games_response(games))
}

async fn game_status(
    http_req: HttpRequest,
    user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let service = GameService::new(app_state.rules());
    let owner = user.username;
    let GameId(game_id) = game_id;

    let snapshot = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            service
                .get_status(&SeaGameStore::new(txn), &owner, &game_id)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(snapshot))
}

async fn submit_guess(
    http_req: HttpRequest,
    user: CurrentUser,
    game_id: GameId,
    body: ValidatedJson<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let service = GameService::new(app_state.rules());
    let owner = user.username;
    let GameId(game_id) = game_id;
    let word = body.into_inner().guess;

    let outcome = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            service
                .submit_guess(&SeaGameStore::new(txn), &owner, &game_id, &word)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(outcome_message(outcome)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/start", web::post().to(start_game))
        .route("/games", web::get().to(list_games))
        .route("/{game_id}/status", web::get().to(game_status))
        .route("/{game_id}/guess", web::post().to(submit_guess));
}
