use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::domain::DomainError;

/// Game id from the `{game_id}` route segment.
///
/// Ids are opaque; existence and ownership are checked by the service in the
/// same query, so a missing segment is reported as an unknown game.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameId(pub String);

impl GameId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for GameId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result: Result<Self, AppError> = req
            .match_info()
            .get("game_id")
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| GameId(id.to_string()))
            .ok_or_else(|| DomainError::game_not_found().into());

        std::future::ready(result)
    }
}
