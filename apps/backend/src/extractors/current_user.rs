use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::logging::security;

/// Caller identity taken from an `Authorization: Basic` header.
///
/// Only the username is used; it becomes the owner of games. The password is
/// not checked here, credentials are an upstream concern.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or("missing authorization header")
            .and_then(|value| value.to_str().map_err(|_| "non-ascii authorization header"))
            .and_then(parse_basic_username)
            .map(|username| CurrentUser { username });

        std::future::ready(result.map_err(|reason| {
            security::auth_failed(reason, req.path());
            AppError::unauthorized()
        }))
    }
}

/// Username from an `Authorization: Basic` header, if one parses.
///
/// Used for log context only; requests are authenticated by the extractor.
pub fn basic_username(headers: &header::HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| parse_basic_username(value).ok())
}

/// Pull the username out of `Basic base64(username:password)`.
fn parse_basic_username(header_value: &str) -> Result<String, &'static str> {
    let mut parts = header_value.split_whitespace();
    let (Some(scheme), Some(encoded), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("malformed authorization header");
    };
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err("unsupported authorization scheme");
    }

    let decoded = STANDARD
        .decode(encoded)
        .map_err(|_| "invalid base64 credentials")?;
    let decoded = String::from_utf8(decoded).map_err(|_| "credentials are not utf-8")?;

    let username = match decoded.split_once(':') {
        Some((username, _password)) => username,
        None => return Err("credentials missing ':' separator"),
    };
    if username.is_empty() {
        return Err("empty username");
    }

    Ok(username.to_string())
}
