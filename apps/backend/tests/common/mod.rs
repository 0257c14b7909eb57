#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert the error contract and return the parsed body.
pub async fn assert_error(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) -> backend_test_support::error_body::ErrorBodyLike {
    let status = StatusCode::from_u16(expected_status).expect("valid status code");
    backend_test_support::error_body::assert_error_response(resp, status, expected_code, None).await
}

/// Read a JSON body, panicking with the raw text on failure.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    let body = actix_web::test::read_body(resp).await;
    let text = std::str::from_utf8(&body).expect("body should be valid UTF-8");
    serde_json::from_str(text).unwrap_or_else(|e| panic!("body should be JSON ({e}): {text}"))
}
