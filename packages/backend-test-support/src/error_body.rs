//! Error body assertions
//!
//! Checks the backend's error contract without depending on backend types:
//! status, `code`, `trace_id` parity with the `x-trace-id` header, and an
//! optional substring of the `error` message.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the backend's error JSON.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub error: String,
    pub code: String,
    pub status: u16,
    pub trace_id: String,
}

/// Assert a `ServiceResponse` is an error response with the given code.
pub async fn assert_error_response(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_error_contains: Option<&str>,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_parts(
        status,
        &headers,
        &body,
        expected_status,
        expected_code,
        expected_error_contains,
    )
}

/// Same as [`assert_error_response`], on raw response parts.
pub fn assert_error_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    expected_error_contains: Option<&str>,
) -> ErrorBodyLike {
    let body_str = std::str::from_utf8(body).expect("error body should be valid UTF-8");
    assert_eq!(status, expected_status, "unexpected status, body: {body_str}");

    let parsed: ErrorBodyLike = serde_json::from_str(body_str)
        .unwrap_or_else(|e| panic!("error body should be JSON ({e}): {body_str}"));

    let trace_header = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present");
    assert!(!trace_header.is_empty(), "x-trace-id should not be empty");
    assert_eq!(
        parsed.trace_id, trace_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(parsed.code, expected_code);
    assert_eq!(parsed.status, expected_status.as_u16());

    if let Some(fragment) = expected_error_contains {
        assert!(
            parsed.error.contains(fragment),
            "expected error to contain '{fragment}', got '{}'",
            parsed.error
        );
    }

    parsed
}
