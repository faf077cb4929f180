//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

async fn body_json(error: &Error) -> (StatusCode, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    (
        status,
        serde_json::from_slice(&bytes).expect("error body is JSON"),
    )
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[actix_web::test]
async fn client_errors_render_message_body() {
    let (status, body) = body_json(&Error::not_found("nobody here")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "nobody here" }));
}

#[actix_web::test]
async fn internal_errors_render_raw_error_body() {
    let (status, body) = body_json(&Error::internal("connection refused")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "connection refused" }));
}
