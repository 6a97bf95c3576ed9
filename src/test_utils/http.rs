use axum::{body::Body, response::Response};
use axum_test::TestServer;

use crate::{AppState, build_router, error::ErrorMessage};

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let content_type_header = response
        .headers()
        .get("content-type")
        .expect("content-type header missing");
    assert_eq!(content_type_header, content_type);
}

pub(crate) async fn must_read_error_message(response: Response<Body>) -> String {
    assert_content_type(&response, "application/json");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("could not read response body");

    serde_json::from_slice::<ErrorMessage>(&body)
        .expect("response body is not an error message")
        .message
}

pub(crate) fn must_create_test_server() -> TestServer {
    let state = AppState::new("Etc/UTC").expect("could not create test app state");

    TestServer::new(build_router(state))
}
