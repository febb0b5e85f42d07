//! Request layer behaviour against a live mock backend.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use partorder::api::{codes, ApiResponse};
use partorder::session::SessionStore;
use serde_json::{json, Value};

/// Every request carries the stored token as a bearer credential.
#[tokio::test]
async fn attaches_bearer_token_when_logged_in() {
    let backend = MockBackend::start().await;
    let client = common::client(&backend.base_url(), common::logged_in_session());

    let _: ApiResponse<Value> = client.get("/dashboard/stats").await;

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/dashboard/stats");
    assert_eq!(
        requests[0].header("authorization"),
        Some(format!("Bearer {}", common::TEST_TOKEN).as_str())
    );
}

/// Login never sends a token, even one left over from an earlier session.
#[tokio::test]
async fn login_request_skips_bearer_token() {
    let backend = MockBackend::start().await;
    let client = common::client(&backend.base_url(), common::logged_in_session());

    let _: ApiResponse<Value> = client
        .post("/auth/login", Some(&json!({"email": "a@b.c", "password": "x"})))
        .await;

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/auth/login");
    assert_eq!(requests[0].header("authorization"), None);
    assert_eq!(requests[0].body_json()["email"], "a@b.c");
}

#[tokio::test]
async fn anonymous_requests_have_no_authorization() {
    let backend = MockBackend::start().await;
    let client = common::client(&backend.base_url(), SessionStore::in_memory());

    let _: ApiResponse<Value> = client.get("/campaigns").await;

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].header("authorization"), None);
}

/// Each request gets its own correlation id.
#[tokio::test]
async fn request_ids_are_unique() {
    let backend = MockBackend::start().await;
    let client = common::client(&backend.base_url(), SessionStore::in_memory());

    let _: ApiResponse<Value> = client.get("/campaigns").await;
    let _: ApiResponse<Value> = client.get("/campaigns").await;

    let requests = backend.captured_requests().await;
    let first = requests[0].header("x-request-id").expect("missing request id");
    let second = requests[1].header("x-request-id").expect("missing request id");
    assert!(!first.is_empty());
    assert_ne!(first, second);
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn query_pairs_are_encoded() {
    let backend = MockBackend::start().await;
    let client = common::client(&backend.base_url(), SessionStore::in_memory());

    let query = [("page", "2".to_string()), ("search", "brake pad".to_string())];
    let _: ApiResponse<Value> = client.get_with_query("/parts", &query).await;

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].query_param("page").as_deref(), Some("2"));
    assert_eq!(requests[0].query_param("search").as_deref(), Some("brake pad"));
}

#[tokio::test]
async fn success_envelope_is_returned_as_is() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!({"cartCount": 3})))
        .await;
    let client = common::client(&backend.base_url(), SessionStore::in_memory());

    let response: ApiResponse<Value> = client.get("/dashboard/stats").await;

    assert!(response.success);
    assert_eq!(response.data, Some(json!({"cartCount": 3})));
    assert!(response.error.is_none());
}

/// A body that is not JSON becomes PARSE_ERROR instead of a panic or Err.
#[tokio::test]
async fn invalid_json_is_parse_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::raw(200, "<html>maintenance</html>"))
        .await;
    let client = common::client(&backend.base_url(), SessionStore::in_memory());

    let response: ApiResponse<Value> = client.get("/campaigns").await;

    assert!(!response.success);
    assert_eq!(response.error.map(|e| e.code).as_deref(), Some(codes::PARSE_ERROR));
}

#[tokio::test]
async fn status_without_error_object_is_server_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"message": "Database unavailable"}"#).with_status(500))
        .await;
    let client = common::client(&backend.base_url(), SessionStore::in_memory());

    let response: ApiResponse<Value> = client.get("/cart").await;

    let error = response.error.expect("expected error");
    assert_eq!(error.code, codes::SERVER_ERROR);
    assert_eq!(error.message, "Database unavailable");
}

/// Backend domain errors pass through untouched, whatever the status.
#[tokio::test]
async fn backend_error_object_passes_through() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::failure(401, "INVALID_CREDENTIALS", "Wrong password"))
        .await;
    let client = common::client(&backend.base_url(), SessionStore::in_memory());

    let response: ApiResponse<Value> = client
        .post("/auth/login", Some(&json!({"email": "a@b.c", "password": "x"})))
        .await;

    let error = response.error.expect("expected error");
    assert_eq!(error.code, "INVALID_CREDENTIALS");
    assert_eq!(error.message, "Wrong password");
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let client = common::client(&common::closed_url(), SessionStore::in_memory());

    let response: ApiResponse<Value> = client.get("/campaigns").await;

    assert!(!response.success);
    assert_eq!(response.error.map(|e| e.code).as_deref(), Some(codes::NETWORK_ERROR));
}

/// An empty 2xx body decodes as `{}`: not a success, but not a crash either.
#[tokio::test]
async fn empty_body_is_not_success() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::raw(200, "")).await;
    let client = common::client(&backend.base_url(), SessionStore::in_memory());

    let response: ApiResponse<Value> = client.delete("/cart/clear").await;

    assert!(!response.success);
    assert!(response.data.is_none());
}
