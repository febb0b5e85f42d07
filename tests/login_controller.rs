//! Login form controller.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use partorder::session::SessionStore;
use partorder::ui::login::{LoginController, LoginIntent, LoginOutcome, LoginState};
use partorder::ui::mvi::Store;
use partorder::ui::profile::{ProfileController, ProfileState};
use serde_json::json;

fn controller(base_url: &str, session: SessionStore) -> LoginController {
    let services = common::services(base_url, session);
    LoginController::new(services.auth, Store::new(LoginState::default()))
}

fn type_text(controller: &LoginController, text: &str) {
    for ch in text.chars() {
        controller.store().dispatch(LoginIntent::Input(ch));
    }
}

fn fill_form(controller: &LoginController, email: &str, password: &str) {
    type_text(controller, email);
    controller.store().dispatch(LoginIntent::ToggleFocus);
    type_text(controller, password);
}

/// Blank fields show an alert and never reach the backend.
#[tokio::test]
async fn empty_fields_make_no_request() {
    let backend = MockBackend::start().await;
    let controller = controller(&backend.base_url(), SessionStore::in_memory());

    assert_eq!(controller.submit().await, LoginOutcome::Invalid);

    type_text(&controller, "budi@example.com");
    assert_eq!(controller.submit().await, LoginOutcome::Invalid);

    assert!(backend.captured_requests().await.is_empty());
    let alert = controller.store().snapshot().alert.expect("alert shown");
    assert_eq!(alert.title, "Error");
    assert_eq!(alert.message, "Email and password are required");
}

#[tokio::test]
async fn whitespace_email_counts_as_empty() {
    let backend = MockBackend::start().await;
    let controller = controller(&backend.base_url(), SessionStore::in_memory());

    fill_form(&controller, "   ", "secret");

    assert_eq!(controller.submit().await, LoginOutcome::Invalid);
    assert!(backend.captured_requests().await.is_empty());
}

#[tokio::test]
async fn successful_login_resets_form() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!({
            "token": "fresh-token",
            "user": common::user_json()
        })))
        .await;
    let session = SessionStore::in_memory();
    let controller = controller(&backend.base_url(), session.clone());

    fill_form(&controller, "budi@example.com", "secret");
    let outcome = controller.submit().await;

    assert!(matches!(outcome, LoginOutcome::LoggedIn(ref user) if user.email == "budi@example.com"));
    assert!(session.is_logged_in());
    let state = controller.store().snapshot();
    assert_eq!(state, LoginState::default());
}

#[tokio::test]
async fn rejected_login_shows_backend_message() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::failure(401, "INVALID_CREDENTIALS", "Invalid email or password"))
        .await;
    let controller = controller(&backend.base_url(), SessionStore::in_memory());

    fill_form(&controller, "budi@example.com", "wrong");
    let outcome = controller.submit().await;

    assert_eq!(outcome, LoginOutcome::Failed("Invalid email or password".to_string()));
    let state = controller.store().snapshot();
    assert!(!state.submitting);
    assert_eq!(state.email, "budi@example.com");
    assert_eq!(state.alert.map(|a| a.title).as_deref(), Some("Login failed"));
}

/// A second submit while the first is in flight is refused.
#[tokio::test]
async fn concurrent_submit_is_busy() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(
            MockResponse::data(json!({"token": "t", "user": common::user_json()})).with_delay(100),
        )
        .await;
    let controller = controller(&backend.base_url(), SessionStore::in_memory());
    fill_form(&controller, "budi@example.com", "secret");

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.submit().await })
    };
    tokio::time::sleep(std::time::Duration::from_millis(30)).await;
    let second = controller.submit().await;

    assert_eq!(second, LoginOutcome::Busy);
    assert!(matches!(first.await.unwrap(), LoginOutcome::LoggedIn(_)));
    assert_eq!(backend.requests_to("POST", "/auth/login").await.len(), 1);
}

#[tokio::test]
async fn profile_logout_clears_session() {
    let backend = MockBackend::start().await;
    let session = common::logged_in_session();
    let services = common::services(&backend.base_url(), session.clone());
    let profile = ProfileController::new(services.auth, Store::new(ProfileState::default()));

    profile.load().await;
    assert_eq!(
        profile.store().snapshot().user.map(|u| u.name).as_deref(),
        Some("Budi Santoso")
    );

    profile.logout().await;

    assert!(!session.is_logged_in());
    assert_eq!(profile.store().snapshot(), ProfileState::default());
}
