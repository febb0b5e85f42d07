//! Login, logout and profile refresh.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{ApiClient, ApiError, ApiResponse};
use crate::services::User;

use super::storage::StorageError;
use super::store::SessionStore;
use super::token::SessionToken;

/// Login form payload.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Surrounding whitespace is dropped from the email.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let email: String = email.into();
        Self {
            email: email.trim().to_string(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"••••••••")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: User,
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password was blank; nothing was sent.
    #[error("Email and password are required")]
    MissingCredentials,

    /// The backend (or the request layer) refused the login.
    #[error("{0}")]
    Rejected(ApiError),

    /// A successful response carried no token/user.
    #[error("Login failed")]
    MissingSession,

    #[error("Could not save session: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Message suitable for an alert dialog.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected(error) => error.message.clone(),
            other => other.to_string(),
        }
    }
}

/// Authentication against `/auth/*`, persisting into the session store.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    store: SessionStore,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        let store = api.session().clone();
        Self { api, store }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// `POST /auth/login`; on success persists token + user and returns the user.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        if !credentials.is_complete() {
            return Err(AuthError::MissingCredentials);
        }

        let response: ApiResponse<LoginResponse> =
            self.api.post("/auth/login", Some(credentials)).await;

        let login = match response.into_result() {
            Ok(Some(login)) => login,
            Ok(None) => return Err(AuthError::MissingSession),
            Err(error) => {
                tracing::info!(email = %credentials.email, code = %error.code, "Login rejected");
                return Err(AuthError::Rejected(error));
            }
        };

        if login.token.is_empty() {
            return Err(AuthError::MissingSession);
        }

        self.store
            .save(&SessionToken::new(login.token), &login.user)?;
        tracing::info!(user_id = %login.user.id, "Logged in");
        Ok(login.user)
    }

    /// Best-effort `POST /auth/logout`, then unconditionally clears the session.
    pub async fn logout(&self) {
        let response: ApiResponse<IgnoredAny> =
            self.api.post("/auth/logout", None::<&()>).await;
        if let Some(message) = response.error_message() {
            tracing::debug!(message = %message, "Logout request failed, clearing session anyway");
        }

        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "Failed to clear session storage");
        }
        tracing::info!("Logged out");
    }

    /// `GET /auth/profile`; a successful response replaces the stored user.
    pub async fn profile(&self) -> ApiResponse<User> {
        let response: ApiResponse<User> = self.api.get("/auth/profile").await;
        if let Some(user) = response.data.as_ref().filter(|_| response.success) {
            if let Err(err) = self.store.save_user(user) {
                tracing::warn!(error = %err, "Failed to persist refreshed profile");
            }
        }
        response
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.is_logged_in()
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.store.token()
    }

    pub fn user_data(&self) -> Option<User> {
        self.store.user()
    }
}
