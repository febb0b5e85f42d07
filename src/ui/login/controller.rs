use crate::services::User;
use crate::session::AuthService;
use crate::ui::mvi::Store;
use crate::ui::parts::Alert;

use super::intent::LoginIntent;
use super::reducer::LoginReducer;

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// A field was blank; no request was made.
    Invalid,
    /// A submit is already running.
    Busy,
    Failed(String),
    LoggedIn(User),
}

#[derive(Clone)]
pub struct LoginController {
    auth: AuthService,
    store: Store<LoginReducer>,
}

impl LoginController {
    pub fn new(auth: AuthService, store: Store<LoginReducer>) -> Self {
        Self { auth, store }
    }

    pub fn store(&self) -> &Store<LoginReducer> {
        &self.store
    }

    pub async fn submit(&self) -> LoginOutcome {
        let Some(credentials) = self.store.read(|s| s.credentials()) else {
            self.store.dispatch(LoginIntent::ShowAlert(Alert {
                title: "Error".to_string(),
                message: "Email and password are required".to_string(),
            }));
            return LoginOutcome::Invalid;
        };

        if self
            .store
            .dispatch_when(|s| !s.submitting, LoginIntent::SubmitStarted, |_| ())
            .is_none()
        {
            return LoginOutcome::Busy;
        }

        let result = self.auth.login(&credentials).await;
        self.store.dispatch(LoginIntent::SubmitFinished);

        match result {
            Ok(user) => {
                self.store.dispatch(LoginIntent::Reset);
                LoginOutcome::LoggedIn(user)
            }
            Err(error) => {
                let message = error.user_message();
                self.store.dispatch(LoginIntent::ShowAlert(Alert {
                    title: "Login failed".to_string(),
                    message: message.clone(),
                }));
                LoginOutcome::Failed(message)
            }
        }
    }
}
