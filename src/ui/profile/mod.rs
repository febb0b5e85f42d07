//! Profile tab: the persisted user and logout.

use crate::services::User;
use crate::session::AuthService;
use crate::ui::mvi::{Intent, Reducer, Store, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub user: Option<User>,
    pub refreshing: bool,
    pub logging_out: bool,
}

impl UiState for ProfileState {}

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    Shown { user: Option<User> },
    RefreshStarted,
    Refreshed { user: Option<User> },
    LogoutStarted,
    LoggedOut,
}

impl Intent for ProfileIntent {}

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Shown { user } => state.user = user,
            ProfileIntent::RefreshStarted => state.refreshing = true,
            ProfileIntent::Refreshed { user } => {
                state.refreshing = false;
                if user.is_some() {
                    state.user = user;
                }
            }
            ProfileIntent::LogoutStarted => state.logging_out = true,
            ProfileIntent::LoggedOut => state = ProfileState::default(),
        }
        state
    }
}

#[derive(Clone)]
pub struct ProfileController {
    auth: AuthService,
    store: Store<ProfileReducer>,
}

impl ProfileController {
    pub fn new(auth: AuthService, store: Store<ProfileReducer>) -> Self {
        Self { auth, store }
    }

    pub fn store(&self) -> &Store<ProfileReducer> {
        &self.store
    }

    pub fn reset(&self) {
        self.store.reset();
    }

    /// Show the stored user immediately, then refresh it from `/auth/profile`.
    pub async fn load(&self) {
        self.store.dispatch(ProfileIntent::Shown {
            user: self.auth.user_data(),
        });
        self.store.dispatch(ProfileIntent::RefreshStarted);
        let user = match self.auth.profile().await.into_data() {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::debug!(code = %error.code, "Profile refresh failed, keeping stored user");
                None
            }
        };
        self.store.dispatch(ProfileIntent::Refreshed { user });
    }

    pub async fn logout(&self) {
        self.store.dispatch(ProfileIntent::LogoutStarted);
        self.auth.logout().await;
        self.store.dispatch(ProfileIntent::LoggedOut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "7".to_string(),
            username: None,
            name: "Budi".to_string(),
            email: "budi@example.com".to_string(),
            role: "dealer".to_string(),
        }
    }

    #[test]
    fn failed_refresh_keeps_stored_user() {
        let state = ProfileReducer::reduce_all(
            ProfileState::default(),
            [
                ProfileIntent::Shown { user: Some(user()) },
                ProfileIntent::RefreshStarted,
                ProfileIntent::Refreshed { user: None },
            ],
        );
        assert_eq!(state.user, Some(user()));
        assert!(!state.refreshing);
    }

    #[test]
    fn logout_clears_user() {
        let state = ProfileReducer::reduce_all(
            ProfileState::default(),
            [ProfileIntent::Shown { user: Some(user()) }, ProfileIntent::LoggedOut],
        );
        assert_eq!(state.user, None);
    }
}
