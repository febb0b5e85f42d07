use crate::session::Credentials;
use crate::ui::mvi::UiState;
use crate::ui::parts::Alert;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub focus: LoginField,
    pub submitting: bool,
    pub alert: Option<Alert>,
}

impl UiState for LoginState {}

impl LoginState {
    /// Credentials to submit, or `None` if either field is blank.
    pub fn credentials(&self) -> Option<Credentials> {
        Some(Credentials::new(self.email.as_str(), self.password.clone()))
            .filter(Credentials::is_complete)
    }

    /// Password as drawn on screen.
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }
}
