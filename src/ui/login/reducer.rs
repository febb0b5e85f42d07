use crate::ui::mvi::Reducer;

use super::intent::LoginIntent;
use super::state::{LoginField, LoginState};

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Input(ch) if !state.submitting => match state.focus {
                LoginField::Email => state.email.push(ch),
                LoginField::Password => state.password.push(ch),
            },
            LoginIntent::Backspace if !state.submitting => match state.focus {
                LoginField::Email => {
                    state.email.pop();
                }
                LoginField::Password => {
                    state.password.pop();
                }
            },
            LoginIntent::Input(_) | LoginIntent::Backspace => {}
            LoginIntent::ToggleFocus => {
                state.focus = match state.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            LoginIntent::ToggleShowPassword => state.show_password = !state.show_password,
            LoginIntent::SubmitStarted => {
                state.submitting = true;
                state.alert = None;
            }
            LoginIntent::SubmitFinished => state.submitting = false,
            LoginIntent::ShowAlert(alert) => state.alert = Some(alert),
            LoginIntent::DismissAlert => state.alert = None,
            LoginIntent::Reset => state = LoginState::default(),
        }
        state
    }
}
