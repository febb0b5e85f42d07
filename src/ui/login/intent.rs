use crate::ui::mvi::Intent;
use crate::ui::parts::Alert;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    Input(char),
    Backspace,
    ToggleFocus,
    ToggleShowPassword,
    SubmitStarted,
    SubmitFinished,
    ShowAlert(Alert),
    DismissAlert,
    /// Back to an empty form (after logout).
    Reset,
}

impl Intent for LoginIntent {}
