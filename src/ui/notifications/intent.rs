use crate::services::NotificationsPage;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NotificationsIntent {
    LoadStarted,
    Loaded(NotificationsPage),
    LoadFailed { message: String },
    MarkedRead { id: String },
    SelectNext,
    SelectPrevious,
}

impl Intent for NotificationsIntent {}
