use crate::services::Notification;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub unread_count: u32,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: usize,
}

impl UiState for NotificationsState {}

impl NotificationsState {
    pub fn selected_item(&self) -> Option<&Notification> {
        self.items.get(self.selected)
    }
}
