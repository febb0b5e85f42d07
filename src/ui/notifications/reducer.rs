use crate::ui::mvi::Reducer;

use super::intent::NotificationsIntent;
use super::state::NotificationsState;

pub struct NotificationsReducer;

impl Reducer for NotificationsReducer {
    type State = NotificationsState;
    type Intent = NotificationsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationsIntent::LoadStarted => {
                state.loading = true;
                state.error = None;
            }
            NotificationsIntent::Loaded(page) => {
                state.items = page.items;
                state.unread_count = page.unread_count;
                state.loading = false;
                state.selected = state.selected.min(state.items.len().saturating_sub(1));
            }
            NotificationsIntent::LoadFailed { message } => {
                state.loading = false;
                state.error = Some(message);
            }
            NotificationsIntent::MarkedRead { id } => {
                if let Some(item) = state.items.iter_mut().find(|n| n.id == id && !n.is_read) {
                    item.is_read = true;
                    state.unread_count = state.unread_count.saturating_sub(1);
                }
            }
            NotificationsIntent::SelectNext => {
                if state.selected + 1 < state.items.len() {
                    state.selected += 1;
                }
            }
            NotificationsIntent::SelectPrevious => {
                state.selected = state.selected.saturating_sub(1);
            }
        }
        state
    }
}
