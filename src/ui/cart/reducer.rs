use crate::ui::mvi::Reducer;

use super::intent::CartIntent;
use super::state::{CartLine, CartState, SyncStatus};

/// Longest direct-edit input accepted, matching the quantity field width.
const MAX_EDIT_LEN: usize = 6;

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::LoadStarted => {
                state.loading = true;
                state
            }
            CartIntent::Loaded { items } => {
                state.lines = items.into_iter().map(CartLine::confirmed).collect();
                state.loading = false;
                state.load_error = None;
                clamp_selection(state)
            }
            CartIntent::LoadFailed { message } => {
                state.lines.clear();
                state.loading = false;
                state.load_error = Some(message);
                clamp_selection(state)
            }
            CartIntent::MutationStarted { item_id, target } => {
                set_sync(&mut state, &item_id, SyncStatus::Pending { target });
                state
            }
            CartIntent::QuantityConfirmed { item_id, quantity } => {
                if let Some(line) = state.lines.iter_mut().find(|l| l.item.id == item_id) {
                    line.item = line.item.with_quantity(quantity);
                    line.sync = SyncStatus::Confirmed;
                }
                state
            }
            CartIntent::Removed { item_id } => {
                state.lines.retain(|line| line.item.id != item_id);
                clamp_selection(state)
            }
            CartIntent::MutationFailed { item_id, message } => {
                set_sync(&mut state, &item_id, SyncStatus::Failed { message });
                state
            }
            CartIntent::Cleared => {
                state.lines.clear();
                state.edit_buffer = None;
                clamp_selection(state)
            }
            CartIntent::SelectNext => {
                if !state.lines.is_empty() && state.edit_buffer.is_none() {
                    state.selected = (state.selected + 1) % state.lines.len();
                }
                state
            }
            CartIntent::SelectPrevious => {
                if !state.lines.is_empty() && state.edit_buffer.is_none() {
                    state.selected = if state.selected == 0 {
                        state.lines.len() - 1
                    } else {
                        state.selected - 1
                    };
                }
                state
            }
            CartIntent::BeginEdit => {
                if let Some(line) = state.lines.get(state.selected) {
                    state.edit_buffer = Some(line.item.quantity.to_string());
                }
                state
            }
            CartIntent::EditInput(ch) => {
                if let Some(buffer) = state.edit_buffer.as_mut() {
                    if ch.is_ascii_digit() && buffer.len() < MAX_EDIT_LEN {
                        buffer.push(ch);
                    }
                }
                state
            }
            CartIntent::EditBackspace => {
                if let Some(buffer) = state.edit_buffer.as_mut() {
                    buffer.pop();
                }
                state
            }
            CartIntent::EndEdit => {
                state.edit_buffer = None;
                state
            }
        }
    }
}

fn set_sync(state: &mut CartState, item_id: &str, sync: SyncStatus) {
    if let Some(line) = state.lines.iter_mut().find(|l| l.item.id == item_id) {
        line.sync = sync;
    }
}

fn clamp_selection(mut state: CartState) -> CartState {
    if state.lines.is_empty() {
        state.selected = 0;
        state.edit_buffer = None;
    } else if state.selected >= state.lines.len() {
        state.selected = state.lines.len() - 1;
    }
    state
}
