use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};
use crate::ui::campaign::{CampaignIntent, Swipe};
use crate::ui::cart::CartIntent;
use crate::ui::login::LoginIntent;
use crate::ui::navigation::{Screen, Tab};
use crate::ui::notifications::NotificationsIntent;
use crate::ui::parts::PartsIntent;
use crate::ui::quantity::QuantityIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // Modal layers first, innermost wins.
    if app.quantity().is_visible() {
        handle_quantity_key(app, key);
        return;
    }
    if app.focus() == Focus::Notifications {
        handle_notifications_key(app, key);
        return;
    }

    match app.screen().clone() {
        Screen::Splash => {}
        Screen::Login => handle_login_key(app, key),
        Screen::MainTabs(tab) => handle_tabs_key(app, tab, key),
        Screen::Parts => {
            if !handle_parts_key(app, key) {
                match key.code {
                    KeyCode::Char('c') => app.push(Screen::Cart),
                    _ if is_back(key) => app.back(),
                    _ => {}
                }
            }
        }
        Screen::Cart => handle_cart_key(app, key),
        Screen::CampaignList => {
            if !handle_campaign_list_key(app, key) && is_back(key) {
                app.back();
            }
        }
        Screen::CampaignDetail { .. } => {
            if is_back(key) {
                app.back();
            }
        }
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    if app.login_state().alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.login_intent(LoginIntent::DismissAlert);
        }
        return;
    }
    if is_ctrl_char(key, 'p') {
        app.login_intent(LoginIntent::ToggleShowPassword);
        return;
    }
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login_intent(LoginIntent::ToggleFocus)
        }
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => app.login_intent(LoginIntent::Backspace),
        KeyCode::Esc => app.request_quit(),
        KeyCode::Char(ch) => app.login_intent(LoginIntent::Input(ch)),
        _ => {}
    }
}

fn handle_tabs_key(app: &mut App, tab: Tab, key: KeyEvent) {
    let screen_handled = match tab {
        Tab::Home => handle_home_key(app, key),
        Tab::Order => handle_parts_key(app, key),
        Tab::Collection => handle_campaign_list_key(app, key),
        Tab::Profile => handle_profile_key(app, key),
    };
    if screen_handled {
        return;
    }

    match key.code {
        KeyCode::Tab => app.select_tab(tab.next()),
        KeyCode::BackTab => app.select_tab(tab.previous()),
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch as usize - '1' as usize;
            app.select_tab(Tab::ALL[index]);
        }
        KeyCode::Char('c') => app.push(Screen::Cart),
        KeyCode::Char('n') => app.toggle_notifications(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Left | KeyCode::Char('[') => app.swipe_slider(Swipe::Previous),
        KeyCode::Right | KeyCode::Char(']') => app.swipe_slider(Swipe::Next),
        KeyCode::Enter => app.open_slider_campaign(),
        KeyCode::Char('p') => app.push(Screen::Parts),
        KeyCode::Char('a') => app.push(Screen::CampaignList),
        _ => return false,
    }
    true
}

/// Shared by the Order tab and the pushed Parts screen.
fn handle_parts_key(app: &mut App, key: KeyEvent) -> bool {
    let state = app.parts_state();

    if state.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.parts_intent(PartsIntent::DismissAlert);
        }
        return true;
    }

    if app.focus() == Focus::Search {
        match key.code {
            KeyCode::Enter => app.search_now(),
            KeyCode::Esc => app.blur(),
            KeyCode::Backspace => app.search_input(None),
            KeyCode::Char(ch) => app.search_input(Some(ch)),
            _ => {}
        }
        return true;
    }

    if state.detail.is_some() {
        match key.code {
            KeyCode::Enter | KeyCode::Char('a') => app.open_quantity_dialog(),
            KeyCode::Esc | KeyCode::Backspace => app.parts_intent(PartsIntent::DetailClosed),
            _ => {}
        }
        return true;
    }

    match key.code {
        KeyCode::Char('/') => app.focus_search(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('a') => app.open_quantity_dialog(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_part(),
        KeyCode::Up | KeyCode::Char('k') => app.parts_intent(PartsIntent::SelectPrevious),
        KeyCode::Enter => app.open_part_detail(),
        _ => return false,
    }
    true
}

fn handle_quantity_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.confirm_quantity(),
        KeyCode::Esc => app.quantity_intent(QuantityIntent::Close),
        KeyCode::Char('+') | KeyCode::Right | KeyCode::Up => {
            app.quantity_intent(QuantityIntent::Plus)
        }
        KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => {
            app.quantity_intent(QuantityIntent::Minus)
        }
        KeyCode::Backspace => app.quantity_intent(QuantityIntent::Backspace),
        KeyCode::Char(ch) => app.quantity_intent(QuantityIntent::Input(ch)),
        _ => {}
    }
}

fn handle_cart_key(app: &mut App, key: KeyEvent) {
    if app.cart_state().edit_buffer.is_some() {
        match key.code {
            KeyCode::Enter => app.commit_cart_edit(),
            KeyCode::Esc => app.cart_intent(CartIntent::EndEdit),
            KeyCode::Backspace => app.cart_intent(CartIntent::EditBackspace),
            KeyCode::Char(ch) => app.cart_intent(CartIntent::EditInput(ch)),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.cart_intent(CartIntent::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => app.cart_intent(CartIntent::SelectPrevious),
        KeyCode::Char('+') | KeyCode::Right => app.increment_cart_item(),
        KeyCode::Char('-') | KeyCode::Left => app.decrement_cart_item(),
        KeyCode::Char('e') | KeyCode::Enter => app.cart_intent(CartIntent::BeginEdit),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_cart_item(),
        KeyCode::Char('x') => app.clear_cart(),
        KeyCode::Char('r') => app.reload_cart(),
        _ if is_back(key) => app.back(),
        _ => {}
    }
}

fn handle_campaign_list_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.campaign_intent(CampaignIntent::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => app.campaign_intent(CampaignIntent::SelectPrevious),
        KeyCode::Enter => app.open_selected_campaign(),
        _ => return false,
    }
    true
}

fn handle_profile_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('l') => app.logout(),
        KeyCode::Char('r') => app.refresh_profile(),
        _ => return false,
    }
    true
}

fn handle_notifications_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.notifications_intent(NotificationsIntent::SelectNext)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.notifications_intent(NotificationsIntent::SelectPrevious)
        }
        KeyCode::Enter => app.mark_selected_notification_read(),
        KeyCode::Esc | KeyCode::Char('n') => app.toggle_notifications(),
        _ => {}
    }
}

fn is_back(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Backspace)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_detection_ignores_plain_chars() {
        let plain = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::CONTROL);
        assert!(!is_ctrl_char(plain, 'q'));
        assert!(is_ctrl_char(ctrl, 'q'));
    }
}
