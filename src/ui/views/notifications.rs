use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, List, ListItem, ListState};
use ratatui::Frame;

use crate::services::NotificationKind;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::notifications::NotificationsState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};

use super::panel;

fn kind_color(kind: NotificationKind) -> ratatui::style::Color {
    match kind {
        NotificationKind::Info => HEADER_TEXT,
        NotificationKind::Success => STATUS_OK,
        NotificationKind::Warning => STATUS_WARN,
        NotificationKind::Error => STATUS_ERROR,
    }
}

/// Inbox drawn as a popup over the current screen.
pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &NotificationsState) {
    let rect = centered_rect_by_size(area, area.width.saturating_sub(8).max(40), area.height.saturating_sub(2));
    frame.render_widget(Clear, rect);

    let mut items: Vec<ListItem> = state
        .items
        .iter()
        .map(|n| {
            let title_style = if n.is_read {
                Style::default().fg(MUTED_TEXT)
            } else {
                Style::default().fg(kind_color(n.kind)).add_modifier(Modifier::BOLD)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(if n.is_read { "  " } else { "● " }, title_style),
                    Span::styled(n.title.clone(), title_style),
                ]),
                Line::styled(format!("  {}", n.message), Style::default().fg(MUTED_TEXT)),
            ])
        })
        .collect();
    if items.is_empty() {
        let text = match (&state.error, state.loading) {
            (_, true) => "Loading...".to_string(),
            (Some(error), false) => error.clone(),
            (None, false) => "No notifications".to_string(),
        };
        items.push(ListItem::new(Line::styled(text, Style::default().fg(MUTED_TEXT))));
    }

    let title = format!("Notifications ({} unread)", state.unread_count);
    let list = List::new(items)
        .block(panel(&title))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state = ListState::default();
    if !state.items.is_empty() {
        list_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(list, rect, &mut list_state);
}
