use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::profile::ProfileState;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT};

use super::{message, panel};

pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &ProfileState) {
    if state.logging_out {
        message(frame, area, panel("Profile"), "Logging out...");
        return;
    }
    let Some(user) = &state.user else {
        message(frame, area, panel("Profile"), "Not logged in");
        return;
    };

    let label = Style::default().fg(MUTED_TEXT);
    let row = |name: &'static str, value: String| {
        Line::from(vec![Span::styled(format!("{:<10}", name), label), Span::raw(value)])
    };
    let mut lines = vec![
        Line::styled(
            user.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        row("Email", user.email.clone()),
        row("Role", user.role.clone()),
    ];
    if let Some(username) = &user.username {
        lines.push(row("Username", username.clone()));
    }
    if state.refreshing {
        lines.push(Line::from(""));
        lines.push(Line::styled("Refreshing...", label));
    }
    frame.render_widget(Paragraph::new(lines).block(panel("Profile")), area);
}
