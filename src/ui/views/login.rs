use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::login::{LoginField, LoginState};
use crate::ui::theme::{BRAND_RED, HEADER_TEXT, MUTED_TEXT};

use super::{alert, panel};

pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &LoginState) {
    let rect = centered_rect_by_size(area, 50, 9);

    let field = |label: &'static str, value: String, field: LoginField| {
        let focused = state.focus == field;
        let marker = if focused { "› " } else { "  " };
        let value_style = if focused {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(BRAND_RED)),
            Span::styled(format!("{:<10}", label), Style::default().fg(MUTED_TEXT)),
            Span::styled(value, value_style),
        ])
    };

    let button = if state.submitting {
        Line::styled("  Logging in...", Style::default().fg(MUTED_TEXT))
    } else {
        Line::styled(
            "  [ Login ]",
            Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        Line::from(""),
        field("Email", state.email.clone(), LoginField::Email),
        Line::from(""),
        field("Password", state.password_display(), LoginField::Password),
        Line::from(""),
        button,
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("Sign in")), rect);

    if let Some(current) = &state.alert {
        alert(frame, area, current);
    }
}
