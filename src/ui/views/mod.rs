//! Per-screen drawing. Views read state snapshots and never dispatch.

pub mod campaign;
pub mod cart;
pub mod home;
pub mod login;
pub mod notifications;
pub mod parts;
pub mod profile;
pub mod splash;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::parts::Alert;
use crate::ui::theme::{BRAND_RED, GLOBAL_BORDER, POPUP_BORDER};

/// Split off the top `rows` lines of `area`.
pub fn split_top(area: Rect, rows: u16) -> (Rect, Rect) {
    let rows = rows.min(area.height);
    (
        Rect { height: rows, ..area },
        Rect {
            y: area.y + rows,
            height: area.height - rows,
            ..area
        },
    )
}

pub fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(BRAND_RED)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

/// Boxed popup sized to its content, centred in `area`.
pub fn popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'static>>, min_width: u16) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(min_width);
    let height = (lines.len() as u16).saturating_add(2);
    let rect = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(BRAND_RED)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}

pub fn alert(frame: &mut Frame<'_>, area: Rect, alert: &Alert) {
    popup(
        frame,
        area,
        &alert.title,
        vec![
            Line::from(alert.message.clone()),
            Line::from(""),
            Line::from("Enter: OK"),
        ],
        30,
    );
}

/// Centered single-line message, e.g. "Loading...".
pub fn message(frame: &mut Frame<'_>, area: Rect, block: Block<'static>, text: &str) {
    frame.render_widget(
        Paragraph::new(text.to_string())
            .block(block)
            .alignment(ratatui::layout::Alignment::Center),
        area,
    );
}
