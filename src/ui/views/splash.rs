use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{BRAND_RED, MUTED_TEXT};

pub fn draw(frame: &mut Frame<'_>, area: Rect) {
    let rect = centered_rect_by_size(area, 40, 3);
    let lines = vec![
        Line::styled(
            "PartOrder",
            Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("Genuine parts, delivered", Style::default().fg(MUTED_TEXT)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}
