use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{BRAND_RED, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_WARN};

/// Title bar: brand, screen title, cart badge and unread notifications.
pub struct Header<'a> {
    title: &'a str,
    cart_count: u32,
    unread: u32,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            cart_count: 0,
            unread: 0,
        }
    }

    pub fn cart_count(mut self, count: u32) -> Self {
        self.cart_count = count;
        self
    }

    pub fn unread(mut self, count: u32) -> Self {
        self.unread = count;
        self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(MUTED_TEXT);
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(
                "PartOrder",
                Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.title.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Cart {}", self.cart_count), text_style),
        ];
        if self.unread > 0 {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} unread", self.unread),
                Style::default().fg(STATUS_WARN),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
