use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::ui::cart::{CartLine, CartState, SyncStatus};
use crate::ui::format::format_price;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_RED, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_WARN,
};

use super::{message, panel};

pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &CartState) {
    if state.loading {
        message(frame, area, panel("Cart"), "Loading...");
        return;
    }
    if state.is_empty() {
        let text = match &state.load_error {
            Some(error) => format!("Your cart is empty ({})", error),
            None => "Your cart is empty".to_string(),
        };
        message(frame, area, panel("Cart"), &text);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = state
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let editing = (i == state.selected)
                .then_some(state.edit_buffer.as_deref())
                .flatten();
            ListItem::new(cart_line(line, editing))
        })
        .collect();
    let list = List::new(items)
        .block(panel(&format!("Cart ({} items)", state.total_quantity())))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, rows[0], &mut list_state);

    let total = Line::from(vec![
        Span::styled("Total  ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format_price(state.total()),
            Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(total).block(panel("Summary")), rows[1]);
}

fn cart_line(line: &CartLine, editing: Option<&str>) -> Line<'static> {
    let item = &line.item;
    let quantity = match editing {
        Some(text) => Span::styled(
            format!("[{:>4}]", text),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::UNDERLINED),
        ),
        None => Span::styled(format!(" {:>4} ", item.quantity), Style::default().fg(HEADER_TEXT)),
    };
    let status = match &line.sync {
        SyncStatus::Confirmed => Span::raw(""),
        SyncStatus::Pending { target: Some(target) } => {
            Span::styled(format!("  → {}", target), Style::default().fg(STATUS_WARN))
        }
        SyncStatus::Pending { target: None } => {
            Span::styled("  removing", Style::default().fg(STATUS_WARN))
        }
        SyncStatus::Failed { message } => {
            Span::styled(format!("  {}", message), Style::default().fg(STATUS_ERROR))
        }
    };

    Line::from(vec![
        Span::styled(format!("{:<36}", item.name), Style::default().fg(HEADER_TEXT)),
        Span::styled(format!("{:>12} x", format_price(item.price)), Style::default().fg(MUTED_TEXT)),
        quantity,
        Span::styled(format!("{:>14}", format_price(item.subtotal)), Style::default().fg(BRAND_RED)),
        status,
    ])
}
