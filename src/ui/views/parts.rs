use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::services::{Availability, Part};
use crate::ui::app::{App, Focus};
use crate::ui::format::format_price;
use crate::ui::parts::PartsState;
use crate::ui::quantity::QuantityDialogState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_RED, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};

use super::{alert, panel, popup};

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.parts_state();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    draw_search(frame, rows[0], &state, app.focus() == Focus::Search);

    match &state.detail {
        Some(part) => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(rows[1]);
            draw_list(frame, columns[0], &state);
            draw_detail(frame, columns[1], part, state.detail_loading);
        }
        None => draw_list(frame, rows[1], &state),
    }

    if let QuantityDialogState::Visible { part, text } = app.quantity() {
        draw_quantity(frame, area, part, text);
    }
    if let Some(current) = &state.alert {
        alert(frame, area, current);
    }
}

fn draw_search(frame: &mut Frame<'_>, area: Rect, state: &PartsState, focused: bool) {
    let sort = match state.sort {
        Some(sort) => format!("{} {}", sort.by.label(), sort.order.as_param()),
        None => "Default".to_string(),
    };
    let input_style = if focused {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let placeholder = state.input.is_empty() && !focused;
    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(MUTED_TEXT)),
        if placeholder {
            Span::styled("part name or number", Style::default().fg(MUTED_TEXT))
        } else {
            Span::styled(state.input.clone(), input_style)
        },
        Span::styled(format!("   Sort: {}", sort), Style::default().fg(MUTED_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(line).block(panel("Parts")), area);
}

fn availability_span(availability: Availability) -> Span<'static> {
    match availability {
        Availability::Ready => Span::styled("Ready", Style::default().fg(STATUS_OK)),
        Availability::OutOfStock => Span::styled("Out of stock", Style::default().fg(STATUS_ERROR)),
        Availability::Unknown => Span::styled("Check stock", Style::default().fg(STATUS_WARN)),
    }
}

fn draw_list(frame: &mut Frame<'_>, area: Rect, state: &PartsState) {
    let mut items: Vec<ListItem> = state
        .items
        .iter()
        .map(|part| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<16} ", part.part_number),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::styled(part.name.clone(), Style::default().fg(HEADER_TEXT)),
                Span::raw("  "),
                Span::styled(format_price(part.price), Style::default().fg(BRAND_RED)),
                Span::raw("  "),
                availability_span(part.availability()),
            ]))
        })
        .collect();

    if state.is_loading() {
        items.push(ListItem::new(Line::styled(
            "Loading...",
            Style::default().fg(MUTED_TEXT),
        )));
    } else if let Some(error) = &state.error {
        items.push(ListItem::new(Line::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    } else if state.items.is_empty() {
        items.push(ListItem::new(Line::styled(
            "No parts found",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let title = format!("{} items", state.items.len());
    let list = List::new(items)
        .block(panel(&title))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state = ListState::default();
    if !state.items.is_empty() {
        list_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_detail(frame: &mut Frame<'_>, area: Rect, part: &Part, loading: bool) {
    let label = Style::default().fg(MUTED_TEXT);
    let mut lines = vec![
        Line::styled(
            part.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![Span::styled("Part no.  ", label), Span::raw(part.part_number.clone())]),
        Line::from(vec![
            Span::styled("Price     ", label),
            Span::styled(format_price(part.price), Style::default().fg(BRAND_RED)),
        ]),
        Line::from(vec![Span::styled("Stock     ", label), availability_span(part.availability())]),
    ];
    if let Some(category) = &part.category {
        lines.push(Line::from(vec![Span::styled("Category  ", label), Span::raw(category.clone())]));
    }
    lines.push(Line::from(""));
    if loading {
        lines.push(Line::styled("Checking availability...", label));
    }
    if !part.description.is_empty() {
        lines.push(Line::from(part.description.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled("Enter: Add to cart  Esc: Close", label));

    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("Detail"))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_quantity(frame: &mut Frame<'_>, area: Rect, part: &Part, text: &str) {
    let shown = if text.is_empty() { " " } else { text };
    let lines = vec![
        Line::from(part.name.clone()),
        Line::styled(format_price(part.price), Style::default().fg(BRAND_RED)),
        Line::from(""),
        Line::from(vec![
            Span::raw("[ - ]  "),
            Span::styled(
                shown.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Span::raw("  [ + ]"),
        ]),
    ];
    popup(frame, area, "Quantity", lines, 36);
}
