use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::services::CampaignStatus;
use crate::ui::campaign::CampaignState;
use crate::ui::format::format_date_range;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_RED, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};

use super::{message, panel};

fn status_span(status: Option<CampaignStatus>) -> Span<'static> {
    match status {
        Some(CampaignStatus::Active) => Span::styled("active", Style::default().fg(STATUS_OK)),
        Some(CampaignStatus::Upcoming) => Span::styled("upcoming", Style::default().fg(STATUS_WARN)),
        Some(CampaignStatus::Completed) => {
            Span::styled("completed", Style::default().fg(MUTED_TEXT))
        }
        None => Span::raw(""),
    }
}

pub fn draw_list(frame: &mut Frame<'_>, area: Rect, state: &CampaignState) {
    if state.campaigns.is_empty() {
        let text = match (&state.error, state.loading) {
            (_, true) => "Loading...".to_string(),
            (Some(error), false) => error.clone(),
            (None, false) => "No campaigns right now".to_string(),
        };
        message(frame, area, panel("Campaigns"), &text);
        return;
    }

    let items: Vec<ListItem> = state
        .campaigns
        .iter()
        .map(|campaign| {
            let mut title = vec![
                Span::styled(campaign.title.clone(), Style::default().fg(HEADER_TEXT)),
                Span::raw("  "),
                status_span(campaign.status),
            ];
            if let Some(progress) = campaign.progress {
                title.push(Span::styled(
                    format!("  {}%", progress),
                    Style::default().fg(BRAND_RED),
                ));
            }
            ListItem::new(vec![
                Line::from(title),
                Line::styled(
                    format_date_range(&campaign.start_date, &campaign.end_date),
                    Style::default().fg(MUTED_TEXT),
                ),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(panel("Campaigns"))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn draw_detail(frame: &mut Frame<'_>, area: Rect, state: &CampaignState) {
    let Some(detail) = &state.detail else {
        message(frame, area, panel("Campaign"), "No campaign selected");
        return;
    };
    let Some(campaign) = &detail.campaign else {
        let text = match &detail.error {
            Some(error) => error.clone(),
            None => "Loading...".to_string(),
        };
        let style = if detail.error.is_some() { STATUS_ERROR } else { MUTED_TEXT };
        frame.render_widget(
            Paragraph::new(Line::styled(text, Style::default().fg(style))).block(panel("Campaign")),
            area,
        );
        return;
    };

    let heading = Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                campaign.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(campaign.badge.clone(), Style::default().fg(BRAND_RED)),
            Span::raw("  "),
            status_span(campaign.status),
        ]),
        Line::styled(
            format_date_range(&campaign.start_date, &campaign.end_date),
            Style::default().fg(MUTED_TEXT),
        ),
        Line::from(""),
        Line::from(
            campaign
                .full_description
                .clone()
                .unwrap_or_else(|| campaign.description.clone()),
        ),
    ];

    let mut section = |title: &str, entries: &[String]| {
        if entries.is_empty() {
            return;
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(title.to_string(), heading));
        lines.extend(entries.iter().map(|entry| Line::from(format!("• {}", entry))));
    };
    section("Parts included", &campaign.parts_included);
    section("Rewards", &campaign.rewards);

    if let Some(terms) = &campaign.terms_and_conditions {
        lines.push(Line::from(""));
        lines.push(Line::styled("Terms & conditions", heading));
        lines.push(Line::from(terms.clone()));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("Campaign"))
            .wrap(Wrap { trim: true }),
        area,
    );
}
