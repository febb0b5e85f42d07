use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::campaign::CampaignState;
use crate::ui::format::{format_date, format_date_range};
use crate::ui::home::HomeState;
use crate::ui::theme::{BRAND_RED, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

use super::{message, panel};

pub fn draw(
    frame: &mut Frame<'_>,
    area: Rect,
    home: &HomeState,
    campaigns: &CampaignState,
    slide: usize,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(6),
        ])
        .split(area);

    draw_stats(frame, rows[0], home);
    draw_achievement(frame, rows[1], campaigns);
    draw_slider(frame, rows[2], home, slide);
}

fn draw_stats(frame: &mut Frame<'_>, area: Rect, home: &HomeState) {
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::styled(
        home.greeting(),
        Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
    )];
    match &home.stats {
        Some(stats) => lines.push(Line::from(vec![
            Span::styled("Delivery ", label),
            Span::styled(stats.delivery_progress.clone(), value),
            Span::styled("   Monthly buy-in ", label),
            Span::styled(stats.monthly_buy_in.clone(), value),
        ])),
        None if home.loading => lines.push(Line::styled("Loading...", label)),
        None => {}
    }
    if let Some(error) = &home.error {
        lines.push(Line::styled(error.clone(), Style::default().fg(STATUS_ERROR)));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_achievement(frame: &mut Frame<'_>, area: Rect, campaigns: &CampaignState) {
    let Some(current) = &campaigns.achievement else {
        return;
    };
    let ratio = (current.achievement_percentage / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(panel(&format!(
            "{} · until {}",
            current.title,
            format_date(&current.end_date)
        )))
        .gauge_style(Style::default().fg(BRAND_RED))
        .ratio(ratio)
        .label(current.achievement_label.clone());
    frame.render_widget(gauge, area);
}

fn draw_slider(frame: &mut Frame<'_>, area: Rect, home: &HomeState, slide: usize) {
    let count = home.campaigns.len();
    let Some(campaign) = home.campaigns.get(slide) else {
        let text = if home.loading { "Loading..." } else { "No campaigns right now" };
        message(frame, area, panel("Campaigns"), text);
        return;
    };

    let dots: String = (0..count)
        .map(|i| if i == slide { '●' } else { '○' })
        .collect();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                campaign.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(campaign.badge.clone(), Style::default().fg(BRAND_RED)),
        ]),
        Line::styled(
            format_date_range(&campaign.start_date, &campaign.end_date),
            Style::default().fg(MUTED_TEXT),
        ),
        Line::from(""),
        Line::from(campaign.description.clone()),
    ];
    lines.push(Line::from(""));
    lines.push(Line::styled(dots, Style::default().fg(BRAND_RED)));

    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("Campaigns"))
            .wrap(Wrap { trim: true }),
        area,
    );
}
