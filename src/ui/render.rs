use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Clear, Tabs};
use ratatui::Frame;

use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::navigation::{Screen, Tab};
use crate::ui::theme::{BRAND_RED, MUTED_TEXT};
use crate::ui::views;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let screen = app.screen().clone();

    if screen == Screen::Splash {
        views::splash::draw(frame, area);
        return;
    }

    let (header, body, footer) = layout_regions(area);
    let cart_count = app.home_state().cart_count;
    let unread = app.notifications_state().unread_count;
    frame.render_widget(
        Header::new(screen_title(&screen))
            .cart_count(cart_count)
            .unread(unread)
            .widget(),
        header,
    );
    frame.render_widget(Clear, body);

    match &screen {
        Screen::Splash => {}
        Screen::Login => views::login::draw(frame, body, &app.login_state()),
        Screen::MainTabs(tab) => {
            let (tabs_row, content) = views::split_top(body, 1);
            draw_tabs(frame, tabs_row, *tab);
            match tab {
                Tab::Home => views::home::draw(
                    frame,
                    content,
                    &app.home_state(),
                    &app.campaign_state(),
                    app.slider_index(),
                ),
                Tab::Order => views::parts::draw(frame, content, app),
                Tab::Collection => views::campaign::draw_list(frame, content, &app.campaign_state()),
                Tab::Profile => views::profile::draw(frame, content, &app.profile_state()),
            }
        }
        Screen::Parts => views::parts::draw(frame, body, app),
        Screen::Cart => views::cart::draw(frame, body, &app.cart_state()),
        Screen::CampaignList => views::campaign::draw_list(frame, body, &app.campaign_state()),
        Screen::CampaignDetail { .. } => {
            views::campaign::draw_detail(frame, body, &app.campaign_state())
        }
    }

    frame.render_widget(Footer::new(hints(&screen, app)).widget(footer), footer);

    if app.focus() == Focus::Notifications {
        views::notifications::draw(frame, body, &app.notifications_state());
    }
}

fn draw_tabs(frame: &mut Frame<'_>, area: ratatui::layout::Rect, current: Tab) {
    let index = Tab::ALL.iter().position(|t| *t == current).unwrap_or(0);
    let tabs = Tabs::new(
        Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| format!("{} {}", i + 1, tab.title())),
    )
    .select(index)
    .style(Style::default().fg(MUTED_TEXT))
    .highlight_style(Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn screen_title(screen: &Screen) -> &'static str {
    match screen {
        Screen::Splash => "",
        Screen::Login => "Login",
        Screen::MainTabs(tab) => tab.title(),
        Screen::Parts => "Parts",
        Screen::Cart => "Cart",
        Screen::CampaignList => "Campaigns",
        Screen::CampaignDetail { .. } => "Campaign",
    }
}

fn hints(screen: &Screen, app: &App) -> &'static str {
    if app.quantity().is_visible() {
        return "+/-: Quantity │ 0-9: Type │ Enter: Add to cart │ Esc: Cancel";
    }
    if app.focus() == Focus::Notifications {
        return "↑/↓: Move │ Enter: Mark read │ Esc: Close";
    }
    if app.focus() == Focus::Search {
        return "Type to search │ Enter: Search now │ Esc: Done";
    }
    match screen {
        Screen::Splash => "",
        Screen::Login => "Tab: Next field │ Ctrl+P: Show password │ Enter: Login │ Esc: Quit",
        Screen::MainTabs(Tab::Home) => {
            "←/→: Slide │ Enter: Open │ p: Parts │ a: Campaigns │ c: Cart │ n: Inbox │ Tab: Next tab"
        }
        Screen::MainTabs(Tab::Order) | Screen::Parts => {
            "/: Search │ s: Sort │ Enter: Detail │ a: Add │ c: Cart │ Tab: Next tab"
        }
        Screen::MainTabs(Tab::Collection) | Screen::CampaignList => {
            "↑/↓: Move │ Enter: Detail │ Esc: Back"
        }
        Screen::MainTabs(Tab::Profile) => "r: Refresh │ l: Logout │ Tab: Next tab │ q: Quit",
        Screen::Cart => "+/-: Quantity │ e: Edit │ d: Delete │ x: Clear │ r: Reload │ Esc: Back",
        Screen::CampaignDetail { .. } => "Esc: Back",
    }
}
