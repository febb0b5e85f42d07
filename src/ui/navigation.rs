//! Screen graph and the navigation stack.

/// Bottom tabs of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    /// Parts catalogue.
    Order,
    /// Campaigns.
    Collection,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Order, Tab::Collection, Tab::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Order => "Order",
            Tab::Collection => "Collection",
            Tab::Profile => "Profile",
        }
    }

    pub fn next(self) -> Tab {
        let i = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(i + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        let i = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(i + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Login,
    MainTabs(Tab),
    Parts,
    Cart,
    CampaignList,
    CampaignDetail { campaign_id: String },
}

/// Stack of screens; the last entry is visible.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Screen::Splash],
        }
    }
}

impl Navigator {
    pub fn current(&self) -> &Screen {
        // The stack is never empty: `back` keeps the root and `replace`/`reset` push.
        self.stack.last().unwrap_or(&Screen::Splash)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, screen: Screen) {
        if self.current() != &screen {
            self.stack.push(screen);
        }
    }

    /// Swap the visible screen without growing the stack.
    pub fn replace(&mut self, screen: Screen) {
        self.stack.pop();
        self.stack.push(screen);
    }

    /// Drop the whole history and show `screen`.
    pub fn reset(&mut self, screen: Screen) {
        self.stack.clear();
        self.stack.push(screen);
    }

    /// Pop one screen. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Switch tab when the main screen is visible.
    pub fn select_tab(&mut self, tab: Tab) {
        if let Some(Screen::MainTabs(current)) = self.stack.last_mut() {
            *current = tab;
        }
    }

    pub fn current_tab(&self) -> Option<Tab> {
        match self.current() {
            Screen::MainTabs(tab) => Some(*tab),
            _ => None,
        }
    }

    /// Leave the splash for the main tabs or the login form.
    pub fn finish_splash(&mut self, logged_in: bool) {
        if self.current() == &Screen::Splash {
            self.reset(if logged_in {
                Screen::MainTabs(Tab::Home)
            } else {
                Screen::Login
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splash_leads_to_login_or_home() {
        let mut nav = Navigator::default();
        nav.finish_splash(false);
        assert_eq!(nav.current(), &Screen::Login);

        let mut nav = Navigator::default();
        nav.finish_splash(true);
        assert_eq!(nav.current(), &Screen::MainTabs(Tab::Home));
        assert!(!nav.back());
    }

    #[test]
    fn login_replaced_by_main_tabs() {
        let mut nav = Navigator::default();
        nav.finish_splash(false);
        nav.replace(Screen::MainTabs(Tab::Home));
        assert_eq!(nav.depth(), 1);
        assert!(!nav.back());
    }

    #[test]
    fn push_and_back() {
        let mut nav = Navigator::default();
        nav.finish_splash(true);
        nav.select_tab(Tab::Collection);
        nav.push(Screen::CampaignDetail {
            campaign_id: "4".to_string(),
        });
        nav.push(Screen::Cart);
        nav.push(Screen::Cart);
        assert_eq!(nav.depth(), 3);

        assert!(nav.back());
        assert!(nav.back());
        assert_eq!(nav.current_tab(), Some(Tab::Collection));
    }

    #[test]
    fn tabs_wrap() {
        assert_eq!(Tab::Profile.next(), Tab::Home);
        assert_eq!(Tab::Home.previous(), Tab::Profile);
    }
}
