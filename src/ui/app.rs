use std::future::Future;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;

use crate::config::UiConfig;
use crate::services::Services;
use crate::session::SessionStore;
use crate::ui::campaign::{CampaignController, CampaignSlider, CampaignState, Swipe};
use crate::ui::cart::{CartController, CartIntent, CartPress, CartPresses, CartState};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::home::{HomeController, HomeState};
use crate::ui::login::{LoginController, LoginIntent, LoginOutcome, LoginState};
use crate::ui::mvi::{Reducer, Store};
use crate::ui::navigation::{Navigator, Screen, Tab};
use crate::ui::notifications::{NotificationsController, NotificationsIntent, NotificationsState};
use crate::ui::parts::{
    AddOutcome, PartsController, PartsIntent, PartsSort, PartsState, SearchDebounce,
};
use crate::ui::profile::{ProfileController, ProfileState};
use crate::ui::quantity::{Confirmation, QuantityDialogState, QuantityIntent, QuantityReducer};

const SPLASH_DURATION: Duration = Duration::from_millis(1200);

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// What has keyboard focus inside the current screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Screen,
    Search,
    Notifications,
}

pub struct App {
    runtime: Handle,
    events: Sender<AppEvent>,
    session: SessionStore,
    navigator: Navigator,
    focus: Focus,
    login: LoginController,
    home: HomeController,
    parts: PartsController,
    cart: CartController,
    cart_presses: CartPresses,
    campaigns: CampaignController,
    notifications: NotificationsController,
    profile: ProfileController,
    /// Quantity picker over the parts screen (MVI pattern, owned by the UI thread).
    quantity: QuantityDialogState,
    debounce: SearchDebounce,
    slider: CampaignSlider,
    slider_interval: Duration,
    splash_until: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(services: Services, ui: &UiConfig, runtime: Handle, events: &EventHandler) -> Self {
        let redraw = events.redraw_notifier();
        let now = Instant::now();
        let session = services.auth.store().clone();
        let cart = CartController::new(
            services.cart.clone(),
            Store::default().with_listener(redraw.clone()),
        );
        let cart_presses = CartPresses::start(cart.clone(), &runtime);

        Self {
            runtime,
            events: events.sender(),
            navigator: Navigator::default(),
            focus: Focus::Screen,
            login: LoginController::new(
                services.auth.clone(),
                Store::default().with_listener(redraw.clone()),
            ),
            home: HomeController::new(
                session.clone(),
                services.dashboard.clone(),
                services.campaigns.clone(),
                Store::default().with_listener(redraw.clone()),
            ),
            parts: PartsController::new(
                services.parts.clone(),
                services.cart.clone(),
                Store::default().with_listener(redraw.clone()),
                ui.page_size,
            ),
            cart,
            cart_presses,
            campaigns: CampaignController::new(
                services.campaigns.clone(),
                Store::default().with_listener(redraw.clone()),
            ),
            notifications: NotificationsController::new(
                services.notifications.clone(),
                Store::default().with_listener(redraw.clone()),
            ),
            profile: ProfileController::new(
                services.auth.clone(),
                Store::default().with_listener(redraw),
            ),
            session,
            quantity: QuantityDialogState::default(),
            debounce: SearchDebounce::new(ui.search_debounce()),
            slider: CampaignSlider::new(ui.slider_interval(), now),
            slider_interval: ui.slider_interval(),
            splash_until: now + SPLASH_DURATION,
            should_quit: false,
        }
    }

    fn spawn(&self, future: impl Future<Output = ()> + Send + 'static) {
        self.runtime.spawn(future);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &Screen {
        self.navigator.current()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn login_state(&self) -> LoginState {
        self.login.store().snapshot()
    }

    pub fn home_state(&self) -> HomeState {
        self.home.store().snapshot()
    }

    pub fn parts_state(&self) -> PartsState {
        self.parts.store().snapshot()
    }

    pub fn cart_state(&self) -> CartState {
        self.cart.store().snapshot()
    }

    pub fn campaign_state(&self) -> CampaignState {
        self.campaigns.store().snapshot()
    }

    pub fn notifications_state(&self) -> NotificationsState {
        self.notifications.store().snapshot()
    }

    pub fn profile_state(&self) -> ProfileState {
        self.profile.store().snapshot()
    }

    pub fn quantity(&self) -> &QuantityDialogState {
        &self.quantity
    }

    pub fn slider_index(&self) -> usize {
        self.slider.index()
    }

    // Navigation

    /// Start loading whatever the newly visible screen shows.
    fn enter_current(&mut self) {
        self.focus = Focus::Screen;
        match self.navigator.current().clone() {
            Screen::Splash => {}
            Screen::Login => self.login.store().dispatch(LoginIntent::Reset),
            Screen::MainTabs(Tab::Home) => {
                self.slider = CampaignSlider::new(self.slider_interval, Instant::now());
                let home = self.home.clone();
                self.spawn(async move { home.load().await });
                let campaigns = self.campaigns.clone();
                self.spawn(async move { campaigns.load_achievement().await });
            }
            Screen::MainTabs(Tab::Order) | Screen::Parts => {
                let idle = self
                    .parts
                    .store()
                    .read(|s| s.items.is_empty() && s.in_flight.is_none());
                if idle {
                    let parts = self.parts.clone();
                    self.spawn(async move { parts.refresh().await });
                }
            }
            Screen::MainTabs(Tab::Collection) | Screen::CampaignList => {
                let campaigns = self.campaigns.clone();
                self.spawn(async move { campaigns.load().await });
            }
            Screen::MainTabs(Tab::Profile) => {
                let profile = self.profile.clone();
                self.spawn(async move { profile.load().await });
            }
            Screen::Cart => {
                let cart = self.cart.clone();
                self.spawn(async move { cart.load().await });
            }
            Screen::CampaignDetail { campaign_id } => {
                let campaigns = self.campaigns.clone();
                self.spawn(async move { campaigns.open_detail(&campaign_id).await });
            }
        }
    }

    /// Drop every screen's state so the next user starts clean.
    fn discard_screens(&mut self) {
        self.home.reset();
        self.parts.reset();
        self.cart.reset();
        self.campaigns.reset();
        self.notifications.reset();
        self.profile.reset();
        self.quantity = QuantityDialogState::default();
        self.debounce.cancel();
        self.slider = CampaignSlider::new(self.slider_interval, Instant::now());
    }

    pub fn push(&mut self, screen: Screen) {
        self.navigator.push(screen);
        self.enter_current();
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.navigator.current_tab() != Some(tab) {
            self.navigator.select_tab(tab);
            self.enter_current();
        }
    }

    pub fn back(&mut self) {
        if matches!(self.navigator.current(), Screen::CampaignDetail { .. }) {
            self.campaigns.close_detail();
        }
        if self.navigator.back() {
            self.focus = Focus::Screen;
        }
    }

    // Events

    pub fn on_tick(&mut self, now: Instant) {
        if self.navigator.current() == &Screen::Splash && now >= self.splash_until {
            self.navigator.finish_splash(self.session.is_logged_in());
            self.enter_current();
        }

        let on_parts = matches!(
            self.navigator.current(),
            Screen::MainTabs(Tab::Order) | Screen::Parts
        );
        if !on_parts {
            self.debounce.cancel();
        } else if let Some(query) = self.debounce.poll(now) {
            self.search(query);
        }

        if self.navigator.current_tab() == Some(Tab::Home) {
            let count = self.home.store().read(|s| s.campaigns.len());
            self.slider.set_count(count);
            self.slider.on_tick(now);
        }
    }

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.on_tick(Instant::now()),
            AppEvent::LoggedIn(user) => {
                tracing::debug!(user_id = %user.id, "Entering main tabs");
                self.navigator.replace(Screen::MainTabs(Tab::Home));
                self.enter_current();
            }
            AppEvent::LoggedOut => {
                self.discard_screens();
                self.navigator.reset(Screen::Login);
                self.enter_current();
            }
            AppEvent::AddedToCart { quantity } => self.home.cart_increased(quantity),
            AppEvent::Shutdown => self.request_quit(),
            AppEvent::Key(_) | AppEvent::Resize(..) | AppEvent::Refresh => {}
        }
    }

    // Login

    pub fn login_intent(&mut self, intent: LoginIntent) {
        self.login.store().dispatch(intent);
    }

    pub fn submit_login(&mut self) {
        let login = self.login.clone();
        let events = self.events.clone();
        self.spawn(async move {
            if let LoginOutcome::LoggedIn(user) = login.submit().await {
                let _ = events.send(AppEvent::LoggedIn(user));
            }
        });
    }

    // Home

    pub fn swipe_slider(&mut self, direction: Swipe) {
        let count = self.home.store().read(|s| s.campaigns.len());
        self.slider.set_count(count);
        self.slider.swipe(direction, Instant::now());
    }

    /// Campaign under the slider, if any.
    pub fn open_slider_campaign(&mut self) {
        let index = self.slider.index();
        let id = self
            .home
            .store()
            .read(|s| s.campaigns.get(index).map(|c| c.id.clone()));
        if let Some(campaign_id) = id {
            self.push(Screen::CampaignDetail { campaign_id });
        }
    }

    // Parts

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn blur(&mut self) {
        self.focus = Focus::Screen;
    }

    pub fn search_input(&mut self, ch: Option<char>) {
        let mut text = self.parts.store().read(|s| s.input.clone());
        match ch {
            Some(ch) => text.push(ch),
            None => {
                text.pop();
            }
        }
        self.parts
            .store()
            .dispatch(PartsIntent::InputChanged(text.clone()));
        self.debounce.input(text, Instant::now());
    }

    pub fn search_now(&mut self) {
        let query = self
            .debounce
            .flush()
            .unwrap_or_else(|| self.parts.store().read(|s| s.input.clone()));
        self.search(query);
        self.focus = Focus::Screen;
    }

    fn search(&self, query: String) {
        let parts = self.parts.clone();
        self.spawn(async move { parts.search(&query).await });
    }

    pub fn cycle_sort(&mut self) {
        let next = self.parts.store().read(|s| PartsSort::cycle(s.sort));
        self.parts.store().dispatch(PartsIntent::SortChanged(next));
        let parts = self.parts.clone();
        self.spawn(async move { parts.refresh().await });
    }

    pub fn parts_intent(&mut self, intent: PartsIntent) {
        self.parts.store().dispatch(intent);
    }

    /// Move the selection down, fetching the next page at the end of the list.
    pub fn select_next_part(&mut self) {
        let at_end = self
            .parts
            .store()
            .dispatch_then(PartsIntent::SelectNext, |s| {
                s.selected + 1 >= s.items.len()
            });
        if at_end {
            let parts = self.parts.clone();
            self.spawn(async move { parts.load_more().await });
        }
    }

    pub fn open_part_detail(&mut self) {
        if let Some(part) = self.parts.store().read(|s| s.selected_part().cloned()) {
            let parts = self.parts.clone();
            self.spawn(async move { parts.open_detail(part).await });
        }
    }

    pub fn open_quantity_dialog(&mut self) {
        let part = self
            .parts
            .store()
            .read(|s| s.detail.clone().or_else(|| s.selected_part().cloned()));
        if let Some(part) = part {
            dispatch_mvi!(self, quantity, QuantityReducer, QuantityIntent::Open { part });
        }
    }

    pub fn quantity_intent(&mut self, intent: QuantityIntent) {
        dispatch_mvi!(self, quantity, QuantityReducer, intent);
    }

    pub fn confirm_quantity(&mut self) {
        let confirmation = self.quantity.confirmation();
        dispatch_mvi!(self, quantity, QuantityReducer, QuantityIntent::Close);

        let (part, quantity) = match confirmation {
            Some(Confirmation::Add { part, quantity }) => (part, quantity),
            Some(Confirmation::NotReady) => {
                self.parts.alert_not_ready();
                return;
            }
            None => return,
        };

        let parts = self.parts.clone();
        let events = self.events.clone();
        self.spawn(async move {
            if let AddOutcome::Added { quantity } = parts.add_to_cart(&part, quantity).await {
                let _ = events.send(AppEvent::AddedToCart { quantity });
            }
        });
    }

    // Cart

    pub fn cart_intent(&mut self, intent: CartIntent) {
        self.cart.store().dispatch(intent);
    }

    fn selected_cart_item(&self) -> Option<String> {
        self.cart
            .store()
            .read(|s| s.selected_line().map(|line| line.item.id.clone()))
    }

    fn press_cart_item(&mut self, press: CartPress) {
        if let Some(id) = self.selected_cart_item() {
            self.cart_presses.press(id, press);
        }
    }

    pub fn increment_cart_item(&mut self) {
        self.press_cart_item(CartPress::Increment);
    }

    pub fn decrement_cart_item(&mut self) {
        self.press_cart_item(CartPress::Decrement);
    }

    pub fn delete_cart_item(&mut self) {
        self.press_cart_item(CartPress::Delete);
    }

    /// Send the typed quantity and leave edit mode.
    pub fn commit_cart_edit(&mut self) {
        let text = self.cart.store().read(|s| s.edit_buffer.clone());
        self.cart.store().dispatch(CartIntent::EndEdit);
        if let Some(text) = text {
            self.press_cart_item(CartPress::SetQuantity(text));
        }
    }

    pub fn clear_cart(&mut self) {
        let cart = self.cart.clone();
        self.spawn(async move {
            cart.clear().await;
        });
    }

    pub fn reload_cart(&mut self) {
        let cart = self.cart.clone();
        self.spawn(async move { cart.load().await });
    }

    // Campaigns

    pub fn campaign_intent(&mut self, intent: crate::ui::campaign::CampaignIntent) {
        self.campaigns.store().dispatch(intent);
    }

    pub fn open_selected_campaign(&mut self) {
        let id = self
            .campaigns
            .store()
            .read(|s| s.selected_campaign().map(|c| c.id.clone()));
        if let Some(campaign_id) = id {
            self.push(Screen::CampaignDetail { campaign_id });
        }
    }

    // Notifications

    pub fn toggle_notifications(&mut self) {
        if self.focus == Focus::Notifications {
            self.focus = Focus::Screen;
        } else {
            self.focus = Focus::Notifications;
            let notifications = self.notifications.clone();
            self.spawn(async move { notifications.load().await });
        }
    }

    pub fn notifications_intent(&mut self, intent: NotificationsIntent) {
        self.notifications.store().dispatch(intent);
    }

    pub fn mark_selected_notification_read(&mut self) {
        let id = self
            .notifications
            .store()
            .read(|s| s.selected_item().filter(|n| !n.is_read).map(|n| n.id.clone()));
        if let Some(id) = id {
            let notifications = self.notifications.clone();
            self.spawn(async move {
                let _ = notifications.mark_read(&id).await;
            });
        }
    }

    // Profile

    pub fn logout(&mut self) {
        let profile = self.profile.clone();
        let events = self.events.clone();
        self.spawn(async move {
            profile.logout().await;
            let _ = events.send(AppEvent::LoggedOut);
        });
    }

    pub fn refresh_profile(&mut self) {
        let profile = self.profile.clone();
        self.spawn(async move { profile.load().await });
    }
}
