//! Thin typed wrappers, one per backend resource.
//!
//! Each method maps to exactly one endpoint and returns the raw
//! [`ApiResponse`](crate::api::ApiResponse) envelope.

mod campaign;
mod cart;
mod dashboard;
mod models;
mod notification;
mod parts;

pub use campaign::CampaignService;
pub use cart::CartService;
pub use dashboard::DashboardService;
pub use models::{
    AddToCartRequest, AddToCartResponse, Achievement, Availability, Campaign, CampaignStatus,
    Cart, CartItem, CartSummary, CurrentCampaign, DashboardStats, Notification,
    NotificationKind, NotificationsPage, Pagination, Part, PartsPage, PartsQuery, SortBy,
    SortOrder, UpdateCartRequest, User,
};
pub use notification::NotificationService;
pub use parts::PartsService;

use crate::api::ApiClient;
use crate::config::Config;
use crate::session::{AuthService, SessionStore};

/// Every service, sharing one HTTP client and session.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub parts: PartsService,
    pub cart: CartService,
    pub campaigns: CampaignService,
    pub dashboard: DashboardService,
    pub notifications: NotificationService,
}

impl Services {
    pub fn new(config: &Config, session: SessionStore) -> Result<Self, reqwest::Error> {
        let api = ApiClient::new(&config.api, session)?;
        Ok(Self::from_client(api))
    }

    pub fn from_client(api: ApiClient) -> Self {
        Self {
            auth: AuthService::new(api.clone()),
            parts: PartsService::new(api.clone()),
            cart: CartService::new(api.clone()),
            campaigns: CampaignService::new(api.clone()),
            dashboard: DashboardService::new(api.clone()),
            notifications: NotificationService::new(api),
        }
    }
}
