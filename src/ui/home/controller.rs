use crate::services::{CampaignService, DashboardService};
use crate::session::SessionStore;
use crate::ui::mvi::Store;

use super::intent::HomeIntent;
use super::reducer::HomeReducer;

#[derive(Clone)]
pub struct HomeController {
    session: SessionStore,
    dashboard: DashboardService,
    campaigns: CampaignService,
    store: Store<HomeReducer>,
}

impl HomeController {
    pub fn new(
        session: SessionStore,
        dashboard: DashboardService,
        campaigns: CampaignService,
        store: Store<HomeReducer>,
    ) -> Self {
        Self {
            session,
            dashboard,
            campaigns,
            store,
        }
    }

    pub fn store(&self) -> &Store<HomeReducer> {
        &self.store
    }

    pub fn reset(&self) {
        self.store.reset();
    }

    /// Stats and campaigns are fetched concurrently; either may fail alone.
    pub async fn load(&self) {
        let user_name = self.session.user().map(|user| user.name);
        self.store.dispatch(HomeIntent::LoadStarted { user_name });

        let (stats, campaigns) = tokio::join!(self.dashboard.stats(), self.campaigns.list());

        match stats.into_data() {
            Ok(stats) => self.store.dispatch(HomeIntent::StatsLoaded(stats)),
            Err(error) => {
                tracing::warn!(code = %error.code, message = %error.message, "Failed to load dashboard stats");
                self.store.dispatch(HomeIntent::LoadFailed {
                    message: error.message,
                });
            }
        }
        match campaigns.into_result() {
            Ok(campaigns) => self
                .store
                .dispatch(HomeIntent::CampaignsLoaded(campaigns.unwrap_or_default())),
            Err(error) => {
                tracing::warn!(code = %error.code, message = %error.message, "Failed to load campaigns");
                self.store.dispatch(HomeIntent::LoadFailed {
                    message: error.message,
                });
            }
        }
        self.store.dispatch(HomeIntent::LoadFinished);
    }

    pub fn cart_increased(&self, quantity: u32) {
        self.store.dispatch(HomeIntent::CartIncreased(quantity));
    }
}
