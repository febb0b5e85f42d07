use crate::services::CampaignService;
use crate::ui::mvi::Store;

use super::intent::CampaignIntent;
use super::reducer::CampaignReducer;

#[derive(Clone)]
pub struct CampaignController {
    service: CampaignService,
    store: Store<CampaignReducer>,
}

impl CampaignController {
    pub fn new(service: CampaignService, store: Store<CampaignReducer>) -> Self {
        Self { service, store }
    }

    pub fn store(&self) -> &Store<CampaignReducer> {
        &self.store
    }

    pub fn reset(&self) {
        self.store.reset();
    }

    pub async fn load(&self) {
        self.store.dispatch(CampaignIntent::LoadStarted);
        match self.service.list().await.into_result() {
            Ok(campaigns) => self.store.dispatch(CampaignIntent::Loaded {
                campaigns: campaigns.unwrap_or_default(),
            }),
            Err(error) => {
                tracing::warn!(code = %error.code, message = %error.message, "Failed to load campaigns");
                self.store.dispatch(CampaignIntent::LoadFailed {
                    message: error.message,
                });
            }
        }
    }

    /// Achievement is optional decoration; failures are only logged.
    pub async fn load_achievement(&self) {
        match self.service.my_achievement().await.into_data() {
            Ok(achievement) => self.store.dispatch(CampaignIntent::AchievementLoaded {
                current: achievement.current_campaign,
            }),
            Err(error) => {
                tracing::debug!(code = %error.code, "No campaign achievement available");
            }
        }
    }

    pub async fn open_detail(&self, campaign_id: &str) {
        self.store.dispatch(CampaignIntent::DetailOpened {
            campaign_id: campaign_id.to_string(),
        });
        match self.service.detail(campaign_id).await.into_data() {
            Ok(campaign) => self.store.dispatch(CampaignIntent::DetailLoaded { campaign }),
            Err(error) => {
                tracing::warn!(campaign_id, code = %error.code, "Failed to load campaign detail");
                self.store.dispatch(CampaignIntent::DetailFailed {
                    campaign_id: campaign_id.to_string(),
                    message: error.message,
                });
            }
        }
    }

    pub fn close_detail(&self) {
        self.store.dispatch(CampaignIntent::DetailClosed);
    }
}
