use crate::services::{Campaign, CurrentCampaign};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CampaignIntent {
    LoadStarted,
    Loaded { campaigns: Vec<Campaign> },
    LoadFailed { message: String },
    AchievementLoaded { current: CurrentCampaign },
    SelectNext,
    SelectPrevious,
    DetailOpened { campaign_id: String },
    DetailLoaded { campaign: Campaign },
    DetailFailed { campaign_id: String, message: String },
    DetailClosed,
}

impl Intent for CampaignIntent {}
