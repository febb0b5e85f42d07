use crate::services::{Campaign, CurrentCampaign};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CampaignDetailState {
    /// Id the screen was opened with; responses for other ids are ignored.
    pub campaign_id: String,
    pub campaign: Option<Campaign>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CampaignState {
    pub campaigns: Vec<Campaign>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: usize,
    pub achievement: Option<CurrentCampaign>,
    pub detail: Option<CampaignDetailState>,
}

impl UiState for CampaignState {}

impl CampaignState {
    pub fn selected_campaign(&self) -> Option<&Campaign> {
        self.campaigns.get(self.selected)
    }
}
