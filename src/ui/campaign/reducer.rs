use crate::ui::mvi::Reducer;

use super::intent::CampaignIntent;
use super::state::{CampaignDetailState, CampaignState};

pub struct CampaignReducer;

impl Reducer for CampaignReducer {
    type State = CampaignState;
    type Intent = CampaignIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CampaignIntent::LoadStarted => {
                state.loading = true;
                state.error = None;
            }
            CampaignIntent::Loaded { campaigns } => {
                state.campaigns = campaigns;
                state.loading = false;
                state.selected = state.selected.min(state.campaigns.len().saturating_sub(1));
            }
            CampaignIntent::LoadFailed { message } => {
                state.campaigns.clear();
                state.selected = 0;
                state.loading = false;
                state.error = Some(message);
            }
            CampaignIntent::AchievementLoaded { current } => {
                state.achievement = Some(current);
            }
            CampaignIntent::SelectNext => {
                if state.selected + 1 < state.campaigns.len() {
                    state.selected += 1;
                }
            }
            CampaignIntent::SelectPrevious => {
                state.selected = state.selected.saturating_sub(1);
            }
            CampaignIntent::DetailOpened { campaign_id } => {
                state.detail = Some(CampaignDetailState {
                    campaign_id,
                    campaign: None,
                    loading: true,
                    error: None,
                });
            }
            CampaignIntent::DetailLoaded { campaign } => {
                if let Some(detail) = state
                    .detail
                    .as_mut()
                    .filter(|d| d.campaign_id == campaign.id)
                {
                    detail.campaign = Some(campaign);
                    detail.loading = false;
                }
            }
            CampaignIntent::DetailFailed {
                campaign_id,
                message,
            } => {
                if let Some(detail) = state
                    .detail
                    .as_mut()
                    .filter(|d| d.campaign_id == campaign_id)
                {
                    detail.loading = false;
                    detail.error = Some(message);
                }
            }
            CampaignIntent::DetailClosed => state.detail = None,
        }
        state
    }
}
