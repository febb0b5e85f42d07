use crate::ui::mvi::Reducer;

use super::intent::HomeIntent;
use super::state::HomeState;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::LoadStarted { user_name } => {
                state.user_name = user_name;
                state.loading = true;
                state.error = None;
            }
            HomeIntent::StatsLoaded(stats) => {
                state.cart_count = stats.cart_count;
                state.stats = Some(stats);
            }
            HomeIntent::CampaignsLoaded(campaigns) => state.campaigns = campaigns,
            // Keep whatever loaded; show the first failure.
            HomeIntent::LoadFailed { message } => {
                state.error.get_or_insert(message);
            }
            HomeIntent::LoadFinished => state.loading = false,
            HomeIntent::CartIncreased(quantity) => {
                state.cart_count = state.cart_count.saturating_add(quantity);
            }
        }
        state
    }
}
