//! Campaign list, detail and the auto-advancing slider used on Home.

mod controller;
mod intent;
mod reducer;
mod slider;
mod state;

pub use controller::CampaignController;
pub use intent::CampaignIntent;
pub use reducer::CampaignReducer;
pub use slider::{CampaignSlider, Swipe};
pub use state::{CampaignDetailState, CampaignState};
