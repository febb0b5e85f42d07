use crate::services::{Campaign, DashboardStats};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    LoadStarted { user_name: Option<String> },
    StatsLoaded(DashboardStats),
    CampaignsLoaded(Vec<Campaign>),
    LoadFailed { message: String },
    LoadFinished,
    /// Quantity added elsewhere (parts screen).
    CartIncreased(u32),
}

impl Intent for HomeIntent {}
