use crate::services::{Campaign, DashboardStats};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub user_name: Option<String>,
    pub stats: Option<DashboardStats>,
    pub campaigns: Vec<Campaign>,
    pub cart_count: u32,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState for HomeState {}

impl HomeState {
    pub fn greeting(&self) -> String {
        match &self.user_name {
            Some(name) => format!("Hello, {}", name),
            None => "Hello".to_string(),
        }
    }
}
