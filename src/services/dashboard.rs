use crate::api::{ApiClient, ApiResponse};

use super::models::DashboardStats;

#[derive(Clone)]
pub struct DashboardService {
    api: ApiClient,
}

impl DashboardService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn stats(&self) -> ApiResponse<DashboardStats> {
        self.api.get("/dashboard/stats").await
    }
}
