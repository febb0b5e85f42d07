use crate::api::{ApiClient, ApiResponse};

use super::models::{Achievement, Campaign};

#[derive(Clone)]
pub struct CampaignService {
    api: ApiClient,
}

impl CampaignService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResponse<Vec<Campaign>> {
        self.api.get("/campaigns").await
    }

    pub async fn detail(&self, id: &str) -> ApiResponse<Campaign> {
        self.api.get(&format!("/campaigns/{}", id)).await
    }

    pub async fn my_achievement(&self) -> ApiResponse<Achievement> {
        self.api.get("/campaigns/my-achievement").await
    }
}
