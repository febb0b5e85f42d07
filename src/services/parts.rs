use crate::api::{ApiClient, ApiResponse};

use super::models::{Part, PartsPage, PartsQuery};

#[derive(Clone)]
pub struct PartsService {
    api: ApiClient,
}

impl PartsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /parts?page&limit&search&category&sortBy&order`
    pub async fn list(&self, query: &PartsQuery) -> ApiResponse<PartsPage> {
        self.api.get_with_query("/parts", &query.to_pairs()).await
    }

    /// `GET /parts/{id}`; accepts a part id or a part number.
    pub async fn detail(&self, id: &str) -> ApiResponse<Part> {
        self.api.get(&format!("/parts/{}", id)).await
    }
}
