use serde::de::IgnoredAny;

use crate::api::{ApiClient, ApiResponse};

use super::models::NotificationsPage;

#[derive(Clone)]
pub struct NotificationService {
    api: ApiClient,
}

impl NotificationService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /notifications?page&limit`, omitting unset parameters.
    pub async fn list(&self, page: Option<u32>, limit: Option<u32>) -> ApiResponse<NotificationsPage> {
        let mut query = Vec::new();
        if let Some(page) = page.filter(|p| *p > 0) {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = limit.filter(|l| *l > 0) {
            query.push(("limit", limit.to_string()));
        }
        self.api.get_with_query("/notifications", &query).await
    }

    /// `PUT /notifications/{id}/read`
    pub async fn mark_read(&self, id: &str) -> ApiResponse<IgnoredAny> {
        self.api
            .put(&format!("/notifications/{}/read", id), None::<&()>)
            .await
    }
}
