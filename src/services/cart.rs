use serde::de::IgnoredAny;

use crate::api::{ApiClient, ApiResponse};

use super::models::{AddToCartRequest, AddToCartResponse, Cart, UpdateCartRequest};

#[derive(Clone)]
pub struct CartService {
    api: ApiClient,
}

impl CartService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /cart`
    pub async fn get_cart(&self) -> ApiResponse<Cart> {
        self.api.get("/cart").await
    }

    /// `POST /cart/add`
    pub async fn add(&self, part_id: &str, quantity: u32) -> ApiResponse<AddToCartResponse> {
        let body = AddToCartRequest {
            part_id: part_id.to_string(),
            quantity,
        };
        self.api.post("/cart/add", Some(&body)).await
    }

    /// `PUT /cart/{id}`
    pub async fn update(&self, item_id: &str, quantity: u32) -> ApiResponse<IgnoredAny> {
        let body = UpdateCartRequest { quantity };
        self.api.put(&format!("/cart/{}", item_id), Some(&body)).await
    }

    /// `DELETE /cart/{id}`
    pub async fn remove(&self, item_id: &str) -> ApiResponse<IgnoredAny> {
        self.api.delete(&format!("/cart/{}", item_id)).await
    }

    /// `DELETE /cart/clear`
    pub async fn clear(&self) -> ApiResponse<IgnoredAny> {
        self.api.delete("/cart/clear").await
    }
}
