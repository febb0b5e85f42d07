//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use partorder::api::ApiClient;
use partorder::config::ApiConfig;
use partorder::services::{Services, User};
use partorder::session::{SessionStore, SessionToken};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "token-abc-123";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL nothing listens on.
pub fn closed_url() -> String {
    format!("http://127.0.0.1:{}/api", free_port())
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

pub fn client(base_url: &str, session: SessionStore) -> ApiClient {
    ApiClient::new(&api_config(base_url), session).expect("Failed to build API client")
}

pub fn services(base_url: &str, session: SessionStore) -> Services {
    Services::from_client(client(base_url, session))
}

pub fn test_user() -> User {
    User {
        id: "7".to_string(),
        username: Some("budi".to_string()),
        name: "Budi Santoso".to_string(),
        email: "budi@example.com".to_string(),
        role: "dealer".to_string(),
    }
}

/// In-memory session already holding [`TEST_TOKEN`] and [`test_user`].
pub fn logged_in_session() -> SessionStore {
    let session = SessionStore::in_memory();
    session
        .save(&SessionToken::new(TEST_TOKEN), &test_user())
        .expect("Failed to seed session");
    session
}

pub fn user_json() -> Value {
    json!({
        "id": 7,
        "username": "budi",
        "name": "Budi Santoso",
        "email": "budi@example.com",
        "role": "dealer"
    })
}

pub fn part_json(id: u32, is_ready: bool) -> Value {
    json!({
        "id": id.to_string(),
        "partNumber": format!("PN-{:04}", id),
        "name": format!("Brake Pad {}", id),
        "description": "Front brake pad set",
        "price": 23500,
        "image": "",
        "category": "brakes",
        "isReady": is_ready
    })
}

/// Parts page envelope data with an explicit `hasMore`.
pub fn parts_page_json(ids: std::ops::RangeInclusive<u32>, page: u32, has_more: bool) -> Value {
    let items: Vec<Value> = ids.map(|id| part_json(id, true)).collect();
    json!({
        "items": items,
        "pagination": { "currentPage": page, "perPage": 20, "hasMore": has_more }
    })
}

pub fn cart_item_json(id: &str, price: u64, quantity: u32) -> Value {
    json!({
        "id": id,
        "partId": format!("part-{}", id),
        "partNumber": format!("PN-{}", id),
        "name": format!("Oil Filter {}", id),
        "image": "",
        "price": price,
        "quantity": quantity,
        "subtotal": price * u64::from(quantity),
        "isReady": true
    })
}

pub fn cart_json(items: Vec<Value>) -> Value {
    json!({ "items": items })
}

pub fn campaign_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "badge": "NEW",
        "description": "Buy more, earn more",
        "image": "",
        "startDate": "2026-10-01",
        "endDate": "2026-12-31",
        "status": "active",
        "progress": 40,
        "partsIncluded": ["Brake Pad"],
        "rewards": ["Gold voucher"]
    })
}

pub fn notification_json(id: &str, is_read: bool) -> Value {
    json!({
        "id": id,
        "title": "Order shipped",
        "message": "Your order is on its way",
        "type": "info",
        "isRead": is_read,
        "createdAt": "2026-10-16T08:00:00Z"
    })
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
