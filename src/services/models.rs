//! Flat records mirrored from API responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Ids arrive as strings from some endpoints and numbers from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Int(value) => value.to_string(),
    })
}

/// Rupiah amounts: whole numbers, but some endpoints send `23500.0` or
/// `"23500"`. Fractions are rounded to the nearest rupiah.
fn rupiah<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Whole(u64),
        Fraction(f64),
        Text(String),
    }

    let value = match Amount::deserialize(deserializer)? {
        Amount::Whole(value) => return Ok(value),
        Amount::Fraction(value) => value,
        Amount::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount '{}'", text)))?,
    };
    if !value.is_finite() || value < 0.0 {
        return Err(serde::de::Error::custom(format!("invalid amount {}", value)));
    }
    Ok(value.round() as u64)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// Whether a part or cart line can currently be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Ready,
    OutOfStock,
    /// Neither `isReady` nor `stock` was present in the payload.
    Unknown,
}

fn availability(is_ready: Option<bool>, stock: Option<u32>) -> Availability {
    match (is_ready, stock) {
        (Some(true), _) => Availability::Ready,
        (Some(false), _) => Availability::OutOfStock,
        (None, Some(0)) => Availability::OutOfStock,
        (None, Some(_)) => Availability::Ready,
        (None, None) => Availability::Unknown,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub part_number: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "rupiah")]
    pub price: u64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_ready: Option<bool>,
    #[serde(default)]
    pub stock: Option<u32>,
}

impl Part {
    pub fn availability(&self) -> Availability {
        availability(self.is_ready, self.stock)
    }

    /// Fill availability fields from a detail record of the same part.
    pub fn merge_detail(&mut self, detail: &Part) {
        if detail.is_ready.is_some() {
            self.is_ready = detail.is_ready;
        }
        if detail.stock.is_some() {
            self.stock = detail.stock;
        }
        if !detail.description.is_empty() {
            self.description = detail.description.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, alias = "page")]
    pub current_page: u32,
    #[serde(default, alias = "limit")]
    pub per_page: u32,
    #[serde(default)]
    pub has_more: Option<bool>,
    #[serde(default)]
    pub last_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartsPage {
    #[serde(default)]
    pub items: Vec<Part>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl PartsPage {
    /// Whether another page can be requested.
    ///
    /// Uses `hasMore` when present, then `lastPage`, and finally assumes more
    /// pages exist while pages come back full.
    pub fn has_more(&self) -> bool {
        let pagination = &self.pagination;
        if let Some(has_more) = pagination.has_more {
            return has_more;
        }
        if let Some(last_page) = pagination.last_page {
            return pagination.current_page < last_page;
        }
        pagination.per_page > 0 && self.items.len() as u32 >= pagination.per_page
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Name,
    Price,
    PartNumber,
}

impl SortBy {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortBy::Name => "nm_part",
            SortBy::Price => "het",
            SortBy::PartNumber => "kd_part",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Name => "Name",
            SortBy::Price => "Price",
            SortBy::PartNumber => "Part number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// `GET /parts` parameters. Unset fields are omitted from the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<SortBy>,
    pub order: Option<SortOrder>,
}

impl PartsQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.clone()));
        }
        if let Some(category) = self.category.as_ref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category.clone()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.as_param().to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_param().to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub part_id: String,
    #[serde(default)]
    pub part_number: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(deserialize_with = "rupiah")]
    pub price: u64,
    pub quantity: u32,
    #[serde(default, deserialize_with = "rupiah")]
    pub subtotal: u64,
    #[serde(default)]
    pub is_ready: Option<bool>,
    #[serde(default)]
    pub stock: Option<u32>,
}

impl CartItem {
    /// Copy of this line at `quantity`, with the subtotal recomputed.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            subtotal: self.price * u64::from(quantity),
            ..self.clone()
        }
    }

    pub fn availability(&self) -> Availability {
        availability(self.is_ready, self.stock)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub total_items: u32,
    #[serde(deserialize_with = "rupiah")]
    pub total_price: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub summary: Option<CartSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub part_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub cart_item_id: String,
    pub total_items: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCartRequest {
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Completed,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub status: Option<CampaignStatus>,
    #[serde(default)]
    pub progress: Option<u32>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub parts_included: Vec<String>,
    #[serde(default)]
    pub terms_and_conditions: Option<String>,
    #[serde(default)]
    pub rewards: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCampaign {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub end_date: String,
    pub achievement_percentage: f64,
    pub achievement_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub current_campaign: CurrentCampaign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub delivery_progress: String,
    pub monthly_buy_in: String,
    #[serde(default)]
    pub cart_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsPage {
    #[serde(default)]
    pub items: Vec<Notification>,
    #[serde(default)]
    pub unread_count: u32,
}
