use serde::{Deserialize, Serialize};

/// An order as the REST API returns it. `order_status` is an open set
/// owned by the server; known values get bespoke notification wording,
/// anything else a generic one.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "orderStatus")]
    pub order_status: String,
    #[serde(rename = "trackingNumber", default)]
    pub tracking_number: Option<String>,
    /// RFC3339 timestamp, parsed only for display
    #[serde(rename = "estimatedDelivery", default)]
    pub estimated_delivery: Option<String>,
    #[serde(rename = "totalAmount", default)]
    pub total_amount: f64,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderItem {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct Pagination {
    pub page: u32,
    pub total: u64,
    pub pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, total: 0, pages: 0 }
    }
}
