// ============================================================================
// API CLIENT - ONLY HTTP communication (stateless)
// ============================================================================
// No business logic here, just requests against the storefront REST API.
// ============================================================================

use gloo_net::http::Request;
use crate::models::{Order, Pagination, Product, ProductInfo};
use crate::utils::constants::BACKEND_URL;

/// API client - ONLY HTTP communication (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Batch projection fetch for the price sync engine. One round trip
    /// for the whole deduplicated id set.
    pub async fn fetch_products_batch(
        &self,
        product_ids: &[String],
    ) -> Result<Vec<ProductInfo>, String> {
        let url = format!("{}/products/batch", self.base_url);
        let request = BatchProductsRequest {
            product_ids: product_ids.to_vec(),
        };

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let batch = response
            .json::<BatchProductsResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(batch.products)
    }

    /// Featured products list
    pub async fn fetch_featured(&self, limit: u32) -> Result<Vec<Product>, String> {
        self.fetch_product_list("featured", limit).await
    }

    /// Discounted products list
    pub async fn fetch_discounted(&self, limit: u32) -> Result<Vec<Product>, String> {
        self.fetch_product_list("discounted", limit).await
    }

    async fn fetch_product_list(&self, kind: &str, limit: u32) -> Result<Vec<Product>, String> {
        let url = format!("{}/products/{}?limit={}", self.base_url, kind, limit);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let list = response
            .json::<ProductListResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(list.data)
    }

    /// Single order detail
    pub async fn get_order(&self, order_id: &str, token: &str) -> Result<Order, String> {
        let url = format!("{}/orders/{}", self.base_url, order_id);

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response.text().await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP {}: {}", status, error_text));
        }

        let detail = response
            .json::<OrderResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(detail.order)
    }

    /// A page of the caller's own orders
    pub async fn get_my_orders(
        &self,
        page: u32,
        limit: u32,
        token: &str,
    ) -> Result<OrdersPage, String> {
        let url = format!(
            "{}/orders/my-orders?page={}&limit={}",
            self.base_url, page, limit
        );
        self.fetch_orders_page(&url, token).await
    }

    /// A page of all orders (admin back-office)
    pub async fn get_admin_orders(
        &self,
        page: u32,
        limit: u32,
        status: Option<&str>,
        token: &str,
    ) -> Result<OrdersPage, String> {
        let mut url = format!(
            "{}/orders/admin/all?page={}&limit={}",
            self.base_url, page, limit
        );
        if let Some(status) = status {
            url.push_str(&format!("&status={}", status));
        }
        self.fetch_orders_page(&url, token).await
    }

    async fn fetch_orders_page(&self, url: &str, token: &str) -> Result<OrdersPage, String> {
        let response = Request::get(url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<OrdersPage>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(serde::Serialize)]
struct BatchProductsRequest {
    #[serde(rename = "productIds")]
    product_ids: Vec<String>,
}

#[derive(serde::Deserialize)]
struct BatchProductsResponse {
    products: Vec<ProductInfo>,
}

#[derive(serde::Deserialize)]
struct ProductListResponse {
    data: Vec<Product>,
}

#[derive(serde::Deserialize)]
struct OrderResponse {
    order: Order,
}

#[derive(Clone, serde::Deserialize)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub pagination: Pagination,
}
