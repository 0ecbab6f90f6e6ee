use serde::{Deserialize, Serialize};
use crate::models::product::Product;

/// A cart line item: the user-owned quantity plus a cached copy of the
/// product fields the UI renders. The cached fields are refreshed by the
/// price sync engine; quantity belongs to the user and is only ever
/// clamped down to stock, never raised.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(rename = "inStock", default)]
    pub in_stock: u32,
    pub quantity: u32,
    #[serde(default)]
    pub image: Option<String>,
}

impl CartItem {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            discount: product.discount,
            in_stock: product.in_stock,
            quantity: quantity.min(product.in_stock),
            image: product.image.clone(),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * (1.0 - self.discount / 100.0) * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32) -> Product {
        serde_json::from_str(&format!(
            r#"{{"_id": "p1", "name": "Mug", "price": 100.0, "inStock": {}}}"#,
            stock
        ))
        .unwrap()
    }

    #[test]
    fn from_product_clamps_quantity_to_stock() {
        let item = CartItem::from_product(&product(3), 5);
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn line_total_uses_discounted_price() {
        let mut item = CartItem::from_product(&product(10), 2);
        item.discount = 20.0;
        assert_eq!(item.line_total(), 160.0);
    }
}
