use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Percentage 0..100
    #[serde(default)]
    pub discount: f64,
    #[serde(rename = "inStock", default)]
    pub in_stock: u32,

    // Catalog fields, display only
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Price after discount, for display
    pub fn effective_price(&self) -> f64 {
        self.price * (1.0 - self.discount / 100.0)
    }
}

/// Projection returned by POST /products/batch: the mutable fields the
/// price sync engine tracks, nothing else.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProductInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(rename = "inStock", default)]
    pub in_stock: u32,
}

/// Wishlist entries arrive in two wire shapes: `{product: {...}}` from the
/// populated endpoint, or a bare product from the legacy one. Normalized
/// here so the rest of the code never has to care.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum WishlistEntry {
    Wrapped { product: Product },
    Bare(Product),
}

impl WishlistEntry {
    pub fn product(&self) -> &Product {
        match self {
            WishlistEntry::Wrapped { product } => product,
            WishlistEntry::Bare(product) => product,
        }
    }

    pub fn id(&self) -> &str {
        &self.product().id
    }

    /// Replace the inner product, keeping the entry's wire shape.
    pub fn with_product(&self, product: Product) -> WishlistEntry {
        match self {
            WishlistEntry::Wrapped { .. } => WishlistEntry::Wrapped { product },
            WishlistEntry::Bare(_) => WishlistEntry::Bare(product),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wishlist_entry_deserializes_both_shapes() {
        let wrapped: WishlistEntry = serde_json::from_str(
            r#"{"product": {"_id": "p1", "name": "Mug", "price": 250.0, "inStock": 4}}"#,
        )
        .unwrap();
        let bare: WishlistEntry =
            serde_json::from_str(r#"{"_id": "p2", "name": "Pen", "price": 40.0}"#).unwrap();

        assert_eq!(wrapped.id(), "p1");
        assert!(matches!(wrapped, WishlistEntry::Wrapped { .. }));
        assert_eq!(bare.id(), "p2");
        assert!(matches!(bare, WishlistEntry::Bare(_)));
    }

    #[test]
    fn with_product_keeps_the_wire_shape() {
        let bare: WishlistEntry =
            serde_json::from_str(r#"{"_id": "p2", "name": "Pen", "price": 40.0}"#).unwrap();
        let mut product = bare.product().clone();
        product.price = 35.0;
        let updated = bare.with_product(product);
        assert!(matches!(updated, WishlistEntry::Bare(_)));
        assert_eq!(updated.product().price, 35.0);
    }

    #[test]
    fn effective_price_applies_discount() {
        let product: Product = serde_json::from_str(
            r#"{"_id": "p1", "name": "Mug", "price": 80.0, "discount": 20.0, "inStock": 10}"#,
        )
        .unwrap();
        assert_eq!(product.effective_price(), 64.0);
    }
}
