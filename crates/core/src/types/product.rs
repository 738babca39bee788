//! Catalog records: products and categories.

use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId};
use super::money::Money;

/// A catalog product as the commerce API describes it.
///
/// `id`, `name`, and `price` are the fields the cart depends on; everything
/// else is display material carried along for the SPA. Carts never accept a
/// caller-supplied product shape — lines are built from records resolved
/// through the catalog, so a line's price always comes from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Money,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub category_name: Option<String>,
}

impl Product {
    /// Whether the product can currently be added to a cart.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_from_api_shape() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 12,
            "name": "Basmati Rice 1kg",
            "description": "Aged long-grain rice",
            "price": 145.0,
            "stock": 30,
            "unit": "kg",
            "image_url": "/uploads/rice.jpg",
            "category_id": 2,
            "category_name": "Staples"
        }))
        .unwrap();

        assert_eq!(product.id, ProductId::new(12));
        assert_eq!(product.price, Money::from_rupees(145));
        assert!(product.in_stock());
    }

    #[test]
    fn test_product_tolerates_missing_display_fields() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Loose Jaggery",
            "price": 55,
        }))
        .unwrap();

        assert_eq!(product.stock, 0);
        assert!(!product.in_stock());
        assert!(product.unit.is_none());
    }
}
