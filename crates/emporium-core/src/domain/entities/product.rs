//! Product entity.

use crate::{Entity, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product entity representing one catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Long-form description.
    pub description: String,

    /// Unit price. Currency is an application-level convention.
    pub price: f64,

    /// Durable image URL returned by the asset host, or an empty string
    /// when the product has no image. The service never constructs this
    /// URL itself.
    pub image: String,

    /// Category used as an exact-match filter key.
    pub category: String,

    /// Whether the product appears in the featured listing.
    pub is_featured: bool,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new product. New products are never featured.
    #[must_use]
    pub fn new(
        name: String,
        description: String,
        price: f64,
        image: String,
        category: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ProductId::new(),
            name,
            description,
            price,
            image,
            category,
            is_featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the product carries an image asset.
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Flips the featured flag.
    pub fn toggle_featured(&mut self) {
        self.is_featured = !self.is_featured;
        self.updated_at = Utc::now();
    }
}

impl Entity<ProductId> for Product {
    fn id(&self) -> &ProductId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_product(name: &str) -> Product {
        Product::new(
            name.to_string(),
            "A test product".to_string(),
            19.99,
            String::new(),
            "gadgets".to_string(),
        )
    }

    #[test]
    fn test_product_creation_defaults() {
        let product = create_product("widget");
        assert_eq!(product.name, "widget");
        assert!(!product.is_featured);
        assert_eq!(product.image, "");
        assert!(!product.has_image());
    }

    #[test]
    fn test_product_with_image() {
        let mut product = create_product("widget");
        product.image = "https://assets.example.com/products/abc123.png".to_string();
        assert!(product.has_image());
    }

    #[test]
    fn test_toggle_featured_flips_both_ways() {
        let mut product = create_product("widget");
        product.toggle_featured();
        assert!(product.is_featured);
        product.toggle_featured();
        assert!(!product.is_featured);
    }

    #[test]
    fn test_toggle_featured_touches_updated_at() {
        let mut product = create_product("widget");
        let before = product.updated_at;
        product.toggle_featured();
        assert!(product.updated_at >= before);
    }

    #[test]
    fn test_product_ids_are_unique() {
        let a = create_product("a");
        let b = create_product("b");
        assert_ne!(a.id, b.id);
    }
}
