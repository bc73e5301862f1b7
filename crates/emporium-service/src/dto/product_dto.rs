//! Product-related DTOs.

use chrono::{DateTime, Utc};
use emporium_core::{Product, ProductId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,

    pub description: String,

    pub price: f64,

    /// Raw image payload (base64 / data-URI). When present it is uploaded
    /// to the asset host before the record is inserted.
    #[serde(default)]
    pub image: Option<String>,

    pub category: String,
}

/// Product response DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(value_type = String)]
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Durable asset URL, or an empty string when the product has no image.
    pub image: String,
    pub category: String,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image: product.image,
            category: product.category,
            is_featured: product.is_featured,
            created_at: product.created_at,
        }
    }
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            is_featured: product.is_featured,
            created_at: product.created_at,
        }
    }
}

/// Product list response. Listing endpoints wrap the set in a named field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

/// A product projected for the recommendation listing. Category and the
/// featured flag are deliberately excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendedProduct {
    #[schema(value_type = String)]
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
}

impl From<Product> for RecommendedProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            image: product.image,
            price: product.price,
        }
    }
}

/// Simple message response for operations that report success textually.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Creates a new message response.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_product() -> Product {
        Product::new(
            "walnut desk".to_string(),
            "A sturdy desk".to_string(),
            349.0,
            "https://assets.example.com/products/desk01.jpg".to_string(),
            "furniture".to_string(),
        )
    }

    #[test]
    fn test_product_response_from_product() {
        let product = create_test_product();
        let response: ProductResponse = product.clone().into();

        assert_eq!(response.id, product.id);
        assert_eq!(response.name, product.name);
        assert_eq!(response.image, product.image);
        assert!(!response.is_featured);
    }

    #[test]
    fn test_recommended_product_excludes_category_and_flag() {
        let product = create_test_product();
        let recommended: RecommendedProduct = product.clone().into();

        let json = serde_json::to_value(&recommended).unwrap();
        assert!(json.get("category").is_none());
        assert!(json.get("is_featured").is_none());
        assert_eq!(json["name"], "walnut desk");
        assert_eq!(json["price"], 349.0);
    }

    #[test]
    fn test_create_request_image_defaults_to_none() {
        let json = r#"{"name":"mug","description":"a mug","price":9.5,"category":"kitchen"}"#;
        let request: CreateProductRequest = serde_json::from_str(json).unwrap();
        assert!(request.image.is_none());
    }

    #[test]
    fn test_dto_serialization_round_trip() {
        let request = CreateProductRequest {
            name: "mug".to_string(),
            description: "a mug".to_string(),
            price: 9.5,
            image: Some("data:image/png;base64,AAAA".to_string()),
            category: "kitchen".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        let parsed: CreateProductRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.name, request.name);
        assert_eq!(parsed.image, request.image);
    }
}
