//! Entity-DTO mappers.

// Mappers are typically implemented as From/Into traits on the DTOs
// themselves. This module holds the collection-level conversions.

use crate::dto::{ProductListResponse, ProductResponse};
use emporium_core::Product;

/// Converts a set of products to a wrapped list response.
impl From<Vec<Product>> for ProductListResponse {
    fn from(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(ProductResponse::from).collect(),
        }
    }
}
