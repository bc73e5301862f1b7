//! Product service trait definition.

use crate::dto::{
    CreateProductRequest, ProductListResponse, ProductResponse, RecommendedProduct,
};
use async_trait::async_trait;
use emporium_core::{EmporiumResult, ProductId};

/// Product catalog service trait.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Lists every product, unfiltered.
    async fn list_products(&self) -> EmporiumResult<ProductListResponse>;

    /// Returns the featured products, served from the cache snapshot when
    /// one exists and rebuilt from the store otherwise.
    async fn featured_products(&self) -> EmporiumResult<Vec<ProductResponse>>;

    /// Creates a new product, uploading the image payload first when one
    /// is provided.
    async fn create_product(&self, request: CreateProductRequest) -> EmporiumResult<ProductResponse>;

    /// Deletes a product and best-effort deletes its image asset.
    async fn delete_product(&self, id: ProductId) -> EmporiumResult<()>;

    /// Samples random products for the recommendation listing.
    async fn recommended_products(&self) -> EmporiumResult<Vec<RecommendedProduct>>;

    /// Lists products in an exact-match category.
    async fn products_by_category(&self, category: &str) -> EmporiumResult<ProductListResponse>;

    /// Flips a product's featured flag and rebuilds the cache snapshot.
    async fn toggle_featured(&self, id: ProductId) -> EmporiumResult<ProductResponse>;
}
