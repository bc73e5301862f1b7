//! Repository trait definitions.

use async_trait::async_trait;
use emporium_core::{EmporiumResult, Product, ProductId};

/// Product repository trait.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Finds a product by ID.
    async fn find_by_id(&self, id: ProductId) -> EmporiumResult<Option<Product>>;

    /// Finds every product, unfiltered.
    async fn find_all(&self) -> EmporiumResult<Vec<Product>>;

    /// Finds all featured products.
    async fn find_featured(&self) -> EmporiumResult<Vec<Product>>;

    /// Finds products by exact category match.
    async fn find_by_category(&self, category: &str) -> EmporiumResult<Vec<Product>>;

    /// Samples up to `size` products at random. Returns fewer rows when
    /// the table holds fewer than `size` products.
    async fn sample(&self, size: u32) -> EmporiumResult<Vec<Product>>;

    /// Saves a new product.
    async fn save(&self, product: &Product) -> EmporiumResult<Product>;

    /// Updates an existing product.
    async fn update(&self, product: &Product) -> EmporiumResult<Product>;

    /// Deletes a product by ID. Returns `true` if a row was removed.
    async fn delete(&self, id: ProductId) -> EmporiumResult<bool>;

    /// Counts all products.
    async fn count(&self) -> EmporiumResult<u64>;
}
