//! Product service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{
    CreateProductRequest, ProductListResponse, ProductResponse, RecommendedProduct,
};
use crate::product_service::ProductService;
use async_trait::async_trait;
use emporium_assets::{asset_key_from_url, AssetStore};
use emporium_core::{EmporiumError, EmporiumResult, Product, ProductId};
use emporium_repository::ProductRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Asset host folder for product images.
const PRODUCT_ASSET_FOLDER: &str = "products";

/// Number of products sampled for the recommendation listing.
const RECOMMENDED_SAMPLE_SIZE: u32 = 3;

/// Product catalog service implementation.
///
/// All collaborators are injected, shared-by-reference singletons with no
/// per-request lifecycle.
pub struct ProductServiceImpl {
    repository: Arc<dyn ProductRepository>,
    cache: Arc<dyn CacheInterface>,
    assets: Arc<dyn AssetStore>,
}

impl ProductServiceImpl {
    /// Creates a new product service.
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheInterface>,
        assets: Arc<dyn AssetStore>,
    ) -> Self {
        Self {
            repository,
            cache,
            assets,
        }
    }

    /// Rebuilds the featured-products cache snapshot from the store.
    ///
    /// Failure is logged and swallowed; the previous snapshot stays in
    /// place until the next successful rebuild.
    async fn refresh_featured_cache(&self) {
        let result: EmporiumResult<()> = async {
            let featured = self.repository.find_featured().await?;
            let snapshot: Vec<ProductResponse> =
                featured.into_iter().map(ProductResponse::from).collect();
            self.cache
                .set(&cache_keys::featured_products(), &snapshot, None)
                .await
        }
        .await;

        if let Err(e) = result {
            warn!("Failed to refresh featured products cache: {}", e);
        }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn list_products(&self) -> EmporiumResult<ProductListResponse> {
        debug!("Listing all products");

        let products = self.repository.find_all().await?;
        Ok(ProductListResponse::from(products))
    }

    async fn featured_products(&self) -> EmporiumResult<Vec<ProductResponse>> {
        debug!("Getting featured products");

        let cache_key = cache_keys::featured_products();

        // The snapshot takes precedence over current store state, even if
        // stale. Both paths return the same shape.
        if let Some(cached) = self.cache.get::<Vec<ProductResponse>>(&cache_key).await? {
            debug!("Serving featured products from cache");
            return Ok(cached);
        }

        let featured = self.repository.find_featured().await?;
        if featured.is_empty() {
            // An empty set is not cached.
            return Err(EmporiumError::not_found("FeaturedProducts", "featured_products"));
        }

        let response: Vec<ProductResponse> =
            featured.into_iter().map(ProductResponse::from).collect();

        // No expiry: the snapshot is fully replaced on the next rebuild.
        self.cache.set(&cache_key, &response, None).await?;

        Ok(response)
    }

    async fn create_product(&self, request: CreateProductRequest) -> EmporiumResult<ProductResponse> {
        debug!("Creating product: {}", request.name);

        let image_url = match request.image.as_deref() {
            Some(payload) if !payload.is_empty() => {
                let asset = self.assets.upload(payload, PRODUCT_ASSET_FOLDER).await?;
                asset.url
            }
            _ => String::new(),
        };

        let product = Product::new(
            request.name,
            request.description,
            request.price,
            image_url,
            request.category,
        );

        let saved = self.repository.save(&product).await?;

        info!("Product created: {}", saved.id);
        Ok(ProductResponse::from(saved))
    }

    async fn delete_product(&self, id: ProductId) -> EmporiumResult<()> {
        debug!("Deleting product: {}", id);

        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EmporiumError::not_found("Product", id))?;

        // Best-effort: an asset host failure never blocks the delete.
        if product.has_image() {
            match asset_key_from_url(&product.image) {
                Some(key) => {
                    let qualified = format!("{}/{}", PRODUCT_ASSET_FOLDER, key);
                    match self.assets.delete(&qualified).await {
                        Ok(()) => debug!("Deleted image asset '{}'", qualified),
                        Err(e) => {
                            warn!("Failed to delete image asset for product {}: {}", id, e);
                        }
                    }
                }
                None => warn!("Could not derive asset key from image URL for product {}", id),
            }
        }

        self.repository.delete(id).await?;

        info!("Product deleted: {}", id);
        Ok(())
    }

    async fn recommended_products(&self) -> EmporiumResult<Vec<RecommendedProduct>> {
        debug!("Sampling recommended products");

        let products = self.repository.sample(RECOMMENDED_SAMPLE_SIZE).await?;
        Ok(products.into_iter().map(RecommendedProduct::from).collect())
    }

    async fn products_by_category(&self, category: &str) -> EmporiumResult<ProductListResponse> {
        debug!("Listing products in category: {}", category);

        let products = self.repository.find_by_category(category).await?;
        Ok(ProductListResponse::from(products))
    }

    async fn toggle_featured(&self, id: ProductId) -> EmporiumResult<ProductResponse> {
        debug!("Toggling featured flag for product: {}", id);

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EmporiumError::not_found("Product", id))?;

        product.toggle_featured();
        let updated = self.repository.update(&product).await?;

        // Rebuild is unconditional; a failed rebuild leaves the old
        // snapshot in place.
        self.refresh_featured_cache().await;

        info!("Product {} featured flag set to {}", id, updated.is_featured);
        Ok(ProductResponse::from(updated))
    }
}

impl std::fmt::Debug for ProductServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceImpl").finish_non_exhaustive()
    }
}
