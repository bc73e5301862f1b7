//! MySQL product repository implementation.

use crate::{pool::DatabasePool, traits::ProductRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use emporium_core::{EmporiumError, EmporiumResult, Product, ProductId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL product repository implementation.
#[derive(Clone)]
pub struct MySqlProductRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlProductRepository {
    /// Creates a new MySQL product repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: String, // MySQL stores UUID as CHAR(36)
    name: String,
    description: String,
    price: f64,
    image: String,
    category: String,
    is_featured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = EmporiumError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| EmporiumError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Product {
            id: ProductId::from_uuid(id),
            name: row.name,
            description: row.description,
            price: row.price,
            image: row.image,
            category: row.category,
            is_featured: row.is_featured,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_id(&self, id: ProductId) -> EmporiumResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, image, category, is_featured,
                   created_at, updated_at
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner().to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Product::try_from).transpose()
    }

    async fn find_all(&self) -> EmporiumResult<Vec<Product>> {
        debug!("Finding all products");

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, image, category, is_featured,
                   created_at, updated_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn find_featured(&self) -> EmporiumResult<Vec<Product>> {
        debug!("Finding featured products");

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, image, category, is_featured,
                   created_at, updated_at
            FROM products
            WHERE is_featured = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn find_by_category(&self, category: &str) -> EmporiumResult<Vec<Product>> {
        debug!("Finding products by category: {}", category);

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, image, category, is_featured,
                   created_at, updated_at
            FROM products
            WHERE category = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(category)
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn sample(&self, size: u32) -> EmporiumResult<Vec<Product>> {
        debug!("Sampling {} products at random", size);

        // ORDER BY RAND() is acceptable at catalog scale. Distinct rows only;
        // fewer than `size` come back when the table is smaller.
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, image, category, is_featured,
                   created_at, updated_at
            FROM products
            ORDER BY RAND()
            LIMIT ?
            "#,
        )
        .bind(i64::from(size))
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn save(&self, product: &Product) -> EmporiumResult<Product> {
        debug!("Saving new product: {}", product.name);

        let id_str = product.id.into_inner().to_string();

        // MySQL doesn't support RETURNING, so insert then select
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, image, category,
                                  is_featured, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id_str)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image)
        .bind(&product.category)
        .bind(product.is_featured)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(product.id)
            .await?
            .ok_or_else(|| EmporiumError::Internal("Failed to fetch inserted product".to_string()))
    }

    async fn update(&self, product: &Product) -> EmporiumResult<Product> {
        debug!("Updating product: {}", product.id);

        let id_str = product.id.into_inner().to_string();

        sqlx::query(
            r#"
            UPDATE products
            SET name = ?, description = ?, price = ?, image = ?, category = ?,
                is_featured = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image)
        .bind(&product.category)
        .bind(product.is_featured)
        .bind(product.updated_at)
        .bind(&id_str)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(product.id)
            .await?
            .ok_or_else(|| EmporiumError::Internal("Failed to fetch updated product".to_string()))
    }

    async fn delete(&self, id: ProductId) -> EmporiumResult<bool> {
        debug!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.into_inner().to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> EmporiumResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }
}

impl std::fmt::Debug for MySqlProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProductRepository").finish_non_exhaustive()
    }
}
