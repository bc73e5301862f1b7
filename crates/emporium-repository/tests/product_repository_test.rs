//! Integration tests for MySqlProductRepository.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestDatabase;
use emporium_core::{Product, ProductId};
use emporium_repository::{MySqlProductRepository, ProductRepository};

fn create_test_product(name: &str, category: &str) -> Product {
    Product::new(
        name.to_string(),
        format!("{} description", name),
        29.99,
        String::new(),
        category.to_string(),
    )
}

#[tokio::test]
async fn test_save_and_find_by_id() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let product = create_test_product("mechanical keyboard", "peripherals");
    let product_id = product.id;

    let saved = repo.save(&product).await.expect("Failed to save product");
    assert_eq!(saved.name, "mechanical keyboard");
    assert!(!saved.is_featured);

    let found = repo
        .find_by_id(product_id)
        .await
        .expect("Failed to find product")
        .expect("Product not found");

    assert_eq!(found.id, product_id);
    assert_eq!(found.name, "mechanical keyboard");
    assert_eq!(found.category, "peripherals");
    assert_eq!(found.image, "");
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let result = repo.find_by_id(ProductId::new()).await.expect("Query failed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_lists_each_product_once() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let a = create_test_product("desk lamp", "lighting");
    let b = create_test_product("monitor arm", "peripherals");
    repo.save(&a).await.expect("save a");
    repo.save(&b).await.expect("save b");

    let all = repo.find_all().await.expect("Failed to list products");
    assert_eq!(all.len(), 2);
    assert_eq!(all.iter().filter(|p| p.id == a.id).count(), 1);
    assert_eq!(all.iter().filter(|p| p.id == b.id).count(), 1);
}

#[tokio::test]
async fn test_find_featured_only_returns_featured_rows() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let mut featured = create_test_product("standing desk", "furniture");
    featured.toggle_featured();
    let plain = create_test_product("cable tray", "furniture");

    repo.save(&featured).await.expect("save featured");
    repo.save(&plain).await.expect("save plain");

    let result = repo.find_featured().await.expect("Failed to query featured");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, featured.id);
    assert!(result[0].is_featured);
}

#[tokio::test]
async fn test_find_by_category_exact_match() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    repo.save(&create_test_product("hoodie", "apparel"))
        .await
        .expect("save hoodie");
    repo.save(&create_test_product("beanie", "apparel"))
        .await
        .expect("save beanie");
    repo.save(&create_test_product("mug", "kitchen"))
        .await
        .expect("save mug");

    let apparel = repo
        .find_by_category("apparel")
        .await
        .expect("Failed to query by category");
    assert_eq!(apparel.len(), 2);
    assert!(apparel.iter().all(|p| p.category == "apparel"));

    let empty = repo
        .find_by_category("electronics")
        .await
        .expect("Failed to query by category");
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_sample_never_fabricates_rows() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    repo.save(&create_test_product("item one", "misc"))
        .await
        .expect("save one");
    repo.save(&create_test_product("item two", "misc"))
        .await
        .expect("save two");

    let sampled = repo.sample(3).await.expect("Failed to sample");
    assert!(sampled.len() <= 2);

    // Sampled rows are distinct
    let mut ids: Vec<_> = sampled.iter().map(|p| p.id).collect();
    ids.sort_by_key(|id| id.into_inner());
    ids.dedup();
    assert_eq!(ids.len(), sampled.len());
}

#[tokio::test]
async fn test_update_persists_toggled_flag() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let product = create_test_product("webcam", "peripherals");
    let mut saved = repo.save(&product).await.expect("save");

    saved.toggle_featured();
    let updated = repo.update(&saved).await.expect("update");
    assert!(updated.is_featured);

    let reloaded = repo
        .find_by_id(saved.id)
        .await
        .expect("reload")
        .expect("missing");
    assert!(reloaded.is_featured);
}

#[tokio::test]
async fn test_delete_removes_row() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let product = create_test_product("headset", "audio");
    repo.save(&product).await.expect("save");

    let deleted = repo.delete(product.id).await.expect("delete");
    assert!(deleted);

    let found = repo.find_by_id(product.id).await.expect("query");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_delete_missing_row_returns_false() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let deleted = repo.delete(ProductId::new()).await.expect("delete");
    assert!(!deleted);
}

#[tokio::test]
async fn test_count() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    assert_eq!(repo.count().await.expect("count"), 0);

    repo.save(&create_test_product("poster", "decor"))
        .await
        .expect("save");
    assert_eq!(repo.count().await.expect("count"), 1);
}
