//! Product catalog controller.

use crate::{
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use emporium_core::{EmporiumError, ProductId};
use emporium_service::{
    CreateProductRequest, MessageResponse, ProductListResponse, ProductResponse,
    RecommendedProduct,
};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/featured", get(featured_products))
        .route("/recommendations", get(recommended_products))
        .route("/category/:category", get(products_by_category))
        .route("/:id", patch(toggle_featured).delete(delete_product))
}

/// List all products.
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = ProductListResponse),
        (status = 500, description = "Internal error")
    )
)]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<ProductListResponse> {
    debug!("List products request");

    let response = state.product_service.list_products().await?;
    ok(response)
}

/// List featured products.
#[utoipa::path(
    get,
    path = "/products/featured",
    tag = "products",
    responses(
        (status = 200, description = "Featured products", body = [ProductResponse]),
        (status = 404, description = "No featured products"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn featured_products(State(state): State<AppState>) -> ApiResult<Vec<ProductResponse>> {
    debug!("Featured products request");

    let response = state.product_service.featured_products().await?;
    ok(response)
}

/// Create a new product.
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 500, description = "Internal error")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<crate::responses::ApiResponse<ProductResponse>>), AppError> {
    debug!("Create product request: {}", request.name);

    let response = state.product_service.create_product(request).await?;
    Ok(created(response))
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    debug!("Delete product request: {}", id);

    let product_id = parse_product_id(&id)?;
    state.product_service.delete_product(product_id).await?;

    ok(MessageResponse::new("Product deleted successfully"))
}

/// Sample recommended products.
#[utoipa::path(
    get,
    path = "/products/recommendations",
    tag = "products",
    responses(
        (status = 200, description = "Recommended products", body = [RecommendedProduct]),
        (status = 500, description = "Internal error")
    )
)]
pub async fn recommended_products(
    State(state): State<AppState>,
) -> ApiResult<Vec<RecommendedProduct>> {
    debug!("Recommended products request");

    let response = state.product_service.recommended_products().await?;
    ok(response)
}

/// List products by category.
#[utoipa::path(
    get,
    path = "/products/category/{category}",
    tag = "products",
    params(("category" = String, Path, description = "Category name")),
    responses(
        (status = 200, description = "Products in category", body = ProductListResponse),
        (status = 500, description = "Internal error")
    )
)]
pub async fn products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<ProductListResponse> {
    debug!("Products by category request: {}", category);

    let response = state.product_service.products_by_category(&category).await?;
    ok(response)
}

/// Toggle a product's featured flag.
#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Updated product", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn toggle_featured(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProductResponse> {
    debug!("Toggle featured request: {}", id);

    let product_id = parse_product_id(&id)?;
    let response = state.product_service.toggle_featured(product_id).await?;
    ok(response)
}

/// Helper to parse a product ID from a path parameter.
fn parse_product_id(id: &str) -> Result<ProductId, AppError> {
    ProductId::parse(id)
        .map_err(|_| AppError(EmporiumError::Validation(format!("Invalid product ID: {}", id))))
}
