//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the
//! REST API.

use emporium_core::ErrorResponse;
use emporium_service::{
    CreateProductRequest, MessageResponse, ProductListResponse, ProductResponse,
    RecommendedProduct,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Emporium Catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Emporium Catalog API",
        version = "1.0.0",
        description = "RESTful API for the Emporium product catalog",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Product endpoints
        crate::controllers::product_controller::list_products,
        crate::controllers::product_controller::featured_products,
        crate::controllers::product_controller::create_product,
        crate::controllers::product_controller::delete_product,
        crate::controllers::product_controller::recommended_products,
        crate::controllers::product_controller::products_by_category,
        crate::controllers::product_controller::toggle_featured,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            CreateProductRequest,
            ProductResponse,
            ProductListResponse,
            RecommendedProduct,
            MessageResponse,
        )
    ),
    tags(
        (name = "products", description = "Product catalog endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
