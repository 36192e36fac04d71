use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::AuthenticatedUser;
use crate::features::products::dtos::{ProductListQuery, ProductRequestDto, ProductResponseDto};
use crate::features::products::services::ProductService;
use crate::shared::types::ApiResponse;

/// Create a product in a store owned by the caller
#[utoipa::path(
    post,
    path = "/api/{store_id}/products",
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    request_body = ProductRequestDto,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or unknown category, size or color"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied")
    ),
    tag = "products",
    security(("bearer_auth" = []))
)]
pub async fn create_product(
    user: AuthenticatedUser,
    State(service): State<Arc<ProductService>>,
    AppPath(store_id): AppPath<Uuid>,
    AppJson(dto): AppJson<ProductRequestDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.create(&user.user_id, store_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// List the products of a store
///
/// Archived products are left out unless `include_archived=true`.
#[utoipa::path(
    get,
    path = "/api/{store_id}/products",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ProductListQuery
    ),
    responses(
        (status = 200, description = "Products, newest first", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 400, description = "Invalid store ID")
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    AppPath(store_id): AppPath<Uuid>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let products = service.list(store_id, query.into()).await?;
    Ok(Json(ApiResponse::list(products)))
}

/// Get a product
#[utoipa::path(
    get,
    path = "/api/{store_id}/products/{product_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    AppPath((store_id, product_id)): AppPath<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get(store_id, product_id).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Replace every field of a product, images included
#[utoipa::path(
    patch,
    path = "/api/{store_id}/products/{product_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    request_body = ProductRequestDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or unknown category, size or color"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied"),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(("bearer_auth" = []))
)]
pub async fn update_product(
    user: AuthenticatedUser,
    State(service): State<Arc<ProductService>>,
    AppPath((store_id, product_id)): AppPath<(Uuid, Uuid)>,
    AppJson(dto): AppJson<ProductRequestDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service
        .update(&user.user_id, store_id, product_id, dto)
        .await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Delete a product and its images
#[utoipa::path(
    delete,
    path = "/api/{store_id}/products/{product_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<ProductResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied"),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(("bearer_auth" = []))
)]
pub async fn delete_product(
    user: AuthenticatedUser,
    State(service): State<Arc<ProductService>>,
    AppPath((store_id, product_id)): AppPath<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service
        .delete(&user.user_id, store_id, product_id)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(product),
        Some("Product deleted".to_string()),
        None,
    )))
}
