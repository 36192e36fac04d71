use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::AuthenticatedUser;
use crate::features::categories::dtos::{CategoryRequestDto, CategoryResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// Create a category in a store owned by the caller
#[utoipa::path(
    post,
    path = "/api/{store_id}/categories",
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    request_body = CategoryRequestDto,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error or unknown billboard"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied")
    ),
    tag = "categories",
    security(("bearer_auth" = []))
)]
pub async fn create_category(
    user: AuthenticatedUser,
    State(service): State<Arc<CategoryService>>,
    AppPath(store_id): AppPath<Uuid>,
    AppJson(dto): AppJson<CategoryRequestDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.create(&user.user_id, store_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// List the categories of a store
#[utoipa::path(
    get,
    path = "/api/{store_id}/categories",
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Categories, newest first", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 400, description = "Invalid store ID")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    AppPath(store_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list(store_id).await?;
    Ok(Json(ApiResponse::list(categories)))
}

/// Get a category
#[utoipa::path(
    get,
    path = "/api/{store_id}/categories/{category_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    AppPath((store_id, category_id)): AppPath<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get(store_id, category_id).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Replace the name and billboard of a category
#[utoipa::path(
    patch,
    path = "/api/{store_id}/categories/{category_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    request_body = CategoryRequestDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error or unknown billboard"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories",
    security(("bearer_auth" = []))
)]
pub async fn update_category(
    user: AuthenticatedUser,
    State(service): State<Arc<CategoryService>>,
    AppPath((store_id, category_id)): AppPath<(Uuid, Uuid)>,
    AppJson(dto): AppJson<CategoryRequestDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service
        .update(&user.user_id, store_id, category_id, dto)
        .await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Delete a category no product uses
#[utoipa::path(
    delete,
    path = "/api/{store_id}/categories/{category_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<CategoryResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category is used by products")
    ),
    tag = "categories",
    security(("bearer_auth" = []))
)]
pub async fn delete_category(
    user: AuthenticatedUser,
    State(service): State<Arc<CategoryService>>,
    AppPath((store_id, category_id)): AppPath<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service
        .delete(&user.user_id, store_id, category_id)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(category),
        Some("Category deleted".to_string()),
        None,
    )))
}
