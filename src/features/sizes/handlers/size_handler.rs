use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::AuthenticatedUser;
use crate::features::sizes::dtos::{SizeRequestDto, SizeResponseDto};
use crate::features::sizes::services::SizeService;
use crate::shared::types::ApiResponse;

/// Create a size in a store owned by the caller
#[utoipa::path(
    post,
    path = "/api/{store_id}/sizes",
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    request_body = SizeRequestDto,
    responses(
        (status = 200, description = "Size created", body = ApiResponse<SizeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied")
    ),
    tag = "sizes",
    security(("bearer_auth" = []))
)]
pub async fn create_size(
    user: AuthenticatedUser,
    State(service): State<Arc<SizeService>>,
    AppPath(store_id): AppPath<Uuid>,
    AppJson(dto): AppJson<SizeRequestDto>,
) -> Result<Json<ApiResponse<SizeResponseDto>>> {
    let size = service.create(&user.user_id, store_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(size), None, None)))
}

/// List the sizes of a store
#[utoipa::path(
    get,
    path = "/api/{store_id}/sizes",
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Sizes, newest first", body = ApiResponse<Vec<SizeResponseDto>>),
        (status = 400, description = "Invalid store ID")
    ),
    tag = "sizes"
)]
pub async fn list_sizes(
    State(service): State<Arc<SizeService>>,
    AppPath(store_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<SizeResponseDto>>>> {
    let sizes = service.list(store_id).await?;
    Ok(Json(ApiResponse::list(sizes)))
}

/// Get a size
#[utoipa::path(
    get,
    path = "/api/{store_id}/sizes/{size_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("size_id" = Uuid, Path, description = "Size ID")
    ),
    responses(
        (status = 200, description = "Size details", body = ApiResponse<SizeResponseDto>),
        (status = 404, description = "Size not found")
    ),
    tag = "sizes"
)]
pub async fn get_size(
    State(service): State<Arc<SizeService>>,
    AppPath((store_id, size_id)): AppPath<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<SizeResponseDto>>> {
    let size = service.get(store_id, size_id).await?;
    Ok(Json(ApiResponse::success(Some(size), None, None)))
}

/// Replace the name and value of a size
#[utoipa::path(
    patch,
    path = "/api/{store_id}/sizes/{size_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("size_id" = Uuid, Path, description = "Size ID")
    ),
    request_body = SizeRequestDto,
    responses(
        (status = 200, description = "Size updated", body = ApiResponse<SizeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied"),
        (status = 404, description = "Size not found")
    ),
    tag = "sizes",
    security(("bearer_auth" = []))
)]
pub async fn update_size(
    user: AuthenticatedUser,
    State(service): State<Arc<SizeService>>,
    AppPath((store_id, size_id)): AppPath<(Uuid, Uuid)>,
    AppJson(dto): AppJson<SizeRequestDto>,
) -> Result<Json<ApiResponse<SizeResponseDto>>> {
    let size = service
        .update(&user.user_id, store_id, size_id, dto)
        .await?;
    Ok(Json(ApiResponse::success(Some(size), None, None)))
}

/// Delete a size no product uses
#[utoipa::path(
    delete,
    path = "/api/{store_id}/sizes/{size_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("size_id" = Uuid, Path, description = "Size ID")
    ),
    responses(
        (status = 200, description = "Size deleted", body = ApiResponse<SizeResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied"),
        (status = 404, description = "Size not found"),
        (status = 409, description = "Size is used by products")
    ),
    tag = "sizes",
    security(("bearer_auth" = []))
)]
pub async fn delete_size(
    user: AuthenticatedUser,
    State(service): State<Arc<SizeService>>,
    AppPath((store_id, size_id)): AppPath<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<SizeResponseDto>>> {
    let size = service
        .delete(&user.user_id, store_id, size_id)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(size),
        Some("Size deleted".to_string()),
        None,
    )))
}
