use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::AuthenticatedUser;
use crate::features::stores::dtos::{StoreRequestDto, StoreResponseDto};
use crate::features::stores::services::StoreService;
use crate::shared::types::ApiResponse;

/// Create a store owned by the caller
#[utoipa::path(
    post,
    path = "/api/stores",
    request_body = StoreRequestDto,
    responses(
        (status = 200, description = "Store created", body = ApiResponse<StoreResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "stores",
    security(("bearer_auth" = []))
)]
pub async fn create_store(
    user: AuthenticatedUser,
    State(service): State<Arc<StoreService>>,
    AppJson(dto): AppJson<StoreRequestDto>,
) -> Result<Json<ApiResponse<StoreResponseDto>>> {
    let store = service.create(&user.user_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(store), None, None)))
}

/// List the caller's stores
#[utoipa::path(
    get,
    path = "/api/stores",
    responses(
        (status = 200, description = "Stores owned by the caller", body = ApiResponse<Vec<StoreResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "stores",
    security(("bearer_auth" = []))
)]
pub async fn list_stores(
    user: AuthenticatedUser,
    State(service): State<Arc<StoreService>>,
) -> Result<Json<ApiResponse<Vec<StoreResponseDto>>>> {
    let stores = service.list(&user.user_id).await?;
    Ok(Json(ApiResponse::list(stores)))
}

/// Get a store the caller owns
#[utoipa::path(
    get,
    path = "/api/stores/{store_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Store details", body = ApiResponse<StoreResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied")
    ),
    tag = "stores",
    security(("bearer_auth" = []))
)]
pub async fn get_store(
    user: AuthenticatedUser,
    State(service): State<Arc<StoreService>>,
    AppPath(store_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<StoreResponseDto>>> {
    let store = service.get(&user.user_id, store_id).await?;
    Ok(Json(ApiResponse::success(Some(store), None, None)))
}

/// Rename a store
#[utoipa::path(
    patch,
    path = "/api/stores/{store_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    request_body = StoreRequestDto,
    responses(
        (status = 200, description = "Store updated", body = ApiResponse<StoreResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied")
    ),
    tag = "stores",
    security(("bearer_auth" = []))
)]
pub async fn update_store(
    user: AuthenticatedUser,
    State(service): State<Arc<StoreService>>,
    AppPath(store_id): AppPath<Uuid>,
    AppJson(dto): AppJson<StoreRequestDto>,
) -> Result<Json<ApiResponse<StoreResponseDto>>> {
    let store = service.update(&user.user_id, store_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(store), None, None)))
}

/// Delete a store that no longer has any resources
#[utoipa::path(
    delete,
    path = "/api/stores/{store_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Store deleted", body = ApiResponse<StoreResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied"),
        (status = 409, description = "Store still has resources")
    ),
    tag = "stores",
    security(("bearer_auth" = []))
)]
pub async fn delete_store(
    user: AuthenticatedUser,
    State(service): State<Arc<StoreService>>,
    AppPath(store_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<StoreResponseDto>>> {
    let store = service.delete(&user.user_id, store_id).await?;
    Ok(Json(ApiResponse::success(
        Some(store),
        Some("Store deleted".to_string()),
        None,
    )))
}
