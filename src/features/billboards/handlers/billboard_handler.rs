use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::AuthenticatedUser;
use crate::features::billboards::dtos::{BillboardRequestDto, BillboardResponseDto};
use crate::features::billboards::services::BillboardService;
use crate::shared::types::ApiResponse;

/// Create a billboard in a store owned by the caller
#[utoipa::path(
    post,
    path = "/api/{store_id}/billboards",
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    request_body = BillboardRequestDto,
    responses(
        (status = 200, description = "Billboard created", body = ApiResponse<BillboardResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied")
    ),
    tag = "billboards",
    security(("bearer_auth" = []))
)]
pub async fn create_billboard(
    user: AuthenticatedUser,
    State(service): State<Arc<BillboardService>>,
    AppPath(store_id): AppPath<Uuid>,
    AppJson(dto): AppJson<BillboardRequestDto>,
) -> Result<Json<ApiResponse<BillboardResponseDto>>> {
    let billboard = service.create(&user.user_id, store_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(billboard), None, None)))
}

/// List the billboards of a store
#[utoipa::path(
    get,
    path = "/api/{store_id}/billboards",
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Billboards, newest first", body = ApiResponse<Vec<BillboardResponseDto>>),
        (status = 400, description = "Invalid store ID")
    ),
    tag = "billboards"
)]
pub async fn list_billboards(
    State(service): State<Arc<BillboardService>>,
    AppPath(store_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<BillboardResponseDto>>>> {
    let billboards = service.list(store_id).await?;
    Ok(Json(ApiResponse::list(billboards)))
}

/// Get a billboard
#[utoipa::path(
    get,
    path = "/api/{store_id}/billboards/{billboard_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("billboard_id" = Uuid, Path, description = "Billboard ID")
    ),
    responses(
        (status = 200, description = "Billboard details", body = ApiResponse<BillboardResponseDto>),
        (status = 404, description = "Billboard not found")
    ),
    tag = "billboards"
)]
pub async fn get_billboard(
    State(service): State<Arc<BillboardService>>,
    AppPath((store_id, billboard_id)): AppPath<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<BillboardResponseDto>>> {
    let billboard = service.get(store_id, billboard_id).await?;
    Ok(Json(ApiResponse::success(Some(billboard), None, None)))
}

/// Replace the label and image of a billboard
#[utoipa::path(
    patch,
    path = "/api/{store_id}/billboards/{billboard_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("billboard_id" = Uuid, Path, description = "Billboard ID")
    ),
    request_body = BillboardRequestDto,
    responses(
        (status = 200, description = "Billboard updated", body = ApiResponse<BillboardResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied"),
        (status = 404, description = "Billboard not found")
    ),
    tag = "billboards",
    security(("bearer_auth" = []))
)]
pub async fn update_billboard(
    user: AuthenticatedUser,
    State(service): State<Arc<BillboardService>>,
    AppPath((store_id, billboard_id)): AppPath<(Uuid, Uuid)>,
    AppJson(dto): AppJson<BillboardRequestDto>,
) -> Result<Json<ApiResponse<BillboardResponseDto>>> {
    let billboard = service
        .update(&user.user_id, store_id, billboard_id, dto)
        .await?;
    Ok(Json(ApiResponse::success(Some(billboard), None, None)))
}

/// Delete a billboard no category uses
#[utoipa::path(
    delete,
    path = "/api/{store_id}/billboards/{billboard_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("billboard_id" = Uuid, Path, description = "Billboard ID")
    ),
    responses(
        (status = 200, description = "Billboard deleted", body = ApiResponse<BillboardResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied"),
        (status = 404, description = "Billboard not found"),
        (status = 409, description = "Billboard is used by categories")
    ),
    tag = "billboards",
    security(("bearer_auth" = []))
)]
pub async fn delete_billboard(
    user: AuthenticatedUser,
    State(service): State<Arc<BillboardService>>,
    AppPath((store_id, billboard_id)): AppPath<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<BillboardResponseDto>>> {
    let billboard = service
        .delete(&user.user_id, store_id, billboard_id)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(billboard),
        Some("Billboard deleted".to_string()),
        None,
    )))
}
