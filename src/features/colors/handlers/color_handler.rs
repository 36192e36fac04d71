use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::AuthenticatedUser;
use crate::features::colors::dtos::{ColorRequestDto, ColorResponseDto};
use crate::features::colors::services::ColorService;
use crate::shared::types::ApiResponse;

/// Create a color in a store owned by the caller
#[utoipa::path(
    post,
    path = "/api/{store_id}/colors",
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    request_body = ColorRequestDto,
    responses(
        (status = 200, description = "Color created", body = ApiResponse<ColorResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied")
    ),
    tag = "colors",
    security(("bearer_auth" = []))
)]
pub async fn create_color(
    user: AuthenticatedUser,
    State(service): State<Arc<ColorService>>,
    AppPath(store_id): AppPath<Uuid>,
    AppJson(dto): AppJson<ColorRequestDto>,
) -> Result<Json<ApiResponse<ColorResponseDto>>> {
    let color = service.create(&user.user_id, store_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(color), None, None)))
}

/// List the colors of a store
#[utoipa::path(
    get,
    path = "/api/{store_id}/colors",
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Colors, newest first", body = ApiResponse<Vec<ColorResponseDto>>),
        (status = 400, description = "Invalid store ID")
    ),
    tag = "colors"
)]
pub async fn list_colors(
    State(service): State<Arc<ColorService>>,
    AppPath(store_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<ColorResponseDto>>>> {
    let colors = service.list(store_id).await?;
    Ok(Json(ApiResponse::list(colors)))
}

/// Get a color
#[utoipa::path(
    get,
    path = "/api/{store_id}/colors/{color_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("color_id" = Uuid, Path, description = "Color ID")
    ),
    responses(
        (status = 200, description = "Color details", body = ApiResponse<ColorResponseDto>),
        (status = 404, description = "Color not found")
    ),
    tag = "colors"
)]
pub async fn get_color(
    State(service): State<Arc<ColorService>>,
    AppPath((store_id, color_id)): AppPath<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<ColorResponseDto>>> {
    let color = service.get(store_id, color_id).await?;
    Ok(Json(ApiResponse::success(Some(color), None, None)))
}

/// Replace the name and value of a color
#[utoipa::path(
    patch,
    path = "/api/{store_id}/colors/{color_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("color_id" = Uuid, Path, description = "Color ID")
    ),
    request_body = ColorRequestDto,
    responses(
        (status = 200, description = "Color updated", body = ApiResponse<ColorResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied"),
        (status = 404, description = "Color not found")
    ),
    tag = "colors",
    security(("bearer_auth" = []))
)]
pub async fn update_color(
    user: AuthenticatedUser,
    State(service): State<Arc<ColorService>>,
    AppPath((store_id, color_id)): AppPath<(Uuid, Uuid)>,
    AppJson(dto): AppJson<ColorRequestDto>,
) -> Result<Json<ApiResponse<ColorResponseDto>>> {
    let color = service
        .update(&user.user_id, store_id, color_id, dto)
        .await?;
    Ok(Json(ApiResponse::success(Some(color), None, None)))
}

/// Delete a color no product uses
#[utoipa::path(
    delete,
    path = "/api/{store_id}/colors/{color_id}",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("color_id" = Uuid, Path, description = "Color ID")
    ),
    responses(
        (status = 200, description = "Color deleted", body = ApiResponse<ColorResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Store not found or access denied"),
        (status = 404, description = "Color not found"),
        (status = 409, description = "Color is used by products")
    ),
    tag = "colors",
    security(("bearer_auth" = []))
)]
pub async fn delete_color(
    user: AuthenticatedUser,
    State(service): State<Arc<ColorService>>,
    AppPath((store_id, color_id)): AppPath<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<ColorResponseDto>>> {
    let color = service
        .delete(&user.user_id, store_id, color_id)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(color),
        Some("Color deleted".to_string()),
        None,
    )))
}
