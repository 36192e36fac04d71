use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::billboards::models::Billboard;

/// Request body for creating or replacing a billboard
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BillboardRequestDto {
    #[serde(default)]
    #[validate(
        custom(function = "crate::shared::validation::not_blank"),
        length(max = 100)
    )]
    pub label: String,

    /// Public URL of an already uploaded image
    #[serde(default)]
    #[validate(
        custom(function = "crate::shared::validation::not_blank"),
        url(code = "url")
    )]
    pub image_url: String,
}

/// Response DTO for billboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BillboardResponseDto {
    pub id: Uuid,
    pub store_id: Uuid,
    pub label: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Billboard> for BillboardResponseDto {
    fn from(b: Billboard) -> Self {
        Self {
            id: b.id,
            store_id: b.store_id,
            label: b.label,
            image_url: b.image_url,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}
