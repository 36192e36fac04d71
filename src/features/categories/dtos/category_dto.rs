use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::Category;

/// Request body for creating or replacing a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CategoryRequestDto {
    #[serde(default)]
    #[validate(
        custom(function = "crate::shared::validation::not_blank"),
        length(max = 100)
    )]
    pub name: String,

    #[serde(default)]
    #[validate(required)]
    pub billboard_id: Option<Uuid>,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub store_id: Uuid,
    pub billboard_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            store_id: c.store_id,
            billboard_id: c.billboard_id,
            name: c.name,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
