use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::stores::models::Store;

/// Request body for creating or renaming a store
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct StoreRequestDto {
    #[serde(default)]
    #[validate(
        custom(function = "crate::shared::validation::not_blank"),
        length(max = 100)
    )]
    pub name: String,
}

/// Response DTO for store
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreResponseDto {
    pub id: Uuid,
    pub name: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Store> for StoreResponseDto {
    fn from(s: Store) -> Self {
        Self {
            id: s.id,
            name: s.name,
            user_id: s.user_id,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
