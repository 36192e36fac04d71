use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::sizes::models::Size;
use crate::shared::validation::NO_WHITESPACE_REGEX;

/// Request body for creating or replacing a size
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SizeRequestDto {
    #[serde(default)]
    #[validate(
        custom(function = "crate::shared::validation::not_blank"),
        length(max = 50)
    )]
    pub name: String,

    #[serde(default)]
    #[validate(
        custom(function = "crate::shared::validation::not_blank"),
        regex(path = *NO_WHITESPACE_REGEX, code = "no_whitespace"),
        length(max = 10)
    )]
    pub value: String,
}

/// Response DTO for size
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SizeResponseDto {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Size> for SizeResponseDto {
    fn from(s: Size) -> Self {
        Self {
            id: s.id,
            store_id: s.store_id,
            name: s.name,
            value: s.value,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
