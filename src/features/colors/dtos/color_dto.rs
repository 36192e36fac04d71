use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::colors::models::Color;
use crate::shared::validation::HEX_COLOR_REGEX;

/// Request body for creating or replacing a color
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ColorRequestDto {
    #[serde(default)]
    #[validate(
        custom(function = "crate::shared::validation::not_blank"),
        length(max = 50)
    )]
    pub name: String,

    /// Hex code, `#rgb` or `#rrggbb`
    #[serde(default)]
    #[validate(
        custom(function = "crate::shared::validation::not_blank"),
        regex(path = *HEX_COLOR_REGEX, code = "hex_color")
    )]
    pub value: String,
}

/// Response DTO for color
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ColorResponseDto {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Color> for ColorResponseDto {
    fn from(s: Color) -> Self {
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
