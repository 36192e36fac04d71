use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::products::models::{Product, ProductFilter, ProductImage};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductImageRequestDto {
    #[serde(default)]
    #[validate(url(code = "url"))]
    pub url: String,
}

/// Request body for creating or replacing a product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProductRequestDto {
    #[serde(default)]
    #[validate(
        custom(function = "crate::shared::validation::not_blank"),
        length(max = 120)
    )]
    pub name: String,

    /// Decimal price, sent as a number or a string ("19.99")
    #[serde(default)]
    #[validate(custom(function = "crate::shared::validation::valid_price"))]
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,

    #[serde(default)]
    #[validate(required)]
    pub category_id: Option<Uuid>,

    #[serde(default)]
    #[validate(required)]
    pub size_id: Option<Uuid>,

    #[serde(default)]
    #[validate(required)]
    pub color_id: Option<Uuid>,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub is_archived: bool,

    /// Replaces every image of the product
    #[serde(default)]
    #[validate(length(min = 1, code = "not_empty"), nested)]
    pub images: Vec<ProductImageRequestDto>,
}

/// Query params for listing products
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    pub category_id: Option<Uuid>,
    pub size_id: Option<Uuid>,
    pub color_id: Option<Uuid>,
    pub is_featured: Option<bool>,
    /// Include archived products. Default: false
    #[serde(default)]
    pub include_archived: bool,
}

impl From<ProductListQuery> for ProductFilter {
    fn from(q: ProductListQuery) -> Self {
        Self {
            category_id: q.category_id,
            size_id: q.size_id,
            color_id: q.color_id,
            is_featured: q.is_featured,
            include_archived: q.include_archived,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductImageResponseDto {
    pub id: Uuid,
    pub url: String,
}

impl From<ProductImage> for ProductImageResponseDto {
    fn from(i: ProductImage) -> Self {
        Self { id: i.id, url: i.url }
    }
}

/// Response DTO for product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub store_id: Uuid,
    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub is_featured: bool,
    pub is_archived: bool,
    pub images: Vec<ProductImageResponseDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            store_id: p.store_id,
            category_id: p.category_id,
            size_id: p.size_id,
            color_id: p.color_id,
            name: p.name,
            price: p.price,
            is_featured: p.is_featured,
            is_archived: p.is_archived,
            images: p.images.into_iter().map(Into::into).collect(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
