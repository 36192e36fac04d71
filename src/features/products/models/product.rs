use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::modules::persistence::Record;

/// Database model for product. `images` lives in `product_images` and is
/// loaded separately.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub store_id: Uuid,
    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub is_featured: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub images: Vec<ProductImage>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductImage {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields of a product, already validated
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: Decimal,
    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,
    pub is_featured: bool,
    pub is_archived: bool,
    pub image_urls: Vec<String>,
}

impl Product {
    pub fn new(store_id: Uuid, draft: ProductDraft) -> Self {
        let now = Utc::now();
        let mut product = Self {
            id: Uuid::now_v7(),
            store_id,
            category_id: draft.category_id,
            size_id: draft.size_id,
            color_id: draft.color_id,
            name: String::new(),
            price: Decimal::ZERO,
            is_featured: false,
            is_archived: false,
            created_at: now,
            updated_at: now,
            images: Vec::new(),
        };
        product.apply(draft, now);
        product
    }

    /// Full replacement of the mutable fields. Images are replaced wholesale.
    pub fn apply(&mut self, draft: ProductDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.price = draft.price;
        self.category_id = draft.category_id;
        self.size_id = draft.size_id;
        self.color_id = draft.color_id;
        self.is_featured = draft.is_featured;
        self.is_archived = draft.is_archived;
        self.updated_at = now;
        self.images = draft
            .image_urls
            .into_iter()
            .map(|url| ProductImage {
                id: Uuid::now_v7(),
                product_id: self.id,
                url,
                created_at: now,
                updated_at: now,
            })
            .collect();
    }
}

impl Record for Product {
    fn id(&self) -> Uuid {
        self.id
    }

    fn store_id(&self) -> Uuid {
        self.store_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Listing filter. Archived products are hidden unless asked for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category_id: Option<Uuid>,
    pub size_id: Option<Uuid>,
    pub color_id: Option<Uuid>,
    pub is_featured: Option<bool>,
    pub include_archived: bool,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.category_id.map_or(true, |id| product.category_id == id)
            && self.size_id.map_or(true, |id| product.size_id == id)
            && self.color_id.map_or(true, |id| product.color_id == id)
            && self.is_featured.map_or(true, |f| product.is_featured == f)
            && (self.include_archived || !product.is_archived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(urls: &[&str]) -> ProductDraft {
        ProductDraft {
            name: "Shirt".to_string(),
            price: Decimal::new(1999, 2),
            category_id: Uuid::new_v4(),
            size_id: Uuid::new_v4(),
            color_id: Uuid::new_v4(),
            is_featured: true,
            is_archived: false,
            image_urls: urls.iter().map(|u| u.to_string()).collect(),
        }
    }

    #[test]
    fn test_apply_replaces_images_and_keeps_created_at() {
        let mut product = Product::new(Uuid::new_v4(), draft(&["https://a.example/1.png"]));
        let created_at = product.created_at;
        let first_image = product.images[0].id;

        let later = created_at + chrono::Duration::seconds(5);
        product.apply(
            draft(&["https://a.example/2.png", "https://a.example/3.png"]),
            later,
        );

        assert_eq!(product.created_at, created_at);
        assert_eq!(product.updated_at, later);
        let urls: Vec<&str> = product.images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, ["https://a.example/2.png", "https://a.example/3.png"]);
        assert!(product.images.iter().all(|i| i.id != first_image));
        assert!(product.images.iter().all(|i| i.product_id == product.id));
    }

    #[test]
    fn test_filter_hides_archived_by_default() {
        let mut product = Product::new(Uuid::new_v4(), draft(&["https://a.example/1.png"]));
        product.is_archived = true;

        assert!(!ProductFilter::default().matches(&product));
        assert!(ProductFilter {
            include_archived: true,
            ..Default::default()
        }
        .matches(&product));
    }

    #[test]
    fn test_filter_by_references_and_featured() {
        let product = Product::new(Uuid::new_v4(), draft(&["https://a.example/1.png"]));

        let by_category = ProductFilter {
            category_id: Some(product.category_id),
            is_featured: Some(true),
            ..Default::default()
        };
        assert!(by_category.matches(&product));

        let other_size = ProductFilter {
            size_id: Some(Uuid::new_v4()),
            ..Default::default()
        };
        assert!(!other_size.matches(&product));

        let not_featured = ProductFilter {
            is_featured: Some(false),
            ..Default::default()
        };
        assert!(!not_featured.matches(&product));
    }
}
