use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::colors::models::Color;
use crate::features::products::dtos::{ProductRequestDto, ProductResponseDto};
use crate::features::products::models::{Product, ProductDraft, ProductFilter};
use crate::features::products::repository::ProductRepository;
use crate::features::sizes::models::Size;
use crate::features::stores::services::{require_user, OwnershipGuard};
use crate::modules::persistence::{require_reference, Repository};
use crate::shared::validation::RequestValidator;

/// Catalog tables a product points into
pub struct ProductReferences {
    pub categories: Arc<dyn Repository<Category>>,
    pub sizes: Arc<dyn Repository<Size>>,
    pub colors: Arc<dyn Repository<Color>>,
}

/// Service for product operations
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    catalog: ProductReferences,
    guard: OwnershipGuard,
    validator: Arc<RequestValidator>,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        catalog: ProductReferences,
        guard: OwnershipGuard,
        validator: Arc<RequestValidator>,
    ) -> Self {
        Self {
            products,
            catalog,
            guard,
            validator,
        }
    }

    pub async fn create(
        &self,
        user_id: &str,
        store_id: Uuid,
        dto: ProductRequestDto,
    ) -> Result<ProductResponseDto> {
        self.check_request(user_id, store_id, &dto).await?;
        let draft = self.resolve_draft(store_id, dto).await?;

        let product = self.products.insert(Product::new(store_id, draft)).await?;

        tracing::info!(
            "Product created: id={}, store_id={}, images={}",
            product.id,
            store_id,
            product.images.len()
        );
        Ok(product.into())
    }

    pub async fn list(
        &self,
        store_id: Uuid,
        filter: ProductFilter,
    ) -> Result<Vec<ProductResponseDto>> {
        let products = self.products.search(store_id, &filter).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, store_id: Uuid, product_id: Uuid) -> Result<ProductResponseDto> {
        self.find(store_id, product_id).await.map(Into::into)
    }

    pub async fn update(
        &self,
        user_id: &str,
        store_id: Uuid,
        product_id: Uuid,
        dto: ProductRequestDto,
    ) -> Result<ProductResponseDto> {
        self.check_request(user_id, store_id, &dto).await?;
        let mut product = self.find(store_id, product_id).await?;
        let draft = self.resolve_draft(store_id, dto).await?;

        product.apply(draft, Utc::now());

        let product = self
            .products
            .update(product)
            .await?
            .ok_or_else(|| not_found(product_id))?;

        tracing::info!("Product updated: id={}", product.id);
        Ok(product.into())
    }

    /// Nothing references a product; its images are removed with it
    pub async fn delete(
        &self,
        user_id: &str,
        store_id: Uuid,
        product_id: Uuid,
    ) -> Result<ProductResponseDto> {
        self.guard.authorize(user_id, store_id).await?;

        let product = self
            .products
            .delete(store_id, product_id)
            .await?
            .ok_or_else(|| not_found(product_id))?;

        tracing::info!("Product deleted: id={}", product.id);
        Ok(product.into())
    }

    /// Identity, field rules, then ownership
    async fn check_request(
        &self,
        user_id: &str,
        store_id: Uuid,
        dto: &ProductRequestDto,
    ) -> Result<()> {
        require_user(user_id)?;
        self.validator.validate(dto)?;
        self.guard.authorize(user_id, store_id).await?;
        Ok(())
    }

    /// Checks the three catalog references and builds the stored fields.
    /// Prices are kept at two decimal places, the scale of the price column.
    async fn resolve_draft(&self, store_id: Uuid, dto: ProductRequestDto) -> Result<ProductDraft> {
        let (Some(category_id), Some(size_id), Some(color_id)) =
            (dto.category_id, dto.size_id, dto.color_id)
        else {
            return Err(AppError::Validation(
                "category_id, size_id and color_id are required".to_string(),
            ));
        };

        require_reference(
            self.catalog.categories.as_ref(),
            store_id,
            category_id,
            "category_id",
        )
        .await?;
        require_reference(self.catalog.sizes.as_ref(), store_id, size_id, "size_id").await?;
        require_reference(self.catalog.colors.as_ref(), store_id, color_id, "color_id").await?;

        let mut price = dto.price;
        price.rescale(2);

        Ok(ProductDraft {
            name: dto.name.trim().to_string(),
            price,
            category_id,
            size_id,
            color_id,
            is_featured: dto.is_featured,
            is_archived: dto.is_archived,
            image_urls: dto.images.into_iter().map(|i| i.url).collect(),
        })
    }

    async fn find(&self, store_id: Uuid, product_id: Uuid) -> Result<Product> {
        self.products
            .find(store_id, product_id)
            .await?
            .ok_or_else(|| not_found(product_id))
    }
}

fn not_found(product_id: Uuid) -> AppError {
    AppError::NotFound(format!("Product {} not found", product_id))
}
