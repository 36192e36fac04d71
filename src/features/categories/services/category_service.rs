use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::billboards::models::Billboard;
use crate::features::categories::dtos::{CategoryRequestDto, CategoryResponseDto};
use crate::features::categories::models::Category;
use crate::features::stores::services::{require_user, OwnershipGuard};
use crate::modules::persistence::{require_reference, ReferenceGuard, Repository};
use crate::shared::validation::RequestValidator;

/// Service for category operations
pub struct CategoryService {
    categories: Arc<dyn Repository<Category>>,
    billboards: Arc<dyn Repository<Billboard>>,
    guard: OwnershipGuard,
    references: ReferenceGuard,
    validator: Arc<RequestValidator>,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn Repository<Category>>,
        billboards: Arc<dyn Repository<Billboard>>,
        guard: OwnershipGuard,
        references: ReferenceGuard,
        validator: Arc<RequestValidator>,
    ) -> Self {
        Self {
            categories,
            billboards,
            guard,
            references,
            validator,
        }
    }

    pub async fn create(
        &self,
        user_id: &str,
        store_id: Uuid,
        dto: CategoryRequestDto,
    ) -> Result<CategoryResponseDto> {
        self.check_request(user_id, store_id, &dto).await?;
        let billboard_id = self.billboard_of(store_id, &dto).await?;

        let category = self
            .categories
            .insert(Category::new(
                store_id,
                billboard_id,
                dto.name.trim().to_string(),
            ))
            .await?;

        tracing::info!(
            "Category created: id={}, store_id={}",
            category.id,
            store_id
        );
        Ok(category.into())
    }

    pub async fn list(&self, store_id: Uuid) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.categories.list_by_store(store_id).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, store_id: Uuid, category_id: Uuid) -> Result<CategoryResponseDto> {
        self.find(store_id, category_id).await.map(Into::into)
    }

    pub async fn update(
        &self,
        user_id: &str,
        store_id: Uuid,
        category_id: Uuid,
        dto: CategoryRequestDto,
    ) -> Result<CategoryResponseDto> {
        self.check_request(user_id, store_id, &dto).await?;
        let mut category = self.find(store_id, category_id).await?;
        let billboard_id = self.billboard_of(store_id, &dto).await?;

        category.billboard_id = billboard_id;
        category.name = dto.name.trim().to_string();
        category.updated_at = Utc::now();

        let category = self
            .categories
            .update(category)
            .await?
            .ok_or_else(|| not_found(category_id))?;

        tracing::info!("Category updated: id={}", category.id);
        Ok(category.into())
    }

    /// Fails with `Conflict` while any product is filed under the category
    pub async fn delete(
        &self,
        user_id: &str,
        store_id: Uuid,
        category_id: Uuid,
    ) -> Result<CategoryResponseDto> {
        self.guard.authorize(user_id, store_id).await?;
        self.find(store_id, category_id).await?;
        self.references
            .ensure_unreferenced("Category", category_id)
            .await?;

        let category = self
            .categories
            .delete(store_id, category_id)
            .await?
            .ok_or_else(|| not_found(category_id))?;

        tracing::info!("Category deleted: id={}", category.id);
        Ok(category.into())
    }

    /// Identity, field rules, then ownership
    async fn check_request(
        &self,
        user_id: &str,
        store_id: Uuid,
        dto: &CategoryRequestDto,
    ) -> Result<()> {
        require_user(user_id)?;
        self.validator.validate(dto)?;
        self.guard.authorize(user_id, store_id).await?;
        Ok(())
    }

    /// The billboard the category points at, which must belong to `store_id`
    async fn billboard_of(&self, store_id: Uuid, dto: &CategoryRequestDto) -> Result<Uuid> {
        let billboard_id = dto
            .billboard_id
            .ok_or_else(|| AppError::Validation("billboard_id is required".to_string()))?;
        require_reference(self.billboards.as_ref(), store_id, billboard_id, "billboard_id")
            .await?;
        Ok(billboard_id)
    }

    async fn find(&self, store_id: Uuid, category_id: Uuid) -> Result<Category> {
        self.categories
            .find(store_id, category_id)
            .await?
            .ok_or_else(|| not_found(category_id))
    }
}

fn not_found(category_id: Uuid) -> AppError {
    AppError::NotFound(format!("Category {} not found", category_id))
}
