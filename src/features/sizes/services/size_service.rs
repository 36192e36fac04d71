use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::sizes::dtos::{SizeRequestDto, SizeResponseDto};
use crate::features::sizes::models::Size;
use crate::features::stores::services::{require_user, OwnershipGuard};
use crate::modules::persistence::{ReferenceGuard, Repository};
use crate::shared::validation::RequestValidator;

/// Service for size operations
pub struct SizeService {
    sizes: Arc<dyn Repository<Size>>,
    guard: OwnershipGuard,
    references: ReferenceGuard,
    validator: Arc<RequestValidator>,
}

impl SizeService {
    pub fn new(
        sizes: Arc<dyn Repository<Size>>,
        guard: OwnershipGuard,
        references: ReferenceGuard,
        validator: Arc<RequestValidator>,
    ) -> Self {
        Self {
            sizes,
            guard,
            references,
            validator,
        }
    }

    pub async fn create(
        &self,
        user_id: &str,
        store_id: Uuid,
        dto: SizeRequestDto,
    ) -> Result<SizeResponseDto> {
        require_user(user_id)?;
        self.validator.validate(&dto)?;
        self.guard.authorize(user_id, store_id).await?;

        let size = self
            .sizes
            .insert(Size::new(
                store_id,
                dto.name.trim().to_string(),
                dto.value,
            ))
            .await?;

        tracing::info!("Size created: id={}, store_id={}", size.id, store_id);
        Ok(size.into())
    }

    pub async fn list(&self, store_id: Uuid) -> Result<Vec<SizeResponseDto>> {
        let sizes = self.sizes.list_by_store(store_id).await?;
        Ok(sizes.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, store_id: Uuid, size_id: Uuid) -> Result<SizeResponseDto> {
        self.find(store_id, size_id).await.map(Into::into)
    }

    pub async fn update(
        &self,
        user_id: &str,
        store_id: Uuid,
        size_id: Uuid,
        dto: SizeRequestDto,
    ) -> Result<SizeResponseDto> {
        require_user(user_id)?;
        self.validator.validate(&dto)?;
        self.guard.authorize(user_id, store_id).await?;

        let mut size = self.find(store_id, size_id).await?;
        size.name = dto.name.trim().to_string();
        size.value = dto.value;
        size.updated_at = Utc::now();

        let size = self
            .sizes
            .update(size)
            .await?
            .ok_or_else(|| not_found(size_id))?;

        tracing::info!("Size updated: id={}", size.id);
        Ok(size.into())
    }

    pub async fn delete(
        &self,
        user_id: &str,
        store_id: Uuid,
        size_id: Uuid,
    ) -> Result<SizeResponseDto> {
        self.guard.authorize(user_id, store_id).await?;
        self.find(store_id, size_id).await?;
        self.references.ensure_unreferenced("Size", size_id).await?;

        let size = self
            .sizes
            .delete(store_id, size_id)
            .await?
            .ok_or_else(|| not_found(size_id))?;

        tracing::info!("Size deleted: id={}", size.id);
        Ok(size.into())
    }

    async fn find(&self, store_id: Uuid, size_id: Uuid) -> Result<Size> {
        self.sizes
            .find(store_id, size_id)
            .await?
            .ok_or_else(|| not_found(size_id))
    }
}

fn not_found(size_id: Uuid) -> AppError {
    AppError::NotFound(format!("Size {} not found", size_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::TestBackend;

    fn request(name: &str, value: &str) -> SizeRequestDto {
        SizeRequestDto {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;
        let service = &backend.services.sizes;

        let created = service
            .create("user_a", store.id, request("Pequeno", "S"))
            .await
            .unwrap();
        let fetched = service.get(store.id, created.id).await.unwrap();

        assert_eq!(fetched.name, "Pequeno");
        assert_eq!(fetched.value, "S");
    }

    #[tokio::test]
    async fn test_value_with_whitespace_is_rejected() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;

        let err = backend
            .services
            .sizes
            .create("user_a", store.id, request("Extra large", "X L"))
            .await
            .unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "value must not contain whitespace"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_name_is_rejected_before_ownership() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;

        // A non-owner with an invalid body sees the validation error first
        let err = backend
            .services
            .sizes
            .create("user_b", store.id, request("", "S"))
            .await
            .unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "name is required"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_from_other_store_is_not_found() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;
        let other = backend.store("user_b").await;
        let size = backend.size("user_a", store.id).await;

        let err = backend
            .services
            .sizes
            .get(other.id, size.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_blocked_until_product_removed() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;
        let product = backend.product("user_a", store.id).await;
        let service = &backend.services.sizes;

        let err = service
            .delete("user_a", store.id, product.size_id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        backend
            .services
            .products
            .delete("user_a", store.id, product.id)
            .await
            .unwrap();
        let deleted = service
            .delete("user_a", store.id, product.size_id)
            .await
            .unwrap();
        assert_eq!(deleted.id, product.size_id);
    }
}
