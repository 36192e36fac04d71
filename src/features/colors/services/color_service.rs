use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::colors::dtos::{ColorRequestDto, ColorResponseDto};
use crate::features::colors::models::Color;
use crate::features::stores::services::{require_user, OwnershipGuard};
use crate::modules::persistence::{ReferenceGuard, Repository};
use crate::shared::validation::RequestValidator;

/// Service for color operations
pub struct ColorService {
    colors: Arc<dyn Repository<Color>>,
    guard: OwnershipGuard,
    references: ReferenceGuard,
    validator: Arc<RequestValidator>,
}

impl ColorService {
    pub fn new(
        colors: Arc<dyn Repository<Color>>,
        guard: OwnershipGuard,
        references: ReferenceGuard,
        validator: Arc<RequestValidator>,
    ) -> Self {
        Self {
            colors,
            guard,
            references,
            validator,
        }
    }

    pub async fn create(
        &self,
        user_id: &str,
        store_id: Uuid,
        dto: ColorRequestDto,
    ) -> Result<ColorResponseDto> {
        require_user(user_id)?;
        self.validator.validate(&dto)?;
        self.guard.authorize(user_id, store_id).await?;

        let color = self
            .colors
            .insert(Color::new(store_id, dto.name.trim().to_string(), dto.value))
            .await?;

        tracing::info!("Color created: id={}, store_id={}", color.id, store_id);
        Ok(color.into())
    }

    pub async fn list(&self, store_id: Uuid) -> Result<Vec<ColorResponseDto>> {
        let colors = self.colors.list_by_store(store_id).await?;
        Ok(colors.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, store_id: Uuid, color_id: Uuid) -> Result<ColorResponseDto> {
        self.find(store_id, color_id).await.map(Into::into)
    }

    pub async fn update(
        &self,
        user_id: &str,
        store_id: Uuid,
        color_id: Uuid,
        dto: ColorRequestDto,
    ) -> Result<ColorResponseDto> {
        require_user(user_id)?;
        self.validator.validate(&dto)?;
        self.guard.authorize(user_id, store_id).await?;

        let mut color = self.find(store_id, color_id).await?;
        color.name = dto.name.trim().to_string();
        color.value = dto.value;
        color.updated_at = Utc::now();

        let color = self
            .colors
            .update(color)
            .await?
            .ok_or_else(|| not_found(color_id))?;

        tracing::info!("Color updated: id={}", color.id);
        Ok(color.into())
    }

    pub async fn delete(
        &self,
        user_id: &str,
        store_id: Uuid,
        color_id: Uuid,
    ) -> Result<ColorResponseDto> {
        self.guard.authorize(user_id, store_id).await?;
        self.find(store_id, color_id).await?;
        self.references.ensure_unreferenced("Color", color_id).await?;

        let color = self
            .colors
            .delete(store_id, color_id)
            .await?
            .ok_or_else(|| not_found(color_id))?;

        tracing::info!("Color deleted: id={}", color.id);
        Ok(color.into())
    }

    async fn find(&self, store_id: Uuid, color_id: Uuid) -> Result<Color> {
        self.colors
            .find(store_id, color_id)
            .await?
            .ok_or_else(|| not_found(color_id))
    }
}

fn not_found(color_id: Uuid) -> AppError {
    AppError::NotFound(format!("Color {} not found", color_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::TestBackend;

    fn request(name: &str, value: &str) -> ColorRequestDto {
        ColorRequestDto {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;
        let service = &backend.services.colors;

        let created = service
            .create("user_a", store.id, request("Vermelho", "#ff0000"))
            .await
            .unwrap();
        let fetched = service.get(store.id, created.id).await.unwrap();

        assert_eq!(fetched.name, "Vermelho");
        assert_eq!(fetched.value, "#ff0000");
    }

    #[tokio::test]
    async fn test_value_must_be_hex_code() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;

        let err = backend
            .services
            .colors
            .create("user_a", store.id, request("Red", "red"))
            .await
            .unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "value must be a valid hex code"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_accepts_short_hex_and_keeps_created_at() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;
        let color = backend.color("user_a", store.id).await;

        let updated = backend
            .services
            .colors
            .update("user_a", store.id, color.id, request("White", "#FFF"))
            .await
            .unwrap();

        assert_eq!(updated.value, "#FFF");
        assert_eq!(updated.created_at, color.created_at);
        assert!(updated.updated_at >= color.updated_at);
    }

    #[tokio::test]
    async fn test_get_from_other_store_is_not_found() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;
        let other = backend.store("user_b").await;
        let color = backend.color("user_a", store.id).await;

        let err = backend
            .services
            .colors
            .get(other.id, color.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_blocked_until_product_removed() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;
        let product = backend.product("user_a", store.id).await;
        let service = &backend.services.colors;

        let err = service
            .delete("user_a", store.id, product.color_id)
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
            .delete("user_a", store.id, product.color_id)
            .await
            .unwrap();
        assert_eq!(deleted.id, product.color_id);
    }
}
