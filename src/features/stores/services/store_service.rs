use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::stores::dtos::{StoreRequestDto, StoreResponseDto};
use crate::features::stores::models::Store;
use crate::features::stores::repository::StoreRepository;
use crate::features::stores::services::{require_user, OwnershipGuard};
use crate::modules::persistence::ReferenceGuard;
use crate::shared::validation::RequestValidator;

/// Service for the stores a user owns
pub struct StoreService {
    stores: Arc<dyn StoreRepository>,
    guard: OwnershipGuard,
    references: ReferenceGuard,
    validator: Arc<RequestValidator>,
}

impl StoreService {
    pub fn new(
        stores: Arc<dyn StoreRepository>,
        references: ReferenceGuard,
        validator: Arc<RequestValidator>,
    ) -> Self {
        Self {
            guard: OwnershipGuard::new(Arc::clone(&stores)),
            stores,
            references,
            validator,
        }
    }

    pub async fn create(&self, user_id: &str, dto: StoreRequestDto) -> Result<StoreResponseDto> {
        require_user(user_id)?;
        self.validator.validate(&dto)?;

        let store = self
            .stores
            .insert(Store::new(dto.name.trim().to_string(), user_id.to_string()))
            .await?;

        tracing::info!("Store created: id={}, user_id={}", store.id, user_id);
        Ok(store.into())
    }

    /// The caller's stores, oldest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<StoreResponseDto>> {
        require_user(user_id)?;
        let stores = self.stores.list_owned(user_id).await?;
        Ok(stores.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, user_id: &str, store_id: Uuid) -> Result<StoreResponseDto> {
        let store = self.guard.authorize(user_id, store_id).await?;
        Ok(store.into())
    }

    pub async fn update(
        &self,
        user_id: &str,
        store_id: Uuid,
        dto: StoreRequestDto,
    ) -> Result<StoreResponseDto> {
        require_user(user_id)?;
        self.validator.validate(&dto)?;
        let mut store = self.guard.authorize(user_id, store_id).await?;

        store.name = dto.name.trim().to_string();
        store.updated_at = Utc::now();

        let store = self
            .stores
            .update(store)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Store {} not found", store_id)))?;

        tracing::info!("Store updated: id={}", store.id);
        Ok(store.into())
    }

    /// Deletes an empty store. Billboards, categories, sizes, colors and
    /// products must be removed first.
    pub async fn delete(&self, user_id: &str, store_id: Uuid) -> Result<StoreResponseDto> {
        let store = self.guard.authorize(user_id, store_id).await?;
        self.references.ensure_unreferenced("Store", store.id).await?;

        let store = self
            .stores
            .delete(store.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Store {} not found", store_id)))?;

        tracing::info!("Store deleted: id={}", store.id);
        Ok(store.into())
    }
}
