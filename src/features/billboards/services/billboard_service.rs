use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::billboards::dtos::{BillboardRequestDto, BillboardResponseDto};
use crate::features::billboards::models::Billboard;
use crate::features::stores::services::{require_user, OwnershipGuard};
use crate::modules::persistence::{ReferenceGuard, Repository};
use crate::shared::validation::RequestValidator;

pub struct BillboardService {
    billboards: Arc<dyn Repository<Billboard>>,
    guard: OwnershipGuard,
    references: ReferenceGuard,
    validator: Arc<RequestValidator>,
}

impl BillboardService {
    pub fn new(
        billboards: Arc<dyn Repository<Billboard>>,
        guard: OwnershipGuard,
        references: ReferenceGuard,
        validator: Arc<RequestValidator>,
    ) -> Self {
        Self {
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
        dto: BillboardRequestDto,
    ) -> Result<BillboardResponseDto> {
        require_user(user_id)?;
        self.validator.validate(&dto)?;
        self.guard.authorize(user_id, store_id).await?;

        let billboard = self
            .billboards
            .insert(Billboard::new(
                store_id,
                dto.label.trim().to_string(),
                dto.image_url.trim().to_string(),
            ))
            .await?;

        tracing::info!(
            "Billboard created: id={}, store_id={}",
            billboard.id,
            store_id
        );
        Ok(billboard.into())
    }

    pub async fn list(&self, store_id: Uuid) -> Result<Vec<BillboardResponseDto>> {
        let billboards = self.billboards.list_by_store(store_id).await?;
        Ok(billboards.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, store_id: Uuid, billboard_id: Uuid) -> Result<BillboardResponseDto> {
        self.find(store_id, billboard_id).await.map(Into::into)
    }

    pub async fn update(
        &self,
        user_id: &str,
        store_id: Uuid,
        billboard_id: Uuid,
        dto: BillboardRequestDto,
    ) -> Result<BillboardResponseDto> {
        require_user(user_id)?;
        self.validator.validate(&dto)?;
        self.guard.authorize(user_id, store_id).await?;

        let mut billboard = self.find(store_id, billboard_id).await?;
        billboard.label = dto.label.trim().to_string();
        billboard.image_url = dto.image_url.trim().to_string();
        billboard.updated_at = Utc::now();

        let billboard = self
            .billboards
            .update(billboard)
            .await?
            .ok_or_else(|| not_found(billboard_id))?;

        tracing::info!("Billboard updated: id={}", billboard.id);
        Ok(billboard.into())
    }

    /// Fails with `Conflict` while any category still points at the billboard
    pub async fn delete(
        &self,
        user_id: &str,
        store_id: Uuid,
        billboard_id: Uuid,
    ) -> Result<BillboardResponseDto> {
        self.guard.authorize(user_id, store_id).await?;
        self.find(store_id, billboard_id).await?;
        self.references
            .ensure_unreferenced("Billboard", billboard_id)
            .await?;

        let billboard = self
            .billboards
            .delete(store_id, billboard_id)
            .await?
            .ok_or_else(|| not_found(billboard_id))?;

        tracing::info!("Billboard deleted: id={}", billboard.id);
        Ok(billboard.into())
    }

    async fn find(&self, store_id: Uuid, billboard_id: Uuid) -> Result<Billboard> {
        self.billboards
            .find(store_id, billboard_id)
            .await?
            .ok_or_else(|| not_found(billboard_id))
    }
}

fn not_found(billboard_id: Uuid) -> AppError {
    AppError::NotFound(format!("Billboard {} not found", billboard_id))
}
