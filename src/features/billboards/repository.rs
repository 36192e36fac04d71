use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::billboards::models::Billboard;
use crate::modules::persistence::{map_delete_error, map_write_error, Repository};

pub struct PgBillboardRepository {
    pool: PgPool,
}

impl PgBillboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Billboard> for PgBillboardRepository {
    async fn insert(&self, billboard: Billboard) -> Result<Billboard> {
        sqlx::query_as::<_, Billboard>(
            r#"
            INSERT INTO billboards (id, store_id, label, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, store_id, label, image_url, created_at, updated_at
            "#,
        )
        .bind(billboard.id)
        .bind(billboard.store_id)
        .bind(&billboard.label)
        .bind(&billboard.image_url)
        .bind(billboard.created_at)
        .bind(billboard.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<Billboard>> {
        sqlx::query_as::<_, Billboard>(
            r#"
            SELECT id, store_id, label, image_url, created_at, updated_at
            FROM billboards
            WHERE store_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list billboards: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Billboard>> {
        sqlx::query_as::<_, Billboard>(
            r#"
            SELECT id, store_id, label, image_url, created_at, updated_at
            FROM billboards
            WHERE id = $1 AND store_id = $2
            "#,
        )
        .bind(id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get billboard: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, billboard: Billboard) -> Result<Option<Billboard>> {
        sqlx::query_as::<_, Billboard>(
            r#"
            UPDATE billboards
            SET label = $1, image_url = $2, updated_at = $3
            WHERE id = $4 AND store_id = $5
            RETURNING id, store_id, label, image_url, created_at, updated_at
            "#,
        )
        .bind(&billboard.label)
        .bind(&billboard.image_url)
        .bind(billboard.updated_at)
        .bind(billboard.id)
        .bind(billboard.store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<Option<Billboard>> {
        sqlx::query_as::<_, Billboard>(
            r#"
            DELETE FROM billboards
            WHERE id = $1 AND store_id = $2
            RETURNING id, store_id, label, image_url, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_delete_error("Billboard", e))
    }
}
