use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::sizes::models::Size;
use crate::modules::persistence::{map_delete_error, map_write_error, Repository};

pub struct PgSizeRepository {
    pool: PgPool,
}

impl PgSizeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Size> for PgSizeRepository {
    async fn insert(&self, size: Size) -> Result<Size> {
        sqlx::query_as::<_, Size>(
            r#"
            INSERT INTO sizes (id, store_id, name, value, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, store_id, name, value, created_at, updated_at
            "#,
        )
        .bind(size.id)
        .bind(size.store_id)
        .bind(&size.name)
        .bind(&size.value)
        .bind(size.created_at)
        .bind(size.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<Size>> {
        sqlx::query_as::<_, Size>(
            r#"
            SELECT id, store_id, name, value, created_at, updated_at
            FROM sizes
            WHERE store_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sizes: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Size>> {
        sqlx::query_as::<_, Size>(
            r#"
            SELECT id, store_id, name, value, created_at, updated_at
            FROM sizes
            WHERE id = $1 AND store_id = $2
            "#,
        )
        .bind(id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get size: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, size: Size) -> Result<Option<Size>> {
        sqlx::query_as::<_, Size>(
            r#"
            UPDATE sizes
            SET name = $1, value = $2, updated_at = $3
            WHERE id = $4 AND store_id = $5
            RETURNING id, store_id, name, value, created_at, updated_at
            "#,
        )
        .bind(&size.name)
        .bind(&size.value)
        .bind(size.updated_at)
        .bind(size.id)
        .bind(size.store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<Option<Size>> {
        sqlx::query_as::<_, Size>(
            r#"
            DELETE FROM sizes
            WHERE id = $1 AND store_id = $2
            RETURNING id, store_id, name, value, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_delete_error("Size", e))
    }
}
