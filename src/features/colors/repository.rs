use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::colors::models::Color;
use crate::modules::persistence::{map_delete_error, map_write_error, Repository};

pub struct PgColorRepository {
    pool: PgPool,
}

impl PgColorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Color> for PgColorRepository {
    async fn insert(&self, color: Color) -> Result<Color> {
        sqlx::query_as::<_, Color>(
            r#"
            INSERT INTO colors (id, store_id, name, value, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, store_id, name, value, created_at, updated_at
            "#,
        )
        .bind(color.id)
        .bind(color.store_id)
        .bind(&color.name)
        .bind(&color.value)
        .bind(color.created_at)
        .bind(color.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<Color>> {
        sqlx::query_as::<_, Color>(
            r#"
            SELECT id, store_id, name, value, created_at, updated_at
            FROM colors
            WHERE store_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list colors: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Color>> {
        sqlx::query_as::<_, Color>(
            r#"
            SELECT id, store_id, name, value, created_at, updated_at
            FROM colors
            WHERE id = $1 AND store_id = $2
            "#,
        )
        .bind(id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get color: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, color: Color) -> Result<Option<Color>> {
        sqlx::query_as::<_, Color>(
            r#"
            UPDATE colors
            SET name = $1, value = $2, updated_at = $3
            WHERE id = $4 AND store_id = $5
            RETURNING id, store_id, name, value, created_at, updated_at
            "#,
        )
        .bind(&color.name)
        .bind(&color.value)
        .bind(color.updated_at)
        .bind(color.id)
        .bind(color.store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<Option<Color>> {
        sqlx::query_as::<_, Color>(
            r#"
            DELETE FROM colors
            WHERE id = $1 AND store_id = $2
            RETURNING id, store_id, name, value, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_delete_error("Color", e))
    }
}
