use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::modules::persistence::{map_delete_error, map_write_error, Repository};

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Category> for PgCategoryRepository {
    async fn insert(&self, category: Category) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, store_id, billboard_id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, store_id, billboard_id, name, created_at, updated_at
            "#,
        )
        .bind(category.id)
        .bind(category.store_id)
        .bind(category.billboard_id)
        .bind(&category.name)
        .bind(category.created_at)
        .bind(category.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, store_id, billboard_id, name, created_at, updated_at
            FROM categories
            WHERE store_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, store_id, billboard_id, name, created_at, updated_at
            FROM categories
            WHERE id = $1 AND store_id = $2
            "#,
        )
        .bind(id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, category: Category) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET billboard_id = $1, name = $2, updated_at = $3
            WHERE id = $4 AND store_id = $5
            RETURNING id, store_id, billboard_id, name, created_at, updated_at
            "#,
        )
        .bind(category.billboard_id)
        .bind(&category.name)
        .bind(category.updated_at)
        .bind(category.id)
        .bind(category.store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            DELETE FROM categories
            WHERE id = $1 AND store_id = $2
            RETURNING id, store_id, billboard_id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_delete_error("Category", e))
    }
}
