use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::stores::models::Store;
use crate::modules::persistence::{map_delete_error, map_write_error, MemoryRepository, Repository};

/// Stores are scoped by their owner rather than by a parent store
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn insert(&self, store: Store) -> Result<Store>;

    /// The store with `store_id`, only if `user_id` owns it
    async fn find_owned(&self, store_id: Uuid, user_id: &str) -> Result<Option<Store>>;

    /// Stores of `user_id`, oldest first
    async fn list_owned(&self, user_id: &str) -> Result<Vec<Store>>;

    async fn update(&self, store: Store) -> Result<Option<Store>>;

    async fn delete(&self, store_id: Uuid) -> Result<Option<Store>>;
}

pub struct PgStoreRepository {
    pool: PgPool,
}

impl PgStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn insert(&self, store: Store) -> Result<Store> {
        sqlx::query_as::<_, Store>(
            r#"
            INSERT INTO stores (id, name, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, user_id, created_at, updated_at
            "#,
        )
        .bind(store.id)
        .bind(&store.name)
        .bind(&store.user_id)
        .bind(store.created_at)
        .bind(store.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn find_owned(&self, store_id: Uuid, user_id: &str) -> Result<Option<Store>> {
        sqlx::query_as::<_, Store>(
            r#"
            SELECT id, name, user_id, created_at, updated_at
            FROM stores
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(store_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up store: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_owned(&self, user_id: &str) -> Result<Vec<Store>> {
        sqlx::query_as::<_, Store>(
            r#"
            SELECT id, name, user_id, created_at, updated_at
            FROM stores
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list stores: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, store: Store) -> Result<Option<Store>> {
        sqlx::query_as::<_, Store>(
            r#"
            UPDATE stores
            SET name = $1, updated_at = $2
            WHERE id = $3 AND user_id = $4
            RETURNING id, name, user_id, created_at, updated_at
            "#,
        )
        .bind(&store.name)
        .bind(store.updated_at)
        .bind(store.id)
        .bind(&store.user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn delete(&self, store_id: Uuid) -> Result<Option<Store>> {
        sqlx::query_as::<_, Store>(
            r#"
            DELETE FROM stores
            WHERE id = $1
            RETURNING id, name, user_id, created_at, updated_at
            "#,
        )
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_delete_error("Store", e))
    }
}

#[async_trait]
impl StoreRepository for MemoryRepository<Store> {
    async fn insert(&self, store: Store) -> Result<Store> {
        <Self as Repository<Store>>::insert(self, store).await
    }

    async fn find_owned(&self, store_id: Uuid, user_id: &str) -> Result<Option<Store>> {
        let store = <Self as Repository<Store>>::find(self, store_id, store_id).await?;
        Ok(store.filter(|s| s.user_id == user_id))
    }

    async fn list_owned(&self, user_id: &str) -> Result<Vec<Store>> {
        let mut stores = self.filter(|s| s.user_id == user_id).await;
        stores.reverse();
        Ok(stores)
    }

    async fn update(&self, store: Store) -> Result<Option<Store>> {
        <Self as Repository<Store>>::update(self, store).await
    }

    async fn delete(&self, store_id: Uuid) -> Result<Option<Store>> {
        <Self as Repository<Store>>::delete(self, store_id, store_id).await
    }
}
