//! Persistence gateway
//!
//! Store-scoped rows are read and written through [`Repository`], implemented
//! once generically in memory and once per table for PostgreSQL (next to each
//! feature). Delete-time integrity goes through [`ReferenceGuard`], which asks
//! a set of [`DependentCounter`]s how many rows still point at a parent.

mod integrity;
mod memory;
mod postgres;

pub use integrity::{DependentCounter, ReferenceGuard};
pub use memory::{MemoryReferences, MemoryRepository};
pub use postgres::{map_delete_error, map_write_error, PgReferences};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::{AppError, Result};

/// A row that belongs to exactly one store
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
    fn store_id(&self) -> Uuid;
    fn created_at(&self) -> DateTime<Utc>;
}

/// Row-level access to one store-scoped table.
///
/// Every lookup is keyed by `(store_id, id)`: a row of another store is
/// indistinguishable from a missing one.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    async fn insert(&self, record: T) -> Result<T>;

    /// All rows of the store, newest first
    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<T>>;

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<T>>;

    /// Replaces the row with the same id and store. `None` when there is none.
    async fn update(&self, record: T) -> Result<Option<T>>;

    /// Removes the row and returns it. `None` when there is none.
    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<Option<T>>;
}

/// Application-level foreign key check for writes: `id` must name a row of
/// `repo` inside the same store.
pub async fn require_reference<T: Record>(
    repo: &dyn Repository<T>,
    store_id: Uuid,
    id: Uuid,
    field: &str,
) -> Result<()> {
    match repo.find(store_id, id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::BadRequest(format!(
            "{} does not reference an existing record of this store",
            field
        ))),
    }
}
