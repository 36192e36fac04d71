use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::DependentCounter;
use crate::core::database::{is_foreign_key_violation, is_invalid_value, is_unique_violation};
use crate::core::error::{AppError, Result};

/// Dependent counter over a PostgreSQL table column.
///
/// `table` and `column` are compile-time identifiers, never user input.
pub struct PgReferences {
    pool: PgPool,
    table: &'static str,
    column: &'static str,
    dependent: &'static str,
}

impl PgReferences {
    pub fn new(pool: PgPool, table: &'static str, column: &'static str) -> Self {
        Self {
            pool,
            table,
            column,
            dependent: table,
        }
    }
}

#[async_trait]
impl DependentCounter for PgReferences {
    fn dependent(&self) -> &'static str {
        self.dependent
    }

    async fn count_dependents(&self, parent_id: Uuid) -> Result<i64> {
        let query = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = $1",
            self.table, self.column
        );
        sqlx::query_scalar(&query)
            .bind(parent_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to count {} by {}: {:?}",
                    self.table,
                    self.column,
                    e
                );
                AppError::Database(e)
            })
    }
}

/// Error mapping for INSERT/UPDATE: a foreign key violation means a referenced
/// row vanished between the application check and the write.
pub fn map_write_error(e: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&e) {
        return AppError::BadRequest("Referenced record does not exist.".to_string());
    }
    if is_unique_violation(&e) {
        return AppError::Conflict("Record already exists.".to_string());
    }
    if is_invalid_value(&e) {
        return AppError::BadRequest("Record has a value out of range.".to_string());
    }
    tracing::error!("Database write failed: {:?}", e);
    AppError::Database(e)
}

/// Error mapping for DELETE: a foreign key violation means a dependent row
/// appeared after the reference check ran.
pub fn map_delete_error(entity: &str, e: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&e) {
        return AppError::Conflict(format!("{} is still in use; remove its dependents first", entity));
    }
    tracing::error!("Failed to delete {}: {:?}", entity, e);
    AppError::Database(e)
}
