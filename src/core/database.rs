use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// PostgreSQL SQLSTATE for a foreign key violation
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL SQLSTATE for a unique constraint violation
pub const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for a CHECK constraint violation
pub const CHECK_VIOLATION: &str = "23514";

/// PostgreSQL SQLSTATE for a value that does not fit its numeric column
pub const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Returns the SQLSTATE code of a database error, if the driver reported one
pub fn sqlstate(e: &sqlx::Error) -> Option<String> {
    match e {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    sqlstate(e).as_deref() == Some(FOREIGN_KEY_VIOLATION)
}

pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    sqlstate(e).as_deref() == Some(UNIQUE_VIOLATION)
}

/// The row was rejected for its values rather than for a database failure
pub fn is_invalid_value(e: &sqlx::Error) -> bool {
    matches!(
        sqlstate(e).as_deref(),
        Some(CHECK_VIOLATION) | Some(NUMERIC_VALUE_OUT_OF_RANGE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_have_no_sqlstate() {
        let err = sqlx::Error::RowNotFound;
        assert_eq!(sqlstate(&err), None);
        assert!(!is_foreign_key_violation(&err));
        assert!(!is_unique_violation(&err));
        assert!(!is_invalid_value(&err));
    }
}
