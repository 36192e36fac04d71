use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::{AppError, Result};

/// Counts the rows of one dependent table that reference a parent row
#[async_trait]
pub trait DependentCounter: Send + Sync {
    /// Plural name of the dependent rows, used in conflict messages
    fn dependent(&self) -> &'static str;

    async fn count_dependents(&self, parent_id: Uuid) -> Result<i64>;
}

/// Cascade prevention: refuses to delete a parent while any configured
/// dependent table still references it.
#[derive(Clone, Default)]
pub struct ReferenceGuard {
    counters: Vec<Arc<dyn DependentCounter>>,
}

impl ReferenceGuard {
    pub fn new(counters: Vec<Arc<dyn DependentCounter>>) -> Self {
        Self { counters }
    }

    pub async fn ensure_unreferenced(&self, entity: &str, id: Uuid) -> Result<()> {
        for counter in &self.counters {
            let count = counter.count_dependents(id).await?;
            if count > 0 {
                tracing::info!(
                    "Delete of {} {} blocked by {} {}",
                    entity,
                    id,
                    count,
                    counter.dependent()
                );
                return Err(AppError::Conflict(format!(
                    "{} is still in use by {} {}; remove them first",
                    entity,
                    count,
                    counter.dependent()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, i64);

    #[async_trait]
    impl DependentCounter for Fixed {
        fn dependent(&self) -> &'static str {
            self.0
        }

        async fn count_dependents(&self, _parent_id: Uuid) -> Result<i64> {
            Ok(self.1)
        }
    }

    #[tokio::test]
    async fn test_no_counters_allows_delete() {
        let guard = ReferenceGuard::default();
        assert!(guard
            .ensure_unreferenced("Size", Uuid::new_v4())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_first_non_zero_counter_blocks() {
        let guard = ReferenceGuard::new(vec![
            Arc::new(Fixed("billboards", 0)),
            Arc::new(Fixed("categories", 2)),
            Arc::new(Fixed("products", 5)),
        ]);

        let err = guard
            .ensure_unreferenced("Store", Uuid::new_v4())
            .await
            .unwrap_err();
        match err {
            AppError::Conflict(msg) => {
                assert_eq!(msg, "Store is still in use by 2 categories; remove them first")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
