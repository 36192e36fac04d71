use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::stores::models::Store;
use crate::features::stores::repository::StoreRepository;

/// Message for a store that is missing or owned by someone else. Both cases
/// share it so a caller cannot tell which store ids exist.
pub const STORE_ACCESS_DENIED: &str = "Store not found or access denied";

/// Fails with `Unauthorized` unless the request carries a user id
pub fn require_user(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(AppError::Unauthorized("Unauthenticated".to_string()));
    }
    Ok(())
}

/// Binds a user identity to a store before any of its resources are mutated
#[derive(Clone)]
pub struct OwnershipGuard {
    stores: Arc<dyn StoreRepository>,
}

impl OwnershipGuard {
    pub fn new(stores: Arc<dyn StoreRepository>) -> Self {
        Self { stores }
    }

    pub async fn authorize(&self, user_id: &str, store_id: Uuid) -> Result<Store> {
        require_user(user_id)?;

        match self.stores.find_owned(store_id, user_id).await? {
            Some(store) => Ok(store),
            None => {
                tracing::warn!(
                    "Store access denied: user_id={}, store_id={}",
                    user_id,
                    store_id
                );
                Err(AppError::Forbidden(STORE_ACCESS_DENIED.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::persistence::MemoryRepository;

    async fn guard_with_store(owner: &str) -> (OwnershipGuard, Store) {
        let repo = Arc::new(MemoryRepository::<Store>::new());
        let store = StoreRepository::insert(
            repo.as_ref(),
            Store::new("Main".to_string(), owner.to_string()),
        )
        .await
        .unwrap();
        (OwnershipGuard::new(repo), store)
    }

    #[tokio::test]
    async fn test_owner_is_authorized() {
        let (guard, store) = guard_with_store("user_a").await;
        let authorized = guard.authorize("user_a", store.id).await.unwrap();
        assert_eq!(authorized, store);
    }

    #[tokio::test]
    async fn test_not_owned_and_missing_are_indistinguishable() {
        let (guard, store) = guard_with_store("user_a").await;

        let not_owned = guard.authorize("user_b", store.id).await.unwrap_err();
        let missing = guard.authorize("user_a", Uuid::new_v4()).await.unwrap_err();

        for err in [not_owned, missing] {
            match err {
                AppError::Forbidden(msg) => assert_eq!(msg, STORE_ACCESS_DENIED),
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_empty_user_is_unauthenticated() {
        let (guard, store) = guard_with_store("user_a").await;
        let err = guard.authorize("  ", store.id).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
