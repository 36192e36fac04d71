//! Process-local repositories.
//!
//! Not durable: all rows are lost on restart. Used by the `memory` storage
//! backend and by tests. Each table is a `HashMap` behind a `tokio` RwLock;
//! writes to one table are serialized, reads run concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DependentCounter, Record, Repository};
use crate::core::error::Result;

pub struct MemoryRepository<T: Record> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T: Record> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Rows matching `predicate`, newest first. Ties on `created_at` fall
    /// back to the (time-ordered v7) id.
    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let rows = self.rows.read().await;
        let mut matched: Vec<T> = rows.values().filter(|r| predicate(r)).cloned().collect();
        matched.sort_by(|a, b| (b.created_at(), b.id()).cmp(&(a.created_at(), a.id())));
        matched
    }

    pub async fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        self.rows.read().await.values().filter(|r| predicate(r)).count()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn insert(&self, record: T) -> Result<T> {
        self.rows.write().await.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<T>> {
        Ok(self.filter(|r| r.store_id() == store_id).await)
    }

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<T>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).filter(|r| r.store_id() == store_id).cloned())
    }

    async fn update(&self, record: T) -> Result<Option<T>> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&record.id()) {
            Some(existing) if existing.store_id() == record.store_id() => {
                *existing = record.clone();
                Ok(Some(record))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<Option<T>> {
        let mut rows = self.rows.write().await;
        if rows.get(&id).is_some_and(|r| r.store_id() == store_id) {
            return Ok(rows.remove(&id));
        }
        Ok(None)
    }
}

/// Dependent counter over a memory table: rows whose `key` equals the parent id
pub struct MemoryReferences<T: Record> {
    rows: Arc<MemoryRepository<T>>,
    dependent: &'static str,
    key: fn(&T) -> Uuid,
}

impl<T: Record> MemoryReferences<T> {
    pub fn new(rows: Arc<MemoryRepository<T>>, dependent: &'static str, key: fn(&T) -> Uuid) -> Self {
        Self {
            rows,
            dependent,
            key,
        }
    }
}

#[async_trait]
impl<T: Record> DependentCounter for MemoryReferences<T> {
    fn dependent(&self) -> &'static str {
        self.dependent
    }

    async fn count_dependents(&self, parent_id: Uuid) -> Result<i64> {
        let key = self.key;
        Ok(self.rows.count(|r| key(r) == parent_id).await as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: Uuid,
        store_id: Uuid,
        parent_id: Uuid,
        created_at: DateTime<Utc>,
    }

    impl Record for Note {
        fn id(&self) -> Uuid {
            self.id
        }
        fn store_id(&self) -> Uuid {
            self.store_id
        }
        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }
    }

    fn note(store_id: Uuid, parent_id: Uuid, age_secs: i64) -> Note {
        Note {
            id: Uuid::new_v4(),
            store_id,
            parent_id,
            created_at: Utc::now() - Duration::seconds(age_secs),
        }
    }

    #[tokio::test]
    async fn test_rows_are_scoped_by_store() {
        let repo = MemoryRepository::new();
        let (store_a, store_b) = (Uuid::new_v4(), Uuid::new_v4());
        let row = repo.insert(note(store_a, Uuid::nil(), 0)).await.unwrap();

        assert!(repo.find(store_a, row.id).await.unwrap().is_some());
        assert!(repo.find(store_b, row.id).await.unwrap().is_none());
        assert!(repo.delete(store_b, row.id).await.unwrap().is_none());

        let mut moved = row.clone();
        moved.store_id = store_b;
        assert!(repo.update(moved).await.unwrap().is_none());

        assert_eq!(repo.delete(store_a, row.id).await.unwrap(), Some(row));
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = MemoryRepository::new();
        let store = Uuid::new_v4();
        let old = repo.insert(note(store, Uuid::nil(), 60)).await.unwrap();
        let new = repo.insert(note(store, Uuid::nil(), 0)).await.unwrap();
        repo.insert(note(Uuid::new_v4(), Uuid::nil(), 0))
            .await
            .unwrap();

        let listed = repo.list_by_store(store).await.unwrap();
        assert_eq!(listed, vec![new, old]);
    }

    #[tokio::test]
    async fn test_references_count_by_key() {
        let repo = Arc::new(MemoryRepository::new());
        let store = Uuid::new_v4();
        let parent = Uuid::new_v4();
        repo.insert(note(store, parent, 0)).await.unwrap();
        repo.insert(note(store, parent, 0)).await.unwrap();
        repo.insert(note(store, Uuid::new_v4(), 0)).await.unwrap();

        let counter = MemoryReferences::new(Arc::clone(&repo), "notes", |n: &Note| n.parent_id);
        assert_eq!(counter.dependent(), "notes");
        assert_eq!(counter.count_dependents(parent).await.unwrap(), 2);
    }
}
