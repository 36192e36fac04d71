use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::modules::persistence::Record;

/// Database model for a store (tenant)
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    /// Identity provider subject of the owner
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Store {
    pub fn new(name: String, user_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

// A store is its own scope, which lets the memory backend keep stores in a
// plain `MemoryRepository`.
impl Record for Store {
    fn id(&self) -> Uuid {
        self.id
    }

    fn store_id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
