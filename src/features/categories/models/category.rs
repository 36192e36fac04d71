use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::modules::persistence::Record;

/// Database model for category
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub store_id: Uuid,
    /// Billboard shown on the category page, same store
    pub billboard_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(store_id: Uuid, billboard_id: Uuid, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            store_id,
            billboard_id,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Category {
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
