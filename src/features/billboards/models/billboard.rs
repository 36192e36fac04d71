use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::modules::persistence::Record;

/// Database model for a billboard (hero banner)
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Billboard {
    pub id: Uuid,
    pub store_id: Uuid,
    pub label: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Billboard {
    pub fn new(store_id: Uuid, label: String, image_url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            store_id,
            label,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Billboard {
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
