use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::modules::persistence::Record;

/// Database model for color
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Color {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    /// Hex code as entered, e.g. "#1a2b3c"
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Color {
    pub fn new(store_id: Uuid, name: String, value: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            store_id,
            name,
            value,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Color {
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
