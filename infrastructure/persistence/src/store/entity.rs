use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::store::model::Store;

#[derive(Debug, FromRow)]
pub struct StoreEntity {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoreEntity {
    pub fn into_domain(self) -> Store {
        Store::from_repository(
            self.id,
            self.name,
            self.location,
            self.address,
            self.created_at,
            self.updated_at,
        )
    }
}
