use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::store::model::Store;

/// Body of store create and update requests.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct StoreRequest {
    /// Store name, e.g. "King Soopers"
    pub name: String,
    /// City or area
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
    /// Street address
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct StoreResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Store> for StoreResponse {
    fn from(store: Store) -> Self {
        Self {
            id: store.id.to_string(),
            name: store.name,
            location: store.location,
            address: store.address,
            created_at: store.created_at,
            updated_at: store.updated_at,
        }
    }
}
