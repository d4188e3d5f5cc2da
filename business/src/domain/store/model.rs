use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::StoreError;
use crate::domain::shared::value_objects::fits_length;

pub const NAME_MAX_LENGTH: usize = 100;
pub const LOCATION_MAX_LENGTH: usize = 100;
pub const ADDRESS_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewStoreProps {
    pub name: String,
    pub location: Option<String>,
    pub address: Option<String>,
}

impl NewStoreProps {
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::NameEmpty);
        }

        if !fits_length(Some(self.name.as_str()), NAME_MAX_LENGTH)
            || !fits_length(self.location.as_deref(), LOCATION_MAX_LENGTH)
            || !fits_length(self.address.as_deref(), ADDRESS_MAX_LENGTH)
        {
            return Err(StoreError::FieldTooLong);
        }

        Ok(())
    }
}

impl Store {
    pub fn new(props: NewStoreProps) -> Result<Self, StoreError> {
        props.validate()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            location: props.location,
            address: props.address,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn update(self, props: NewStoreProps) -> Result<Self, StoreError> {
        props.validate()?;

        Ok(Self {
            name: props.name,
            location: props.location,
            address: props.address,
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        location: Option<String>,
        address: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            location,
            address,
            created_at,
            updated_at,
        }
    }
}
