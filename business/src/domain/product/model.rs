use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::{
    BARCODE_MAX_LENGTH, BRAND_MAX_LENGTH, CATEGORY_MAX_LENGTH, NAME_MAX_LENGTH, SIZE_MAX_LENGTH,
    UNIT_MAX_LENGTH,
};
use crate::domain::shared::value_objects::fits_length;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub size: Option<String>,
    pub barcode: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub size: Option<String>,
    pub barcode: Option<String>,
}

impl NewProductProps {
    /// Checks the attribute rules shared by creation and update.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let fits = fits_length(Some(self.name.as_str()), NAME_MAX_LENGTH)
            && fits_length(self.brand.as_deref(), BRAND_MAX_LENGTH)
            && fits_length(self.category.as_deref(), CATEGORY_MAX_LENGTH)
            && fits_length(self.unit.as_deref(), UNIT_MAX_LENGTH)
            && fits_length(self.size.as_deref(), SIZE_MAX_LENGTH)
            && fits_length(self.barcode.as_deref(), BARCODE_MAX_LENGTH);
        if !fits {
            return Err(ProductError::FieldTooLong);
        }

        Ok(())
    }
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        props.validate()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            brand: props.brand,
            category: props.category,
            unit: props.unit,
            size: props.size,
            barcode: props.barcode,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies new attributes in place, keeping identity and creation time.
    pub fn update(self, props: NewProductProps) -> Result<Self, ProductError> {
        props.validate()?;

        Ok(Self {
            name: props.name,
            brand: props.brand,
            category: props.category,
            unit: props.unit,
            size: props.size,
            barcode: props.barcode,
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        brand: Option<String>,
        category: Option<String>,
        unit: Option<String>,
        size: Option<String>,
        barcode: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            brand,
            category,
            unit,
            size,
            barcode,
            created_at,
            updated_at,
        }
    }
}
