use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::price::model::{DiscountedPriceRow, Price, StorePriceRow};
use business::domain::shared::value_objects::ValidityPeriod;

#[derive(Debug, FromRow)]
pub struct PriceEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub store_id: Uuid,
    pub regular_price: BigDecimal,
    pub sale_price: Option<BigDecimal>,
    pub promotion_type: Option<String>,
    pub promotion_details: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    pub scraped_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl PriceEntity {
    pub fn into_domain(self) -> Price {
        Price::from_repository(
            self.id,
            self.product_id,
            self.store_id,
            self.regular_price,
            self.sale_price,
            self.promotion_type,
            self.promotion_details,
            ValidityPeriod::from_repository(self.valid_from, self.valid_to),
            self.scraped_at,
            self.created_at,
        )
    }
}

/// Price joined with its store name.
#[derive(Debug, FromRow)]
pub struct StorePriceEntity {
    pub store_id: Uuid,
    pub store_name: String,
    pub regular_price: BigDecimal,
    pub sale_price: Option<BigDecimal>,
    pub promotion_type: Option<String>,
    pub promotion_details: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
}

impl StorePriceEntity {
    pub fn into_domain(self) -> StorePriceRow {
        StorePriceRow {
            store_id: self.store_id,
            store_name: self.store_name,
            regular_price: self.regular_price,
            sale_price: self.sale_price,
            promotion_type: self.promotion_type,
            promotion_details: self.promotion_details,
            validity: ValidityPeriod::from_repository(self.valid_from, self.valid_to),
        }
    }
}

/// Discounted price joined with its product and store.
#[derive(Debug, FromRow)]
pub struct DiscountedPriceEntity {
    pub product_id: Uuid,
    pub product_name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub store_id: Uuid,
    pub store_name: String,
    pub regular_price: BigDecimal,
    pub sale_price: BigDecimal,
    pub promotion_type: Option<String>,
    pub promotion_details: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
}

impl DiscountedPriceEntity {
    pub fn into_domain(self) -> DiscountedPriceRow {
        DiscountedPriceRow {
            product_id: self.product_id,
            product_name: self.product_name,
            brand: self.brand,
            category: self.category,
            store_id: self.store_id,
            store_name: self.store_name,
            regular_price: self.regular_price,
            sale_price: self.sale_price,
            promotion_type: self.promotion_type,
            promotion_details: self.promotion_details,
            validity: ValidityPeriod::from_repository(self.valid_from, self.valid_to),
        }
    }
}
