use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::PriceError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{ValidityPeriod, fits_length};
use crate::domain::store::model::Store;

pub const PROMOTION_TYPE_MAX_LENGTH: usize = 50;
pub const PROMOTION_DETAILS_MAX_LENGTH: usize = 255;

/// Amounts are stored as NUMERIC(10,2).
const AMOUNT_SCALE: i64 = 2;
const AMOUNT_UPPER_BOUND: i64 = 100_000_000;

/// Rounds an amount to whole cents.
pub fn to_cents(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(AMOUNT_SCALE, RoundingMode::HalfUp)
}

/// A single price observation of a product at a store.
#[derive(Debug, Clone)]
pub struct Price {
    pub id: Uuid,
    pub product_id: Uuid,
    pub store_id: Uuid,
    pub regular_price: BigDecimal,
    pub sale_price: Option<BigDecimal>,
    pub promotion_type: Option<String>,
    pub promotion_details: Option<String>,
    pub validity: ValidityPeriod,
    /// When the price was observed.
    pub scraped_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

pub struct NewPriceProps {
    pub product_id: Uuid,
    pub store_id: Uuid,
    pub regular_price: BigDecimal,
    pub sale_price: Option<BigDecimal>,
    pub promotion_type: Option<String>,
    pub promotion_details: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
}

impl Price {
    /// Records a new observation. Both `created_at` and `scraped_at` are set to now.
    pub fn new(props: NewPriceProps) -> Result<Self, PriceError> {
        let regular_price = to_cents(&props.regular_price);
        let sale_price = props.sale_price.as_ref().map(to_cents);
        let upper_bound = BigDecimal::from(AMOUNT_UPPER_BOUND);

        if regular_price <= BigDecimal::zero() {
            return Err(PriceError::InvalidRegularPrice);
        }
        if regular_price >= upper_bound {
            return Err(PriceError::AmountOutOfRange);
        }
        if let Some(sale) = &sale_price {
            if *sale < BigDecimal::zero() {
                return Err(PriceError::InvalidSalePrice);
            }
            if *sale > regular_price {
                return Err(PriceError::SaleAboveRegular);
            }
        }

        if !fits_length(props.promotion_type.as_deref(), PROMOTION_TYPE_MAX_LENGTH)
            || !fits_length(
                props.promotion_details.as_deref(),
                PROMOTION_DETAILS_MAX_LENGTH,
            )
        {
            return Err(PriceError::FieldTooLong);
        }

        let validity = ValidityPeriod::new(props.valid_from, props.valid_to)
            .ok_or(PriceError::InvalidValidityPeriod)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            product_id: props.product_id,
            store_id: props.store_id,
            regular_price,
            sale_price,
            promotion_type: props.promotion_type,
            promotion_details: props.promotion_details,
            validity,
            scraped_at: now,
            created_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        product_id: Uuid,
        store_id: Uuid,
        regular_price: BigDecimal,
        sale_price: Option<BigDecimal>,
        promotion_type: Option<String>,
        promotion_details: Option<String>,
        validity: ValidityPeriod,
        scraped_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            store_id,
            regular_price,
            sale_price,
            promotion_type,
            promotion_details,
            validity,
            scraped_at,
            created_at,
        }
    }

    pub fn current_price(&self) -> BigDecimal {
        super::pricing::effective_price(&self.regular_price, self.sale_price.as_ref())
    }
}

/// A price together with the product and store it refers to.
#[derive(Debug, Clone)]
pub struct PriceDetail {
    pub price: Price,
    pub product: Product,
    pub store: Store,
}

/// Active price of one product joined with its store, as fetched for comparison.
#[derive(Debug, Clone)]
pub struct StorePriceRow {
    pub store_id: Uuid,
    pub store_name: String,
    pub regular_price: BigDecimal,
    pub sale_price: Option<BigDecimal>,
    pub promotion_type: Option<String>,
    pub promotion_details: Option<String>,
    pub validity: ValidityPeriod,
}

/// Active discounted price joined with its product and store.
#[derive(Debug, Clone)]
pub struct DiscountedPriceRow {
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
    pub validity: ValidityPeriod,
}

/// Optional filters for the deals query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealFilter {
    pub store_id: Option<Uuid>,
    /// Exact category match; empty strings are dropped.
    pub category: Option<String>,
}

impl DealFilter {
    pub fn new(store_id: Option<Uuid>, category: Option<String>) -> Self {
        Self {
            store_id,
            category: category.filter(|c| !c.is_empty()),
        }
    }
}

/// One store's current price for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceComparison {
    pub store_id: Uuid,
    pub store_name: String,
    pub regular_price: BigDecimal,
    pub sale_price: Option<BigDecimal>,
    pub current_price: BigDecimal,
    pub promotion_type: Option<String>,
    pub promotion_details: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
}

/// One observation in a product's price history at a store.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: DateTime<Utc>,
    pub regular_price: BigDecimal,
    pub sale_price: Option<BigDecimal>,
    pub current_price: BigDecimal,
    pub promotion_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub product_id: Uuid,
    pub product_name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub store_id: Uuid,
    pub store_name: String,
    pub regular_price: BigDecimal,
    pub sale_price: BigDecimal,
    /// Whole-number percentage off the regular price.
    pub discount: i64,
    pub promotion_type: Option<String>,
    pub promotion_details: Option<String>,
    pub valid_until: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::str::FromStr;

    fn amount(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn props(regular: &str, sale: Option<&str>) -> NewPriceProps {
        let now = Utc::now();
        NewPriceProps {
            product_id: Uuid::new_v4(),
            store_id: Uuid::new_v4(),
            regular_price: amount(regular),
            sale_price: sale.map(amount),
            promotion_type: Some("Weekly Ad".to_string()),
            promotion_details: None,
            valid_from: now - Duration::days(1),
            valid_to: now + Duration::days(6),
        }
    }

    #[test]
    fn should_set_capture_and_creation_time_together() {
        let price = Price::new(props("4.99", Some("3.99"))).unwrap();
        assert_eq!(price.scraped_at, price.created_at);
    }

    #[test]
    fn should_round_amounts_to_cents() {
        let price = Price::new(props("4.995", None)).unwrap();
        assert_eq!(price.regular_price, amount("5.00"));
    }

    #[test]
    fn should_reject_zero_regular_price() {
        assert!(matches!(
            Price::new(props("0.00", None)).unwrap_err(),
            PriceError::InvalidRegularPrice
        ));
    }

    #[test]
    fn should_reject_amount_beyond_storage_precision() {
        assert!(matches!(
            Price::new(props("100000000", None)).unwrap_err(),
            PriceError::AmountOutOfRange
        ));
    }

    #[test]
    fn should_reject_sale_above_regular() {
        assert!(matches!(
            Price::new(props("2.00", Some("2.50"))).unwrap_err(),
            PriceError::SaleAboveRegular
        ));
    }

    #[test]
    fn should_accept_sale_equal_to_regular() {
        assert!(Price::new(props("2.00", Some("2.00"))).is_ok());
    }

    #[test]
    fn should_reject_negative_sale() {
        assert!(matches!(
            Price::new(props("2.00", Some("-0.50"))).unwrap_err(),
            PriceError::InvalidSalePrice
        ));
    }

    #[test]
    fn should_reject_inverted_validity_period() {
        let mut p = props("2.00", None);
        std::mem::swap(&mut p.valid_from, &mut p.valid_to);
        assert!(matches!(
            Price::new(p).unwrap_err(),
            PriceError::InvalidValidityPeriod
        ));
    }

    #[test]
    fn should_use_sale_as_current_price_when_present() {
        let price = Price::new(props("12.00", Some("9.00"))).unwrap();
        assert_eq!(price.current_price(), amount("9.00"));
    }

    #[test]
    fn should_drop_empty_category_from_deal_filter() {
        let filter = DealFilter::new(None, Some(String::new()));
        assert!(filter.category.is_none());
    }
}
