//! Price comparison and deals ranking.
//!
//! Pure functions over rows already fetched by the repository. The store,
//! category and time predicates are re-applied here so the results do not
//! depend on how precisely the storage layer filtered.

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{DateTime, Duration, Utc};
use num_traits::{ToPrimitive, Zero};
use uuid::Uuid;

use super::errors::PriceError;
use super::model::{
    Deal, DealFilter, DiscountedPriceRow, Price, PriceComparison, PricePoint, StorePriceRow,
};

/// Maximum number of deals returned by a single query.
pub const MAX_DEALS: usize = 50;

/// Lookback window used when the caller does not give one.
pub const DEFAULT_HISTORY_DAYS: i64 = 30;

/// The sale price if present, otherwise the regular price.
pub fn effective_price(regular: &BigDecimal, sale: Option<&BigDecimal>) -> BigDecimal {
    sale.unwrap_or(regular).clone()
}

/// Whole-number percentage off the regular price, rounding halves away from zero.
///
/// Returns `None` when the regular price is not positive.
pub fn discount_percentage(regular: &BigDecimal, sale: &BigDecimal) -> Option<i64> {
    if *regular <= BigDecimal::zero() {
        return None;
    }
    let ratio = (regular - sale) * BigDecimal::from(100) / regular.clone();
    ratio.with_scale_round(0, RoundingMode::HalfUp).to_i64()
}

/// Earliest capture time included in a history of `days` days ending at `now`.
///
/// Windows reaching past the earliest representable instant fall back to the
/// Unix epoch.
pub fn history_window_start(now: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, PriceError> {
    if days < 0 {
        return Err(PriceError::NegativeLookback);
    }
    Ok(Duration::try_days(days)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
}

/// Per-store snapshot of the prices active at `now`, cheapest first.
///
/// An empty `store_ids` means every store. Ties keep their input order.
pub fn compare_prices(
    rows: Vec<StorePriceRow>,
    store_ids: &[Uuid],
    now: DateTime<Utc>,
) -> Vec<PriceComparison> {
    let mut comparisons: Vec<PriceComparison> = rows
        .into_iter()
        .filter(|row| row.validity.contains(now))
        .filter(|row| store_ids.is_empty() || store_ids.contains(&row.store_id))
        .map(|row| PriceComparison {
            current_price: effective_price(&row.regular_price, row.sale_price.as_ref()),
            store_id: row.store_id,
            store_name: row.store_name,
            regular_price: row.regular_price,
            sale_price: row.sale_price,
            promotion_type: row.promotion_type,
            promotion_details: row.promotion_details,
            valid_from: row.validity.from(),
            valid_to: row.validity.to(),
        })
        .collect();

    comparisons.sort_by(|a, b| a.current_price.cmp(&b.current_price));
    comparisons
}

/// Observations captured at or after `since`, oldest first. Duplicates are kept.
pub fn price_history(prices: Vec<Price>, since: DateTime<Utc>) -> Vec<PricePoint> {
    let mut window: Vec<Price> = prices
        .into_iter()
        .filter(|price| price.scraped_at >= since)
        .collect();
    window.sort_by_key(|price| price.scraped_at);

    window
        .into_iter()
        .map(|price| PricePoint {
            date: price.scraped_at,
            current_price: price.current_price(),
            regular_price: price.regular_price,
            sale_price: price.sale_price,
            promotion_type: price.promotion_type,
        })
        .collect()
}

/// Active discounted offers ranked by discount, largest first, at most [`MAX_DEALS`].
///
/// Rows whose regular price is zero or negative are skipped. Ties keep their
/// input order.
pub fn rank_deals(
    rows: Vec<DiscountedPriceRow>,
    filter: &DealFilter,
    now: DateTime<Utc>,
) -> Vec<Deal> {
    let mut deals: Vec<Deal> = rows
        .into_iter()
        .filter(|row| row.validity.contains(now))
        .filter(|row| filter.store_id.is_none_or(|id| id == row.store_id))
        .filter(|row| {
            filter
                .category
                .as_ref()
                .is_none_or(|c| row.category.as_ref() == Some(c))
        })
        .filter_map(|row| {
            let discount = discount_percentage(&row.regular_price, &row.sale_price)?;
            Some(Deal {
                product_id: row.product_id,
                product_name: row.product_name,
                brand: row.brand,
                category: row.category,
                store_id: row.store_id,
                store_name: row.store_name,
                regular_price: row.regular_price,
                sale_price: row.sale_price,
                discount,
                promotion_type: row.promotion_type,
                promotion_details: row.promotion_details,
                valid_until: row.validity.to(),
            })
        })
        .collect();

    deals.sort_by(|a, b| b.discount.cmp(&a.discount));
    deals.truncate(MAX_DEALS);
    deals
}
