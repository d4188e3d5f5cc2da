use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::price::model::{DealFilter, DiscountedPriceRow, Price, StorePriceRow};
use business::domain::price::repository::PriceRepository;

use super::entity::{DiscountedPriceEntity, PriceEntity, StorePriceEntity};
use crate::errors::map_sqlx_error;

const PRICE_COLUMNS: &str = "id, product_id, store_id, regular_price, sale_price, promotion_type, promotion_details, valid_from, valid_to, scraped_at, created_at";

pub struct PriceRepositoryPostgres {
    pool: PgPool,
}

impl PriceRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists_where(&self, column: &str, id: Uuid) -> Result<bool, RepositoryError> {
        let sql = format!("SELECT EXISTS (SELECT 1 FROM prices WHERE {column} = $1)");
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

#[async_trait]
impl PriceRepository for PriceRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Price, RepositoryError> {
        let sql = format!("SELECT {PRICE_COLUMNS} FROM prices WHERE id = $1");
        let entity = sqlx::query_as::<_, PriceEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, price: &Price) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO prices (id, product_id, store_id, regular_price, sale_price, promotion_type, promotion_details, valid_from, valid_to, scraped_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"#,
        )
        .bind(price.id)
        .bind(price.product_id)
        .bind(price.store_id)
        .bind(&price.regular_price)
        .bind(&price.sale_price)
        .bind(&price.promotion_type)
        .bind(&price.promotion_details)
        .bind(price.validity.from())
        .bind(price.validity.to())
        .bind(price.scraped_at)
        .bind(price.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_active_for_product(
        &self,
        product_id: Uuid,
        store_ids: &[Uuid],
        at: DateTime<Utc>,
    ) -> Result<Vec<StorePriceRow>, RepositoryError> {
        let entities = sqlx::query_as::<_, StorePriceEntity>(
            r#"SELECT p.store_id, s.name AS store_name, p.regular_price, p.sale_price,
                p.promotion_type, p.promotion_details, p.valid_from, p.valid_to
            FROM prices p
            JOIN stores s ON s.id = p.store_id
            WHERE p.product_id = $1
              AND (cardinality($2::UUID[]) = 0 OR p.store_id = ANY($2))
              AND p.valid_from <= $3 AND p.valid_to >= $3
            ORDER BY p.created_at, p.id"#,
        )
        .bind(product_id)
        .bind(store_ids.to_vec())
        .bind(at)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_captured_since(
        &self,
        product_id: Uuid,
        store_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<Price>, RepositoryError> {
        let sql = format!(
            r#"SELECT {PRICE_COLUMNS} FROM prices
            WHERE product_id = $1 AND store_id = $2 AND scraped_at >= $3
            ORDER BY scraped_at, id"#
        );
        let entities = sqlx::query_as::<_, PriceEntity>(&sql)
            .bind(product_id)
            .bind(store_id)
            .bind(since)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_active_discounted(
        &self,
        filter: &DealFilter,
        at: DateTime<Utc>,
    ) -> Result<Vec<DiscountedPriceRow>, RepositoryError> {
        let entities = sqlx::query_as::<_, DiscountedPriceEntity>(
            r#"SELECT p.product_id, pr.name AS product_name, pr.brand, pr.category,
                p.store_id, s.name AS store_name, p.regular_price, p.sale_price,
                p.promotion_type, p.promotion_details, p.valid_from, p.valid_to
            FROM prices p
            JOIN products pr ON pr.id = p.product_id
            JOIN stores s ON s.id = p.store_id
            WHERE p.sale_price IS NOT NULL
              AND p.valid_from <= $1 AND p.valid_to >= $1
              AND ($2::UUID IS NULL OR p.store_id = $2)
              AND ($3::TEXT IS NULL OR pr.category = $3)
            ORDER BY p.created_at, p.id"#,
        )
        .bind(at)
        .bind(filter.store_id)
        .bind(filter.category.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn exists_for_product(&self, product_id: Uuid) -> Result<bool, RepositoryError> {
        self.exists_where("product_id", product_id).await
    }

    async fn exists_for_store(&self, store_id: Uuid) -> Result<bool, RepositoryError> {
        self.exists_where("store_id", store_id).await
    }
}
