use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::store::model::Store;
use business::domain::store::repository::StoreRepository;

use super::entity::StoreEntity;
use crate::errors::map_sqlx_error;

pub struct StoreRepositoryPostgres {
    pool: PgPool,
}

impl StoreRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for StoreRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Store>, RepositoryError> {
        let entities = sqlx::query_as::<_, StoreEntity>(
            "SELECT id, name, location, address, created_at, updated_at FROM stores ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Store, RepositoryError> {
        let entity = sqlx::query_as::<_, StoreEntity>(
            "SELECT id, name, location, address, created_at, updated_at FROM stores WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, store: &Store) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO stores (id, name, location, address, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(store.id)
        .bind(&store.name)
        .bind(&store.location)
        .bind(&store.address)
        .bind(store.created_at)
        .bind(store.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn update(&self, store: &Store) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE stores
            SET name = $2, location = $3, address = $4, updated_at = $5
            WHERE id = $1"#,
        )
        .bind(store.id)
        .bind(&store.name)
        .bind(&store.location)
        .bind(&store.address)
        .bind(store.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
