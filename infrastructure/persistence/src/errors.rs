use business::domain::errors::RepositoryError;

/// Maps an sqlx failure onto the repository port error.
pub fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_error) if db_error.is_foreign_key_violation() => {
            RepositoryError::InUse
        }
        _ => {
            tracing::error!(error = %error, "Database query failed");
            RepositoryError::DatabaseError
        }
    }
}
