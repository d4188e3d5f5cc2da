/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A row is still referenced by another table (restrict-on-delete).
    #[error("repository.in_use")]
    InUse,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn in_use() -> Self {
        RepositoryError::InUse
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}
