use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::error::{ConfigError, parse_or};

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

/// Database settings read from the environment
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub connect_retries: u32,
    pub run_migrations: bool,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - DATABASE_CONNECT_RETRIES: connect retries at startup (default: 5)
    /// - RUN_MIGRATIONS: apply migrations on startup (default: true)
    /// - MIGRATIONS_PATH: migrations directory (default: ./infrastructure/persistence/migrations)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        Ok(Self {
            url,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            connect_retries: parse_or(&lookup, "DATABASE_CONNECT_RETRIES", 5)?,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
            migrations_path: lookup("MIGRATIONS_PATH")
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

/// Initialize the database connection pool and apply pending migrations
///
/// # Errors
/// Returns error if the settings are invalid, the connection cannot be
/// established after the configured retries, or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let settings = DatabaseSettings::from_env()?;
    let config = DatabaseConfig::new(settings.url)
        .with_max_connections(settings.max_connections)
        .with_connect_retries(settings.connect_retries);
    let pool = create_postgres_pool(&config).await?;

    if settings.run_migrations {
        run_migrations(&pool, &settings.migrations_path).await?;
        tracing::info!("Migrations applied from {}", settings.migrations_path);
    }

    Ok(pool)
}
