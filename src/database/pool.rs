use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    UniqueViolation(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the application connection pool from config.
///
/// Connections are established lazily so the process can come up (and serve
/// /health) while the database is still unreachable. Callers own the pool's
/// lifecycle: created here at startup, closed via [`close`] on shutdown.
pub fn connect(config: &AppConfig) -> Result<PgPool, DatabaseError> {
    if config.database.url.is_empty() {
        return Err(DatabaseError::ConfigMissing("DATABASE_URL"));
    }

    let url = url::Url::parse(&config.database.url).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect_lazy(url.as_str())?;

    info!("Created database pool for {}", url.host_str().unwrap_or("localhost"));
    Ok(pool)
}

/// Close the pool (e.g., on shutdown)
pub async fn close(pool: &PgPool) {
    pool.close().await;
    info!("Closed database pool");
}

/// Postgres unique-constraint violation (SQLSTATE 23505)
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn rejects_unparseable_database_url() {
        let mut config = AppConfig::from_env();
        config.database.url = "not a url".to_string();
        assert!(matches!(connect(&config), Err(DatabaseError::InvalidDatabaseUrl)));
    }

    #[test]
    fn rejects_empty_database_url() {
        let mut config = AppConfig::from_env();
        config.database.url = String::new();
        assert!(matches!(connect(&config), Err(DatabaseError::ConfigMissing(_))));
    }
}
