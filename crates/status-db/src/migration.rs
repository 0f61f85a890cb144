//! Schema migration runner

use sqlx::PgPool;
use tracing::info;

use status_core::DomainError;

/// Idempotent DDL for the `user_status` table and its indexes
pub const SCHEMA: &str = include_str!("../../../migrations/20240101000000_create_user_status.sql");

/// Create the status table and indexes if they do not exist yet
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    info!("Running database migrations...");

    sqlx::raw_sql(SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| DomainError::DatabaseError(format!("Failed to run migrations: {e}")))?;

    info!("Database migrations completed successfully");
    Ok(())
}
