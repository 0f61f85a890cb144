//! # status-db
//!
//! Database layer implementing the user status repository trait.
//!
//! ## Overview
//!
//! This crate provides two implementations of `UserStatusRepository` from
//! `status-core`:
//!
//! - [`PgUserStatusRepository`]: PostgreSQL via SQLx. Uniqueness of the user id
//!   is enforced by a unique index, and the expiry sweep is a single UPDATE.
//! - [`InMemoryUserStatusRepository`]: in-process storage for tests and local
//!   development.
//!
//! It also handles connection pool management and the schema migration.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use status_db::{create_pool, run_migrations, DatabaseConfig, PgUserStatusRepository};
//! use status_core::UserStatusRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let repo = PgUserStatusRepository::new(pool);
//!
//!     let cleared = repo.clear_older_than(chrono::Utc::now().timestamp()).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migration;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migration::run_migrations;
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{InMemoryUserStatusRepository, PgUserStatusRepository};
