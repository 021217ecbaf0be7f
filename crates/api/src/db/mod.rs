//! Account persistence.
//!
//! # Backends
//!
//! - [`PgAccountStore`] - `PostgreSQL` via sqlx, used in production
//! - [`MemoryAccountStore`] - process-local maps, used by tests and local
//!   development when no database URL is configured
//!
//! Both implement [`AccountStore`]; resolvers only see the trait object.
//!
//! ## Tables (`PostgreSQL`)
//!
//! - `account.user` - Customers, staff and superusers
//! - `account.user_permission` - Granted permission codenames
//! - `account.address` - Postal addresses owned by users
//!
//! Schema migrations live in `crates/api/migrations/`; apply them with
//! `shopkeep migrate` (the `shopkeep-cli` binary).

mod memory;
mod postgres;
mod store;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;
pub use store::{AccountStore, Page, UserFilter};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("postgres: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row no longer satisfies a domain type's rules.
    #[error("stored data is invalid: {0}")]
    DataCorruption(String),

    #[error("no such record")]
    NotFound,

    /// A uniqueness rule rejected the write; for users this is the email.
    #[error("conflict: {0}")]
    Conflict(String),
}

const POOL_SIZE: u32 = 10;

/// Open the `PostgreSQL` pool used by [`PgAccountStore`].
///
/// # Errors
///
/// Returns `sqlx::Error` if no connection can be made within five seconds.
pub async fn create_pool(database_url: &SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(POOL_SIZE)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(600))
        .connect(database_url.expose_secret())
        .await
}

/// Run the bundled migrations against `pool`.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails or the history is inconsistent.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
