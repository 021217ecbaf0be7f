//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! shopkeep migrate
//! ```
//!
//! # Environment Variables
//!
//! - `SHOPKEEP_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)
//!
//! Migrations live in `crates/api/migrations/`.

use thiserror::Error;

use super::DatabaseError;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run the accounts migrations.
pub async fn run() -> Result<(), MigrationError> {
    let pool = super::connect().await?;

    tracing::info!("Running migrations...");
    shopkeep_api::db::migrate(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
