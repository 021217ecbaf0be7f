//! CLI subcommands.

pub mod migrate;
pub mod staff;

use secrecy::SecretString;
use sqlx::PgPool;

/// Errors shared by commands that talk to the database.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// No database URL in the environment.
    #[error("Missing environment variable: SHOPKEEP_DATABASE_URL (or DATABASE_URL)")]
    MissingDatabaseUrl,

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Connect to the database named by the environment.
async fn connect() -> Result<PgPool, DatabaseError> {
    dotenvy::dotenv().ok();

    let database_url: SecretString =
        shopkeep_api::config::database_url_from_env().ok_or(DatabaseError::MissingDatabaseUrl)?;

    tracing::info!("Connecting to database...");
    Ok(shopkeep_api::db::create_pool(&database_url).await?)
}
