//! Staff user management commands.
//!
//! # Usage
//!
//! ```bash
//! shopkeep staff create -e staff@example.com -p 's3cret-passw0rd' \
//!     --permission account.manage_users --permission account.manage_staff
//! ```
//!
//! Bootstraps the first staff account; later ones can be created through
//! the `staffCreate` mutation.

use std::collections::BTreeSet;

use thiserror::Error;

use shopkeep_api::db::{AccountStore, PgAccountStore, RepositoryError};
use shopkeep_api::models::NewUser;
use shopkeep_api::services::auth::{AuthError, hash_password, validate_password};
use shopkeep_core::{Email, EmailError, Permission, UserId};

use super::DatabaseError;

/// Errors that can occur during staff operations.
#[derive(Debug, Error)]
pub enum StaffError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password rejected or could not be hashed.
    #[error("Invalid password: {0}")]
    Password(#[from] AuthError),

    /// User already exists.
    #[error("User already exists with email: {0}")]
    UserExists(String),

    #[error("Store error: {0}")]
    Store(#[from] RepositoryError),
}

/// Create a new staff user.
///
/// # Arguments
///
/// * `email` - Staff member's email address
/// * `password` - Initial password, subject to the usual strength rules
/// * `superuser` - Whether the user bypasses permission checks
/// * `permissions` - Permissions granted to the user
///
/// # Returns
///
/// The ID of the created user.
pub async fn create_user(
    email: &str,
    password: &str,
    superuser: bool,
    permissions: Vec<Permission>,
) -> Result<UserId, StaffError> {
    let email = Email::parse(email)?;
    validate_password(password)?;

    let store = PgAccountStore::new(super::connect().await?);

    if store.user_by_email(&email).await?.is_some() {
        return Err(StaffError::UserExists(email.to_string()));
    }

    let permissions = permissions.into_iter().collect::<BTreeSet<_>>();
    let mut new_user = NewUser::staff(email, permissions);
    new_user.is_superuser = superuser;
    new_user.password_hash = Some(hash_password(password)?);

    let user = store.create_user(new_user).await?;

    tracing::info!(
        "Staff user created successfully! ID: {}, Email: {}, Superuser: {}",
        user.id,
        user.email,
        user.is_superuser
    );
    for permission in &user.permissions {
        tracing::info!("  Permission: {}", permission);
    }

    Ok(user.id)
}
