//! Authentication service.
//!
//! Provides password authentication, auth tokens and password reset tokens.

mod error;
pub mod reset;
pub mod token;

pub use error::AuthError;
pub use reset::ResetTokenGenerator;
pub use token::{Claims, TokenError, TokenSigner};

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use tracing::instrument;

use shopkeep_core::Email;

use crate::db::{AccountStore, RepositoryError};
use crate::models::{NewUser, User};

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Handles customer registration, login and token resolution.
pub struct AuthService<'a> {
    store: &'a dyn AccountStore,
    tokens: &'a TokenSigner,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a dyn AccountStore, tokens: &'a TokenSigner) -> Self {
        Self { store, tokens }
    }

    /// Register a new customer with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    #[instrument(skip(self, password))]
    pub async fn register_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let mut new_user = NewUser::customer(email);
        new_user.password_hash = Some(password_hash);

        self.store.create_user(new_user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
            other => AuthError::Repository(other),
        })
    }

    /// Login with email and password, returning the user and a fresh token.
    ///
    /// Records the login time.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown or malformed
    /// email, a wrong or unusable password, or an inactive account.
    #[instrument(skip(self, password))]
    pub async fn login_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(User, String), AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let mut user = self
            .store
            .user_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;
        if !user.is_active {
            return Err(AuthError::InvalidCredentials);
        }
        let password_hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;
        verify_password(password, password_hash)?;

        let now = Utc::now();
        self.store.record_login(user.id, now).await?;
        user.last_login = Some(now);

        let token = self.tokens.issue(&user.email, now)?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok((user, token))
    }

    /// Resolve a bearer token to an active user.
    ///
    /// Returns `Ok(None)` for invalid or expired tokens and for tokens of
    /// deleted or inactive users.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the lookup fails.
    pub async fn user_for_token(&self, token: &str) -> Result<Option<User>, AuthError> {
        let Ok(claims) = self.tokens.verify(token, Utc::now()) else {
            return Ok(None);
        };
        let Ok(email) = Email::parse(&claims.email) else {
            return Ok(None);
        };

        let user = self.store.user_by_email(&email).await?;
        Ok(user.filter(|u| u.is_active))
    }

    /// Validate and store a new password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::WeakPassword` if the password doesn't meet
    /// requirements and `AuthError::Repository` if storing fails.
    #[instrument(skip(self, user, password), fields(user_id = %user.id))]
    pub async fn set_password(&self, user: &User, password: &str) -> Result<(), AuthError> {
        validate_password(password)?;
        let password_hash = hash_password(password)?;
        self.store
            .set_password_hash(user.id, Some(&password_hash))
            .await?;
        Ok(())
    }
}

/// Validate password meets requirements.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` with a user-facing message.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "This password is too short. It must contain at least {MIN_PASSWORD_LENGTH} characters."
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
