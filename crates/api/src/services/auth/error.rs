use thiserror::Error;

use super::token::TokenError;
use crate::db::RepositoryError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] shopkeep_core::EmailError),

    /// Unknown email, wrong or unusable password, or an inactive account.
    /// Login never says which.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("an account with this email already exists")]
    UserAlreadyExists,

    /// Password rejected by the strength rules; the message is user-facing.
    #[error("{0}")]
    WeakPassword(String),

    #[error("token error: {0}")]
    Token(#[from] TokenError),

    #[error("account store error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("failed to hash password")]
    PasswordHash,
}
