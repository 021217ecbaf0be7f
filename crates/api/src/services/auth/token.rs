//! HS256 JSON web tokens for API authentication.
//!
//! A token carries the user's email, its expiry and the time the first token
//! in its refresh chain was issued (`origIat`). Refreshing keeps `origIat`,
//! so a chain of refreshes cannot outlive the refresh window.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shopkeep_core::Email;

use crate::config::AuthConfig;

/// Errors produced when verifying or refreshing a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a JWT, not HS256, bad claims or a wrong signature.
    #[error("Error decoding signature")]
    Malformed,

    /// Past `exp`.
    #[error("Signature has expired")]
    Expired,

    /// Past `origIat` plus the refresh window.
    #[error("Refresh has expired")]
    RefreshExpired,

    /// The token could not be signed.
    #[error("failed to sign token")]
    Key,
}

/// Token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Email of the user the token is bound to.
    pub email: String,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Issue time of the first token in the refresh chain.
    pub orig_iat: i64,
}

/// Issues and verifies auth tokens.
#[derive(Debug, Clone)]
pub struct TokenSigner {
    key: SecretString,
    ttl: Duration,
    refresh_window: Duration,
}

impl TokenSigner {
    /// Create a signer from auth configuration.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            key: config.secret_key.clone(),
            ttl: config.token_ttl,
            refresh_window: config.refresh_window,
        }
    }

    /// Issue a fresh token for `email`.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Key` if the signing key is unusable.
    pub fn issue(&self, email: &Email, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            email: email.as_str().to_owned(),
            exp: (now + self.ttl).timestamp(),
            orig_iat: now.timestamp(),
        };
        self.sign(&claims)
    }

    /// Decode and verify a token.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Malformed` for a bad shape or signature and
    /// `TokenError::Expired` once `exp` has passed.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let key = DecodingKey::from_secret(self.key.expose_secret().as_bytes());
        let claims = jsonwebtoken::decode::<Claims>(token, &key, &Self::validation())
            .map_err(|_| TokenError::Malformed)?
            .claims;

        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    /// Issue a new token from a still-valid one, keeping `origIat`.
    ///
    /// # Errors
    ///
    /// Returns any verification error, or `TokenError::RefreshExpired` once
    /// the refresh window measured from `origIat` has passed.
    pub fn refresh(&self, token: &str, now: DateTime<Utc>) -> Result<(String, Claims), TokenError> {
        let claims = self.verify(token, now)?;
        if claims.orig_iat + self.refresh_window.num_seconds() < now.timestamp() {
            return Err(TokenError::RefreshExpired);
        }

        let refreshed = Claims {
            exp: (now + self.ttl).timestamp(),
            ..claims
        };
        let token = self.sign(&refreshed)?;
        Ok((token, refreshed))
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        let key = EncodingKey::from_secret(self.key.expose_secret().as_bytes());
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &key)
            .map_err(|_| TokenError::Key)
    }

    /// Expiry is checked against the caller's clock, not the library's.
    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation
    }
}
