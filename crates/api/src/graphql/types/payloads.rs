//! Mutation result types.
//!
//! Every payload carries `errors`; the other fields are null when errors
//! are present.

use async_graphql::SimpleObject;

use super::{AddressNode, UserNode};
use crate::graphql::errors::FieldError;
use crate::services::auth::Claims;

/// Result of mutations acting on one user.
#[derive(Debug, Clone, Default, SimpleObject)]
pub struct UserPayload {
    pub errors: Vec<FieldError>,
    pub user: Option<UserNode>,
}

impl UserPayload {
    pub fn ok(user: impl Into<UserNode>) -> Self {
        Self {
            errors: Vec::new(),
            user: Some(user.into()),
        }
    }

    pub const fn failed(errors: Vec<FieldError>) -> Self {
        Self { errors, user: None }
    }
}

/// Result of mutations acting on one address.
#[derive(Debug, Clone, Default, SimpleObject)]
pub struct AddressPayload {
    pub errors: Vec<FieldError>,
    pub address: Option<AddressNode>,
    /// Owner of the address, reloaded after the change.
    pub user: Option<UserNode>,
}

impl AddressPayload {
    pub const fn failed(errors: Vec<FieldError>) -> Self {
        Self {
            errors,
            address: None,
            user: None,
        }
    }
}

/// Result of mutations that only report errors.
#[derive(Debug, Clone, Default, SimpleObject)]
pub struct ErrorsPayload {
    pub errors: Vec<FieldError>,
}

/// Decoded auth token.
#[derive(Debug, Clone, SimpleObject)]
pub struct TokenPayload {
    pub email: String,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Issue time of the first token in the refresh chain.
    pub orig_iat: i64,
}

impl From<Claims> for TokenPayload {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
            exp: claims.exp,
            orig_iat: claims.orig_iat,
        }
    }
}

#[derive(Debug, Clone, Default, SimpleObject)]
pub struct TokenCreatePayload {
    pub errors: Vec<FieldError>,
    pub token: Option<String>,
    pub user: Option<UserNode>,
}

#[derive(Debug, Clone, Default, SimpleObject)]
pub struct TokenVerifyPayload {
    pub errors: Vec<FieldError>,
    pub payload: Option<TokenPayload>,
    pub user: Option<UserNode>,
}

#[derive(Debug, Clone, Default, SimpleObject)]
pub struct TokenRefreshPayload {
    pub errors: Vec<FieldError>,
    pub token: Option<String>,
    pub payload: Option<TokenPayload>,
}
