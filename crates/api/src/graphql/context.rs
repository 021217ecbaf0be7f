//! Per-request data available to resolvers.

use std::net::IpAddr;

use async_graphql::{Context, ErrorExtensions};

use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;

/// Who is calling and from where.
///
/// Attached to each request by the HTTP handler. Requests executed without
/// it are anonymous.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Active user resolved from the auth token.
    pub caller: Option<User>,
    /// Client address used for geolocation.
    pub client_ip: Option<IpAddr>,
}

impl RequestContext {
    /// Context for an authenticated request.
    #[must_use]
    pub const fn authenticated(user: User) -> Self {
        Self {
            caller: Some(user),
            client_ip: None,
        }
    }
}

/// Shared application state registered on the schema.
pub fn state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a AppState> {
    ctx.data::<AppState>()
}

/// The authenticated caller, if any.
pub fn caller<'a>(ctx: &Context<'a>) -> Option<&'a User> {
    ctx.data_opt::<RequestContext>()
        .and_then(|request| request.caller.as_ref())
}

/// The authenticated caller, or a permission error for anonymous requests.
pub fn require_caller<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a User> {
    caller(ctx).ok_or_else(|| AppError::PermissionDenied.extend())
}

/// The client IP address, if known.
pub fn client_ip(ctx: &Context<'_>) -> Option<IpAddr> {
    ctx.data_opt::<RequestContext>()
        .and_then(|request| request.client_ip)
}
