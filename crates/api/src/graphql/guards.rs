//! Field guards run before any resolver logic.
//!
//! Permission checks happen before the target is looked up, so a denied
//! caller gets the same answer whether or not the target exists.

use async_graphql::{Context, ErrorExtensions, Guard, Result};

use shopkeep_core::Permission;

use super::context;
use crate::error::AppError;

/// Requires the caller to hold `permission`.
pub struct PermissionGuard {
    permission: Permission,
}

impl PermissionGuard {
    #[must_use]
    pub const fn new(permission: Permission) -> Self {
        Self { permission }
    }
}

impl Guard for PermissionGuard {
    async fn check(&self, ctx: &Context<'_>) -> Result<()> {
        let allowed = context::caller(ctx).is_some_and(|user| user.has_permission(self.permission));
        if allowed {
            Ok(())
        } else {
            tracing::debug!(permission = %self.permission, "Permission denied");
            Err(AppError::PermissionDenied.extend())
        }
    }
}

/// Rejects the mutation when the API runs in read-only mode.
pub struct WritableGuard;

impl Guard for WritableGuard {
    async fn check(&self, ctx: &Context<'_>) -> Result<()> {
        if context::state(ctx)?.read_only() {
            Err(AppError::ReadOnly.extend())
        } else {
            Ok(())
        }
    }
}
