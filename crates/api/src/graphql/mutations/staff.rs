//! Staff account management.

use async_graphql::{Context, ErrorExtensions, ID, InputObject, Object, Result};

use shopkeep_core::Permission;

use super::customer::email_conflict;
use super::{clean_note, find_user, parse_email, parse_permissions, send_password_reset};
use crate::error;
use crate::graphql::context;
use crate::graphql::errors::FieldError;
use crate::graphql::guards::{PermissionGuard, WritableGuard};
use crate::graphql::types::UserPayload;
use crate::graphql::validators::{clean_is_active, clean_permissions, clean_staff_delete};
use crate::models::{NewUser, User, UserChanges};
use crate::state::AppState;

#[derive(Debug, InputObject)]
pub struct StaffCreateInput {
    pub email: String,
    pub note: Option<String>,
    pub is_active: Option<bool>,
    /// Permission codenames, e.g. `account.manage_users`.
    pub permissions: Option<Vec<String>>,
    /// Email the new staff member a link to set their password.
    pub send_password_email: Option<bool>,
}

#[derive(Debug, InputObject)]
pub struct StaffInput {
    pub email: Option<String>,
    pub note: Option<String>,
    pub is_active: Option<bool>,
    /// Replaces the granted permissions.
    pub permissions: Option<Vec<String>>,
}

#[derive(Default)]
pub struct StaffMutation;

#[Object]
impl StaffMutation {
    #[graphql(guard = "WritableGuard.and(PermissionGuard::new(Permission::ManageStaff))")]
    async fn staff_create(&self, ctx: &Context<'_>, input: StaffCreateInput) -> Result<UserPayload> {
        create(context::state(ctx)?, input)
            .await
            .map_err(|e| e.extend())
    }

    #[graphql(guard = "WritableGuard.and(PermissionGuard::new(Permission::ManageStaff))")]
    async fn staff_update(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: StaffInput,
    ) -> Result<UserPayload> {
        let actor = context::require_caller(ctx)?;
        update(context::state(ctx)?, actor, &id, input)
            .await
            .map_err(|e| e.extend())
    }

    #[graphql(guard = "WritableGuard.and(PermissionGuard::new(Permission::ManageStaff))")]
    async fn staff_delete(&self, ctx: &Context<'_>, id: ID) -> Result<UserPayload> {
        let actor = context::require_caller(ctx)?;
        delete(context::state(ctx)?, actor, &id)
            .await
            .map_err(|e| e.extend())
    }
}

async fn create(state: &AppState, input: StaffCreateInput) -> error::Result<UserPayload> {
    let mut errors = Vec::new();
    let email = parse_email(&input.email, &mut errors);
    let permissions = parse_permissions(input.permissions, &mut errors).unwrap_or_default();
    let Some(email) = email.filter(|_| errors.is_empty()) else {
        return Ok(UserPayload::failed(errors));
    };

    let mut new_user = NewUser::staff(email, permissions);
    new_user.note = clean_note(input.note).flatten();
    new_user.is_active = input.is_active.unwrap_or(true);

    let user = match state.store().create_user(new_user).await {
        Ok(user) => user,
        Err(e) => return email_conflict(e),
    };
    tracing::info!(user_id = %user.id, "Staff member created");

    if input.send_password_email.unwrap_or(false) {
        send_password_reset(state, &user);
    }
    Ok(UserPayload::ok(user))
}

async fn update(
    state: &AppState,
    actor: &User,
    id: &ID,
    input: StaffInput,
) -> error::Result<UserPayload> {
    let Some(target) = find_user(state, id).await? else {
        return Ok(UserPayload::failed(vec![FieldError::node_not_found("id", id)]));
    };

    let mut errors = clean_is_active(input.is_active, &target, actor, Vec::new());
    let email = input
        .email
        .as_deref()
        .and_then(|raw| parse_email(raw, &mut errors));
    let permissions = parse_permissions(input.permissions, &mut errors);
    let errors = clean_permissions(&target, permissions.as_ref(), errors);
    if !errors.is_empty() {
        return Ok(UserPayload::failed(errors));
    }

    let changes = UserChanges {
        email,
        note: clean_note(input.note),
        is_active: input.is_active,
        permissions,
        ..UserChanges::default()
    };
    if changes.is_empty() {
        return Ok(UserPayload::ok(target));
    }

    match state.store().update_user(target.id, changes).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Staff member updated");
            Ok(UserPayload::ok(user))
        }
        Err(e) => email_conflict(e),
    }
}

async fn delete(state: &AppState, actor: &User, id: &ID) -> error::Result<UserPayload> {
    let Some(target) = find_user(state, id).await? else {
        return Ok(UserPayload::failed(vec![FieldError::node_not_found("id", id)]));
    };

    let errors = clean_staff_delete(actor, &target, Vec::new());
    if !errors.is_empty() {
        return Ok(UserPayload::failed(errors));
    }

    state.store().delete_user(target.id).await?;
    tracing::info!(user_id = %target.id, "Staff member deleted");
    Ok(UserPayload::ok(target))
}
