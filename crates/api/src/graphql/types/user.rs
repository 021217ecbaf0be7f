//! `User` object type.

use async_graphql::{Context, Enum, ErrorExtensions, ID, Object, Result, SimpleObject};
use chrono::{DateTime, Utc};

use shopkeep_core::{AddressId, Permission};

use super::AddressNode;
use super::connection::{self, AddressConnection};
use crate::error::AppError;
use crate::graphql::context;
use crate::models::User;

/// GraphQL spelling of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[graphql(name = "PermissionEnum", remote = "shopkeep_core::Permission")]
pub enum PermissionEnum {
    ManageUsers,
    ManageStaff,
    ManageOrders,
    ManageProducts,
    ManageDiscounts,
    ManageSettings,
    ManageMenus,
    ManagePages,
}

/// A permission with its human label.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "PermissionDisplay")]
pub struct PermissionDisplay {
    pub code: PermissionEnum,
    pub name: String,
}

impl From<Permission> for PermissionDisplay {
    fn from(permission: Permission) -> Self {
        Self {
            code: permission.into(),
            name: permission.label().to_owned(),
        }
    }
}

/// A customer or staff account.
#[derive(Debug, Clone)]
pub struct UserNode(pub User);

impl From<User> for UserNode {
    fn from(user: User) -> Self {
        Self(user)
    }
}

#[Object(name = "User")]
impl UserNode {
    async fn id(&self) -> ID {
        ID(self.0.id.to_global_id().into_inner())
    }

    async fn email(&self) -> &str {
        self.0.email.as_str()
    }

    async fn is_staff(&self) -> bool {
        self.0.is_staff
    }

    async fn is_active(&self) -> bool {
        self.0.is_active
    }

    async fn is_superuser(&self) -> bool {
        self.0.is_superuser
    }

    async fn note(&self) -> Option<&str> {
        self.0.note.as_deref()
    }

    async fn date_joined(&self) -> DateTime<Utc> {
        self.0.date_joined
    }

    async fn last_login(&self) -> Option<DateTime<Utc>> {
        self.0.last_login
    }

    /// Effective permissions; superusers list every permission.
    async fn permissions(&self) -> Vec<PermissionDisplay> {
        self.0
            .effective_permissions()
            .into_iter()
            .map(PermissionDisplay::from)
            .collect()
    }

    async fn addresses(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<AddressConnection> {
        let addresses = context::state(ctx)?
            .store()
            .addresses_for_user(self.0.id)
            .await
            .map_err(|e| AppError::from(e).extend())?;
        connection::addresses(addresses, after, before, first, last).await
    }

    async fn default_billing_address(&self, ctx: &Context<'_>) -> Result<Option<AddressNode>> {
        load_address(ctx, self.0.default_billing_address_id).await
    }

    async fn default_shipping_address(&self, ctx: &Context<'_>) -> Result<Option<AddressNode>> {
        load_address(ctx, self.0.default_shipping_address_id).await
    }
}

async fn load_address(ctx: &Context<'_>, id: Option<AddressId>) -> Result<Option<AddressNode>> {
    let Some(id) = id else {
        return Ok(None);
    };
    let address = context::state(ctx)?
        .store()
        .address_by_id(id)
        .await
        .map_err(|e| AppError::from(e).extend())?;
    Ok(address.map(AddressNode))
}
