//! Address management on behalf of users.

use async_graphql::{Context, ErrorExtensions, ID, InputObject, Object, Result};

use shopkeep_core::{AddressId, Permission, UserId};

use super::{clean_address, find_user};
use crate::error;
use crate::graphql::context;
use crate::graphql::errors::FieldError;
use crate::graphql::guards::{PermissionGuard, WritableGuard};
use crate::graphql::types::{AddressInput, AddressNode, AddressPayload, UserNode};
use crate::models::Address;
use crate::state::AppState;

#[derive(Debug, InputObject)]
pub struct AddressCreateInput {
    /// Owner of the new address.
    pub user_id: ID,
    #[graphql(flatten)]
    pub address: AddressInput,
}

#[derive(Default)]
pub struct AddressMutation;

#[Object]
impl AddressMutation {
    #[graphql(guard = "WritableGuard.and(PermissionGuard::new(Permission::ManageUsers))")]
    async fn address_create(
        &self,
        ctx: &Context<'_>,
        input: AddressCreateInput,
    ) -> Result<AddressPayload> {
        create(context::state(ctx)?, input)
            .await
            .map_err(|e| e.extend())
    }

    #[graphql(guard = "WritableGuard.and(PermissionGuard::new(Permission::ManageUsers))")]
    async fn address_update(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: AddressInput,
    ) -> Result<AddressPayload> {
        update(context::state(ctx)?, &id, input)
            .await
            .map_err(|e| e.extend())
    }

    #[graphql(guard = "WritableGuard.and(PermissionGuard::new(Permission::ManageUsers))")]
    async fn address_delete(&self, ctx: &Context<'_>, id: ID) -> Result<AddressPayload> {
        delete(context::state(ctx)?, &id)
            .await
            .map_err(|e| e.extend())
    }
}

async fn find_address(state: &AppState, id: &ID) -> error::Result<Option<Address>> {
    let Some(address_id) = AddressId::from_global_id(id) else {
        return Ok(None);
    };
    Ok(state.store().address_by_id(address_id).await?)
}

/// Payload for `address`, with its owner freshly loaded.
async fn address_payload(state: &AppState, address: Address) -> error::Result<AddressPayload> {
    let user = match address.user_id {
        Some(user_id) => owner(state, user_id).await?,
        None => None,
    };
    Ok(AddressPayload {
        errors: Vec::new(),
        address: Some(AddressNode(address)),
        user,
    })
}

async fn owner(state: &AppState, user_id: UserId) -> error::Result<Option<UserNode>> {
    Ok(state.store().user_by_id(user_id).await?.map(UserNode))
}

async fn create(state: &AppState, input: AddressCreateInput) -> error::Result<AddressPayload> {
    let Some(user) = find_user(state, &input.user_id).await? else {
        return Ok(AddressPayload::failed(vec![FieldError::node_not_found(
            "userId",
            &input.user_id,
        )]));
    };

    let mut errors = Vec::new();
    let Some(data) = clean_address(Some(input.address), None, &mut errors) else {
        return Ok(AddressPayload::failed(errors));
    };

    let address = state.store().create_address(Some(user.id), data).await?;
    tracing::info!(address_id = %address.id, user_id = %user.id, "Address created");
    address_payload(state, address).await
}

async fn update(state: &AppState, id: &ID, input: AddressInput) -> error::Result<AddressPayload> {
    let Some(current) = find_address(state, id).await? else {
        return Ok(AddressPayload::failed(vec![FieldError::node_not_found("id", id)]));
    };

    let mut errors = Vec::new();
    let Some(data) = clean_address(Some(input), Some(&current.data), &mut errors) else {
        return Ok(AddressPayload::failed(errors));
    };

    let address = state.store().update_address(current.id, data).await?;
    tracing::info!(address_id = %address.id, "Address updated");
    address_payload(state, address).await
}

async fn delete(state: &AppState, id: &ID) -> error::Result<AddressPayload> {
    let Some(address) = find_address(state, id).await? else {
        return Ok(AddressPayload::failed(vec![FieldError::node_not_found("id", id)]));
    };

    state.store().delete_address(address.id).await?;
    tracing::info!(address_id = %address.id, "Address deleted");
    address_payload(state, address).await
}
