//! In-memory storage implementation for tests and local development.
//!
//! All tables live behind a single `RwLock`, so every trait method observes
//! and produces a consistent snapshot, matching the transactional guarantees
//! of the `PostgreSQL` backend.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::instrument;

use shopkeep_core::{AddressId, Email, UserId};

use super::store::{AccountStore, Page, UserFilter};
use super::RepositoryError;
use crate::models::{Address, AddressData, NewUser, User, UserChanges};

/// In-memory implementation of [`AccountStore`].
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    users: BTreeMap<UserId, User>,
    addresses: BTreeMap<AddressId, Address>,
    next_user_id: i32,
    next_address_id: i32,
}

impl State {
    fn allocate_user_id(&mut self) -> UserId {
        self.next_user_id += 1;
        UserId::new(self.next_user_id)
    }

    fn insert_address(&mut self, user_id: Option<UserId>, data: AddressData) -> AddressId {
        self.next_address_id += 1;
        let id = AddressId::new(self.next_address_id);
        self.addresses.insert(id, Address { id, user_id, data });
        id
    }

    fn email_taken(&self, email: &Email, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|u| &u.email == email && Some(u.id) != except)
    }

    /// Update the current default address in place, or create and return a
    /// new one owned by `user_id`.
    fn upsert_default(
        &mut self,
        user_id: UserId,
        current: Option<AddressId>,
        data: AddressData,
    ) -> AddressId {
        match current.and_then(|id| self.addresses.get_mut(&id)) {
            Some(existing) => {
                existing.data = data;
                existing.id
            }
            None => self.insert_address(Some(user_id), data),
        }
    }
}

impl MemoryAccountStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store wrapped in `Arc`.
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn user_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn user_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| &u.email == email).cloned())
    }

    async fn list_users(
        &self,
        filter: &UserFilter,
        page: Page,
    ) -> Result<Vec<User>, RepositoryError> {
        let state = self.state.read().await;
        let mut users: Vec<User> = state
            .users
            .values()
            .filter(|u| filter.matches(u))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.email.cmp(&b.email).then(a.id.cmp(&b.id)));

        Ok(users
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .collect())
    }

    async fn count_users(&self, filter: &UserFilter) -> Result<usize, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.users.values().filter(|u| filter.matches(u)).count())
    }

    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut state = self.state.write().await;
        if state.email_taken(&new_user.email, None) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let id = state.allocate_user_id();
        let default_billing_address_id = new_user
            .default_billing_address
            .map(|data| state.insert_address(Some(id), data));
        let default_shipping_address_id = new_user
            .default_shipping_address
            .map(|data| state.insert_address(Some(id), data));

        let user = User {
            id,
            email: new_user.email,
            password_hash: new_user.password_hash,
            is_staff: new_user.is_staff,
            is_active: new_user.is_active,
            is_superuser: new_user.is_superuser,
            permissions: new_user.permissions,
            note: new_user.note,
            date_joined: Utc::now(),
            last_login: None,
            default_billing_address_id,
            default_shipping_address_id,
        };
        state.users.insert(id, user.clone());

        Ok(user)
    }

    #[instrument(skip(self, changes))]
    async fn update_user(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<User, RepositoryError> {
        let mut state = self.state.write().await;
        let mut user = state
            .users
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)?;

        if let Some(email) = changes.email {
            if state.email_taken(&email, Some(id)) {
                return Err(RepositoryError::Conflict("email already exists".to_owned()));
            }
            user.email = email;
        }
        if let Some(note) = changes.note {
            user.note = note;
        }
        if let Some(is_active) = changes.is_active {
            user.is_active = is_active;
        }
        if let Some(permissions) = changes.permissions {
            user.permissions = permissions;
        }
        if let Some(data) = changes.default_billing_address {
            let address_id = state.upsert_default(id, user.default_billing_address_id, data);
            user.default_billing_address_id = Some(address_id);
        }
        if let Some(data) = changes.default_shipping_address {
            let address_id = state.upsert_default(id, user.default_shipping_address_id, data);
            user.default_shipping_address_id = Some(address_id);
        }

        state.users.insert(id, user.clone());
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: UserId) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        if state.users.remove(&id).is_none() {
            return Ok(false);
        }
        state.addresses.retain(|_, a| a.user_id != Some(id));
        Ok(true)
    }

    async fn set_password_hash(
        &self,
        id: UserId,
        password_hash: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        let user = state.users.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        user.password_hash = password_hash.map(str::to_owned);
        Ok(())
    }

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        let user = state.users.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        user.last_login = Some(at);
        Ok(())
    }

    async fn address_by_id(&self, id: AddressId) -> Result<Option<Address>, RepositoryError> {
        Ok(self.state.read().await.addresses.get(&id).cloned())
    }

    async fn addresses_for_user(&self, user_id: UserId) -> Result<Vec<Address>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .addresses
            .values()
            .filter(|a| a.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn create_address(
        &self,
        user_id: Option<UserId>,
        data: AddressData,
    ) -> Result<Address, RepositoryError> {
        let mut state = self.state.write().await;
        if user_id.is_some_and(|owner| !state.users.contains_key(&owner)) {
            return Err(RepositoryError::NotFound);
        }
        let id = state.insert_address(user_id, data);
        state
            .addresses
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::DataCorruption("address vanished".to_owned()))
    }

    async fn update_address(
        &self,
        id: AddressId,
        data: AddressData,
    ) -> Result<Address, RepositoryError> {
        let mut state = self.state.write().await;
        let address = state
            .addresses
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound)?;
        address.data = data;
        Ok(address.clone())
    }

    async fn delete_address(&self, id: AddressId) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        if state.addresses.remove(&id).is_none() {
            return Ok(false);
        }
        for user in state.users.values_mut() {
            if user.default_billing_address_id == Some(id) {
                user.default_billing_address_id = None;
            }
            if user.default_shipping_address_id == Some(id) {
                user.default_shipping_address_id = None;
            }
        }
        Ok(true)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
