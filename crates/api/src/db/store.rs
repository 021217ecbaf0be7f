//! `AccountStore` trait definition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use shopkeep_core::{AddressId, Email, UserId};

use super::RepositoryError;
use crate::models::{Address, AddressData, NewUser, User, UserChanges, UserKind};

/// Filter for listing users.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Restrict to customers or staff.
    pub kind: Option<UserKind>,
    /// Case-insensitive substring match on the email.
    pub search: Option<String>,
}

impl UserFilter {
    /// Filter selecting one kind of user.
    #[must_use]
    pub const fn kind(kind: UserKind) -> Self {
        Self {
            kind: Some(kind),
            search: None,
        }
    }

    /// Whether `user` passes the filter.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        let kind_ok = self.kind.is_none_or(|kind| kind.matches(user));
        let search_ok = self.search.as_deref().is_none_or(|needle| {
            user.email
                .as_str()
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        kind_ok && search_ok
    }
}

/// Offset pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

/// Abstract storage interface for accounts and addresses.
///
/// Listings are ordered by email. Methods taking several rows of changes
/// (`create_user`, `update_user`, `delete_user`) are atomic.
#[async_trait]
pub trait AccountStore: Send + Sync + 'static {
    /// Gets a user by ID.
    async fn user_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Gets a user by normalized email.
    async fn user_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// Lists users matching `filter`, ordered by email.
    async fn list_users(&self, filter: &UserFilter, page: Page)
    -> Result<Vec<User>, RepositoryError>;

    /// Counts users matching `filter`.
    async fn count_users(&self, filter: &UserFilter) -> Result<usize, RepositoryError>;

    /// Creates a user and its default addresses.
    ///
    /// Returns `RepositoryError::Conflict` if the email is taken.
    async fn create_user(&self, new_user: NewUser) -> Result<User, RepositoryError>;

    /// Applies `changes` to a user.
    ///
    /// Returns `RepositoryError::NotFound` for an unknown user and
    /// `RepositoryError::Conflict` if the new email is taken.
    async fn update_user(&self, id: UserId, changes: UserChanges)
    -> Result<User, RepositoryError>;

    /// Deletes a user and the addresses they own. Returns `false` if the user
    /// did not exist.
    async fn delete_user(&self, id: UserId) -> Result<bool, RepositoryError>;

    /// Replaces the password hash. `None` makes the password unusable.
    async fn set_password_hash(
        &self,
        id: UserId,
        password_hash: Option<&str>,
    ) -> Result<(), RepositoryError>;

    /// Records a successful login.
    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> Result<(), RepositoryError>;

    /// Gets an address by ID.
    async fn address_by_id(&self, id: AddressId) -> Result<Option<Address>, RepositoryError>;

    /// Lists the addresses a user owns, oldest first.
    async fn addresses_for_user(&self, user_id: UserId) -> Result<Vec<Address>, RepositoryError>;

    /// Creates an address, optionally owned by a user.
    async fn create_address(
        &self,
        user_id: Option<UserId>,
        data: AddressData,
    ) -> Result<Address, RepositoryError>;

    /// Overwrites an address in place.
    async fn update_address(
        &self,
        id: AddressId,
        data: AddressData,
    ) -> Result<Address, RepositoryError>;

    /// Deletes an address and clears default references to it. Returns
    /// `false` if the address did not exist.
    async fn delete_address(&self, id: AddressId) -> Result<bool, RepositoryError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
