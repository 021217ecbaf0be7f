//! User domain types.
//!
//! These types represent validated domain objects separate from database row types.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use shopkeep_core::{AddressId, Email, Permission, UserId};

use super::AddressData;

/// An account: customer, staff member or superuser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Normalized, unique email address.
    pub email: Email,
    /// Argon2 PHC string. `None` means the password is unusable.
    pub password_hash: Option<String>,
    /// Back-office access.
    pub is_staff: bool,
    /// Inactive users cannot log in.
    pub is_active: bool,
    /// Holds every permission implicitly.
    pub is_superuser: bool,
    /// Explicitly granted permissions.
    pub permissions: BTreeSet<Permission>,
    /// Staff note about the user.
    pub note: Option<String>,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub default_billing_address_id: Option<AddressId>,
    pub default_shipping_address_id: Option<AddressId>,
}

impl User {
    /// Whether this user may perform actions gated by `permission`.
    ///
    /// Inactive users hold no permissions. Active superusers hold all of them.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.is_active && (self.is_superuser || self.permissions.contains(&permission))
    }

    /// Permissions to display for this user.
    #[must_use]
    pub fn effective_permissions(&self) -> Vec<Permission> {
        if self.is_superuser {
            Permission::ALL.to_vec()
        } else {
            self.permissions.iter().copied().collect()
        }
    }

    /// Whether the user can log in with a password.
    #[must_use]
    pub const fn has_usable_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

/// Which side of the customer/staff split a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKind {
    Customer,
    Staff,
}

impl UserKind {
    /// Whether `user` belongs to this kind.
    #[must_use]
    pub const fn matches(self, user: &User) -> bool {
        match self {
            Self::Customer => !user.is_staff,
            Self::Staff => user.is_staff,
        }
    }
}

/// Data for creating a user together with its default addresses.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: Option<String>,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    pub permissions: BTreeSet<Permission>,
    pub note: Option<String>,
    pub default_billing_address: Option<AddressData>,
    pub default_shipping_address: Option<AddressData>,
}

impl NewUser {
    /// An active customer with no password and no addresses.
    #[must_use]
    pub fn customer(email: Email) -> Self {
        Self {
            email,
            password_hash: None,
            is_staff: false,
            is_active: true,
            is_superuser: false,
            permissions: BTreeSet::new(),
            note: None,
            default_billing_address: None,
            default_shipping_address: None,
        }
    }

    /// An active staff member with the given permissions.
    #[must_use]
    pub fn staff(email: Email, permissions: BTreeSet<Permission>) -> Self {
        Self {
            email,
            password_hash: None,
            is_staff: true,
            is_active: true,
            is_superuser: false,
            permissions,
            note: None,
            default_billing_address: None,
            default_shipping_address: None,
        }
    }
}

/// A partial update of a user, applied atomically by the store.
///
/// `None` leaves a field untouched. Address fields upsert the current
/// default address: an existing one is updated in place, a missing one is
/// created and linked.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<Email>,
    pub note: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub permissions: Option<BTreeSet<Permission>>,
    pub default_billing_address: Option<AddressData>,
    pub default_shipping_address: Option<AddressData>,
}

impl UserChanges {
    /// Whether applying these changes would modify nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.note.is_none()
            && self.is_active.is_none()
            && self.permissions.is_none()
            && self.default_billing_address.is_none()
            && self.default_shipping_address.is_none()
    }
}
