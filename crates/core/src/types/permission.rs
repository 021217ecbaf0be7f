//! Named capabilities that can be granted to staff users.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned for an unknown permission codename.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown permission: {0}")]
pub struct PermissionError(pub String);

/// A grantable permission.
///
/// Each permission has three spellings:
/// - a codename (`account.manage_users`) used in storage and mutation input,
/// - a code (`MANAGE_USERS`) used as the GraphQL enum value,
/// - a human label shown in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    ManageUsers,
    ManageStaff,
    ManageOrders,
    ManageProducts,
    ManageDiscounts,
    ManageSettings,
    ManageMenus,
    ManagePages,
}

impl Permission {
    /// Every permission, in display order.
    pub const ALL: [Self; 8] = [
        Self::ManageUsers,
        Self::ManageStaff,
        Self::ManageOrders,
        Self::ManageProducts,
        Self::ManageDiscounts,
        Self::ManageSettings,
        Self::ManageMenus,
        Self::ManagePages,
    ];

    /// Storage codename, `<app>.<action>`.
    #[must_use]
    pub const fn codename(self) -> &'static str {
        match self {
            Self::ManageUsers => "account.manage_users",
            Self::ManageStaff => "account.manage_staff",
            Self::ManageOrders => "order.manage_orders",
            Self::ManageProducts => "product.manage_products",
            Self::ManageDiscounts => "discount.manage_discounts",
            Self::ManageSettings => "site.manage_settings",
            Self::ManageMenus => "menu.manage_menus",
            Self::ManagePages => "page.manage_pages",
        }
    }

    /// GraphQL enum spelling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ManageUsers => "MANAGE_USERS",
            Self::ManageStaff => "MANAGE_STAFF",
            Self::ManageOrders => "MANAGE_ORDERS",
            Self::ManageProducts => "MANAGE_PRODUCTS",
            Self::ManageDiscounts => "MANAGE_DISCOUNTS",
            Self::ManageSettings => "MANAGE_SETTINGS",
            Self::ManageMenus => "MANAGE_MENUS",
            Self::ManagePages => "MANAGE_PAGES",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ManageUsers => "Manage customers.",
            Self::ManageStaff => "Manage staff.",
            Self::ManageOrders => "Manage orders.",
            Self::ManageProducts => "Manage products.",
            Self::ManageDiscounts => "Manage sales and vouchers.",
            Self::ManageSettings => "Manage settings.",
            Self::ManageMenus => "Manage navigation.",
            Self::ManagePages => "Manage pages.",
        }
    }

    /// Look up a permission by codename.
    ///
    /// # Errors
    ///
    /// Returns `PermissionError` if no permission has this codename.
    pub fn from_codename(codename: &str) -> Result<Self, PermissionError> {
        Self::ALL
            .into_iter()
            .find(|p| p.codename() == codename)
            .ok_or_else(|| PermissionError(codename.to_owned()))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codename())
    }
}

impl std::str::FromStr for Permission {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_codename(s)
    }
}
