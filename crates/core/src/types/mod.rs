//! Core types for Shopkeep.
//!
//! This module provides type-safe wrappers for account domain concepts.

pub mod country;
pub mod email;
pub mod global_id;
pub mod id;
pub mod permission;
pub mod phone;

pub use country::{CountryCode, CountryCodeError};
pub use email::{Email, EmailError};
pub use global_id::{GlobalId, GlobalIdError};
pub use id::*;
pub use permission::{Permission, PermissionError};
pub use phone::{Phone, PhoneError};
