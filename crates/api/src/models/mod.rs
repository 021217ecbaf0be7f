//! Domain models.

pub mod address;
pub mod user;

pub use address::{Address, AddressData};
pub use user::{NewUser, User, UserChanges, UserKind};

#[cfg(test)]
pub(crate) use user::fixtures;
